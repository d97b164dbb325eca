//! Grocery cart.
//!
//! `CartState` maps item ids to quantities. An id present in the map always
//! has a quantity of at least 1; removing the last unit deletes the entry.
//! Totals are derived on demand and never stored.

use std::collections::BTreeMap;
use std::fmt;

use allinone_core::{StateHolder, Store, SubId};

use crate::{Catalog, CatalogItem, Rupees};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CartState {
    lines: BTreeMap<String, u32>,
}

impl CartState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, id: &str) {
        let qty = self.lines.entry(id.to_string()).or_insert(0);
        *qty = qty.saturating_add(1);
    }

    /// Decrement, deleting the entry at 1. Absent ids are ignored.
    pub fn remove(&mut self, id: &str) {
        match self.lines.get_mut(id) {
            Some(qty) if *qty > 1 => *qty -= 1,
            Some(_) => {
                self.lines.remove(id);
            }
            None => {}
        }
    }

    pub fn quantity(&self, id: &str) -> u32 {
        self.lines.get(id).copied().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn lines(&self) -> impl Iterator<Item = (&str, u32)> {
        self.lines.iter().map(|(id, qty)| (id.as_str(), *qty))
    }

    pub fn total_items(&self) -> u32 {
        self.lines.values().sum()
    }

    /// Ids missing from `catalog` contribute nothing.
    pub fn total_amount(&self, catalog: &Catalog) -> Rupees {
        catalog
            .items()
            .iter()
            .map(|item| item.unit_price * self.quantity(item.id))
            .sum()
    }
}

/// Zero quantities are skipped; repeated ids add up.
impl<S: Into<String>> FromIterator<(S, u32)> for CartState {
    fn from_iter<I: IntoIterator<Item = (S, u32)>>(iter: I) -> Self {
        let mut lines = BTreeMap::new();
        for (id, qty) in iter.into_iter().filter(|(_, qty)| *qty > 0) {
            let line: &mut u32 = lines.entry(id.into()).or_insert(0);
            *line = line.saturating_add(qty);
        }
        Self { lines }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CartEvent {
    Add(String),
    Remove(String),
}

pub struct CartReducer;

impl StateHolder for CartReducer {
    type State = CartState;
    type Event = CartEvent;

    fn initial_state() -> CartState {
        CartState::new()
    }

    fn reduce(state: &CartState, event: CartEvent) -> CartState {
        let mut next = state.clone();
        match event {
            CartEvent::Add(id) => next.add(&id),
            CartEvent::Remove(id) => next.remove(&id),
        }
        next
    }
}

/// Footer shown on the grocery screen while the cart has items.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CartSummary {
    pub total_items: u32,
    pub total_amount: Rupees,
}

impl CartSummary {
    pub fn items_label(&self) -> String {
        if self.total_items == 1 {
            "1 item".to_string()
        } else {
            format!("{} items", self.total_items)
        }
    }
}

impl fmt::Display for CartSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} · {}", self.items_label(), self.total_amount)
    }
}

/// The grocery screen's cart: a reducer store over a fixed catalog.
#[derive(Clone)]
pub struct GroceryCart {
    catalog: Catalog,
    store: Store<CartReducer>,
}

impl Default for GroceryCart {
    fn default() -> Self {
        Self::new(Catalog::grocery())
    }
}

impl GroceryCart {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            store: Store::new(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn add_item(&self, item: &CatalogItem) {
        log::debug!("cart add {}", item.id);
        self.store.dispatch(CartEvent::Add(item.id.to_string()));
    }

    pub fn remove_item(&self, item: &CatalogItem) {
        log::debug!("cart remove {}", item.id);
        self.store.dispatch(CartEvent::Remove(item.id.to_string()));
    }

    pub fn quantity(&self, item: &CatalogItem) -> u32 {
        self.store.select(|s| s.quantity(item.id))
    }

    pub fn total_items(&self) -> u32 {
        self.store.select(CartState::total_items)
    }

    pub fn total_amount(&self) -> Rupees {
        self.store.select(|s| s.total_amount(&self.catalog))
    }

    pub fn state(&self) -> CartState {
        self.store.state()
    }

    /// `None` while the cart is empty.
    pub fn summary(&self) -> Option<CartSummary> {
        self.store.select(|s| summarize(s, &self.catalog))
    }

    /// Called with the fresh summary after every mutation.
    pub fn on_change(&self, f: impl Fn(Option<CartSummary>) + 'static) -> SubId {
        let catalog = self.catalog;
        self.store.subscribe(move |s| f(summarize(s, &catalog)))
    }

    pub fn unsubscribe(&self, id: SubId) -> bool {
        self.store.unsubscribe(id)
    }
}

fn summarize(state: &CartState, catalog: &Catalog) -> Option<CartSummary> {
    let total_items = state.total_items();
    (total_items > 0).then(|| CartSummary {
        total_items,
        total_amount: state.total_amount(catalog),
    })
}
