use serde::Serialize;

use crate::{Rupees, ServiceError};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct CatalogItem {
    pub id: &'static str,
    pub name: &'static str,
    pub unit_price: Rupees,
    pub unit: &'static str,
}

impl CatalogItem {
    /// Price label as shown on the item card, e.g. `₹180/kg`.
    pub fn price_label(&self) -> String {
        format!("{}/{}", self.unit_price, self.unit)
    }
}

pub const GROCERY_ITEMS: &[CatalogItem] = &[
    CatalogItem {
        id: "1",
        name: "Fresh Apples",
        unit_price: Rupees(180),
        unit: "kg",
    },
    CatalogItem {
        id: "2",
        name: "Organic Bananas",
        unit_price: Rupees(60),
        unit: "dozen",
    },
    CatalogItem {
        id: "3",
        name: "Fresh Tomatoes",
        unit_price: Rupees(40),
        unit: "kg",
    },
    CatalogItem {
        id: "4",
        name: "Bell Peppers",
        unit_price: Rupees(120),
        unit: "kg",
    },
    CatalogItem {
        id: "5",
        name: "Organic Carrots",
        unit_price: Rupees(60),
        unit: "kg",
    },
];

/// Fixed, read-only list of purchasable items.
#[derive(Clone, Copy, Debug)]
pub struct Catalog {
    items: &'static [CatalogItem],
}

impl Default for Catalog {
    fn default() -> Self {
        Self::grocery()
    }
}

impl Catalog {
    pub const fn new(items: &'static [CatalogItem]) -> Self {
        Self { items }
    }

    pub const fn grocery() -> Self {
        Self::new(GROCERY_ITEMS)
    }

    pub fn items(&self) -> &'static [CatalogItem] {
        self.items
    }

    pub fn get(&self, id: &str) -> Option<&'static CatalogItem> {
        self.items.iter().find(|i| i.id == id)
    }

    pub fn require(&self, id: &str) -> Result<&'static CatalogItem, ServiceError> {
        self.get(id)
            .ok_or_else(|| ServiceError::UnknownItem(id.to_string()))
    }
}
