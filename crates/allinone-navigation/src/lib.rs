//! Back-stack navigation.
//!
//! Each entry on the stack owns a [`Scope`] and a [`SavedState`]. Popping or
//! replacing an entry disposes its scope, which is how screen-bound timers
//! and other cleanups are torn down, and drops its saved state.

use std::{any::Any, cell::RefCell, collections::HashMap, fmt::Debug, rc::Rc};

use allinone_core::*;
use serde::{Deserialize, Serialize};

pub mod back;
mod tests;

pub use back::install_back_handler;

pub trait NavKey: Clone + Debug + PartialEq + 'static + Serialize + for<'de> Deserialize<'de> {}
impl<T> NavKey for T where T: Clone + Debug + PartialEq + 'static + Serialize + for<'de> Deserialize<'de> {}

#[derive(Debug, thiserror::Error)]
pub enum NavError {
    #[error("back stack snapshot is not valid JSON: {0}")]
    Snapshot(#[from] serde_json::Error),
    #[error("back stack snapshot is empty")]
    EmptySnapshot,
}

/// Per-entry screen state, created on first access and dropped with the entry.
#[derive(Default)]
pub struct SavedState {
    map: RefCell<HashMap<&'static str, Box<dyn Any>>>,
}
impl SavedState {
    pub fn remember<T: 'static>(
        &self,
        key: &'static str,
        init: impl FnOnce() -> T,
    ) -> Rc<RefCell<T>> {
        if let Some(b) = self.map.borrow().get(key) {
            if let Some(rc) = b.downcast_ref::<Rc<RefCell<T>>>() {
                return rc.clone();
            }
            log::warn!("saved state slot '{key}' reused with a different type; replacing");
        }
        let rc = Rc::new(RefCell::new(init()));
        self.map.borrow_mut().insert(key, Box::new(rc.clone()));
        rc
    }
    /// Like [`remember`](Self::remember) for values that are already shared
    /// handles (stores, signals).
    pub fn remember_handle<T: 'static + Clone>(
        &self,
        key: &'static str,
        init: impl FnOnce() -> T,
    ) -> T {
        if let Some(b) = self.map.borrow().get(key) {
            if let Some(v) = b.downcast_ref::<T>() {
                return v.clone();
            }
            log::warn!("saved state slot '{key}' reused with a different type; replacing");
        }
        let v = init();
        self.map.borrow_mut().insert(key, Box::new(v.clone()));
        v
    }
    pub fn contains(&self, key: &'static str) -> bool {
        self.map.borrow().contains_key(key)
    }
}

struct Entry<K: NavKey> {
    id: u64,
    key: K,
    saved: Rc<SavedState>,
    /// Disposed when the entry is popped or replaced.
    scope: Scope,
}

impl<K: NavKey> Entry<K> {
    fn new(id: u64, key: K) -> Self {
        Self {
            id,
            key,
            saved: Rc::new(SavedState::default()),
            scope: Scope::new(),
        }
    }
}

struct BackState<K: NavKey> {
    entries: Vec<Entry<K>>,
    next_id: u64,
}

impl<K: NavKey> BackState<K> {
    fn alloc(&mut self, key: K) -> Entry<K> {
        let id = self.next_id;
        self.next_id += 1;
        Entry::new(id, key)
    }
}

#[derive(Clone)]
pub struct NavBackStack<K: NavKey> {
    inner: Rc<RefCell<BackState<K>>>,
    version: Rc<Signal<u64>>,
}

impl<K: NavKey> NavBackStack<K> {
    pub fn new(start: K) -> Self {
        Self {
            inner: Rc::new(RefCell::new(BackState {
                entries: vec![Entry::new(1, start)],
                next_id: 2,
            })),
            version: Rc::new(signal(0)),
        }
    }

    pub fn top(&self) -> Option<EntryScope<K>> {
        let s = self.inner.borrow();
        s.entries.last().map(|e| EntryScope {
            id: e.id,
            key: e.key.clone(),
            saved: e.saved.clone(),
            scope: e.scope.clone(),
        })
    }
    pub fn size(&self) -> usize {
        self.inner.borrow().entries.len()
    }
    pub fn is_empty(&self) -> bool {
        self.inner.borrow().entries.is_empty()
    }
    pub fn keys(&self) -> Vec<K> {
        self.inner
            .borrow()
            .entries
            .iter()
            .map(|e| e.key.clone())
            .collect()
    }
    /// Bumped on every change to the stack.
    pub fn version(&self) -> u64 {
        self.version.get()
    }
    pub fn on_change(&self, f: impl Fn(u64) + 'static) -> SubId {
        self.version.subscribe(move |v| f(*v))
    }
    fn bump(&self) {
        self.version.update(|v| *v = v.wrapping_add(1));
    }

    fn push_inner(&self, key: K) {
        let mut s = self.inner.borrow_mut();
        let entry = s.alloc(key);
        s.entries.push(entry);
    }

    /// Pop the top entry (if any) and dispose its scope.
    fn pop_inner(&self) -> bool {
        let entry = self.inner.borrow_mut().entries.pop();
        if let Some(e) = entry {
            e.scope.dispose();
            true
        } else {
            false
        }
    }

    /// Swap the top entry for a fresh one. The old entry's scope is disposed
    /// and its saved state dropped, so it cannot be returned to.
    fn replace_inner(&self, key: K) {
        let old = {
            let mut s = self.inner.borrow_mut();
            let entry = s.alloc(key);
            let old = s.entries.pop();
            s.entries.push(entry);
            old
        };
        if let Some(e) = old {
            e.scope.dispose();
        }
    }

    fn clear_inner(&self) {
        let old_entries = std::mem::take(&mut self.inner.borrow_mut().entries);
        // top first, like a sequence of pops
        for e in old_entries.into_iter().rev() {
            e.scope.dispose();
        }
    }

    pub fn to_json(&self) -> Result<String, NavError> {
        let s = self.inner.borrow();
        let keys: Vec<&K> = s.entries.iter().map(|e| &e.key).collect();
        Ok(serde_json::to_string(&keys)?)
    }

    /// Rebuild the stack from a [`to_json`](Self::to_json) snapshot. On error
    /// the current stack is left as it was.
    pub fn from_json(&self, json: &str) -> Result<(), NavError> {
        let keys = serde_json::from_str::<Vec<K>>(json)?;
        if keys.is_empty() {
            return Err(NavError::EmptySnapshot);
        }

        self.clear_inner();
        {
            let mut s = self.inner.borrow_mut();
            for k in keys {
                let entry = s.alloc(k);
                s.entries.push(entry);
            }
        }
        self.bump();
        Ok(())
    }
}

#[derive(Clone)]
pub struct Navigator<K: NavKey> {
    pub stack: NavBackStack<K>,
}
impl<K: NavKey> Navigator<K> {
    pub fn new(start: K) -> Self {
        Self {
            stack: NavBackStack::new(start),
        }
    }
    pub fn push(&self, k: K) {
        log::debug!("nav push {k:?}");
        self.stack.push_inner(k);
        self.stack.bump();
    }
    pub fn replace(&self, k: K) {
        log::debug!("nav replace top with {k:?}");
        self.stack.replace_inner(k);
        self.stack.bump();
    }
    pub fn pop(&self) -> bool {
        // Don't pop if only one entry is present
        if self.stack.size() <= 1 {
            return false;
        }
        let ok = self.stack.pop_inner();
        if ok {
            log::debug!("nav pop, now at {:?}", self.stack.top().map(|e| e.key));
            self.stack.bump();
        }
        ok
    }
    /// Dispose every entry. The stack is empty afterwards.
    pub fn teardown(&self) {
        if self.stack.is_empty() {
            return;
        }
        self.stack.clear_inner();
        self.stack.bump();
    }
}

/// View of one stack entry: its key, saved state and scope.
pub struct EntryScope<K: NavKey> {
    id: u64,
    key: K,
    saved: Rc<SavedState>,
    scope: Scope,
}
impl<K: NavKey> EntryScope<K> {
    pub fn id(&self) -> u64 {
        self.id
    }
    pub fn key(&self) -> &K {
        &self.key
    }
    pub fn into_key(self) -> K {
        self.key
    }
    pub fn scope(&self) -> &Scope {
        &self.scope
    }
    pub fn saved(&self) -> &Rc<SavedState> {
        &self.saved
    }
    pub fn remember_saveable<T: 'static>(
        &self,
        slot: &'static str,
        init: impl FnOnce() -> T,
    ) -> Rc<RefCell<T>> {
        self.saved.remember(slot, init)
    }
}

/// What a flow controller needs from navigation.
pub trait NavHost<K: NavKey> {
    /// Push `key` on top of the current entry.
    fn go_to(&self, key: K);
    /// Pop the current entry. `false` at the root.
    fn go_back(&self) -> bool;
    /// Replace the current entry; the old one cannot be navigated back to.
    fn replace(&self, key: K);
    fn top_entry(&self) -> Option<EntryScope<K>>;
    /// Dispose every entry, e.g. on app shutdown.
    fn teardown(&self);

    fn current(&self) -> Option<K> {
        self.top_entry().map(EntryScope::into_key)
    }
}

impl<K: NavKey> NavHost<K> for Navigator<K> {
    fn go_to(&self, key: K) {
        self.push(key);
    }
    fn go_back(&self) -> bool {
        self.pop()
    }
    fn replace(&self, key: K) {
        Navigator::replace(self, key);
    }
    fn top_entry(&self) -> Option<EntryScope<K>> {
        self.stack.top()
    }
    fn teardown(&self) {
        Navigator::teardown(self);
    }
}

impl<K: NavKey, N: NavHost<K>> NavHost<K> for Rc<N> {
    fn go_to(&self, key: K) {
        (**self).go_to(key)
    }
    fn go_back(&self) -> bool {
        (**self).go_back()
    }
    fn replace(&self, key: K) {
        (**self).replace(key)
    }
    fn top_entry(&self) -> Option<EntryScope<K>> {
        (**self).top_entry()
    }
    fn teardown(&self) {
        (**self).teardown()
    }
}
