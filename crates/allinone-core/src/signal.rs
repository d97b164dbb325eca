use std::cell::RefCell;
use std::rc::Rc;

pub type SubId = usize;

/// Cloneable handle to an observable value.
///
/// Subscribers run synchronously after every write, with a shared borrow of
/// the new value. They may read the signal again but must not write to it.
#[derive(Clone)]
pub struct Signal<T: 'static>(Rc<RefCell<Inner<T>>>);

struct Inner<T> {
    value: T,
    subs: Vec<Option<Box<dyn Fn(&T)>>>,
}

impl<T> Signal<T> {
    pub fn new(value: T) -> Self {
        Self(Rc::new(RefCell::new(Inner {
            value,
            subs: Vec::new(),
        })))
    }
    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.0.borrow().value.clone()
    }
    /// Borrow the current value without cloning it.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.0.borrow().value)
    }
    pub fn set(&self, v: T) {
        self.0.borrow_mut().value = v;
        self.notify();
    }
    pub fn update<F: FnOnce(&mut T)>(&self, f: F) {
        f(&mut self.0.borrow_mut().value);
        self.notify();
    }
    pub fn subscribe(&self, f: impl Fn(&T) + 'static) -> SubId {
        let mut inner = self.0.borrow_mut();
        inner.subs.push(Some(Box::new(f)));
        inner.subs.len() - 1
    }
    /// Drop a subscriber. Ids are never reused.
    pub fn unsubscribe(&self, id: SubId) -> bool {
        match self.0.borrow_mut().subs.get_mut(id) {
            Some(slot) => slot.take().is_some(),
            None => false,
        }
    }
    pub fn subscriber_count(&self) -> usize {
        self.0.borrow().subs.iter().filter(|s| s.is_some()).count()
    }

    fn notify(&self) {
        let inner = self.0.borrow();
        let vref = &inner.value;
        for s in inner.subs.iter().flatten() {
            s(vref);
        }
    }
}

pub fn signal<T>(t: T) -> Signal<T> {
    Signal::new(t)
}
