use crate::{Signal, SubId, signal};

/// State holder pattern: an owned state value updated by a pure reducer.
pub trait StateHolder: 'static {
    type State: Clone;
    type Event;

    fn initial_state() -> Self::State;
    fn reduce(state: &Self::State, event: Self::Event) -> Self::State;
}

/// Observable container driving a [`StateHolder`].
///
/// Every `dispatch` replaces the state with the reducer's output and notifies
/// subscribers, which is where derived values get recomputed.
pub struct Store<H: StateHolder> {
    state: Signal<H::State>,
}

impl<H: StateHolder> Clone for Store<H> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
        }
    }
}

impl<H: StateHolder> Default for Store<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: StateHolder> Store<H> {
    pub fn new() -> Self {
        Self::with_state(H::initial_state())
    }

    pub fn with_state(state: H::State) -> Self {
        Self {
            state: signal(state),
        }
    }

    pub fn dispatch(&self, event: H::Event) {
        let next = self.state.with(|s| H::reduce(s, event));
        self.state.set(next);
    }

    pub fn state(&self) -> H::State {
        self.state.get()
    }

    /// Compute a derived value from the current state without cloning it.
    pub fn select<R>(&self, f: impl FnOnce(&H::State) -> R) -> R {
        self.state.with(f)
    }

    pub fn subscribe(&self, f: impl Fn(&H::State) + 'static) -> SubId {
        self.state.subscribe(f)
    }

    pub fn unsubscribe(&self, id: SubId) -> bool {
        self.state.unsubscribe(id)
    }
}
