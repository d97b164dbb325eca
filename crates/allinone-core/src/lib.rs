//! # State, Scopes, and Timers
//!
//! The single-threaded primitives the rest of the app is built on:
//!
//! - `Signal<T>`: observable value; subscribers run after every write.
//! - `StateHolder` / `Store`: owned state updated by a pure reducer.
//! - `Scope` / `effect`: cleanups bound to the lifetime of a screen.
//! - `Timers`: cancellable one-shot tasks driven by the host loop.
//!
//! ## Signals
//!
//! ```rust
//! use allinone_core::*;
//!
//! let count = signal(0);
//! count.set(1);
//! count.update(|v| *v += 1);
//! assert_eq!(count.get(), 2);
//! ```
//!
//! ## Reducers
//!
//! ```rust
//! use allinone_core::*;
//!
//! struct Counter;
//! impl StateHolder for Counter {
//!     type State = i32;
//!     type Event = i32;
//!     fn initial_state() -> i32 { 0 }
//!     fn reduce(s: &i32, by: i32) -> i32 { s + by }
//! }
//!
//! let store = Store::<Counter>::new();
//! store.dispatch(2);
//! assert_eq!(store.state(), 2);
//! ```
//!
//! ## Effects and timers
//!
//! A timer armed inside a scope is cancelled when the scope goes away:
//!
//! ```rust
//! use allinone_core::*;
//! use std::rc::Rc;
//! use web_time::Duration;
//!
//! let clock = TestClock::default();
//! let timers = Timers::new(Rc::new(clock.clone()));
//! let scope = Scope::new();
//! scope.run(|| {
//!     effect(|| timers.schedule(Duration::from_millis(10), || unreachable!()).into_dispose())
//! });
//! scope.dispose();
//! clock.advance(Duration::from_millis(20));
//! assert_eq!(timers.run_due(), 0);
//! ```

pub mod clock;
pub mod effects;
pub mod scope;
pub mod signal;
pub mod state;
pub mod timer;

pub use clock::*;
pub use effects::*;
pub use scope::*;
pub use signal::*;
pub use state::*;
pub use timer::*;
