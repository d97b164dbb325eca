//! # Screen flow
//!
//! The app is a linear walk over named [`Screen`]s:
//!
//! ```text
//! splash -> login/register -> services -> ride | porter | grocery -> ...
//! ```
//!
//! Allowed moves live in one table, [`transitions::RULES`]. [`Flow`] looks up
//! the row for an [`Action`] on the current screen, checks its guard, and
//! tells the navigation host to push or replace. Back always pops.
//!
//! The splash screen moves on by itself after [`FlowConfig::splash_delay`].
//! That timer belongs to the splash entry's scope: if the entry goes away
//! first, the timer is cancelled and never fires.
//!
//! ```rust
//! use std::rc::Rc;
//! use allinone_core::{TestClock, Timers};
//! use allinone_flow::*;
//! use allinone_navigation::Navigator;
//! use web_time::Duration;
//!
//! let clock = TestClock::default();
//! let flow = Flow::new(
//!     Navigator::new(Screen::Splash),
//!     Timers::new(Rc::new(clock.clone())),
//!     FlowConfig::default(),
//! );
//! flow.start();
//! clock.advance(Duration::from_millis(3000));
//! flow.timers().run_due();
//! assert_eq!(flow.current(), Some(Screen::Login));
//! ```

pub mod config;
pub mod error;
pub mod flow;
pub mod screen;
pub mod transitions;

pub use config::{FlowConfig, SPLASH_DELAY_ENV};
pub use error::FlowError;
pub use flow::{Flow, Outcome};
pub use screen::Screen;
pub use transitions::{Action, Guard, NavOp, Rule};
