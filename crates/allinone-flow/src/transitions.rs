//! The screen-to-screen transition table.
//!
//! Every allowed move in the app is one row of [`RULES`]. Business data never
//! changes a destination; it can only hold a guarded row back.

use std::fmt;

use allinone_services::ServiceKind;

use crate::Screen;

/// A user action (or the splash timer) on the current screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    SplashElapsed,
    SignIn,
    ContinueAsGuest,
    OpenRegister,
    SubmitRegistration,
    OpenLogin,
    OpenService(ServiceKind),
    PickSubService,
    /// "Where to go?" bar on the ride screen.
    SearchDestination,
    /// Pencil next to the porter pick-up address.
    EditPickup,
    PickDestination,
    ConfirmRide,
    ViewCart,
    Back,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::OpenService(kind) => write!(f, "OpenService({})", kind.id()),
            other => fmt::Debug::fmt(other, f),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavOp {
    Push,
    /// Non-recoverable: the source screen leaves the history.
    Replace,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Guard {
    Always,
    RideSelected,
    CartNotEmpty,
}

/// Facts about the current screen's local state that guards look at.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GuardFacts {
    pub ride_selected: bool,
    pub cart_items: u32,
}

impl Guard {
    pub fn allows(self, facts: &GuardFacts) -> bool {
        match self {
            Guard::Always => true,
            Guard::RideSelected => facts.ride_selected,
            Guard::CartNotEmpty => facts.cart_items > 0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rule {
    pub from: Screen,
    pub action: Action,
    pub to: Screen,
    pub op: NavOp,
    pub guard: Guard,
}

const fn push(from: Screen, action: Action, to: Screen) -> Rule {
    Rule {
        from,
        action,
        to,
        op: NavOp::Push,
        guard: Guard::Always,
    }
}

const fn guarded(from: Screen, action: Action, to: Screen, guard: Guard) -> Rule {
    Rule {
        from,
        action,
        to,
        op: NavOp::Push,
        guard,
    }
}

pub const RULES: &[Rule] = &[
    Rule {
        from: Screen::Splash,
        action: Action::SplashElapsed,
        to: Screen::Login,
        op: NavOp::Replace,
        guard: Guard::Always,
    },
    push(Screen::Login, Action::SignIn, Screen::Services),
    push(Screen::Login, Action::ContinueAsGuest, Screen::Services),
    push(Screen::Login, Action::OpenRegister, Screen::Register),
    push(Screen::Register, Action::SubmitRegistration, Screen::Services),
    push(Screen::Register, Action::OpenLogin, Screen::Login),
    push(
        Screen::Services,
        Action::OpenService(ServiceKind::Ride),
        Screen::Ride,
    ),
    push(
        Screen::Services,
        Action::OpenService(ServiceKind::Porter),
        Screen::Porter,
    ),
    push(
        Screen::Services,
        Action::OpenService(ServiceKind::Grocery),
        Screen::Grocery,
    ),
    push(Screen::Ride, Action::PickSubService, Screen::LocationSelect),
    push(Screen::Ride, Action::SearchDestination, Screen::LocationSelect),
    push(Screen::Porter, Action::PickSubService, Screen::LocationSelect),
    push(Screen::Porter, Action::EditPickup, Screen::LocationSelect),
    push(
        Screen::LocationSelect,
        Action::PickDestination,
        Screen::RideConfirmation,
    ),
    guarded(
        Screen::RideConfirmation,
        Action::ConfirmRide,
        Screen::RideConfirmed,
        Guard::RideSelected,
    ),
    guarded(
        Screen::Grocery,
        Action::ViewCart,
        Screen::Cart,
        Guard::CartNotEmpty,
    ),
];

/// The row for `action` on `from`. `Back` is never in the table: it pops.
pub fn lookup(from: Screen, action: Action) -> Option<&'static Rule> {
    RULES
        .iter()
        .find(|r| r.from == from && r.action == action)
}

/// Actions with a row on `screen`, in table order.
pub fn actions_on(screen: Screen) -> impl Iterator<Item = Action> {
    RULES
        .iter()
        .filter(move |r| r.from == screen)
        .map(|r| r.action)
}
