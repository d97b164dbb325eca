use std::fmt;

use serde::{Deserialize, Serialize};

/// Every screen of the app. Doubles as the navigation key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Screen {
    Splash,
    Login,
    Register,
    Services,
    Ride,
    Porter,
    Grocery,
    LocationSelect,
    RideConfirmation,
    RideConfirmed,
    Cart,
}

impl Screen {
    pub const ALL: [Screen; 11] = [
        Screen::Splash,
        Screen::Login,
        Screen::Register,
        Screen::Services,
        Screen::Ride,
        Screen::Porter,
        Screen::Grocery,
        Screen::LocationSelect,
        Screen::RideConfirmation,
        Screen::RideConfirmed,
        Screen::Cart,
    ];

    pub fn route(self) -> &'static str {
        match self {
            Screen::Splash => "splash",
            Screen::Login => "login",
            Screen::Register => "register",
            Screen::Services => "services",
            Screen::Ride => "ride",
            Screen::Porter => "porter",
            Screen::Grocery => "grocery",
            Screen::LocationSelect => "location-select",
            Screen::RideConfirmation => "ride-confirmation",
            Screen::RideConfirmed => "ride-confirmed",
            Screen::Cart => "cart",
        }
    }

    pub fn from_route(route: &str) -> Option<Screen> {
        let route = route.trim_start_matches('/');
        Self::ALL.into_iter().find(|s| s.route() == route)
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}", self.route())
    }
}
