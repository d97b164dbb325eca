use serde::{Deserialize, Serialize};

use crate::{Rupees, ServiceError};

/// Top-level services offered on the home screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ServiceKind {
    Ride,
    Porter,
    Grocery,
}

impl ServiceKind {
    pub const ALL: [ServiceKind; 3] = [ServiceKind::Ride, ServiceKind::Porter, ServiceKind::Grocery];

    pub fn id(self) -> &'static str {
        match self {
            ServiceKind::Ride => "ride",
            ServiceKind::Porter => "porter",
            ServiceKind::Grocery => "grocery",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ServiceKind::Ride => "Ride",
            ServiceKind::Porter => "Porter",
            ServiceKind::Grocery => "Grocery",
        }
    }

    pub fn subtitle(self) -> &'static str {
        match self {
            ServiceKind::Ride => "Book a ride anywhere",
            ServiceKind::Porter => "Move anything, anywhere",
            ServiceKind::Grocery => "Fresh groceries delivered",
        }
    }

    pub fn from_id(id: &str) -> Option<ServiceKind> {
        Self::ALL.into_iter().find(|k| k.id() == id)
    }
}

/// A tile on the ride or porter screen. Every one leads to location select.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SubService {
    pub id: &'static str,
    pub name: &'static str,
    pub subtitle: Option<&'static str>,
}

pub const RIDE_SERVICES: &[SubService] = &[
    SubService {
        id: "bike",
        name: "Bike",
        subtitle: None,
    },
    SubService {
        id: "auto",
        name: "Auto",
        subtitle: None,
    },
    SubService {
        id: "economy",
        name: "Economy",
        subtitle: None,
    },
    SubService {
        id: "sedan",
        name: "Sedan",
        subtitle: None,
    },
];

pub const PORTER_SERVICES: &[SubService] = &[
    SubService {
        id: "trucks",
        name: "Trucks",
        subtitle: Some("For heavy loads"),
    },
    SubService {
        id: "2wheeler",
        name: "2 Wheeler",
        subtitle: Some("Quick delivery"),
    },
    SubService {
        id: "packers",
        name: "Packers & Movers",
        subtitle: Some("Full service"),
    },
    SubService {
        id: "parcel",
        name: "All India Parcel",
        subtitle: Some("Pan India delivery"),
    },
];

/// Quoted option on the ride confirmation screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct RideOption {
    pub id: &'static str,
    pub name: &'static str,
    pub fare: Rupees,
    pub eta_minutes: u32,
}

pub const RIDE_OPTIONS: &[RideOption] = &[
    RideOption {
        id: "bike",
        name: "Bike",
        fare: Rupees(50),
        eta_minutes: 15,
    },
    RideOption {
        id: "auto",
        name: "Auto",
        fare: Rupees(100),
        eta_minutes: 20,
    },
    RideOption {
        id: "economy",
        name: "Economy",
        fare: Rupees(150),
        eta_minutes: 25,
    },
    RideOption {
        id: "sedan",
        name: "Sedan",
        fare: Rupees(200),
        eta_minutes: 25,
    },
];

pub fn ride_option(id: &str) -> Result<&'static RideOption, ServiceError> {
    RIDE_OPTIONS
        .iter()
        .find(|o| o.id == id)
        .ok_or_else(|| ServiceError::UnknownRideOption(id.to_string()))
}

pub fn sub_service(
    services: &'static [SubService],
    id: &str,
) -> Result<&'static SubService, ServiceError> {
    services
        .iter()
        .find(|s| s.id == id)
        .ok_or_else(|| ServiceError::UnknownSubService(id.to_string()))
}
