use serde::Serialize;

use crate::ServiceError;

pub const CURRENT_LOCATION: &str = "Current Location";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    pub id: &'static str,
    pub name: &'static str,
    pub address: &'static str,
}

pub const SUGGESTIONS: &[Suggestion] = &[
    Suggestion {
        id: "1",
        name: "Central Mall",
        address: "123 Mall Road, City Center",
    },
    Suggestion {
        id: "2",
        name: "City Park",
        address: "Park Street, Green Zone",
    },
    Suggestion {
        id: "3",
        name: "Tech Hub",
        address: "456 Innovation Drive",
    },
    Suggestion {
        id: "4",
        name: "Metro Station",
        address: "Metro Line 1, Transport Hub",
    },
    Suggestion {
        id: "5",
        name: "Food Court",
        address: "789 Dining Street",
    },
];

pub fn suggestion(id: &str) -> Result<&'static Suggestion, ServiceError> {
    SUGGESTIONS
        .iter()
        .find(|s| s.id == id)
        .ok_or_else(|| ServiceError::UnknownSuggestion(id.to_string()))
}

/// From/to fields of the location select screen. `from` is read-only.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LocationDraft {
    from: String,
    to: String,
}

impl Default for LocationDraft {
    fn default() -> Self {
        Self {
            from: CURRENT_LOCATION.to_string(),
            to: String::new(),
        }
    }
}

impl LocationDraft {
    pub fn origin(&self) -> &str {
        &self.from
    }

    pub fn destination(&self) -> &str {
        &self.to
    }

    pub fn set_destination(&mut self, text: impl Into<String>) {
        self.to = text.into();
    }

    pub fn pick(&mut self, suggestion: &Suggestion) {
        self.to = suggestion.name.to_string();
    }
}
