use crate::{RideOption, ServiceError, ride_option};

/// Which ride option is highlighted on the confirmation screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RideSelection {
    selected: Option<&'static RideOption>,
}

impl RideSelection {
    /// Replaces any previous selection. Unknown ids leave it unchanged.
    pub fn select(&mut self, id: &str) -> Result<&'static RideOption, ServiceError> {
        let option = ride_option(id)?;
        self.selected = Some(option);
        Ok(option)
    }

    pub fn selected(&self) -> Option<&'static RideOption> {
        self.selected
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.is_some_and(|o| o.id == id)
    }

    /// The confirm button is disabled until something is selected.
    pub fn can_confirm(&self) -> bool {
        self.selected.is_some()
    }
}
