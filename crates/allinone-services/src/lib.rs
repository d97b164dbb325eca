//! Mock data and screen-local state for the AllInOne services.
//!
//! Everything here is static or held in memory for as long as the owning
//! screen is on the navigation stack.

pub mod cart;
pub mod catalog;
pub mod error;
pub mod forms;
pub mod money;
pub mod offerings;
pub mod places;
pub mod ride;
mod tests;

pub use cart::*;
pub use catalog::*;
pub use error::ServiceError;
pub use forms::*;
pub use money::Rupees;
pub use offerings::*;
pub use places::*;
pub use ride::RideSelection;
