use allinone_services::ServiceError;

use crate::{Action, Screen};

#[derive(Debug, thiserror::Error)]
pub enum FlowError {
    #[error("flow has not been started")]
    NotStarted,
    #[error("{action} is not available on {screen}")]
    NotAllowed { screen: Screen, action: Action },
    #[error("expected to be on {expected}, but on {actual}")]
    WrongScreen { expected: Screen, actual: Screen },
    #[error(transparent)]
    Service(#[from] ServiceError),
    #[error("invalid value {value:?} for {var}")]
    InvalidConfig { var: &'static str, value: String },
}
