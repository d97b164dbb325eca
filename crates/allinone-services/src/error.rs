#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ServiceError {
    #[error("no catalog item with id '{0}'")]
    UnknownItem(String),
    #[error("no ride option with id '{0}'")]
    UnknownRideOption(String),
    #[error("no service tile with id '{0}'")]
    UnknownSubService(String),
    #[error("no destination suggestion with id '{0}'")]
    UnknownSuggestion(String),
}
