//! Error types for Leadwheel
//!
//! `LeadwheelError` is the single application error enum. The HTTP layer maps
//! `ValidationError` to a client error and everything else to a server error.

/// Application-specific error types
#[derive(thiserror::Error, Debug)]
pub enum LeadwheelError {
    #[error("{0}")]
    ValidationError(String),

    #[error("storage error: {0}")]
    StorageError(String),

    #[error("internal error: {0}")]
    InternalError(String),
}

impl LeadwheelError {
    pub fn validation(message: impl Into<String>) -> Self {
        LeadwheelError::ValidationError(message.into())
    }

    pub fn storage(message: impl Into<String>) -> Self {
        LeadwheelError::StorageError(message.into())
    }

    /// Whether the error was caused by the caller's input
    pub fn is_client_error(&self) -> bool {
        matches!(self, LeadwheelError::ValidationError(_))
    }
}

impl From<std::io::Error> for LeadwheelError {
    fn from(value: std::io::Error) -> Self {
        LeadwheelError::StorageError(value.to_string())
    }
}
