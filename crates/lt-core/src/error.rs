//! Error types for ticket draws

use thiserror::Error;

/// Core error type
#[derive(Error, Debug)]
pub enum LtError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Container is empty")]
    EmptyContainer,

    #[error("Unknown container kind: {0}")]
    UnknownContainer(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl LtError {
    /// Shorthand for [`LtError::InvalidArgument`]
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// True for caller-side argument errors
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }
}

/// Result type alias
pub type LtResult<T> = Result<T, LtError>;
