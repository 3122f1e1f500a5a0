//! Error handling for the quartz type dispatch layer

use thiserror::Error;

/// Main error type for quartz operations
#[derive(Error, Debug)]
pub enum QuartzError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid type: {0}")]
    InvalidType(String),

    #[error("Unknown field type code: {0}")]
    UnknownTypeCode(u8),

    #[error("Conversion error: {0}")]
    Conversion(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for quartz operations
pub type QuartzResult<T> = std::result::Result<T, QuartzError>;
