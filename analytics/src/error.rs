//! Error types for EdgeWatch analytics operations.

use common::StorageError;

/// Error type for analytics operations.
///
/// # Error Categories
///
/// - [`Storage`](Error::Storage): Errors from the underlying key-value
///   storage layer, such as I/O failures or an unreachable object store.
/// - [`Encoding`](Error::Encoding): Errors serializing or deserializing the
///   analytics record.
/// - [`InvalidInput`](Error::InvalidInput): Errors caused by invalid
///   parameters or arguments provided by the caller.
/// - [`Internal`](Error::Internal): Unexpected internal errors indicating
///   bugs or invariant violations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Storage-related errors from the underlying key-value layer.
    Storage(String),

    /// Encoding or decoding errors for the persisted record.
    Encoding(String),

    /// Invalid input or parameter errors.
    InvalidInput(String),

    /// Internal errors indicating bugs or invariant violations.
    Internal(String),
}

impl std::error::Error for Error {}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Storage(msg) => write!(f, "Storage error: {}", msg),
            Error::Encoding(msg) => write!(f, "Encoding error: {}", msg),
            Error::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            Error::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl From<StorageError> for Error {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Storage(msg) => Error::Storage(msg),
            StorageError::Internal(msg) => Error::Internal(msg),
        }
    }
}

impl From<&str> for Error {
    fn from(msg: &str) -> Self {
        Error::InvalidInput(msg.to_string())
    }
}

/// Result type alias for analytics operations.
pub type Result<T> = std::result::Result<T, Error>;
