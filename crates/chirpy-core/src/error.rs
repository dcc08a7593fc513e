//! Shared error type across Chirpy crates.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Request body could not be decoded.
    MalformedRequest,
    /// Chirp body exceeds the length limit.
    ContentTooLong,
    /// Path parameter is not a valid identifier.
    InvalidIdentifier,
    /// Lookup miss.
    NotFound,
    /// Any other storage failure.
    StorageFailure,
    /// Operation not permitted in the current deployment mode.
    Forbidden,
    /// Invalid startup configuration.
    Config,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in logs and tests.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::MalformedRequest => "MALFORMED_REQUEST",
            ClientCode::ContentTooLong => "CONTENT_TOO_LONG",
            ClientCode::InvalidIdentifier => "INVALID_IDENTIFIER",
            ClientCode::NotFound => "NOT_FOUND",
            ClientCode::StorageFailure => "STORAGE_FAILURE",
            ClientCode::Forbidden => "FORBIDDEN",
            ClientCode::Config => "CONFIG",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, ChirpyError>;

/// Unified error type used by core and gateway.
#[derive(Debug, Error)]
pub enum ChirpyError {
    #[error("malformed request: {0}")]
    MalformedRequest(String),
    #[error("chirp is too long")]
    ContentTooLong,
    #[error("invalid identifier: {0}")]
    InvalidIdentifier(String),
    /// Carries the resource name ("Chirp", "User").
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("storage failure: {0}")]
    StorageFailure(String),
    #[error("forbidden")]
    Forbidden,
    #[error("config: {0}")]
    Config(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl ChirpyError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            ChirpyError::MalformedRequest(_) => ClientCode::MalformedRequest,
            ChirpyError::ContentTooLong => ClientCode::ContentTooLong,
            ChirpyError::InvalidIdentifier(_) => ClientCode::InvalidIdentifier,
            ChirpyError::NotFound(_) => ClientCode::NotFound,
            ChirpyError::StorageFailure(_) => ClientCode::StorageFailure,
            ChirpyError::Forbidden => ClientCode::Forbidden,
            ChirpyError::Config(_) => ClientCode::Config,
            ChirpyError::Internal(_) => ClientCode::Internal,
        }
    }

    /// Message safe to show to API callers.
    ///
    /// Storage, config, and internal details stay in the logs; only the not-found case is
    /// distinguished explicitly.
    pub fn client_message(&self) -> String {
        match self {
            ChirpyError::MalformedRequest(_) => "Couldn't decode parameters".into(),
            ChirpyError::ContentTooLong => "Chirp is too long".into(),
            ChirpyError::InvalidIdentifier(_) => "Invalid chirp ID".into(),
            ChirpyError::NotFound(what) => format!("{what} not found"),
            ChirpyError::Forbidden => "Forbidden".into(),
            ChirpyError::StorageFailure(_) | ChirpyError::Config(_) | ChirpyError::Internal(_) => {
                "Something went wrong".into()
            }
        }
    }
}
