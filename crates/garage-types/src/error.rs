//! Error types for smart-garage

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Rejected input: the operation was aborted before any mutation.
    #[error("Validation failed: {}", .0.join(" "))]
    Validation(Vec<String>),

    /// Operation not allowed in the vehicle's current state.
    #[error("{0}")]
    Precondition(String),

    #[error("Not found: {0}")]
    NotFound(String),

    /// Storage write failed. In-memory state stays authoritative.
    #[error("Failed to persist garage: {0}")]
    Persistence(String),

    /// A persisted record could not be turned back into a live object.
    #[error("Failed to rehydrate record: {0}")]
    Rehydration(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    pub fn precondition(msg: impl Into<String>) -> Self {
        Error::Precondition(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Error::Validation(vec![msg.into()])
    }
}

pub type Result<T> = std::result::Result<T, Error>;
