//! Store Errors
//!
//! Uniform failure signal for every remote store operation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Common result type for remote store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Failure reported by (or on the way to) the remote store
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum StoreError {
    /// Network failure, unexpected status or undecodable response
    #[error("Transport error: {0}")]
    Transport(String),
    /// The remote store has no mission with this id
    #[error("Mission not found: {0}")]
    NotFound(String),
    /// The remote store rejected the payload
    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Discriminant of [`StoreError`], for callers that only branch on the kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    Transport,
    NotFound,
    Validation,
}

impl StoreError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            StoreError::Transport(_) => ErrorKind::Transport,
            StoreError::NotFound(_) => ErrorKind::NotFound,
            StoreError::Validation(_) => ErrorKind::Validation,
        }
    }
}

impl From<reqwest::Error> for StoreError {
    fn from(err: reqwest::Error) -> Self {
        StoreError::Transport(err.to_string())
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Transport(format!("malformed response: {}", err))
    }
}
