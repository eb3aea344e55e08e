//! Error types shared by the ports and the orchestrator.

use thiserror::Error;

use crate::ports::CacheError;

/// Errors surfaced by the read-through use cases.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Backing store unavailable: {0}")]
    BackingStoreUnavailable(String),

    #[error("Cache unavailable: {0}")]
    CacheUnavailable(String),

    #[error("Malformed query: {0}")]
    MalformedQuery(String),
}

/// Repository-level errors for the relational and document stores.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Unexpected row shape: {0}")]
    Decode(String),
}

impl From<RepoError> for ServiceError {
    fn from(err: RepoError) -> Self {
        ServiceError::BackingStoreUnavailable(err.to_string())
    }
}

impl From<CacheError> for ServiceError {
    fn from(err: CacheError) -> Self {
        ServiceError::CacheUnavailable(err.to_string())
    }
}
