use async_trait::async_trait;

/// Cache trait - abstraction over key/blob caching backends (Redis, in-memory).
///
/// Entries never expire; `set` overwrites the whole blob atomically.
#[async_trait]
pub trait CacheStore: Send + Sync {
    /// Check if a key exists.
    async fn exists(&self, key: &str) -> Result<bool, CacheError>;

    /// Get the blob stored under a key.
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CacheError>;

    /// Store a blob under a key, replacing any previous value.
    async fn set(&self, key: &str, value: &[u8]) -> Result<(), CacheError>;
}

/// Cache operation errors.
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("Connection failed: {0}")]
    Connection(String),

    #[error("Serialization failed: {0}")]
    Serialization(String),

    #[error("Operation failed: {0}")]
    Operation(String),
}
