//! Binary codec for cache entries.
//!
//! Entries are MessagePack with named struct fields, so nested maps, sequences and
//! scalars round-trip without a schema and stay readable by other MessagePack clients.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::ports::CacheError;

/// Serialize a value into a cache blob.
pub fn encode<T: Serialize>(value: &T) -> Result<Vec<u8>, CacheError> {
    rmp_serde::to_vec_named(value).map_err(|e| CacheError::Serialization(e.to_string()))
}

/// Deserialize a cache blob.
pub fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, CacheError> {
    rmp_serde::from_slice(bytes).map_err(|e| CacheError::Serialization(e.to_string()))
}
