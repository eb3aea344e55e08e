//! Tag document store.

mod memory;

#[cfg(feature = "mongo")]
mod mongo;

pub use memory::InMemoryTagRepository;

#[cfg(feature = "mongo")]
pub use mongo::{MongoConfig, MongoTagRepository};

/// Identifier field the document store adds to every document; never handed to callers.
pub const INTERNAL_ID_FIELD: &str = "_id";
