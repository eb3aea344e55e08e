//! # Cine Infrastructure
//!
//! Concrete implementations of the ports defined in `cine-core`.
//! This crate contains the cache, relational store and document store integrations.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external dependencies, in-memory only
//! - `postgres` - PostgreSQL ratings store via SeaORM
//! - `mongo` - MongoDB tag store
//! - `redis` - Redis cache

pub mod cache;
pub mod database;
pub mod documents;

// Re-exports - In-Memory
pub use cache::InMemoryCache;
pub use database::InMemoryRatingsRepository;
pub use documents::InMemoryTagRepository;

// Re-exports - External stores
#[cfg(feature = "redis")]
pub use cache::{RedisCache, RedisConfig};
#[cfg(feature = "postgres")]
pub use database::{DatabaseConfig, PostgresRatingsRepository};
#[cfg(feature = "mongo")]
pub use documents::{MongoConfig, MongoTagRepository};
