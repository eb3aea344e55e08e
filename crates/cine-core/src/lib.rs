//! # Cine Core
//!
//! The domain layer of the Cine query service.
//! This crate contains the read-through caching logic with zero infrastructure dependencies:
//! backing stores and the cache are reached only through the traits in [`ports`].

pub mod codec;
pub mod domain;
pub mod error;
pub mod keys;
pub mod ports;
pub mod services;

pub use error::ServiceError;
pub use keys::CacheKey;
pub use services::{CacheOrchestrator, OrchestratorConfig, ProfileScan};
