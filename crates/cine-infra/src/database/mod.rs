//! Relational ratings store.

mod memory;

#[cfg(feature = "postgres")]
mod connections;
#[cfg(feature = "postgres")]
pub mod postgres_repo;

pub use memory::InMemoryRatingsRepository;

#[cfg(feature = "postgres")]
pub use connections::DatabaseConfig;
#[cfg(feature = "postgres")]
pub use postgres_repo::PostgresRatingsRepository;

#[cfg(feature = "postgres")]
#[cfg(test)]
mod tests;
