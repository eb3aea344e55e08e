//! Application state - shared across all handlers.

use std::sync::Arc;

use anyhow::Context;
use cine_core::ports::{CacheStore, RatingsRepository, TagRepository};
use cine_core::{CacheOrchestrator, OrchestratorConfig};

use crate::config::AppConfig;

/// Shared application state.
///
/// The store clients are opened once at startup and shared by every worker.
#[derive(Clone)]
pub struct AppState {
    pub service: CacheOrchestrator,
}

impl AppState {
    /// Wire the orchestrator from already-constructed stores.
    pub fn from_parts(
        cache: Arc<dyn CacheStore>,
        ratings: Arc<dyn RatingsRepository>,
        tags: Arc<dyn TagRepository>,
        config: OrchestratorConfig,
    ) -> Self {
        Self {
            service: CacheOrchestrator::new(cache, ratings, tags, config),
        }
    }

    /// Connect to every configured store and build the application state.
    pub async fn new(config: &AppConfig) -> anyhow::Result<Self> {
        let cache = build_cache(config).await?;
        let ratings = build_ratings(config).await?;
        let tags = build_tags(config).await?;

        let state = Self::from_parts(cache, ratings, tags, config.orchestrator.clone());

        let settings = state.service.config();
        tracing::info!(
            profile_scan = ?settings.profile_scan,
            cache_tags = settings.cache_tags,
            "Application state initialized"
        );

        Ok(state)
    }
}

#[cfg(feature = "redis")]
async fn build_cache(config: &AppConfig) -> anyhow::Result<Arc<dyn CacheStore>> {
    use cine_infra::{InMemoryCache, RedisCache};

    match RedisCache::new(&config.redis).await {
        Ok(cache) => Ok(Arc::new(cache)),
        Err(e) if config.redis.fallback_to_memory => {
            tracing::warn!(
                error = %e,
                "Redis unavailable. Using in-memory cache fallback."
            );
            Ok(Arc::new(InMemoryCache::new()))
        }
        Err(e) => Err(e).context("failed to connect to Redis"),
    }
}

#[cfg(not(feature = "redis"))]
async fn build_cache(_config: &AppConfig) -> anyhow::Result<Arc<dyn CacheStore>> {
    tracing::info!("Running without redis feature - using in-memory cache");
    Ok(Arc::new(cine_infra::InMemoryCache::new()))
}

#[cfg(feature = "postgres")]
async fn build_ratings(config: &AppConfig) -> anyhow::Result<Arc<dyn RatingsRepository>> {
    let db = config
        .database
        .connect()
        .await
        .context("failed to connect to the ratings database")?;
    Ok(Arc::new(cine_infra::PostgresRatingsRepository::new(db)))
}

#[cfg(not(feature = "postgres"))]
async fn build_ratings(_config: &AppConfig) -> anyhow::Result<Arc<dyn RatingsRepository>> {
    tracing::warn!("Running without postgres feature - ratings store is empty and in-memory");
    Ok(Arc::new(cine_infra::InMemoryRatingsRepository::default()))
}

#[cfg(feature = "mongo")]
async fn build_tags(config: &AppConfig) -> anyhow::Result<Arc<dyn TagRepository>> {
    let repo = cine_infra::MongoTagRepository::new(&config.mongo)
        .await
        .context("failed to connect to the tag store")?;
    Ok(Arc::new(repo))
}

#[cfg(not(feature = "mongo"))]
async fn build_tags(_config: &AppConfig) -> anyhow::Result<Arc<dyn TagRepository>> {
    tracing::warn!("Running without mongo feature - tag store is empty and in-memory");
    Ok(Arc::new(cine_infra::InMemoryTagRepository::new()))
}
