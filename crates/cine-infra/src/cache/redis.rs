//! Redis cache implementation backed by a connection manager.

use std::time::Duration;

use async_trait::async_trait;
use redis::aio::ConnectionManager;
use redis::{AsyncCommands, Client};

use cine_core::ports::{CacheError, CacheStore};

/// Redis connection configuration.
#[derive(Debug, Clone)]
pub struct RedisConfig {
    /// Redis URL (e.g., redis://localhost:6379/0)
    pub url: String,
    /// Connection timeout
    pub connect_timeout: Duration,
    /// Whether to fallback to in-memory cache if Redis is unavailable at startup
    pub fallback_to_memory: bool,
}

impl Default for RedisConfig {
    fn default() -> Self {
        Self {
            url: "redis://localhost:6379/0".to_string(),
            connect_timeout: Duration::from_secs(5),
            fallback_to_memory: false,
        }
    }
}

impl RedisConfig {
    /// Load configuration from environment variables.
    ///
    /// `REDIS_URL` wins; otherwise the URL is assembled from `APP_REDIS_HOST` and
    /// `APP_REDIS_PORT`, always on database 0.
    pub fn from_env() -> Self {
        let url = std::env::var("REDIS_URL").unwrap_or_else(|_| {
            let host = std::env::var("APP_REDIS_HOST").unwrap_or_else(|_| "localhost".to_string());
            let port = std::env::var("APP_REDIS_PORT").unwrap_or_else(|_| "6379".to_string());
            format!("redis://{host}:{port}/0")
        });

        Self {
            url,
            connect_timeout: Duration::from_secs(
                std::env::var("REDIS_CONNECT_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(5),
            ),
            fallback_to_memory: std::env::var("REDIS_FALLBACK_TO_MEMORY")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(false),
        }
    }
}

/// Redis-backed cache implementation.
///
/// Uses a connection manager for automatic reconnection; each call clones the
/// cheap manager handle.
pub struct RedisCache {
    conn: ConnectionManager,
}

impl RedisCache {
    pub async fn new(config: &RedisConfig) -> Result<Self, CacheError> {
        let client =
            Client::open(config.url.as_str()).map_err(|e| CacheError::Connection(e.to_string()))?;

        // Use timeout to prevent hanging if Redis is unreachable
        let conn_manager_fut = ConnectionManager::new(client);
        let conn = tokio::time::timeout(config.connect_timeout, conn_manager_fut)
            .await
            .map_err(|_| CacheError::Connection("Connection timed out".to_string()))?
            .map_err(|e| CacheError::Connection(e.to_string()))?;

        tracing::info!(url = %config.url, "Connected to Redis cache");

        Ok(Self { conn })
    }

    /// Create from environment configuration.
    pub async fn from_env() -> Result<Self, CacheError> {
        Self::new(&RedisConfig::from_env()).await
    }
}

#[async_trait]
impl CacheStore for RedisCache {
    async fn exists(&self, key: &str) -> Result<bool, CacheError> {
        let mut conn = self.conn.clone();
        conn.exists::<_, bool>(key).await.map_err(|e| {
            tracing::warn!(key = %key, error = %e, "Redis EXISTS failed");
            CacheError::Operation(e.to_string())
        })
    }

    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CacheError> {
        let mut conn = self.conn.clone();
        conn.get::<_, Option<Vec<u8>>>(key).await.map_err(|e| {
            tracing::warn!(key = %key, error = %e, "Redis GET failed");
            CacheError::Operation(e.to_string())
        })
    }

    async fn set(&self, key: &str, value: &[u8]) -> Result<(), CacheError> {
        let mut conn = self.conn.clone();
        conn.set::<_, _, ()>(key, value).await.map_err(|e| {
            tracing::warn!(key = %key, error = %e, "Redis SET failed");
            CacheError::Operation(e.to_string())
        })
    }
}
