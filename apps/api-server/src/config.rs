//! Application configuration loaded from environment variables.

use std::env;

use anyhow::Context;
use cine_core::{OrchestratorConfig, ProfileScan};

#[cfg(feature = "postgres")]
use cine_infra::DatabaseConfig;
#[cfg(feature = "mongo")]
use cine_infra::MongoConfig;
#[cfg(feature = "redis")]
use cine_infra::RedisConfig;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Number of HTTP worker threads.
    pub workers: usize,
    pub orchestrator: OrchestratorConfig,
    #[cfg(feature = "postgres")]
    pub database: DatabaseConfig,
    #[cfg(feature = "redis")]
    pub redis: RedisConfig,
    #[cfg(feature = "mongo")]
    pub mongo: MongoConfig,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(5000),
            workers: env::var("WORKERS")
                .ok()
                .and_then(|w| w.parse().ok())
                .filter(|w| *w > 0)
                .unwrap_or_else(default_workers),
            orchestrator: Self::orchestrator_from_env()?,
            #[cfg(feature = "postgres")]
            database: DatabaseConfig::from_env(),
            #[cfg(feature = "redis")]
            redis: RedisConfig::from_env(),
            #[cfg(feature = "mongo")]
            mongo: MongoConfig::from_env(),
        })
    }

    fn orchestrator_from_env() -> anyhow::Result<OrchestratorConfig> {
        parse_orchestrator(
            env::var("PROFILE_SCAN").ok().as_deref(),
            env::var("CACHE_TAGS").ok().as_deref(),
        )
    }
}

/// Parse the orchestrator settings.
///
/// Unlike the numeric settings, an unknown `PROFILE_SCAN` value is rejected
/// instead of silently falling back, since it changes response contents.
fn parse_orchestrator(
    profile_scan: Option<&str>,
    cache_tags: Option<&str>,
) -> anyhow::Result<OrchestratorConfig> {
    let profile_scan = match profile_scan {
        Some(value) => value
            .parse::<ProfileScan>()
            .map_err(anyhow::Error::msg)
            .context("invalid PROFILE_SCAN")?,
        None => ProfileScan::default(),
    };

    let cache_tags = cache_tags.is_some_and(|v| v == "true" || v == "1");

    Ok(OrchestratorConfig {
        profile_scan,
        cache_tags,
    })
}

fn default_workers() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(4)
}
