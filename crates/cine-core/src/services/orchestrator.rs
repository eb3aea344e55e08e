//! Cache-aside orchestration for the profile, history and tags queries.

use std::str::FromStr;
use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::codec;
use crate::domain::{
    HistoryEntry, HistoryQuery, ProfileEntry, ProfileQuery, RatingRecord, TagDocument, TagsQuery,
};
use crate::error::ServiceError;
use crate::keys::CacheKey;
use crate::ports::{CacheStore, RatingsRepository, TagRepository};

/// How the ratings of a user are scanned when building a monthly profile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ProfileScan {
    /// Walk ratings in store order and stop at the first one outside the requested
    /// month, appending the "No ratings found" sentinel. Matches made before that
    /// point are kept, later ones are never seen.
    #[default]
    FirstMismatchStops,
    /// Keep every rating in the requested month; the sentinel only appears when
    /// nothing matched.
    CollectAll,
}

impl FromStr for ProfileScan {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "first-mismatch-stops" | "first_mismatch_stops" | "legacy" => {
                Ok(ProfileScan::FirstMismatchStops)
            }
            "collect-all" | "collect_all" => Ok(ProfileScan::CollectAll),
            other => Err(format!("unknown profile scan policy: {other}")),
        }
    }
}

impl ProfileScan {
    /// Shape the ratings of a user into profile entries for one month.
    pub fn shape(self, records: &[RatingRecord], year: i32, month: u32) -> Vec<ProfileEntry> {
        let mut entries = Vec::new();

        match self {
            ProfileScan::FirstMismatchStops => {
                for record in records {
                    if record.rated_in(year, month) {
                        entries.push(ProfileEntry::rated(record, year, month));
                    } else {
                        entries.push(ProfileEntry::no_ratings());
                        break;
                    }
                }
            }
            ProfileScan::CollectAll => {
                entries.extend(
                    records
                        .iter()
                        .filter(|record| record.rated_in(year, month))
                        .map(|record| ProfileEntry::rated(record, year, month)),
                );
            }
        }

        if entries.is_empty() {
            entries.push(ProfileEntry::no_ratings());
        }

        entries
    }
}

/// Orchestrator configuration.
#[derive(Debug, Clone, Default)]
pub struct OrchestratorConfig {
    pub profile_scan: ProfileScan,
    /// Cache tag lookups under `tags:{movie_id}`. Off by default: tag reads always
    /// go to the document store.
    pub cache_tags: bool,
}

/// Read-through service over the cache and the two backing stores.
///
/// Every use case checks the cache first. On a miss it reads the backing store,
/// shapes the result, writes it back with a single `set` and returns it. Backing
/// store and cache failures are returned as [`ServiceError`]; nothing is cached
/// when a read fails.
#[derive(Clone)]
pub struct CacheOrchestrator {
    cache: Arc<dyn CacheStore>,
    ratings: Arc<dyn RatingsRepository>,
    tags: Arc<dyn TagRepository>,
    config: OrchestratorConfig,
}

impl CacheOrchestrator {
    pub fn new(
        cache: Arc<dyn CacheStore>,
        ratings: Arc<dyn RatingsRepository>,
        tags: Arc<dyn TagRepository>,
        config: OrchestratorConfig,
    ) -> Self {
        Self {
            cache,
            ratings,
            tags,
            config,
        }
    }

    pub fn config(&self) -> &OrchestratorConfig {
        &self.config
    }

    /// Ratings a user gave in one month.
    pub async fn get_user_profile(
        &self,
        query: ProfileQuery,
    ) -> Result<Vec<ProfileEntry>, ServiceError> {
        let key = CacheKey::from(&query);

        if let Some(entries) = self.cached::<Vec<ProfileEntry>>(&key).await? {
            tracing::debug!(key = %key, "Profile served from cache");
            return Ok(entries);
        }

        tracing::info!(
            user_id = query.user_id,
            year = query.year,
            month = query.month,
            "Profile not cached, querying ratings store"
        );

        let records = self.fetch_ratings(query.user_id).await?;
        let entries = self
            .config
            .profile_scan
            .shape(&records, query.year, query.month);

        if entries.iter().all(ProfileEntry::is_no_ratings) {
            tracing::info!(
                user_id = query.user_id,
                year = query.year,
                month = query.month,
                "No ratings in requested month"
            );
        }

        self.store(&key, &entries).await?;
        Ok(entries)
    }

    /// Every rating a user has given, in store order.
    pub async fn get_user_watch_history(
        &self,
        query: HistoryQuery,
    ) -> Result<Vec<HistoryEntry>, ServiceError> {
        let key = CacheKey::from(&query);

        if let Some(history) = self.cached::<Vec<HistoryEntry>>(&key).await? {
            tracing::debug!(key = %key, "History served from cache");
            return Ok(history);
        }

        tracing::info!(
            user_id = query.user_id,
            "History not cached, querying ratings store"
        );

        let records = self.fetch_ratings(query.user_id).await?;
        let history: Vec<HistoryEntry> = records.iter().map(HistoryEntry::from).collect();

        self.store(&key, &history).await?;
        Ok(history)
    }

    /// Tag documents of a movie.
    pub async fn get_movie_tags(&self, query: TagsQuery) -> Result<Vec<TagDocument>, ServiceError> {
        if !self.config.cache_tags {
            return self.fetch_tags(query.movie_id).await;
        }

        let key = CacheKey::from(&query);

        if let Some(docs) = self.cached::<Vec<TagDocument>>(&key).await? {
            tracing::debug!(key = %key, "Tags served from cache");
            return Ok(docs);
        }

        let docs = self.fetch_tags(query.movie_id).await?;
        self.store(&key, &docs).await?;
        Ok(docs)
    }

    async fn fetch_ratings(&self, user_id: i64) -> Result<Vec<RatingRecord>, ServiceError> {
        self.ratings
            .fetch_ratings_by_user(user_id)
            .await
            .map_err(|e| {
                tracing::error!(user_id, error = %e, "Ratings store read failed");
                ServiceError::from(e)
            })
    }

    async fn fetch_tags(&self, movie_id: i64) -> Result<Vec<TagDocument>, ServiceError> {
        self.tags.fetch_tags_by_movie(movie_id).await.map_err(|e| {
            tracing::error!(movie_id, error = %e, "Tag store read failed");
            ServiceError::from(e)
        })
    }

    /// Look up and decode a cached result.
    ///
    /// An entry that no longer decodes is reported as a miss so the caller
    /// overwrites it.
    async fn cached<T: DeserializeOwned>(&self, key: &CacheKey) -> Result<Option<T>, ServiceError> {
        if !self.cache.exists(key.as_str()).await? {
            return Ok(None);
        }

        let Some(bytes) = self.cache.get(key.as_str()).await? else {
            return Ok(None);
        };

        match codec::decode(&bytes) {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                tracing::warn!(key = %key, error = %e, "Discarding undecodable cache entry");
                Ok(None)
            }
        }
    }

    async fn store<T>(&self, key: &CacheKey, value: &T) -> Result<(), ServiceError>
    where
        T: Serialize + Sync,
    {
        let bytes = codec::encode(value)?;
        self.cache.set(key.as_str(), &bytes).await?;
        tracing::debug!(key = %key, bytes = bytes.len(), "Cached result");
        Ok(())
    }
}
