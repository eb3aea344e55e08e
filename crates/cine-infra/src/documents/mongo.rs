//! MongoDB tag repository.

use std::time::Duration;

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{Bson, Document, doc};
use mongodb::error::{Error as MongoError, ErrorKind};
use mongodb::{Client, Collection};

use cine_core::domain::TagDocument;
use cine_core::error::RepoError;
use cine_core::ports::TagRepository;

use super::INTERNAL_ID_FIELD;

/// MongoDB connection configuration.
#[derive(Debug, Clone)]
pub struct MongoConfig {
    /// MongoDB URL (e.g., mongodb://localhost:27017)
    pub url: String,
    pub database: String,
    pub collection: String,
    /// Field holding the movie id in each tag document.
    pub movie_id_field: String,
    /// Timeout for the startup ping
    pub connect_timeout: Duration,
}

impl Default for MongoConfig {
    fn default() -> Self {
        Self {
            url: "mongodb://localhost:27017".to_string(),
            database: "movies".to_string(),
            collection: "tags".to_string(),
            movie_id_field: "movie_id".to_string(),
            connect_timeout: Duration::from_secs(5),
        }
    }
}

impl MongoConfig {
    /// Load configuration from environment variables.
    ///
    /// `MONGO_URL` wins; otherwise the URL is assembled from `APP_MONGO_HOST` and
    /// `APP_MONGO_PORT`.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let url = std::env::var("MONGO_URL").unwrap_or_else(|_| {
            let host = std::env::var("APP_MONGO_HOST").unwrap_or_else(|_| "localhost".to_string());
            let port = std::env::var("APP_MONGO_PORT").unwrap_or_else(|_| "27017".to_string());
            format!("mongodb://{host}:{port}")
        });

        Self {
            url,
            database: std::env::var("MONGO_DATABASE").unwrap_or(defaults.database),
            collection: std::env::var("MONGO_TAGS_COLLECTION").unwrap_or(defaults.collection),
            movie_id_field: std::env::var("MONGO_MOVIE_ID_FIELD")
                .unwrap_or(defaults.movie_id_field),
            connect_timeout: Duration::from_secs(
                std::env::var("MONGO_CONNECT_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(5),
            ),
        }
    }
}

/// Tag repository over a MongoDB collection.
pub struct MongoTagRepository {
    collection: Collection<Document>,
    movie_id_field: String,
}

fn map_mongo_err(err: MongoError) -> RepoError {
    match err.kind.as_ref() {
        ErrorKind::ServerSelection { .. } | ErrorKind::Io(_) => {
            RepoError::Connection(err.to_string())
        }
        _ => RepoError::Query(err.to_string()),
    }
}

/// Convert a raw document into a pass-through tag document, dropping `_id`.
fn document_to_tag(mut document: Document) -> Result<TagDocument, RepoError> {
    document.remove(INTERNAL_ID_FIELD);
    match Bson::Document(document).into_relaxed_extjson() {
        serde_json::Value::Object(fields) => Ok(TagDocument::new(fields)),
        other => Err(RepoError::Decode(format!(
            "tag document is not an object: {other}"
        ))),
    }
}

impl MongoTagRepository {
    /// Connect and verify the server answers a ping within the configured timeout.
    pub async fn new(config: &MongoConfig) -> Result<Self, RepoError> {
        let client = Client::with_uri_str(&config.url)
            .await
            .map_err(|e| RepoError::Connection(e.to_string()))?;
        let database = client.database(&config.database);

        let ping = async { database.run_command(doc! { "ping": 1 }).await };
        tokio::time::timeout(config.connect_timeout, ping)
            .await
            .map_err(|_| RepoError::Connection("Connection timed out".to_string()))?
            .map_err(map_mongo_err)?;

        tracing::info!(
            database = %config.database,
            collection = %config.collection,
            "Connected to MongoDB tag store"
        );

        Ok(Self {
            collection: database.collection(&config.collection),
            movie_id_field: config.movie_id_field.clone(),
        })
    }
}

#[async_trait]
impl TagRepository for MongoTagRepository {
    async fn fetch_tags_by_movie(&self, movie_id: i64) -> Result<Vec<TagDocument>, RepoError> {
        tracing::debug!(movie_id, "Fetching tags by movie");

        let mut filter = Document::new();
        filter.insert(self.movie_id_field.as_str(), movie_id);

        let cursor = self
            .collection
            .find(filter)
            .projection(doc! { "_id": 0 })
            .await
            .map_err(map_mongo_err)?;

        let documents: Vec<Document> = cursor.try_collect().await.map_err(map_mongo_err)?;

        documents.into_iter().map(document_to_tag).collect()
    }
}
