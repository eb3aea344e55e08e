//! In-memory tag repository - used in tests and local runs without MongoDB.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use cine_core::domain::TagDocument;
use cine_core::error::RepoError;
use cine_core::ports::TagRepository;

use super::INTERNAL_ID_FIELD;

#[derive(Default)]
pub struct InMemoryTagRepository {
    docs: RwLock<HashMap<i64, Vec<TagDocument>>>,
}

impl InMemoryTagRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a document to a movie's tags.
    pub async fn insert(&self, movie_id: i64, doc: TagDocument) {
        self.docs.write().await.entry(movie_id).or_default().push(doc);
    }
}

#[async_trait]
impl TagRepository for InMemoryTagRepository {
    async fn fetch_tags_by_movie(&self, movie_id: i64) -> Result<Vec<TagDocument>, RepoError> {
        let docs = self.docs.read().await;
        Ok(docs
            .get(&movie_id)
            .map(|docs| {
                docs.iter()
                    .cloned()
                    .map(|doc| {
                        let mut fields = doc.into_inner();
                        fields.remove(INTERNAL_ID_FIELD);
                        TagDocument::new(fields)
                    })
                    .collect()
            })
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc(value: serde_json::Value) -> TagDocument {
        serde_json::from_value(value).unwrap()
    }

    #[tokio::test]
    async fn test_fetch_strips_internal_id() {
        let repo = InMemoryTagRepository::new();
        repo.insert(100, doc(json!({"_id": "abc", "movie_id": 100, "tag_name": "Adventure"})))
            .await;
        repo.insert(100, doc(json!({"movie_id": 100, "tag_name": "Comedy"})))
            .await;
        repo.insert(200, doc(json!({"movie_id": 200, "tag_name": "Drama"})))
            .await;

        let tags = repo.fetch_tags_by_movie(100).await.unwrap();

        assert_eq!(
            tags,
            vec![
                doc(json!({"movie_id": 100, "tag_name": "Adventure"})),
                doc(json!({"movie_id": 100, "tag_name": "Comedy"})),
            ]
        );
        assert!(repo.fetch_tags_by_movie(300).await.unwrap().is_empty());
    }
}
