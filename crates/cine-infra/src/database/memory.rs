//! In-memory ratings repository - used in tests and local runs without Postgres.

use async_trait::async_trait;
use tokio::sync::RwLock;

use cine_core::domain::RatingRecord;
use cine_core::error::RepoError;
use cine_core::ports::RatingsRepository;

/// Ratings held in insertion order, which is also the order they are returned in.
#[derive(Default)]
pub struct InMemoryRatingsRepository {
    records: RwLock<Vec<RatingRecord>>,
}

impl InMemoryRatingsRepository {
    pub fn new(records: Vec<RatingRecord>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }

    pub async fn insert(&self, record: RatingRecord) {
        self.records.write().await.push(record);
    }
}

#[async_trait]
impl RatingsRepository for InMemoryRatingsRepository {
    async fn fetch_ratings_by_user(&self, user_id: i64) -> Result<Vec<RatingRecord>, RepoError> {
        let records = self.records.read().await;
        Ok(records
            .iter()
            .filter(|r| r.user_id == user_id)
            .copied()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_filters_by_user_in_insertion_order() {
        let repo = InMemoryRatingsRepository::new(vec![
            RatingRecord::new(1, 20, 4, 200),
            RatingRecord::new(2, 30, 5, 300),
        ]);
        repo.insert(RatingRecord::new(1, 10, 3, 100)).await;

        let ratings = repo.fetch_ratings_by_user(1).await.unwrap();
        let movies: Vec<i64> = ratings.iter().map(|r| r.movie_id).collect();
        assert_eq!(movies, vec![20, 10]);

        assert!(repo.fetch_ratings_by_user(3).await.unwrap().is_empty());
    }
}
