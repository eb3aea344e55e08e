use async_trait::async_trait;

use crate::domain::{RatingRecord, TagDocument};
use crate::error::RepoError;

/// Read access to the relational `ratings` table.
#[async_trait]
pub trait RatingsRepository: Send + Sync {
    /// All ratings given by a user, in the order the store returns them.
    ///
    /// A user without ratings yields an empty vector, never an error.
    async fn fetch_ratings_by_user(&self, user_id: i64) -> Result<Vec<RatingRecord>, RepoError>;
}

/// Read access to the tag documents collection.
#[async_trait]
pub trait TagRepository: Send + Sync {
    /// All tag documents of a movie, without the store's internal identifier field.
    async fn fetch_tags_by_movie(&self, movie_id: i64) -> Result<Vec<TagDocument>, RepoError>;
}
