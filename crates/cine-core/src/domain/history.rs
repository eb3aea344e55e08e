use serde::{Deserialize, Serialize};

use super::RatingRecord;

/// One element of a user's watch history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub movie_id: i64,
    pub rating: i32,
    pub timestamp: i64,
}

impl From<&RatingRecord> for HistoryEntry {
    fn from(record: &RatingRecord) -> Self {
        Self {
            movie_id: record.movie_id,
            rating: record.rating,
            timestamp: record.timestamp,
        }
    }
}
