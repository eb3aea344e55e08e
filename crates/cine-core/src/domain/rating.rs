use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};

/// One user-movie rating event, as stored in the `ratings` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingRecord {
    pub user_id: i64,
    pub movie_id: i64,
    pub rating: i32,
    pub timestamp: i64,
}

impl RatingRecord {
    pub fn new(user_id: i64, movie_id: i64, rating: i32, timestamp: i64) -> Self {
        Self {
            user_id,
            movie_id,
            rating,
            timestamp,
        }
    }

    /// The moment the rating was given, in UTC.
    ///
    /// Returns `None` for timestamps outside chrono's representable range.
    pub fn rated_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.timestamp, 0)
    }

    /// Whether the rating was given in the given UTC year and month.
    pub fn rated_in(&self, year: i32, month: u32) -> bool {
        self.rated_at()
            .map(|at| at.year() == year && at.month() == month)
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rated_in_uses_utc_calendar() {
        // 2015-01-31T23:30:00Z
        let record = RatingRecord::new(1, 10, 4, 1_422_747_000);
        assert!(record.rated_in(2015, 1));
        assert!(!record.rated_in(2015, 2));
        assert!(!record.rated_in(2014, 1));
    }

    #[test]
    fn test_out_of_range_timestamp_never_matches() {
        let record = RatingRecord::new(1, 10, 4, i64::MAX);
        assert!(record.rated_at().is_none());
        assert!(!record.rated_in(2015, 1));
    }
}
