use serde::{Deserialize, Serialize};

use super::RatingRecord;

/// Message returned when a user has no rating in the requested month.
pub const NO_RATINGS_MESSAGE: &str = "No ratings found";

/// A rating the user gave in the requested month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyRating {
    pub user_id: i64,
    pub year: i32,
    pub month: u32,
    pub rating: i32,
}

/// One element of a user's monthly profile.
///
/// Serialized untagged, so a match renders as `{"user_id", "year", "month", "rating"}`
/// and the sentinel as `{"message": "No ratings found"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProfileEntry {
    Rated(MonthlyRating),
    NoRatings { message: String },
}

impl ProfileEntry {
    pub fn rated(record: &RatingRecord, year: i32, month: u32) -> Self {
        ProfileEntry::Rated(MonthlyRating {
            user_id: record.user_id,
            year,
            month,
            rating: record.rating,
        })
    }

    pub fn no_ratings() -> Self {
        ProfileEntry::NoRatings {
            message: NO_RATINGS_MESSAGE.to_string(),
        }
    }

    pub fn is_no_ratings(&self) -> bool {
        matches!(self, ProfileEntry::NoRatings { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_shape() {
        let record = RatingRecord::new(7, 1, 5, 0);
        let rated = serde_json::to_value(ProfileEntry::rated(&record, 2015, 1)).unwrap();
        assert_eq!(
            rated,
            serde_json::json!({"user_id": 7, "year": 2015, "month": 1, "rating": 5})
        );

        let sentinel = serde_json::to_value(ProfileEntry::no_ratings()).unwrap();
        assert_eq!(sentinel, serde_json::json!({"message": "No ratings found"}));
    }
}
