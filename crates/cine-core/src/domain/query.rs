//! Parsed inbound queries, one per read-through use case.

use serde::{Deserialize, Serialize};

use crate::error::ServiceError;

/// Monthly profile of a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileQuery {
    pub user_id: i64,
    pub year: i32,
    pub month: u32,
}

/// Full watch history of a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryQuery {
    pub user_id: i64,
}

/// Tag documents of a movie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagsQuery {
    pub movie_id: i64,
}

fn positive_id(name: &str, value: i64) -> Result<i64, ServiceError> {
    if value > 0 {
        Ok(value)
    } else {
        Err(ServiceError::MalformedQuery(format!(
            "{name} must be a positive integer, got {value}"
        )))
    }
}

impl ProfileQuery {
    /// Build a profile query, rejecting non-positive user ids and months outside 1-12.
    pub fn new(user_id: i64, year: i32, month: u32) -> Result<Self, ServiceError> {
        let user_id = positive_id("user_id", user_id)?;
        if !(1..=12).contains(&month) {
            return Err(ServiceError::MalformedQuery(format!(
                "month must be between 1 and 12, got {month}"
            )));
        }
        Ok(Self {
            user_id,
            year,
            month,
        })
    }
}

impl HistoryQuery {
    pub fn new(user_id: i64) -> Result<Self, ServiceError> {
        Ok(Self {
            user_id: positive_id("user_id", user_id)?,
        })
    }
}

impl TagsQuery {
    pub fn new(movie_id: i64) -> Result<Self, ServiceError> {
        Ok(Self {
            movie_id: positive_id("movie_id", movie_id)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_query_validation() {
        assert!(ProfileQuery::new(7, 2015, 1).is_ok());
        assert!(matches!(
            ProfileQuery::new(7, 2015, 13),
            Err(ServiceError::MalformedQuery(_))
        ));
        assert!(matches!(
            ProfileQuery::new(7, 2015, 0),
            Err(ServiceError::MalformedQuery(_))
        ));
        assert!(matches!(
            ProfileQuery::new(0, 2015, 1),
            Err(ServiceError::MalformedQuery(_))
        ));
    }

    #[test]
    fn test_id_queries_reject_non_positive() {
        assert!(HistoryQuery::new(42).is_ok());
        assert!(HistoryQuery::new(-1).is_err());
        assert!(TagsQuery::new(100).is_ok());
        assert!(TagsQuery::new(0).is_err());
    }
}
