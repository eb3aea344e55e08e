//! Cache key construction.
//!
//! Keys are namespaced by the kind of result they hold and built from the integer
//! parameters of the query, joined with `:`. Integers never contain `:`, so two
//! different queries can never collide on the same key.

use std::fmt;

use crate::domain::{HistoryQuery, ProfileQuery, TagsQuery};

const PROFILE_NAMESPACE: &str = "profile";
const HISTORY_NAMESPACE: &str = "history";
const TAGS_NAMESPACE: &str = "tags";

/// A deterministic cache key for one query.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey(String);

impl CacheKey {
    /// `profile:{user_id}:{year}:{month}`
    pub fn profile(user_id: i64, year: i32, month: u32) -> Self {
        Self(format!("{PROFILE_NAMESPACE}:{user_id}:{year}:{month}"))
    }

    /// `history:{user_id}`
    pub fn history(user_id: i64) -> Self {
        Self(format!("{HISTORY_NAMESPACE}:{user_id}"))
    }

    /// `tags:{movie_id}`
    pub fn tags(movie_id: i64) -> Self {
        Self(format!("{TAGS_NAMESPACE}:{movie_id}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&ProfileQuery> for CacheKey {
    fn from(query: &ProfileQuery) -> Self {
        Self::profile(query.user_id, query.year, query.month)
    }
}

impl From<&HistoryQuery> for CacheKey {
    fn from(query: &HistoryQuery) -> Self {
        Self::history(query.user_id)
    }
}

impl From<&TagsQuery> for CacheKey {
    fn from(query: &TagsQuery) -> Self {
        Self::tags(query.movie_id)
    }
}
