//! In-memory cache implementation - used in tests and as fallback when Redis is unavailable.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use cine_core::ports::{CacheError, CacheStore};

/// In-memory cache using a HashMap behind an async RwLock.
///
/// Each `set` replaces the stored blob under the write lock, so readers see either
/// the old or the new value, never a mix. Data is lost on process restart.
pub struct InMemoryCache {
    store: RwLock<HashMap<String, Vec<u8>>>,
}

impl InMemoryCache {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(HashMap::new()),
        }
    }

    /// Number of cached entries.
    pub async fn len(&self) -> usize {
        self.store.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.store.read().await.is_empty()
    }
}

impl Default for InMemoryCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CacheStore for InMemoryCache {
    async fn exists(&self, key: &str) -> Result<bool, CacheError> {
        Ok(self.store.read().await.contains_key(key))
    }

    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CacheError> {
        Ok(self.store.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &[u8]) -> Result<(), CacheError> {
        let mut store = self.store.write().await;
        store.insert(key.to_string(), value.to_vec());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_set_and_get() {
        let cache = InMemoryCache::new();
        cache.set("history:1", b"\x90").await.unwrap();
        assert!(cache.exists("history:1").await.unwrap());
        assert_eq!(cache.get("history:1").await.unwrap(), Some(b"\x90".to_vec()));
    }

    #[tokio::test]
    async fn test_missing_key() {
        let cache = InMemoryCache::new();
        assert!(!cache.exists("history:1").await.unwrap());
        assert_eq!(cache.get("history:1").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_set_overwrites_whole_value() {
        let cache = InMemoryCache::new();
        cache.set("tags:1", b"first-and-longer").await.unwrap();
        cache.set("tags:1", b"second").await.unwrap();
        assert_eq!(cache.get("tags:1").await.unwrap(), Some(b"second".to_vec()));
        assert_eq!(cache.len().await, 1);
    }

    #[tokio::test]
    async fn test_concurrent_writers_leave_one_intact_value() {
        let cache = Arc::new(InMemoryCache::new());
        let values: Vec<Vec<u8>> = (0u8..16).map(|i| vec![i; 64]).collect();

        let handles: Vec<_> = values
            .iter()
            .cloned()
            .map(|value| {
                let cache = cache.clone();
                tokio::spawn(async move { cache.set("profile:1:2015:1", &value).await })
            })
            .collect();
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        let stored = cache.get("profile:1:2015:1").await.unwrap().unwrap();
        assert!(values.contains(&stored));
    }
}
