//! In-memory cache with a fixed time-to-live.
//!
//! Entries are stored with their insertion time and treated as absent once older than
//! the cache's TTL. Expired entries stay in memory until `purge_expired` runs, which the
//! scheduler does periodically. Clones share the same underlying map.

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

#[derive(Clone)]
pub struct TtlCache<K, V> {
    entries: Arc<RwLock<HashMap<K, (V, Instant)>>>,
    ttl: Duration,
}

impl<K, V> TtlCache<K, V>
where
    K: Eq + Hash,
    V: Clone,
{
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
            ttl,
        }
    }

    /// Gets a clone of the cached value if present and not expired.
    pub async fn get(&self, key: &K) -> Option<V> {
        let entries = self.entries.read().await;
        let (value, inserted_at) = entries.get(key)?;

        (inserted_at.elapsed() < self.ttl).then(|| value.clone())
    }

    /// Stores a value, replacing any previous entry and restarting its TTL.
    pub async fn insert(&self, key: K, value: V) {
        self.entries
            .write()
            .await
            .insert(key, (value, Instant::now()));
    }

    pub async fn invalidate(&self, key: &K) {
        self.entries.write().await.remove(key);
    }

    pub async fn invalidate_all(&self) {
        self.entries.write().await.clear();
    }

    /// Drops every expired entry.
    ///
    /// # Returns
    /// - `usize` - Number of entries removed
    pub async fn purge_expired(&self) -> usize {
        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|_, (_, inserted_at)| inserted_at.elapsed() < self.ttl);

        before - entries.len()
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }
}
