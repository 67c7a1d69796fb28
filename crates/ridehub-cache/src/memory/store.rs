//! In-memory expiring store with per-entry TTL.
//!
//! Each entry records its own expiry instant. An entry past that instant
//! is logically absent from every read path even before it is physically
//! removed, which is exactly the visibility contract hold expiry relies
//! on. Expired entries are purged lazily on read and opportunistically on
//! write once the map grows past the configured capacity.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use dashmap::DashMap;
use tracing::debug;

use ridehub_core::config::cache::MemoryCacheConfig;
use ridehub_core::result::AppResult;
use ridehub_core::traits::cache::CacheProvider;

/// One stored value and its expiry instant.
#[derive(Debug, Clone)]
struct Entry {
    value: String,
    expires_at: Instant,
}

impl Entry {
    fn new(value: &str, ttl: Duration) -> Self {
        Self {
            value: value.to_string(),
            expires_at: Instant::now() + ttl,
        }
    }

    fn is_expired(&self) -> bool {
        self.expires_at <= Instant::now()
    }
}

/// In-memory store provider backed by a concurrent hash map.
#[derive(Debug, Clone)]
pub struct MemoryCacheProvider {
    entries: std::sync::Arc<DashMap<String, Entry>>,
    max_capacity: u64,
}

impl MemoryCacheProvider {
    /// Create a new in-memory store from configuration.
    pub fn new(config: &MemoryCacheConfig) -> Self {
        Self {
            entries: std::sync::Arc::new(DashMap::new()),
            max_capacity: config.max_capacity,
        }
    }

    /// Drop expired entries when the map has outgrown its capacity.
    fn maybe_purge(&self) {
        if (self.entries.len() as u64) <= self.max_capacity {
            return;
        }
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired());
        debug!(
            purged = before - self.entries.len(),
            "Purged expired store entries"
        );
    }
}

#[async_trait]
impl CacheProvider for MemoryCacheProvider {
    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        if let Some(entry) = self.entries.get(key) {
            if !entry.is_expired() {
                return Ok(Some(entry.value.clone()));
            }
        }
        // Lazy eviction: only remove when still expired under the lock.
        self.entries
            .remove_if(key, |_, entry| entry.is_expired());
        Ok(None)
    }

    async fn set(&self, key: &str, value: &str, ttl: Duration) -> AppResult<()> {
        self.entries.insert(key.to_string(), Entry::new(value, ttl));
        self.maybe_purge();
        Ok(())
    }

    async fn set_nx(&self, key: &str, value: &str, ttl: Duration) -> AppResult<bool> {
        // An expired entry does not count as present.
        let mut inserted = false;
        self.entries
            .entry(key.to_string())
            .and_modify(|existing| {
                if existing.is_expired() {
                    *existing = Entry::new(value, ttl);
                    inserted = true;
                }
            })
            .or_insert_with(|| {
                inserted = true;
                Entry::new(value, ttl)
            });
        Ok(inserted)
    }

    async fn delete(&self, key: &str) -> AppResult<()> {
        self.entries.remove(key);
        Ok(())
    }

    async fn exists(&self, key: &str) -> AppResult<bool> {
        Ok(self.get(key).await?.is_some())
    }

    async fn expire(&self, key: &str, ttl: Duration) -> AppResult<bool> {
        let mut rearmed = false;
        if let Some(mut entry) = self.entries.get_mut(key) {
            if !entry.is_expired() {
                entry.expires_at = Instant::now() + ttl;
                rearmed = true;
            }
        }
        Ok(rearmed)
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(true)
    }
}
