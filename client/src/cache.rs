//! TTL response cache

use std::collections::HashMap;
use std::future::Future;
use std::sync::RwLock;
use std::time::{Duration, Instant};

/// Default entry lifetime (10 minutes)
pub const DEFAULT_TTL: Duration = Duration::from_millis(600_000);

/// Memoizing store keyed by request identity, with age-based expiry checked
/// lazily on access.
///
/// One entry per key. A stale entry is overwritten by the next successful
/// fetch rather than removed, so the map grows with the number of distinct
/// keys for the life of the process. Failed fetches are never stored.
/// Concurrent callers racing on the same cold key each run their own fetch
/// (no in-flight coalescing); the lock is never held across an await, so the
/// race is harmless on a multi-threaded runtime.
pub struct TtlCache<V> {
    ttl: Duration,
    entries: RwLock<HashMap<String, Entry<V>>>,
}

struct Entry<V> {
    value: V,
    inserted_at: Instant,
}

impl<V: Clone> TtlCache<V> {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Return the live cached value for `key`; otherwise run `fetch`, store
    /// its result with the current timestamp, and return it.
    pub async fn get_or_fetch<F, Fut, E>(&self, key: &str, fetch: F) -> Result<V, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<V, E>>,
    {
        if let Some(value) = self.lookup(key) {
            return Ok(value);
        }

        let value = fetch().await?;
        if let Ok(mut entries) = self.entries.write() {
            entries.insert(
                key.to_string(),
                Entry {
                    value: value.clone(),
                    inserted_at: Instant::now(),
                },
            );
        }
        Ok(value)
    }

    fn lookup(&self, key: &str) -> Option<V> {
        let entries = self.entries.read().ok()?;
        let entry = entries.get(key)?;
        if entry.inserted_at.elapsed() < self.ttl {
            tracing::debug!(key, "cache hit");
            Some(entry.value.clone())
        } else {
            None
        }
    }

    /// Number of stored entries, live or stale.
    pub fn len(&self) -> usize {
        self.entries.read().map(|entries| entries.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
