use log::trace;
use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy)]
struct CacheEntry {
    value: f64,
    inserted_at: Instant,
}

/// Bounded LRU memo of evaluation results keyed by the raw expression text.
///
/// Entries expire `ttl` after insertion and are purged lazily on lookup.
/// One lock guards both the map and its recency bookkeeping.
#[derive(Debug)]
pub struct ExpressionCache {
    entries: Mutex<LruCache<String, CacheEntry>>,
    ttl: Duration,
}

impl ExpressionCache {
    pub fn new(capacity: NonZeroUsize, ttl: Duration) -> Self {
        Self {
            entries: Mutex::new(LruCache::new(capacity)),
            ttl,
        }
    }

    // The map is never left half-updated, so a poisoned lock is still usable.
    fn entries(&self) -> MutexGuard<'_, LruCache<String, CacheEntry>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn lookup(&self, key: &str) -> Option<f64> {
        let mut entries = self.entries();
        match entries.get(key) {
            None => return None,
            Some(entry) if entry.inserted_at.elapsed() < self.ttl => {
                trace!("Cache hit: {:?}", key);
                return Some(entry.value);
            }
            Some(_) => {}
        }

        trace!("Cache entry expired: {:?}", key);
        entries.pop(key);
        None
    }

    pub fn insert(&self, key: &str, value: f64) {
        let entry = CacheEntry {
            value,
            inserted_at: Instant::now(),
        };
        if let Some((evicted, _)) = self.entries().push(key.to_string(), entry) {
            if evicted != key {
                trace!("Cache evicted least recently used: {:?}", evicted);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }

    pub fn capacity(&self) -> NonZeroUsize {
        self.entries().cap()
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn clear(&self) {
        self.entries().clear();
    }
}
