//! Cache Store Module
//!
//! Inner cache engine: a HashMap of raw response bytes with TTL bookkeeping.
//! Callers are responsible for locking; see [`crate::cache::Cache`] for the
//! concurrency-safe handle.

use std::collections::HashMap;
use std::time::Duration;

use crate::cache::{CacheEntry, CacheStats};

// == Cache Store ==
/// Key-to-payload storage with a fixed TTL.
///
/// Expiry is enforced only by [`sweep_expired`](CacheStore::sweep_expired); the
/// read path deliberately never checks entry age. A stale entry therefore
/// remains readable until the next sweep, which bounds staleness to one sweep
/// interval. This window is part of the contract, not an oversight.
#[derive(Debug)]
pub struct CacheStore {
    /// Key-value storage
    entries: HashMap<String, CacheEntry>,
    /// Entry lifetime, fixed at construction
    ttl: Duration,
    /// Performance statistics
    stats: CacheStats,
}

impl CacheStore {
    // == Constructor ==
    /// Creates an empty store whose entries live for `ttl`.
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            ttl,
            stats: CacheStats::new(),
        }
    }

    // == Add ==
    /// Inserts or overwrites the entry for `key`.
    ///
    /// An overwrite replaces both the payload and the insertion timestamp, so
    /// the entry's lifetime restarts from now.
    pub fn add(&mut self, key: String, value: Vec<u8>) {
        self.entries.insert(key, CacheEntry::new(value));
        self.stats.set_total_entries(self.entries.len());
    }

    // == Get ==
    /// Retrieves the payload last stored under `key`, or `None` if the key was
    /// never inserted or has been swept.
    ///
    /// No age check happens here: an entry past its TTL but not yet swept is
    /// still a hit.
    pub fn get(&mut self, key: &str) -> Option<Vec<u8>> {
        match self.entries.get(key) {
            Some(entry) => {
                self.stats.record_hit();
                Some(entry.value.clone())
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Sweep ==
    /// Removes every entry whose age has reached the TTL.
    ///
    /// Returns the number of entries removed.
    pub fn sweep_expired(&mut self) -> usize {
        let ttl = self.ttl;
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_stale(ttl));
        let removed = before - self.entries.len();

        self.stats.record_reaped(removed as u64);
        self.stats.set_total_entries(self.entries.len());
        removed
    }

    // == TTL ==
    /// The entry lifetime this store was constructed with.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    // == Length ==
    /// Returns the current number of entries in the cache.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
