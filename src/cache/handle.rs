//! Cache Handle Module
//!
//! Concurrency-safe handle over the cache store, owning the background reaper.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;

use crate::cache::{CacheStats, CacheStore};
use crate::tasks::spawn_reap_loop;

// == Cache ==
/// Thread-safe TTL cache for raw response bytes, keyed by request URL.
///
/// Constructed once at startup; clones share the same store and reaper. The
/// reaper ticks once per TTL and removes everything at least TTL old, so a
/// read may return an entry up to one interval past its nominal expiry. The
/// lock is held only for the map access itself, never across a network call.
#[derive(Debug, Clone)]
pub struct Cache {
    store: Arc<RwLock<CacheStore>>,
    reaper: Arc<JoinHandle<()>>,
}

impl Cache {
    // == Constructor ==
    /// Creates a cache whose entries live for `ttl` and starts its reap loop.
    ///
    /// The sweep interval equals the TTL; the two are deliberately coupled.
    /// Must be called from within a tokio runtime.
    ///
    /// # Panics
    /// Panics if `ttl` is zero.
    pub fn new(ttl: Duration) -> Self {
        assert!(!ttl.is_zero(), "cache TTL must be positive");

        let store = Arc::new(RwLock::new(CacheStore::new(ttl)));
        let reaper = spawn_reap_loop(store.clone(), ttl);

        Self {
            store,
            reaper: Arc::new(reaper),
        }
    }

    // == Add ==
    /// Stores `value` under `key`, overwriting any previous entry wholesale.
    pub async fn add(&self, key: impl Into<String>, value: Vec<u8>) {
        let mut store = self.store.write().await;
        store.add(key.into(), value);
    }

    // == Get ==
    /// Returns the payload last stored under `key`, or `None` on a miss.
    ///
    /// A miss is an expected outcome, not an error. Write lock because the
    /// lookup updates hit/miss statistics.
    pub async fn get(&self, key: &str) -> Option<Vec<u8>> {
        let mut store = self.store.write().await;
        store.get(key)
    }

    // == Sweep ==
    /// Forces one sweep pass immediately, outside the reaper's schedule.
    ///
    /// Intended for embedders and deterministic tests; the running reap loop
    /// is unaffected. Returns the number of entries removed.
    pub async fn sweep(&self) -> usize {
        let mut store = self.store.write().await;
        store.sweep_expired()
    }

    // == Stats ==
    /// Returns a snapshot of the cache statistics.
    pub async fn stats(&self) -> CacheStats {
        let store = self.store.read().await;
        store.stats()
    }

    // == Length ==
    /// Returns the current number of entries.
    pub async fn len(&self) -> usize {
        let store = self.store.read().await;
        store.len()
    }

    // == Stop ==
    /// Aborts the background reaper.
    ///
    /// Never called on the normal CLI path, where the reaper runs until the
    /// process exits; exposed for embedding and tests.
    pub fn stop(&self) {
        self.reaper.abort();
    }
}
