//! TTL Reap Loop
//!
//! Background task that periodically removes expired cache entries.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::CacheStore;

/// Spawns the background reap loop for a cache store.
///
/// The task alternates between sleeping for `interval` and performing one
/// locked sweep pass over the store. The interval is expected to equal the
/// store's TTL: entries are never removed the instant they expire, only on
/// the next tick, which is what bounds staleness to one interval.
///
/// The loop runs until the process exits unless the returned handle is
/// aborted. It performs no I/O and cannot fail.
///
/// # Arguments
/// * `store` - Shared reference to the cache store
/// * `interval` - Tick interval between sweep passes
///
/// # Example
/// ```ignore
/// let store = Arc::new(RwLock::new(CacheStore::new(ttl)));
/// let reaper = spawn_reap_loop(store.clone(), ttl);
/// // Later, for embedding or tests:
/// reaper.abort();
/// ```
pub fn spawn_reap_loop(store: Arc<RwLock<CacheStore>>, interval: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        info!("starting reap loop with tick interval {:?}", interval);

        loop {
            // Waiting state: idle until the next tick
            tokio::time::sleep(interval).await;

            // Sweeping state: one locked pass over the entries
            let removed = {
                let mut store = store.write().await;
                store.sweep_expired()
            };

            if removed > 0 {
                info!("reap tick: removed {} expired entries", removed);
            } else {
                debug!("reap tick: no expired entries");
            }
        }
    })
}
