//! Cache Module
//!
//! Provides an in-memory TTL cache for raw HTTP response bytes, with a
//! background reap loop for expiry. Reads never check entry age; staleness is
//! bounded by the sweep interval, which equals the TTL.

mod entry;
mod handle;
mod stats;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use handle::Cache;
pub use stats::CacheStats;
pub use store::CacheStore;
