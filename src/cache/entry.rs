//! Cache Entry Module
//!
//! Defines the structure for individual cached response payloads.

use std::time::{Duration, Instant};

// == Cache Entry ==
/// A single cached payload with its insertion timestamp.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// Raw response bytes exactly as supplied at insertion
    pub value: Vec<u8>,
    /// Recorded once at insertion, never updated
    pub created_at: Instant,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new entry timestamped with the current instant.
    pub fn new(value: Vec<u8>) -> Self {
        Self {
            value,
            created_at: Instant::now(),
        }
    }

    // == Age ==
    /// Time elapsed since the entry was inserted.
    pub fn age(&self) -> Duration {
        self.created_at.elapsed()
    }

    // == Is Stale ==
    /// Checks whether the entry has outlived the given TTL.
    ///
    /// Boundary condition: an entry is stale when its age is greater than or
    /// equal to the TTL. Staleness only makes the entry eligible for the next
    /// sweep; the read path never consults it.
    pub fn is_stale(&self, ttl: Duration) -> bool {
        self.age() >= ttl
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;

    #[test]
    fn test_entry_holds_exact_bytes() {
        let entry = CacheEntry::new(b"payload".to_vec());
        assert_eq!(entry.value, b"payload");
    }

    #[test]
    fn test_entry_allows_empty_payload() {
        let entry = CacheEntry::new(Vec::new());
        assert!(entry.value.is_empty());
        assert!(!entry.is_stale(Duration::from_secs(60)));
    }

    #[test]
    fn test_entry_fresh_within_ttl() {
        let entry = CacheEntry::new(b"data".to_vec());
        assert!(!entry.is_stale(Duration::from_secs(300)));
    }

    #[test]
    fn test_entry_stale_after_ttl() {
        let entry = CacheEntry::new(b"data".to_vec());
        sleep(Duration::from_millis(30));
        assert!(entry.is_stale(Duration::from_millis(20)));
    }

    #[test]
    fn test_entry_age_monotonic() {
        let entry = CacheEntry::new(b"data".to_vec());
        let first = entry.age();
        sleep(Duration::from_millis(10));
        assert!(entry.age() >= first);
    }

    #[test]
    fn test_staleness_boundary_zero_ttl() {
        // Age >= ttl holds immediately when ttl is zero
        let entry = CacheEntry::new(b"data".to_vec());
        assert!(entry.is_stale(Duration::ZERO));
    }
}
