//! Cache Integration Tests
//!
//! Exercises the public cache handle end to end: timing scenarios around the
//! reap loop, the bounded-staleness window, and concurrent access with an
//! active reaper.

use std::time::Duration;

use pokedex::Cache;

#[tokio::test]
async fn test_insert_then_read() {
    let cache = Cache::new(Duration::from_secs(300));

    cache.add("https://pokeapi.co/api/v2/location-area", b"page-one".to_vec()).await;

    assert_eq!(
        cache.get("https://pokeapi.co/api/v2/location-area").await,
        Some(b"page-one".to_vec())
    );

    cache.stop();
}

#[tokio::test]
async fn test_overwrite_scenario() {
    let cache = Cache::new(Duration::from_secs(300));

    cache.add("x", b"foo".to_vec()).await;
    cache.add("x", b"bar".to_vec()).await;

    assert_eq!(cache.get("x").await, Some(b"bar".to_vec()));

    cache.stop();
}

// ttl = 100ms. Add "a" at t=0, hit at t=10ms, gone by t=250ms (>= 2 ticks).
#[tokio::test]
async fn test_expiry_scenario() {
    let cache = Cache::new(Duration::from_millis(100));

    cache.add("a", b"1".to_vec()).await;

    tokio::time::sleep(Duration::from_millis(10)).await;
    assert_eq!(cache.get("a").await, Some(b"1".to_vec()));

    tokio::time::sleep(Duration::from_millis(240)).await;
    assert_eq!(cache.get("a").await, None);

    cache.stop();
}

// An entry past its TTL but not yet swept is still served. With the reaper
// stopped no sweep can intervene, so the stale hit is deterministic.
#[tokio::test]
async fn test_stale_hit_before_sweep() {
    let cache = Cache::new(Duration::from_millis(50));
    cache.stop();

    cache.add("stale", b"still-here".to_vec()).await;
    tokio::time::sleep(Duration::from_millis(80)).await;

    assert_eq!(cache.get("stale").await, Some(b"still-here".to_vec()));

    // The next sweep removes it
    assert_eq!(cache.sweep().await, 1);
    assert_eq!(cache.get("stale").await, None);
}

#[tokio::test]
async fn test_forced_sweep_only_removes_aged_entries() {
    let cache = Cache::new(Duration::from_millis(40));
    cache.stop();

    cache.add("old", b"1".to_vec()).await;
    tokio::time::sleep(Duration::from_millis(60)).await;
    cache.add("new", b"2".to_vec()).await;

    assert_eq!(cache.sweep().await, 1);
    assert_eq!(cache.get("old").await, None);
    assert_eq!(cache.get("new").await, Some(b"2".to_vec()));
}

#[tokio::test]
async fn test_overwrite_restarts_lifetime() {
    let cache = Cache::new(Duration::from_millis(50));
    cache.stop();

    cache.add("k", b"v1".to_vec()).await;
    tokio::time::sleep(Duration::from_millis(60)).await;
    cache.add("k", b"v2".to_vec()).await;

    assert_eq!(cache.sweep().await, 0);
    assert_eq!(cache.get("k").await, Some(b"v2".to_vec()));
}

// Many writers and readers against a live reaper: no deadlock, no torn reads.
#[tokio::test]
async fn test_concurrent_access_with_active_reaper() {
    const WRITERS: usize = 8;
    const READERS: usize = 8;
    const KEYS_PER_WRITER: usize = 50;

    let cache = Cache::new(Duration::from_millis(20));

    let mut handles = Vec::new();

    for w in 0..WRITERS {
        let cache = cache.clone();
        handles.push(tokio::spawn(async move {
            for i in 0..KEYS_PER_WRITER {
                let key = format!("writer-{}-key-{}", w, i);
                cache.add(key, format!("payload-{}-{}", w, i).into_bytes()).await;
            }
        }));
    }

    for r in 0..READERS {
        let cache = cache.clone();
        handles.push(tokio::spawn(async move {
            for i in 0..KEYS_PER_WRITER {
                let writer = (r + i) % WRITERS;
                let key = format!("writer-{}-key-{}", writer, i);
                // Either a clean miss or the exact payload, never a torn value
                if let Some(value) = cache.get(&key).await {
                    assert_eq!(value, format!("payload-{}-{}", writer, i).into_bytes());
                }
            }
        }));
    }

    for handle in handles {
        handle.await.expect("task must not panic");
    }

    cache.stop();
}

// The reaper keeps the cache from growing without bound as entries age out.
#[tokio::test]
async fn test_reaper_reclaims_all_entries_eventually() {
    let cache = Cache::new(Duration::from_millis(30));

    for i in 0..100 {
        cache.add(format!("key-{}", i), vec![i as u8]).await;
    }
    assert_eq!(cache.len().await, 100);

    tokio::time::sleep(Duration::from_millis(120)).await;
    assert_eq!(cache.len().await, 0);

    cache.stop();
}

#[tokio::test]
async fn test_stats_track_lookups_and_reaping() {
    let cache = Cache::new(Duration::from_millis(30));
    cache.stop();

    cache.add("k", b"v".to_vec()).await;
    cache.get("k").await;
    cache.get("absent").await;

    tokio::time::sleep(Duration::from_millis(50)).await;
    cache.sweep().await;

    let stats = cache.stats().await;
    assert_eq!(stats.hits, 1);
    assert_eq!(stats.misses, 1);
    assert_eq!(stats.reaped, 1);
    assert_eq!(stats.total_entries, 0);
}
