use super::*;
use std::sync::atomic::{AtomicUsize, Ordering};

fn small_cache(ttl: Duration, capacity: usize) -> ResolutionCache<String, u32> {
    ResolutionCache::with_config(CacheConfig { ttl, capacity })
}

#[tokio::test]
async fn test_cache_basic_operations() {
    let cache: ResolutionCache<String, u32> = ResolutionCache::new();

    assert!(cache.is_empty().await);
    assert_eq!(cache.len().await, 0);

    cache.put("dune".to_string(), 438631).await;
    assert_eq!(cache.get(&"dune".to_string()).await, Some(438631));
    assert_eq!(cache.len().await, 1);

    assert_eq!(cache.remove(&"dune".to_string()).await, Some(438631));
    assert!(cache.get(&"dune".to_string()).await.is_none());

    cache.put("a".to_string(), 1).await;
    cache.put("b".to_string(), 2).await;
    cache.clear().await;
    assert!(cache.is_empty().await);
}

#[tokio::test]
async fn test_cache_default_config() {
    let cache: ResolutionCache<String, u32> = ResolutionCache::default();
    assert_eq!(cache.config().ttl, Duration::from_secs(600));
    assert_eq!(cache.config().capacity, 256);
}

#[tokio::test]
async fn test_cache_entries_expire() {
    let cache = small_cache(Duration::from_millis(20), 8);

    cache.put("dune".to_string(), 1).await;
    assert_eq!(cache.get(&"dune".to_string()).await, Some(1));

    tokio::time::sleep(Duration::from_millis(50)).await;
    assert!(cache.get(&"dune".to_string()).await.is_none());
    assert!(cache.is_empty().await, "expired entry dropped on access");
}

#[tokio::test]
async fn test_cache_evicts_oldest_inserted() {
    let cache = small_cache(Duration::from_secs(60), 2);

    cache.put("a".to_string(), 1).await;
    cache.put("b".to_string(), 2).await;
    // Reads do not refresh insertion order
    assert_eq!(cache.get(&"a".to_string()).await, Some(1));
    cache.put("c".to_string(), 3).await;

    assert_eq!(cache.len().await, 2);
    assert!(cache.get(&"a".to_string()).await.is_none());
    assert_eq!(cache.get(&"b".to_string()).await, Some(2));
    assert_eq!(cache.get(&"c".to_string()).await, Some(3));
}

#[tokio::test]
async fn test_cache_reinsert_moves_to_back() {
    let cache = small_cache(Duration::from_secs(60), 2);

    cache.put("a".to_string(), 1).await;
    cache.put("b".to_string(), 2).await;
    cache.put("a".to_string(), 10).await;
    cache.put("c".to_string(), 3).await;

    assert_eq!(cache.get(&"a".to_string()).await, Some(10));
    assert!(cache.get(&"b".to_string()).await.is_none());
}

#[tokio::test]
async fn test_get_or_try_resolve_caches_success() {
    let cache = small_cache(Duration::from_secs(60), 8);
    let calls = AtomicUsize::new(0);

    for _ in 0..3 {
        let value = cache
            .get_or_try_resolve("dune".to_string(), || async {
                calls.fetch_add(1, Ordering::SeqCst);
                Ok::<u32, String>(438631)
            })
            .await;
        assert_eq!(value, Ok(438631));
    }

    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_get_or_try_resolve_does_not_cache_errors() {
    let cache = small_cache(Duration::from_secs(60), 8);

    let failed = cache
        .get_or_try_resolve("dune".to_string(), || async { Err::<u32, _>("timeout") })
        .await;
    assert_eq!(failed, Err("timeout"));
    assert!(cache.is_empty().await);

    let retried = cache
        .get_or_try_resolve("dune".to_string(), || async { Ok::<u32, &str>(7) })
        .await;
    assert_eq!(retried, Ok(7));
}

#[tokio::test]
async fn test_concurrent_requests_share_one_resolution() {
    let cache = Arc::new(small_cache(Duration::from_secs(60), 8));
    let calls = Arc::new(AtomicUsize::new(0));

    let mut handles = Vec::new();
    for _ in 0..5 {
        let cache = cache.clone();
        let calls = calls.clone();
        handles.push(tokio::spawn(async move {
            cache
                .get_or_try_resolve("流浪地球".to_string(), || async move {
                    calls.fetch_add(1, Ordering::SeqCst);
                    tokio::time::sleep(Duration::from_millis(30)).await;
                    Ok::<u32, String>(842675)
                })
                .await
        }));
    }

    for handle in handles {
        assert_eq!(handle.await.unwrap(), Ok(842675));
    }
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(cache.len().await, 1);
}
