use super::*;
use std::sync::atomic::{AtomicUsize, Ordering};

#[test]
fn test_networking_manager_creation() {
    let manager = NetworkingManager::new(NetworkingConfig::default());

    assert!(manager.is_ok(), "Should create networking manager");
    assert_eq!(manager.unwrap().max_jobs(), 4);
}

#[test]
fn test_zero_jobs_rejected() {
    let config = NetworkingConfig {
        max_jobs: 0,
        ..Default::default()
    };

    assert!(matches!(
        NetworkingManager::new(config),
        Err(NetworkingError::InvalidJobCount { count: 0 })
    ));
}

#[test]
fn test_zero_timeout_rejected() {
    let config = NetworkingConfig {
        timeout: Duration::ZERO,
        ..Default::default()
    };

    assert!(matches!(
        NetworkingManager::new(config),
        Err(NetworkingError::InvalidTimeout)
    ));
}

#[tokio::test]
async fn test_empty_item_list_error() {
    let manager = NetworkingManager::new(NetworkingConfig::default()).unwrap();

    let result = manager
        .run_bounded(Vec::<String>::new(), |item| async move { item })
        .await;

    assert!(matches!(result, Err(NetworkingError::NoItemsProvided)));
}

#[tokio::test]
async fn test_run_bounded_preserves_order() {
    let manager = NetworkingManager::new(NetworkingConfig::default()).unwrap();

    let results = manager
        .run_bounded(vec![30u64, 1, 15, 5], |delay| async move {
            tokio::time::sleep(Duration::from_millis(delay)).await;
            delay * 2
        })
        .await
        .unwrap();

    assert_eq!(results, vec![60, 2, 30, 10]);
}

#[tokio::test]
async fn test_run_bounded_respects_job_limit() {
    let config = NetworkingConfig {
        max_jobs: 2,
        ..Default::default()
    };
    let manager = NetworkingManager::new(config).unwrap();

    let active = Arc::new(AtomicUsize::new(0));
    let peak = Arc::new(AtomicUsize::new(0));

    let (active_w, peak_w) = (active.clone(), peak.clone());
    manager
        .run_bounded((0..8).collect(), move |_item: u32| {
            let active = active_w.clone();
            let peak = peak_w.clone();
            async move {
                let now = active.fetch_add(1, Ordering::SeqCst) + 1;
                peak.fetch_max(now, Ordering::SeqCst);
                tokio::time::sleep(Duration::from_millis(10)).await;
                active.fetch_sub(1, Ordering::SeqCst);
            }
        })
        .await
        .unwrap();

    assert!(peak.load(Ordering::SeqCst) <= 2);
    assert_eq!(active.load(Ordering::SeqCst), 0);
}
