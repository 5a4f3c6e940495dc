use super::*;
use crate::api::search::{SearchHit, SearchResponse};
use crate::api::tmdb::MockTmdbClient;
use crate::primitives::SearchEndpoint;
use std::sync::Arc;

async fn dune_api() -> Arc<MockTmdbClient> {
    Arc::new(
        MockTmdbClient::new()
            .with_search_result(
                SearchEndpoint::Movie,
                "Dune",
                None,
                Ok(SearchResponse {
                    results: vec![SearchHit {
                        id: Some(438631),
                        title: Some("Dune".to_string()),
                        ..SearchHit::default()
                    }],
                }),
            )
            .await,
    )
}

#[test]
fn test_title_keys_use_normalized_title() {
    let a = CacheKey::for_request(&ResolveRequest::new("Dune", MediaType::Movie));
    let b = CacheKey::for_request(&ResolveRequest::new("  DUNE ", MediaType::Movie));
    let c = CacheKey::for_request(&ResolveRequest::new("Dune", MediaType::Tv));

    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn test_title_keys_use_effective_media_type_and_year() {
    let season = CacheKey::for_request(
        &ResolveRequest::new("怪奇物语 第四季", MediaType::Movie).with_year(Some("2022-05-27")),
    );

    assert_eq!(
        season,
        CacheKey::Title {
            media_type: MediaType::Tv,
            title: "怪奇物语".to_string(),
            year: Some(2022),
        }
    );
}

#[test]
fn test_id_keys() {
    let key = CacheKey::for_request(
        &ResolveRequest::new("ignored", MediaType::Tv).with_id(Some(1399)),
    );
    assert_eq!(
        key,
        CacheKey::Id {
            media_type: MediaType::Tv,
            id: 1399
        }
    );
}

#[tokio::test]
async fn test_repeated_requests_hit_cache() {
    let api = dune_api().await;
    let cached = CachedResolver::new(Resolver::new(api.clone()), CacheConfig::default());

    let first = cached
        .resolve(&ResolveRequest::new("Dune", MediaType::Movie))
        .await
        .unwrap();
    let second = cached
        .resolve(&ResolveRequest::new("dune", MediaType::Movie))
        .await
        .unwrap();

    assert_eq!(first, second);
    assert_eq!(first.map(|entity| entity.id), Some(438631));
    assert_eq!(api.calls().await.len(), 1);
    assert_eq!(cached.cache().len().await, 1);
}

#[tokio::test]
async fn test_not_found_is_cached() {
    let api = Arc::new(MockTmdbClient::new());
    let cached = CachedResolver::new(Resolver::new(api.clone()), CacheConfig::default());
    let request = ResolveRequest::new("Nothing Here", MediaType::Movie);

    assert_eq!(cached.resolve(&request).await.unwrap(), None);
    let calls_after_first = api.calls().await.len();
    assert_eq!(cached.resolve(&request).await.unwrap(), None);

    assert_eq!(api.calls().await.len(), calls_after_first);
}

#[tokio::test]
async fn test_deadline_misses_are_not_cached() {
    let api = Arc::new(MockTmdbClient::new().with_delay(Duration::from_secs(5)));
    let cached = CachedResolver::new(Resolver::new(api), CacheConfig::default());

    let result = cached
        .resolve_with_deadline(
            &ResolveRequest::new("Dune", MediaType::Movie),
            Duration::from_millis(20),
        )
        .await;

    assert!(matches!(result, Err(ResolveError::DeadlineExceeded { .. })));
    assert!(cached.cache().is_empty().await);
}

#[tokio::test]
async fn test_concurrent_duplicates_share_one_resolution() {
    let api = Arc::new(
        MockTmdbClient::new()
            .with_delay(Duration::from_millis(30))
            .with_search_result(
                SearchEndpoint::Movie,
                "Dune",
                None,
                Ok(SearchResponse {
                    results: vec![SearchHit {
                        id: Some(438631),
                        title: Some("Dune".to_string()),
                        ..SearchHit::default()
                    }],
                }),
            )
            .await,
    );
    let cached = Arc::new(CachedResolver::new(
        Resolver::new(api.clone()),
        CacheConfig::default(),
    ));

    let mut handles = Vec::new();
    for _ in 0..4 {
        let cached = cached.clone();
        handles.push(tokio::spawn(async move {
            cached
                .resolve(&ResolveRequest::new("Dune", MediaType::Movie))
                .await
        }));
    }

    for handle in handles {
        let resolved = handle.await.unwrap().unwrap();
        assert_eq!(resolved.map(|entity| entity.id), Some(438631));
    }
    assert_eq!(api.calls().await.len(), 1);
}
