//! End-to-end resolution against a mock TMDB server

use mockito::{Matcher, Server};
use reelmatch_lib::api::{TmdbClient, TmdbCredential};
use reelmatch_lib::networking::{CacheConfig, NetworkingConfig, NetworkingManager};
use reelmatch_lib::primitives::MediaType;
use reelmatch_lib::resolve::{CachedResolver, ResolveRequest, ResolvedEntity, Resolver};
use std::sync::Arc;

fn client(server: &Server) -> Arc<TmdbClient> {
    let networking = NetworkingManager::new(NetworkingConfig::default()).unwrap();
    Arc::new(TmdbClient::with_base_url(
        Arc::new(networking),
        server.url(),
        TmdbCredential::from_secret("test-key"),
    ))
}

#[tokio::test]
async fn test_season_query_resolves_through_tv_search() {
    let mut server = Server::new_async().await;
    let tv = server
        .mock("GET", "/search/tv")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("query".to_string(), "怪奇物语 第四季".to_string()),
            Matcher::UrlEncoded("api_key".to_string(), "test-key".to_string()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"page":1,"results":[
                {"id":66732,"name":"怪奇物语","original_name":"Stranger Things","first_air_date":"2016-07-15"}
            ]}"#,
        )
        .expect(1)
        .create_async()
        .await;
    let movie = server
        .mock("GET", "/search/movie")
        .match_query(Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let resolver = Resolver::new(client(&server));
    let request = ResolveRequest::new("怪奇物语 第四季", MediaType::Movie);
    let entity = resolver.resolve(&request).await.unwrap();

    assert_eq!(
        entity,
        Some(ResolvedEntity {
            id: 66732,
            media_type: MediaType::Tv,
        })
    );
    tv.assert_async().await;
    movie.assert_async().await;
}

#[tokio::test]
async fn test_failed_search_falls_through_to_next_attempt() {
    let mut server = Server::new_async().await;
    let _movie = server
        .mock("GET", "/search/movie")
        .match_query(Matcher::Any)
        .with_status(500)
        .create_async()
        .await;
    let _tv = server
        .mock("GET", "/search/tv")
        .match_query(Matcher::UrlEncoded("query".to_string(), "Chernobyl".to_string()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"results":[{"id":87108,"name":"Chernobyl","first_air_date":"2019-05-06"}]}"#)
        .create_async()
        .await;

    let resolver = Resolver::new(client(&server));
    let request = ResolveRequest::new("Chernobyl", MediaType::Movie);

    assert_eq!(
        resolver.resolve(&request).await.unwrap(),
        Some(ResolvedEntity {
            id: 87108,
            media_type: MediaType::Tv,
        })
    );
}

#[tokio::test]
async fn test_cached_resolver_hits_network_once() {
    let mut server = Server::new_async().await;
    let movie = server
        .mock("GET", "/search/movie")
        .match_query(Matcher::UrlEncoded("query".to_string(), "Heat".to_string()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"results":[{"id":949,"title":"Heat","release_date":"1995-12-15"}]}"#)
        .expect(1)
        .create_async()
        .await;

    let resolver = CachedResolver::new(Resolver::new(client(&server)), CacheConfig::default());

    for title in ["Heat", " heat ", "HEAT"] {
        let entity = resolver
            .resolve(&ResolveRequest::new(title, MediaType::Movie))
            .await
            .unwrap();
        assert_eq!(entity.map(|entity| entity.id), Some(949));
    }

    movie.assert_async().await;
}

#[tokio::test]
async fn test_known_id_skips_network() {
    let mut server = Server::new_async().await;
    let any = server
        .mock("GET", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let resolver = Resolver::new(client(&server));
    let request = ResolveRequest::new("", MediaType::Tv).with_id(Some(1399));

    assert_eq!(
        resolver.resolve(&request).await.unwrap(),
        Some(ResolvedEntity {
            id: 1399,
            media_type: MediaType::Tv,
        })
    );
    any.assert_async().await;
}
