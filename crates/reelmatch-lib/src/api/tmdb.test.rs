use super::*;
use crate::networking::NetworkingConfig;
use mockito::{Matcher, Server};

fn networking() -> Arc<NetworkingManager> {
    Arc::new(NetworkingManager::new(NetworkingConfig::default()).unwrap())
}

fn live_client(server: &Server, secret: &str) -> TmdbClient {
    TmdbClient::with_base_url(
        networking(),
        server.url(),
        TmdbCredential::from_secret(secret),
    )
}

#[test]
fn test_credential_classification() {
    assert_eq!(
        TmdbCredential::from_secret("abc123"),
        Some(TmdbCredential::ApiKey("abc123".to_string()))
    );
    assert_eq!(
        TmdbCredential::from_secret(" eyJhbGciOiJIUzI1NiJ9.payload "),
        Some(TmdbCredential::BearerToken(
            "eyJhbGciOiJIUzI1NiJ9.payload".to_string()
        ))
    );
    assert_eq!(TmdbCredential::from_secret("   "), None);
}

#[test]
fn test_credential_debug_is_redacted() {
    let credential = TmdbCredential::ApiKey("secret".to_string());
    assert!(!format!("{:?}", credential).contains("secret"));
}

#[test]
fn test_base_url_trailing_slash_trimmed() {
    let client = TmdbClient::with_base_url(
        networking(),
        "http://localhost:1234/3/".to_string(),
        None,
    );
    assert_eq!(client.base_url(), "http://localhost:1234/3");
}

#[tokio::test]
async fn test_live_search_sends_expected_query() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/search/tv")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("query".to_string(), "怪奇物语".to_string()),
            Matcher::UrlEncoded("page".to_string(), "1".to_string()),
            Matcher::UrlEncoded("language".to_string(), "zh-CN".to_string()),
            Matcher::UrlEncoded("include_adult".to_string(), "false".to_string()),
            Matcher::UrlEncoded("first_air_date_year".to_string(), "2016".to_string()),
            Matcher::UrlEncoded("api_key".to_string(), "test-key".to_string()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"page":1,"results":[{"id":66732,"name":"怪奇物语","first_air_date":"2016-07-15"}]}"#)
        .create_async()
        .await;

    let client = live_client(&server, "test-key");
    let request = SearchRequest::new(SearchEndpoint::Tv, "怪奇物语").with_year(Some("2016"));
    let response = client.search(&request).await.unwrap();

    mock.assert_async().await;
    assert_eq!(response.results.len(), 1);
    assert_eq!(response.results[0].id, Some(66732));
}

#[tokio::test]
async fn test_live_search_uses_bearer_for_v4_tokens() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/search/multi")
        .match_header("authorization", "Bearer eyJtoken")
        .match_query(Matcher::UrlEncoded("query".to_string(), "Dune".to_string()))
        .with_status(200)
        .with_body(r#"{"results":[]}"#)
        .create_async()
        .await;

    let client = live_client(&server, "eyJtoken");
    let response = client
        .search(&SearchRequest::new(SearchEndpoint::Multi, "Dune"))
        .await
        .unwrap();

    mock.assert_async().await;
    assert!(response.results.is_empty());
}

#[tokio::test]
async fn test_live_search_maps_http_errors() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/search/movie")
        .match_query(Matcher::Any)
        .with_status(401)
        .with_body(r#"{"status_message":"Invalid API key"}"#)
        .create_async()
        .await;

    let client = live_client(&server, "bad-key");
    let result = client
        .search(&SearchRequest::new(SearchEndpoint::Movie, "Dune"))
        .await;

    assert!(matches!(
        result,
        Err(ApiError::Status { status: 401, .. })
    ));
}

#[tokio::test]
async fn test_live_search_rejects_malformed_body() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/search/movie")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body("not json")
        .create_async()
        .await;

    let client = live_client(&server, "key");
    let result = client
        .search(&SearchRequest::new(SearchEndpoint::Movie, "Dune"))
        .await;

    assert!(matches!(result, Err(ApiError::JsonError { .. })));
}

#[tokio::test]
async fn test_live_client_without_credentials() {
    let server = Server::new_async().await;
    let client = live_client(&server, "");

    let result = client
        .search(&SearchRequest::new(SearchEndpoint::Movie, "Dune"))
        .await;

    assert!(matches!(result, Err(ApiError::MissingCredentials)));
}

#[tokio::test]
async fn test_live_details_requests_appended_blocks() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/movie/438631")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("language".to_string(), "en-US".to_string()),
            Matcher::UrlEncoded(
                "append_to_response".to_string(),
                "credits,images,videos,release_dates,content_ratings".to_string(),
            ),
        ]))
        .with_status(200)
        .with_body(r#"{"id":438631,"title":"Dune","genres":[{"id":878,"name":"Science Fiction"}]}"#)
        .create_async()
        .await;

    let client = live_client(&server, "key").with_detail_language("en-US");
    let details = client.details(MediaType::Movie, 438631).await.unwrap();

    mock.assert_async().await;
    assert_eq!(details.display_title(), Some("Dune"));
    assert_eq!(details.genre_names(), vec!["Science Fiction"]);
}

#[tokio::test]
async fn test_live_details_not_found() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/tv/1")
        .match_query(Matcher::Any)
        .with_status(404)
        .create_async()
        .await;

    let client = live_client(&server, "key");
    let result = client.details(MediaType::Tv, 1).await;

    assert!(matches!(
        result,
        Err(ApiError::NotFound {
            media_type: MediaType::Tv,
            id: 1
        })
    ));
}

#[tokio::test]
async fn test_mock_client_records_calls_and_answers() {
    let response = SearchResponse {
        results: vec![crate::api::search::SearchHit {
            id: Some(1),
            title: Some("Dune".to_string()),
            ..Default::default()
        }],
    };
    let client = MockTmdbClient::new()
        .with_search_result(SearchEndpoint::Movie, "Dune", None, Ok(response))
        .await
        .with_search_result(SearchEndpoint::Tv, "Dune", None, Err("boom".to_string()))
        .await;

    let movie = client
        .search(&SearchRequest::new(SearchEndpoint::Movie, "Dune"))
        .await
        .unwrap();
    assert_eq!(movie.results.len(), 1);

    let tv = client
        .search(&SearchRequest::new(SearchEndpoint::Tv, "Dune"))
        .await;
    assert!(matches!(tv, Err(ApiError::Mock { .. })));

    let unconfigured = client
        .search(&SearchRequest::new(SearchEndpoint::Multi, "Dune"))
        .await
        .unwrap();
    assert!(unconfigured.results.is_empty());

    let endpoints: Vec<SearchEndpoint> = client
        .calls()
        .await
        .iter()
        .map(|request| request.endpoint)
        .collect();
    assert_eq!(
        endpoints,
        vec![SearchEndpoint::Movie, SearchEndpoint::Tv, SearchEndpoint::Multi]
    );
}

#[tokio::test]
async fn test_mock_client_details() {
    let client = MockTmdbClient::new()
        .with_detail_result(
            MediaType::Movie,
            7,
            Ok(EntityDetails {
                id: 7,
                ..Default::default()
            }),
        )
        .await;

    assert_eq!(client.details(MediaType::Movie, 7).await.unwrap().id, 7);
    assert!(matches!(
        client.details(MediaType::Tv, 7).await,
        Err(ApiError::NotFound { .. })
    ));
}
