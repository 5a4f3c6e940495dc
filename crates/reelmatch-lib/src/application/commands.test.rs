use super::*;
use crate::api::search::{SearchHit, SearchResponse};
use crate::api::tmdb::MockTmdbClient;
use crate::networking::{CacheConfig, NetworkingConfig};
use crate::primitives::SearchEndpoint;
use serde_json::json;

fn plain() -> StyleManager {
    StyleManager::new(false)
}

fn output(buffer: Vec<u8>) -> String {
    String::from_utf8(buffer).unwrap()
}

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
                        release_date: Some("2021-09-15".to_string()),
                        ..SearchHit::default()
                    }],
                }),
            )
            .await,
    )
}

// ============================================================================
// normalize / similarity
// ============================================================================

#[test]
fn test_normalize_prints_every_field() {
    let mut out = Vec::new();
    run_normalize("权力的游戏 第二季", &plain(), &mut out).unwrap();
    let text = output(out);

    assert!(text.contains("season intent: yes"));
    assert!(text.contains("first search: tv"));
    assert!(text.contains("noisy: no"));
    for label in ["normalized:", "compact:", "scoring variants:", "search variants:"] {
        assert!(text.contains(label), "missing {label} in {text}");
    }
}

#[test]
fn test_normalize_flags_release_names() {
    let mut out = Vec::new();
    run_normalize("Movie.Name.2023.1080p-GROUP", &plain(), &mut out).unwrap();

    assert!(output(out).contains("noisy: yes"));
}

#[test]
fn test_similarity_output_format() {
    let mut out = Vec::new();
    run_similarity("Dune", "dune", &mut out).unwrap();
    assert_eq!(output(out), "1.0000\n");

    let mut out = Vec::new();
    run_similarity("", "Dune", &mut out).unwrap();
    assert_eq!(output(out), "0.0000\n");
}

// ============================================================================
// resolve
// ============================================================================

#[tokio::test]
async fn test_resolve_prints_entity() {
    let resolver = Resolver::new(dune_api().await);
    let request = ResolveRequest::new("Dune", MediaType::Movie);

    let mut out = Vec::new();
    let outcome = run_resolve(
        &resolver,
        &request,
        Duration::from_secs(5),
        false,
        &plain(),
        &mut out,
    )
    .await
    .unwrap();

    assert_eq!(outcome, CommandOutcome::Completed);
    assert_eq!(output(out), "movie:438631\n");
}

#[tokio::test]
async fn test_resolve_json_report() {
    let resolver = Resolver::new(dune_api().await);
    let request = ResolveRequest::new("Dune", MediaType::Movie);

    let mut out = Vec::new();
    run_resolve(&resolver, &request, Duration::from_secs(5), true, &plain(), &mut out)
        .await
        .unwrap();

    let report: serde_json::Value = serde_json::from_str(output(out).trim()).unwrap();
    assert_eq!(report["found"], json!(true));
    assert_eq!(report["media_type"], json!("movie"));
    assert_eq!(report["id"], json!(438631));
    assert!(report.get("error").is_none());
}

#[tokio::test]
async fn test_resolve_not_found() {
    let resolver = Resolver::new(Arc::new(MockTmdbClient::new()));
    let request = ResolveRequest::new("Nothing Matches This", MediaType::Movie);

    let mut out = Vec::new();
    let outcome = run_resolve(
        &resolver,
        &request,
        Duration::from_secs(5),
        false,
        &plain(),
        &mut out,
    )
    .await
    .unwrap();

    assert_eq!(outcome, CommandOutcome::NotFound);
    assert_eq!(output(out), "not found\n");
    assert_ne!(outcome.exit_code(), ExitCode::SUCCESS);
}

#[tokio::test]
async fn test_resolve_deadline_counts_as_not_found() {
    let api = dune_api().await;
    let slow = Arc::new((*api).clone().with_delay(Duration::from_millis(200)));
    let resolver = Resolver::new(slow);
    let request = ResolveRequest::new("Dune", MediaType::Movie);

    let mut out = Vec::new();
    let outcome = run_resolve(
        &resolver,
        &request,
        Duration::from_millis(20),
        false,
        &plain(),
        &mut out,
    )
    .await
    .unwrap();

    assert_eq!(outcome, CommandOutcome::NotFound);
}

#[tokio::test]
async fn test_resolve_command_rejects_blank_title_before_network() {
    let context = CommandContext::with_display(AppConfig::default(), Display::plain());
    let command = Commands::Resolve {
        title: "   ".to_string(),
        year: None,
        media_type: MediaType::Movie,
        id: None,
        json: false,
    };

    let mut out = Vec::new();
    let err = execute_command_with_context(command, &context, &mut out)
        .await
        .unwrap_err();
    assert!(err.to_string().contains("title or a positive id"));
}

#[tokio::test]
async fn test_network_command_requires_api_key() {
    let context = CommandContext::with_display(AppConfig::default(), Display::plain());
    let command = Commands::Resolve {
        title: "Dune".to_string(),
        year: None,
        media_type: MediaType::Movie,
        id: None,
        json: false,
    };

    let mut out = Vec::new();
    let err = execute_command_with_context(command, &context, &mut out)
        .await
        .unwrap_err();
    assert!(err.to_string().contains("REELMATCH_TMDB_API_KEY"));
}

#[tokio::test]
async fn test_offline_commands_dispatch() {
    let context = CommandContext::with_display(AppConfig::default(), Display::plain());

    let mut out = Vec::new();
    let outcome = execute_command_with_context(
        Commands::Similarity {
            a: "流浪地球".to_string(),
            b: "流浪地球2".to_string(),
        },
        &context,
        &mut out,
    )
    .await
    .unwrap();

    assert_eq!(outcome, CommandOutcome::Completed);
    let score: f64 = output(out).trim().parse().unwrap();
    assert!(score > 0.34);
}

// ============================================================================
// batch
// ============================================================================

#[test]
fn test_parse_batch_line_forms() {
    assert_eq!(parse_batch_line(""), None);
    assert_eq!(parse_batch_line("   # comment"), None);

    let request = parse_batch_line("Dune").unwrap().unwrap();
    assert_eq!(request, ResolveRequest::new("Dune", MediaType::Movie));

    let request = parse_batch_line(" 怪奇物语 | 2016 | tv ").unwrap().unwrap();
    assert_eq!(request.title, "怪奇物语");
    assert_eq!(request.year.as_deref(), Some("2016"));
    assert_eq!(request.preferred, MediaType::Tv);

    let request = parse_batch_line("Heat||").unwrap().unwrap();
    assert_eq!(request.year, None);
    assert_eq!(request.preferred, MediaType::Movie);
}

#[test]
fn test_parse_batch_line_errors() {
    assert!(parse_batch_line("|2020").unwrap().is_err());

    let err = parse_batch_line("Dune|2021|person").unwrap().unwrap_err();
    assert!(err.contains("person"));
}

#[test]
fn test_parse_batch_keeps_line_numbers() {
    let entries = parse_batch("# header\nDune\n\nHeat|1995\n");

    let lines: Vec<(usize, &str)> = entries
        .iter()
        .map(|entry| (entry.line, entry.input.as_str()))
        .collect();
    assert_eq!(lines, vec![(2, "Dune"), (4, "Heat|1995")]);
}

#[tokio::test]
async fn test_batch_reports_in_input_order() {
    let resolver = Arc::new(CachedResolver::new(
        Resolver::new(dune_api().await),
        CacheConfig::default(),
    ));
    let networking = NetworkingManager::new(NetworkingConfig::default()).unwrap();
    let entries = parse_batch("Dune\n|2020\nNothing Matches This|2001|tv\nDune\n");

    let mut out = Vec::new();
    let reports = run_batch(
        resolver.clone(),
        &networking,
        entries,
        Duration::from_secs(5),
        false,
        &Display::plain(),
        &mut out,
    )
    .await
    .unwrap();

    assert_eq!(reports.len(), 4);
    assert!(reports[0].found);
    assert!(reports[1].error.is_some());
    assert!(!reports[2].found);
    assert_eq!(reports[3].id, Some(438631));

    let text = output(out);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "Dune\tmovie:438631");
    assert!(lines[1].starts_with("|2020\tinvalid: "));
    assert_eq!(lines[2], "Nothing Matches This|2001|tv\tnot found");
    assert_eq!(lines[3], "Dune\tmovie:438631");

    // Both "Dune" lines share one cache entry
    assert_eq!(resolver.cache().len().await, 2);
}

#[tokio::test]
async fn test_batch_json_lines() {
    let resolver = Arc::new(CachedResolver::new(
        Resolver::new(dune_api().await),
        CacheConfig::default(),
    ));
    let networking = NetworkingManager::new(NetworkingConfig::default()).unwrap();

    let mut out = Vec::new();
    run_batch(
        resolver,
        &networking,
        parse_batch("Dune|2021\n"),
        Duration::from_secs(5),
        true,
        &Display::plain(),
        &mut out,
    )
    .await
    .unwrap();

    let report: serde_json::Value = serde_json::from_str(output(out).trim()).unwrap();
    assert_eq!(report["title"], json!("Dune"));
    assert_eq!(report["year"], json!("2021"));
    assert_eq!(report["found"], json!(true));
}

#[tokio::test]
async fn test_batch_with_only_invalid_lines() {
    let resolver = Arc::new(CachedResolver::new(
        Resolver::new(Arc::new(MockTmdbClient::new())),
        CacheConfig::default(),
    ));
    let networking = NetworkingManager::new(NetworkingConfig::default()).unwrap();

    let mut out = Vec::new();
    let reports = run_batch(
        resolver,
        &networking,
        parse_batch("|1999\n"),
        Duration::from_secs(5),
        false,
        &Display::plain(),
        &mut out,
    )
    .await
    .unwrap();

    assert_eq!(reports.len(), 1);
    assert!(reports[0].error.is_some());
}

// ============================================================================
// detail
// ============================================================================

fn stranger_things() -> EntityDetails {
    serde_json::from_value(json!({
        "id": 66732,
        "name": "怪奇物语",
        "original_name": "Stranger Things",
        "genres": [{"id": 10765, "name": "科幻"}, {"id": 18, "name": "剧情"}],
        "credits": {"cast": [
            {"name": "Finn Wolfhard", "order": 2},
            {"name": "Winona Ryder", "order": 0},
            {"name": "David Harbour", "order": 1}
        ]},
        "images": {"logos": [
            {"file_path": "/en.png", "iso_639_1": "en", "vote_average": 9.0, "width": 500, "height": 200},
            {"file_path": "/zh.png", "iso_639_1": "zh", "vote_average": 1.0, "width": 400, "height": 100}
        ]},
        "videos": {"results": [
            {"key": "fan", "site": "YouTube", "type": "Trailer", "official": false, "iso_639_1": "zh"},
            {"key": "official", "site": "YouTube", "type": "Trailer", "official": true, "iso_639_1": "en"}
        ]},
        "content_ratings": {"results": [
            {"iso_3166_1": "DE", "rating": "16"},
            {"iso_3166_1": "US", "rating": "TV-14"}
        ]}
    }))
    .unwrap()
}

#[tokio::test]
async fn test_detail_prints_selected_fields() {
    let api = MockTmdbClient::new()
        .with_detail_result(MediaType::Tv, 66732, Ok(stranger_things()))
        .await;

    let mut out = Vec::new();
    run_detail(
        &api,
        MediaType::Tv,
        66732,
        LanguagePreference::ZhFirst,
        &plain(),
        &mut out,
    )
    .await
    .unwrap();

    let text = output(out);
    assert!(text.starts_with("tv:66732\n"));
    assert!(text.contains("title: 怪奇物语"));
    assert!(text.contains("genres: 科幻, 剧情"));
    assert!(text.contains("cast: Winona Ryder, David Harbour, Finn Wolfhard"));
    assert!(text.contains("logo: /zh.png (4.00)"));
    assert!(text.contains("rating: US TV-14"));
    assert!(text.contains("trailer: https://www.youtube.com/watch?v=official"));
}

#[tokio::test]
async fn test_detail_english_preference_and_missing_fields() {
    let mut details = stranger_things();
    details.videos.results.clear();
    details.content_ratings.results.clear();
    let api = MockTmdbClient::new()
        .with_detail_result(MediaType::Tv, 66732, Ok(details))
        .await;

    let mut out = Vec::new();
    run_detail(
        &api,
        MediaType::Tv,
        66732,
        LanguagePreference::EnFirst,
        &plain(),
        &mut out,
    )
    .await
    .unwrap();

    let text = output(out);
    assert!(text.contains("logo: /en.png (2.50)"));
    assert!(text.contains("rating: -"));
    assert!(text.contains("trailer: -"));
}

#[tokio::test]
async fn test_detail_not_found_is_an_error() {
    let api = MockTmdbClient::new();

    let mut out = Vec::new();
    let err = run_detail(
        &api,
        MediaType::Movie,
        1,
        LanguagePreference::ZhFirst,
        &plain(),
        &mut out,
    )
    .await
    .unwrap_err();

    assert!(err.to_string().contains("movie:1"));
    assert!(out.is_empty());
}

#[test]
fn test_exit_codes() {
    assert_eq!(CommandOutcome::Completed.exit_code(), ExitCode::SUCCESS);
    assert_eq!(CommandOutcome::NotFound.exit_code(), ExitCode::from(2));
}
