use super::*;
use crate::api::search::SearchHit;
use crate::api::tmdb::MockTmdbClient;

fn movie_hit(id: i64, title: &str, release_date: &str) -> SearchHit {
    SearchHit {
        id: Some(id),
        title: Some(title.to_string()),
        release_date: Some(release_date.to_string()),
        ..SearchHit::default()
    }
}

fn tv_hit(id: i64, name: &str, first_air_date: &str) -> SearchHit {
    SearchHit {
        id: Some(id),
        name: Some(name.to_string()),
        first_air_date: Some(first_air_date.to_string()),
        ..SearchHit::default()
    }
}

fn multi_hit(id: i64, kind: &str, name: &str) -> SearchHit {
    SearchHit {
        id: Some(id),
        media_type: Some(kind.to_string()),
        name: Some(name.to_string()),
        ..SearchHit::default()
    }
}

fn response(hits: Vec<SearchHit>) -> Result<SearchResponse, String> {
    Ok(SearchResponse { results: hits })
}

// ============================================================================
// Attempt plan
// ============================================================================

#[test]
fn test_plan_without_season_intent() {
    let plan = build_attempt_plan(MediaType::Movie, Some("2021"), false);
    let rows: Vec<(SearchEndpoint, Option<&str>)> = plan
        .iter()
        .map(|attempt| (attempt.endpoint, attempt.year.as_deref()))
        .collect();

    assert_eq!(
        rows,
        vec![
            (SearchEndpoint::Movie, Some("2021")),
            (SearchEndpoint::Movie, None),
            (SearchEndpoint::Tv, Some("2021")),
            (SearchEndpoint::Tv, None),
            (SearchEndpoint::Multi, None),
        ]
    );
}

#[test]
fn test_plan_with_season_intent_defers_year_filter() {
    let plan = build_attempt_plan(MediaType::Tv, Some("2022"), true);
    let rows: Vec<(SearchEndpoint, Option<&str>)> = plan
        .iter()
        .map(|attempt| (attempt.endpoint, attempt.year.as_deref()))
        .collect();

    assert_eq!(
        rows,
        vec![
            (SearchEndpoint::Tv, None),
            (SearchEndpoint::Tv, Some("2022")),
            (SearchEndpoint::Movie, None),
            (SearchEndpoint::Movie, Some("2022")),
            (SearchEndpoint::Multi, None),
        ]
    );
}

#[test]
fn test_plan_without_year_skips_year_rows() {
    let plan = build_attempt_plan(MediaType::Tv, None, false);
    let endpoints: Vec<SearchEndpoint> = plan.iter().map(|attempt| attempt.endpoint).collect();

    assert_eq!(
        endpoints,
        vec![SearchEndpoint::Tv, SearchEndpoint::Movie, SearchEndpoint::Multi]
    );
    assert!(plan.iter().all(|attempt| attempt.year.is_none()));
}

// ============================================================================
// Candidate extraction and scoring
// ============================================================================

#[test]
fn test_extract_drops_unusable_ids_and_person_hits() {
    let response = SearchResponse {
        results: vec![
            multi_hit(17419, "person", "Dune"),
            multi_hit(438631, "movie", "Dune"),
            multi_hit(0, "movie", "Zero"),
            multi_hit(-5, "tv", "Negative"),
            SearchHit {
                id: None,
                title: Some("Missing".to_string()),
                ..SearchHit::default()
            },
            multi_hit(90228, "tv", "Dune: Prophecy"),
            multi_hit(3, "collection", "Dune Collection"),
        ],
    };

    let candidates = extract_candidates(SearchEndpoint::Multi, &response, 8);
    let ids: Vec<(u64, MediaType)> = candidates
        .iter()
        .map(|candidate| (candidate.id, candidate.media_type))
        .collect();

    assert_eq!(
        ids,
        vec![(438631, MediaType::Movie), (90228, MediaType::Tv)]
    );
}

#[test]
fn test_extract_single_endpoint_ignores_reported_kind() {
    let response = SearchResponse {
        results: vec![multi_hit(1, "person", "Odd")],
    };

    let candidates = extract_candidates(SearchEndpoint::Tv, &response, 8);
    assert_eq!(candidates.len(), 1);
    assert_eq!(candidates[0].media_type, MediaType::Tv);
}

#[test]
fn test_extract_respects_limit() {
    let response = SearchResponse {
        results: (1..=12).map(|id| movie_hit(id, "Dune", "2021")).collect(),
    };

    assert_eq!(extract_candidates(SearchEndpoint::Movie, &response, 8).len(), 8);
}

#[test]
fn test_score_applies_year_adjustment() {
    let tuning = MatchTuning::default();
    let query = QueryProfile::from_request(
        &ResolveRequest::new("Dune", MediaType::Movie).with_year(Some("2021")),
    );

    let score = |release: &str| {
        let candidate = Candidate {
            id: 1,
            media_type: MediaType::Movie,
            title_variants: vec!["Dune".to_string()],
            year: parse_year(release),
        };
        score_candidate(&candidate, &query, SearchEndpoint::Movie, &tuning)
            .unwrap()
            .score
    };

    assert!((score("2021-10-22") - 1.08).abs() < 1e-9);
    assert!((score("2020") - 1.03).abs() < 1e-9);
    assert!((score("1984-12-14") - 0.92).abs() < 1e-9);
    assert!((score("") - 1.0).abs() < 1e-9);
}

#[test]
fn test_score_drops_unrelated_titles() {
    let tuning = MatchTuning::default();
    let query = QueryProfile::from_request(&ResolveRequest::new("流浪地球", MediaType::Movie));
    let candidate = Candidate {
        id: 1,
        media_type: MediaType::Movie,
        title_variants: vec!["Arrival".to_string()],
        year: None,
    };

    assert!(score_candidate(&candidate, &query, SearchEndpoint::Movie, &tuning).is_none());
}

#[test]
fn test_score_penalizes_specials_for_season_queries() {
    let tuning = MatchTuning::default();
    let special = Candidate {
        id: 1,
        media_type: MediaType::Tv,
        title_variants: vec!["怪奇物语：幕后花絮".to_string()],
        year: None,
    };

    let season_query =
        QueryProfile::from_request(&ResolveRequest::new("怪奇物语 第四季", MediaType::Tv));
    let plain_query = QueryProfile::from_request(&ResolveRequest::new("怪奇物语", MediaType::Tv));

    let with_intent = score_candidate(&special, &season_query, SearchEndpoint::Tv, &tuning)
        .unwrap()
        .score;
    let without_intent = score_candidate(&special, &plain_query, SearchEndpoint::Tv, &tuning)
        .unwrap()
        .score;

    assert!((without_intent - with_intent - 0.26).abs() < 1e-9);
}

#[test]
fn test_score_boosts_multi_hits_of_primary_type() {
    let tuning = MatchTuning::default();
    let query = QueryProfile::from_request(&ResolveRequest::new("Dune", MediaType::Movie));
    let candidate = |media_type| Candidate {
        id: 1,
        media_type,
        title_variants: vec!["Dune".to_string()],
        year: None,
    };

    let movie = score_candidate(&candidate(MediaType::Movie), &query, SearchEndpoint::Multi, &tuning)
        .unwrap()
        .score;
    let tv = score_candidate(&candidate(MediaType::Tv), &query, SearchEndpoint::Multi, &tuning)
        .unwrap()
        .score;

    assert!((movie - tv - tuning.media_type_boost).abs() < 1e-9);
}

#[test]
fn test_request_validation() {
    assert!(ResolveRequest::new("Dune", MediaType::Movie).validate().is_ok());
    assert!(
        ResolveRequest::new("", MediaType::Movie)
            .with_id(Some(438631))
            .validate()
            .is_ok()
    );
    assert!(matches!(
        ResolveRequest::new("  ", MediaType::Movie)
            .with_id(Some(0))
            .validate(),
        Err(ResolveError::InvalidInput { .. })
    ));
}

#[test]
fn test_resolved_entity_display() {
    let entity = ResolvedEntity {
        id: 66732,
        media_type: MediaType::Tv,
    };
    assert_eq!(entity.to_string(), "tv:66732");
}

// ============================================================================
// End-to-end resolution against the mock client
// ============================================================================

#[tokio::test]
async fn test_season_query_searches_tv_first_without_year() {
    let api = Arc::new(
        MockTmdbClient::new()
            .with_search_result(
                SearchEndpoint::Tv,
                "怪奇物语 第四季",
                None,
                response(vec![tv_hit(66732, "怪奇物语", "2016-07-15")]),
            )
            .await,
    );
    let resolver = Resolver::new(api.clone());

    let request = ResolveRequest::new("怪奇物语 第四季", MediaType::Movie).with_year(Some("2022"));
    let resolved = resolver.resolve(&request).await.unwrap();

    assert_eq!(
        resolved,
        Some(ResolvedEntity {
            id: 66732,
            media_type: MediaType::Tv
        })
    );

    let calls = api.calls().await;
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].endpoint, SearchEndpoint::Tv);
    assert_eq!(calls[0].year, None);
    assert_eq!(calls[0].language, "zh-CN");
    assert!(!calls[0].include_adult);
}

#[tokio::test]
async fn test_season_code_glued_to_cjk_title_plans_tv_first() {
    let api = Arc::new(MockTmdbClient::new());
    let resolver = Resolver::new(api.clone());

    let request = ResolveRequest::new("绝命毒师S05", MediaType::Movie).with_year(Some("2012"));
    assert_eq!(resolver.resolve(&request).await.unwrap(), None);

    let calls = api.calls().await;
    assert!(!calls.is_empty());
    assert_eq!(calls[0].endpoint, SearchEndpoint::Tv);
    assert_eq!(calls[0].year, None);
}

#[tokio::test]
async fn test_blank_title_makes_no_calls() {
    let api = Arc::new(MockTmdbClient::new());
    let resolver = Resolver::new(api.clone());

    for title in ["", "   ", "\t\n"] {
        let resolved = resolver
            .resolve(&ResolveRequest::new(title, MediaType::Movie))
            .await
            .unwrap();
        assert_eq!(resolved, None);
    }

    assert!(api.calls().await.is_empty());
}

#[tokio::test]
async fn test_known_id_short_circuits() {
    let api = Arc::new(MockTmdbClient::new());
    let resolver = Resolver::new(api.clone());

    let request = ResolveRequest::new("anything", MediaType::Tv).with_id(Some(1399));
    let resolved = resolver.resolve(&request).await.unwrap();

    assert_eq!(
        resolved,
        Some(ResolvedEntity {
            id: 1399,
            media_type: MediaType::Tv
        })
    );
    assert!(api.calls().await.is_empty());
}

#[tokio::test]
async fn test_person_hits_never_resolve() {
    let api = Arc::new(
        MockTmdbClient::new()
            .with_search_result(
                SearchEndpoint::Multi,
                "Denis Villeneuve",
                None,
                response(vec![multi_hit(137427, "person", "Denis Villeneuve")]),
            )
            .await,
    );
    let resolver = Resolver::new(api.clone());

    let resolved = resolver
        .resolve(&ResolveRequest::new("Denis Villeneuve", MediaType::Movie))
        .await
        .unwrap();

    assert_eq!(resolved, None);
    // movie, tv, multi
    assert_eq!(api.calls().await.len(), 3);
}

#[tokio::test]
async fn test_failed_calls_are_skipped() {
    let api = Arc::new(
        MockTmdbClient::new()
            .with_search_result(SearchEndpoint::Movie, "Dune", None, Err("timeout".to_string()))
            .await
            .with_search_result(
                SearchEndpoint::Tv,
                "Dune",
                None,
                response(vec![tv_hit(90228, "Dune", "2024-11-17")]),
            )
            .await,
    );
    let resolver = Resolver::new(api.clone());

    let resolved = resolver
        .resolve(&ResolveRequest::new("Dune", MediaType::Movie))
        .await
        .unwrap();

    assert_eq!(
        resolved,
        Some(ResolvedEntity {
            id: 90228,
            media_type: MediaType::Tv
        })
    );
    assert_eq!(api.calls().await.len(), 2);
}

#[tokio::test]
async fn test_year_picks_matching_release() {
    let api = Arc::new(
        MockTmdbClient::new()
            .with_search_result(
                SearchEndpoint::Movie,
                "Dune",
                Some("2021"),
                response(vec![
                    movie_hit(841, "Dune", "1984-12-14"),
                    movie_hit(438631, "Dune", "2021-09-15"),
                ]),
            )
            .await,
    );
    let resolver = Resolver::new(api.clone());

    let resolved = resolver
        .resolve(&ResolveRequest::new("Dune", MediaType::Movie).with_year(Some("2021")))
        .await
        .unwrap();

    assert_eq!(resolved.map(|entity| entity.id), Some(438631));
    assert_eq!(api.calls().await[0].year.as_deref(), Some("2021"));
}

#[tokio::test]
async fn test_noisy_query_needs_stronger_match() {
    // "parasite" vs "paradise" share three of seven bigrams: 6/14
    let api = Arc::new(
        MockTmdbClient::new()
            .with_search_result(
                SearchEndpoint::Movie,
                "Parasite",
                None,
                response(vec![movie_hit(5, "Paradise", "")]),
            )
            .await,
    );
    let resolver = Resolver::new(api.clone());

    let clean = resolver
        .resolve(&ResolveRequest::new("Parasite", MediaType::Movie))
        .await
        .unwrap();
    assert_eq!(clean.map(|entity| entity.id), Some(5));

    let noisy_request = ResolveRequest::new("Parasite: 2019 1080p WEB-DL", MediaType::Movie);
    assert!(QueryProfile::from_request(&noisy_request).noisy);

    let noisy = resolver.resolve(&noisy_request).await.unwrap();
    assert_eq!(noisy, None);
}

#[tokio::test]
async fn test_cancelled_token_stops_before_searching() {
    let api = Arc::new(MockTmdbClient::new());
    let resolver = Resolver::new(api.clone());
    let cancel = CancellationToken::new();
    cancel.cancel();

    let result = resolver
        .resolve_with_cancel(&ResolveRequest::new("Dune", MediaType::Movie), &cancel)
        .await;

    assert!(matches!(result, Err(ResolveError::Cancelled)));
    assert!(api.calls().await.is_empty());
}

#[tokio::test]
async fn test_cancel_during_search_abandons_resolution() {
    let api = Arc::new(MockTmdbClient::new().with_delay(Duration::from_secs(5)));
    let resolver = Resolver::new(api.clone());
    let cancel = CancellationToken::new();

    let trigger = cancel.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(20)).await;
        trigger.cancel();
    });

    let result = resolver
        .resolve_with_cancel(&ResolveRequest::new("Dune", MediaType::Movie), &cancel)
        .await;

    assert!(matches!(result, Err(ResolveError::Cancelled)));
    assert_eq!(api.calls().await.len(), 1);
}

#[tokio::test]
async fn test_deadline_exceeded() {
    let api = Arc::new(MockTmdbClient::new().with_delay(Duration::from_secs(5)));
    let resolver = Resolver::new(api);

    let result = resolver
        .resolve_with_deadline(
            &ResolveRequest::new("Dune", MediaType::Movie),
            Duration::from_millis(20),
        )
        .await;

    assert!(matches!(
        result,
        Err(ResolveError::DeadlineExceeded { .. })
    ));
}

#[tokio::test]
async fn test_custom_tuning_threshold() {
    let api = Arc::new(
        MockTmdbClient::new()
            .with_search_result(
                SearchEndpoint::Movie,
                "Parasite",
                None,
                response(vec![movie_hit(5, "Paradise", "")]),
            )
            .await,
    );
    let tuning = MatchTuning {
        default_threshold: 0.5,
        ..MatchTuning::default()
    };
    let resolver = Resolver::new(api).with_tuning(tuning);

    let resolved = resolver
        .resolve(&ResolveRequest::new("Parasite", MediaType::Movie))
        .await
        .unwrap();

    assert_eq!(resolved, None);
    assert_eq!(resolver.tuning().default_threshold, 0.5);
}
