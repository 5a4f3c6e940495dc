use super::*;

#[test]
fn test_request_defaults() {
    let request = SearchRequest::new(SearchEndpoint::Tv, "怪奇物语");

    assert_eq!(request.page, 1);
    assert_eq!(request.language, "zh-CN");
    assert!(!request.include_adult);
    assert_eq!(request.year, None);
}

#[test]
fn test_year_param_depends_on_endpoint() {
    let movie = SearchRequest::new(SearchEndpoint::Movie, "Dune").with_year(Some("2021"));
    assert!(movie.query_pairs().contains(&("year", "2021".to_string())));

    let tv = SearchRequest::new(SearchEndpoint::Tv, "Dune").with_year(Some("2021"));
    assert!(
        tv.query_pairs()
            .contains(&("first_air_date_year", "2021".to_string()))
    );

    let multi = SearchRequest::new(SearchEndpoint::Multi, "Dune").with_year(Some("2021"));
    assert_eq!(multi.year, None);
    assert!(
        multi
            .query_pairs()
            .iter()
            .all(|(key, _)| *key != "year" && *key != "first_air_date_year")
    );
}

#[test]
fn test_hit_deserialization_tolerates_missing_fields() {
    let response: SearchResponse = serde_json::from_str(
        r#"{"page":1,"results":[
            {"id": 66732, "name": "怪奇物语", "original_name": "Stranger Things", "first_air_date": "2016-07-15"},
            {"id": "42", "title": "String id"},
            {"id": -3, "title": "Negative"},
            {"title": "No id"},
            {"id": null, "title": "Null id"},
            {"id": 1.5, "title": "Fractional id"}
        ]}"#,
    )
    .unwrap();

    let ids: Vec<Option<i64>> = response.results.iter().map(|hit| hit.id).collect();
    assert_eq!(ids, vec![Some(66732), Some(42), Some(-3), None, None, None]);
    assert_eq!(
        response.results[0].title_variants(),
        vec!["怪奇物语", "Stranger Things"]
    );
    assert_eq!(response.results[0].year(), Some(2016));
}

#[test]
fn test_response_without_results_is_empty() {
    let response: SearchResponse = serde_json::from_str(r#"{"page": 1}"#).unwrap();
    assert!(response.results.is_empty());
}

#[test]
fn test_parse_year() {
    assert_eq!(parse_year("2022"), Some(2022));
    assert_eq!(parse_year("2022-05-27"), Some(2022));
    assert_eq!(parse_year(" 1999 "), Some(1999));
    assert_eq!(parse_year("20221"), None);
    assert_eq!(parse_year("abcd"), None);
    assert_eq!(parse_year(""), None);
    assert_eq!(parse_year("99"), None);
}

#[test]
fn test_title_variants_skip_blank_fields() {
    let hit = SearchHit {
        id: Some(1),
        title: Some("  ".to_string()),
        original_title: Some("Dune".to_string()),
        ..SearchHit::default()
    };
    assert_eq!(hit.title_variants(), vec!["Dune"]);
    assert_eq!(hit.year(), None);
}
