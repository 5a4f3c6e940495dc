use super::*;

const MOVIE_DETAIL: &str = r#"{
    "id": 535167,
    "title": "流浪地球2",
    "original_title": "流浪地球2",
    "release_date": "2023-01-22",
    "vote_average": 7.2,
    "genres": [{"id": 878, "name": "科幻"}, {"id": 28, "name": "动作"}],
    "credits": {"cast": [
        {"name": "刘德华", "character": "图恒宇", "order": 1},
        {"name": "吴京", "character": "刘培强", "order": 0},
        {"name": "", "order": 2}
    ]},
    "images": {"logos": [
        {"file_path": "/zh.png", "iso_639_1": "zh", "vote_average": 5.3, "width": 800, "height": 200}
    ]},
    "release_dates": {"results": [
        {"iso_3166_1": "CN", "release_dates": [{"certification": ""}, {"certification": "G"}]},
        {"iso_3166_1": "US", "release_dates": [{"certification": "PG-13"}]},
        {"iso_3166_1": "FR", "release_dates": [{"certification": ""}]}
    ]}
}"#;

#[test]
fn test_movie_detail_parses_appended_blocks() {
    let details: EntityDetails = serde_json::from_str(MOVIE_DETAIL).unwrap();

    assert_eq!(details.id, 535167);
    assert_eq!(details.display_title(), Some("流浪地球2"));
    assert_eq!(details.genre_names(), vec!["科幻", "动作"]);
    assert_eq!(details.top_cast(5), vec!["吴京", "刘德华"]);
    assert_eq!(details.images.logos.len(), 1);
    assert!(details.videos.results.is_empty());
}

#[test]
fn test_movie_certifications_skip_empty_entries() {
    let details: EntityDetails = serde_json::from_str(MOVIE_DETAIL).unwrap();

    assert_eq!(
        details.certifications(),
        vec![
            ("CN".to_string(), "G".to_string()),
            ("US".to_string(), "PG-13".to_string()),
        ]
    );
}

#[test]
fn test_tv_detail_uses_content_ratings() {
    let details: EntityDetails = serde_json::from_str(
        r#"{
            "id": 66732,
            "name": "怪奇物语",
            "content_ratings": {"results": [
                {"iso_3166_1": "KR", "rating": "15"},
                {"iso_3166_1": "US", "rating": "TV-14"}
            ]},
            "videos": {"results": [
                {"key": "b9EkMc79ZSU", "site": "YouTube", "type": "Trailer", "official": true, "iso_639_1": "en"}
            ]}
        }"#,
    )
    .unwrap();

    assert_eq!(details.display_title(), Some("怪奇物语"));
    assert_eq!(details.certifications().len(), 2);
    assert_eq!(details.videos.results[0].video_type, "Trailer");
}

#[test]
fn test_minimal_detail_parses() {
    let details: EntityDetails = serde_json::from_str(r#"{"id": 1}"#).unwrap();

    assert_eq!(details.display_title(), None);
    assert!(details.certifications().is_empty());
    assert!(details.top_cast(3).is_empty());
}
