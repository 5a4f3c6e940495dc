//! TMDB response fixtures
//!
//! Builders for the JSON bodies the mock TMDB server hands back. Only the
//! fields the engine reads are filled in.

use serde_json::{Value, json};

pub fn movie_hit(id: u64, title: &str, release_date: &str) -> Value {
    json!({
        "id": id,
        "title": title,
        "original_title": title,
        "release_date": release_date,
    })
}

pub fn tv_hit(id: u64, name: &str, original_name: &str, first_air_date: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "original_name": original_name,
        "first_air_date": first_air_date,
    })
}

/// A multi-search hit carrying an explicit `media_type`
pub fn multi_hit(id: u64, media_type: &str, name: &str) -> Value {
    json!({
        "id": id,
        "media_type": media_type,
        "name": name,
    })
}

/// Search response body wrapping `hits` as page one
pub fn search_body(hits: Vec<Value>) -> String {
    let total = hits.len();
    json!({
        "page": 1,
        "results": hits,
        "total_pages": 1,
        "total_results": total,
    })
    .to_string()
}

pub fn empty_search_body() -> String {
    search_body(Vec::new())
}

/// Stranger Things detail with two logos, two trailers and two ratings
pub fn stranger_things_detail() -> Value {
    json!({
        "id": 66732,
        "name": "怪奇物语",
        "original_name": "Stranger Things",
        "first_air_date": "2016-07-15",
        "genres": [
            {"id": 10765, "name": "Sci-Fi & Fantasy"},
            {"id": 18, "name": "剧情"}
        ],
        "credits": {"cast": [
            {"name": "Millie Bobby Brown", "character": "Eleven", "order": 1},
            {"name": "Winona Ryder", "character": "Joyce Byers", "order": 0}
        ]},
        "images": {"logos": [
            {"file_path": "/en-logo.png", "iso_639_1": "en", "vote_average": 5.3, "width": 1000, "height": 400},
            {"file_path": "/zh-logo.png", "iso_639_1": "zh", "vote_average": 3.1, "width": 600, "height": 200, "aspect_ratio": 3.0}
        ]},
        "videos": {"results": [
            {"key": "zh-fan-cut", "site": "YouTube", "type": "Trailer", "official": false, "iso_639_1": "zh"},
            {"key": "b9EkMc79ZSU", "site": "YouTube", "type": "Trailer", "official": true, "iso_639_1": "en"},
            {"key": "clip", "site": "YouTube", "type": "Clip", "official": true, "iso_639_1": "zh"}
        ]},
        "content_ratings": {"results": [
            {"iso_3166_1": "KR", "rating": "15"},
            {"iso_3166_1": "US", "rating": "TV-14"}
        ]}
    })
}

/// Movie detail whose certifications come from release dates
pub fn inception_detail() -> Value {
    json!({
        "id": 27205,
        "title": "盗梦空间",
        "original_title": "Inception",
        "release_date": "2010-07-15",
        "genres": [{"id": 28, "name": "动作"}],
        "release_dates": {"results": [
            {"iso_3166_1": "JP", "release_dates": [{"certification": "G"}]},
            {"iso_3166_1": "CN", "release_dates": [{"certification": ""}, {"certification": "PG-13"}]}
        ]}
    })
}
