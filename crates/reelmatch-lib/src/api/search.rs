//! Search and detail API abstraction
//!
//! The resolver only needs keyed title search; callers that render results
//! additionally fetch entity detail. Both are traits so the live TMDB client
//! and the in-memory mock are interchangeable.

use crate::api::details::EntityDetails;
use crate::primitives::{MediaType, SearchEndpoint};
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// Language sent with every search unless overridden
pub const DEFAULT_SEARCH_LANGUAGE: &str = "zh-CN";

/// API errors
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("HTTP request failed: {source}")]
    RequestFailed {
        #[from]
        source: reqwest::Error,
    },

    #[error("Unexpected status {status} from {endpoint}")]
    Status { status: u16, endpoint: String },

    #[error("JSON parsing failed: {source}")]
    JsonError {
        #[from]
        source: serde_json::Error,
    },

    #[error("No TMDB credentials configured")]
    MissingCredentials,

    #[error("Entity not found: {media_type}/{id}")]
    NotFound { media_type: MediaType, id: u64 },

    #[error("Mock API error: {message}")]
    Mock { message: String },
}

/// One search call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub endpoint: SearchEndpoint,
    pub query: String,
    pub page: u32,
    /// Release year (movie) or first-air year (tv); never set for multi
    pub year: Option<String>,
    pub language: String,
    pub include_adult: bool,
}

impl SearchRequest {
    /// First page, default language, adult content excluded
    pub fn new(endpoint: SearchEndpoint, query: &str) -> Self {
        Self {
            endpoint,
            query: query.to_string(),
            page: 1,
            year: None,
            language: DEFAULT_SEARCH_LANGUAGE.to_string(),
            include_adult: false,
        }
    }

    /// Apply a year filter; ignored for the multi endpoint
    pub fn with_year(mut self, year: Option<&str>) -> Self {
        self.year = match self.endpoint.year_param() {
            Some(_) => year.map(str::to_string),
            None => None,
        };
        self
    }

    /// Override the result language
    pub fn with_language(mut self, language: &str) -> Self {
        self.language = language.to_string();
        self
    }

    /// Query parameters in wire order
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("query", self.query.clone()),
            ("page", self.page.to_string()),
            ("language", self.language.clone()),
            ("include_adult", self.include_adult.to_string()),
        ];

        if let (Some(param), Some(year)) = (self.endpoint.year_param(), &self.year) {
            pairs.push((param, year.clone()));
        }

        pairs
    }
}

/// Search response body
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub results: Vec<SearchHit>,
}

/// One raw search hit; fields are optional because endpoints differ
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchHit {
    /// Absent or unusable ids deserialize to `None`
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: Option<i64>,
    #[serde(default)]
    pub media_type: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub original_title: Option<String>,
    #[serde(default)]
    pub original_name: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub first_air_date: Option<String>,
}

impl SearchHit {
    /// Non-empty title fields, display titles first
    pub fn title_variants(&self) -> Vec<String> {
        [
            &self.title,
            &self.name,
            &self.original_title,
            &self.original_name,
        ]
        .into_iter()
        .flatten()
        .map(|title| title.trim())
        .filter(|title| !title.is_empty())
        .map(str::to_string)
        .collect()
    }

    /// Year from the release or first-air date
    pub fn year(&self) -> Option<i32> {
        self.release_date
            .as_deref()
            .and_then(parse_year)
            .or_else(|| self.first_air_date.as_deref().and_then(parse_year))
    }
}

/// Leading four-digit year of a date or year string
pub fn parse_year(text: &str) -> Option<i32> {
    let text = text.trim();
    let digits = text.get(..4)?;
    if !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    if text[4..].chars().next().is_some_and(|c| c.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

fn lenient_id<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::Number(number)) => number.as_i64().or_else(|| {
            number
                .as_f64()
                .filter(|f| f.fract() == 0.0 && f.abs() < i64::MAX as f64)
                .map(|f| f as i64)
        }),
        Some(serde_json::Value::String(text)) => text.trim().parse().ok(),
        _ => None,
    })
}

/// Keyed title search
pub trait SearchApi: Send + Sync {
    /// Run one search call
    fn search(
        &self,
        request: &SearchRequest,
    ) -> impl std::future::Future<Output = Result<SearchResponse, ApiError>> + Send;
}

/// Entity detail lookup
pub trait DetailApi: Send + Sync {
    /// Fetch genres, cast, logos, ratings and videos for an entity
    fn details(
        &self,
        media_type: MediaType,
        id: u64,
    ) -> impl std::future::Future<Output = Result<EntityDetails, ApiError>> + Send;
}

#[cfg(test)]
mod tests {
    include!("search.test.rs");
}
