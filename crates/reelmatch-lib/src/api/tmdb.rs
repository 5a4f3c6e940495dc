//! TMDB API client implementation
//!
//! Provides production (Live) and test (Mock) implementations of the search and
//! detail traits. The live client shares the HTTP client owned by
//! [`NetworkingManager`].

use crate::api::details::EntityDetails;
use crate::api::search::{ApiError, DetailApi, SearchApi, SearchRequest, SearchResponse};
use crate::networking::NetworkingManager;
use crate::primitives::{MediaType, SearchEndpoint};
use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::{debug, trace, warn};

/// Public TMDB v3 endpoint
pub const DEFAULT_TMDB_BASE_URL: &str = "https://api.themoviedb.org/3";

/// Blocks appended to every detail request
const DETAIL_APPEND: &str = "credits,images,videos,release_dates,content_ratings";

/// Logo and video languages requested alongside details
const DETAIL_IMAGE_LANGUAGES: &str = "zh,en,null";

/// TMDB credential
///
/// v3 keys travel as the `api_key` query parameter; v4 read-access tokens
/// (JWTs) travel as a bearer header.
#[derive(Clone, PartialEq, Eq)]
pub enum TmdbCredential {
    ApiKey(String),
    BearerToken(String),
}

impl TmdbCredential {
    /// Classify a configured secret; blank secrets yield `None`
    pub fn from_secret(secret: &str) -> Option<Self> {
        let secret = secret.trim();
        if secret.is_empty() {
            None
        } else if secret.starts_with("eyJ") {
            Some(Self::BearerToken(secret.to_string()))
        } else {
            Some(Self::ApiKey(secret.to_string()))
        }
    }
}

impl std::fmt::Debug for TmdbCredential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ApiKey(_) => f.write_str("ApiKey(***)"),
            Self::BearerToken(_) => f.write_str("BearerToken(***)"),
        }
    }
}

fn encode_pairs(pairs: &[(&str, String)]) -> String {
    pairs
        .iter()
        .map(|(key, value)| format!("{}={}", key, utf8_percent_encode(value, NON_ALPHANUMERIC)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Live TMDB API client (production)
pub struct TmdbClient {
    networking: Arc<NetworkingManager>,
    base_url: String,
    credential: Option<TmdbCredential>,
    detail_language: String,
}

impl TmdbClient {
    /// Create client against the public TMDB endpoint
    pub fn new(networking: Arc<NetworkingManager>, credential: Option<TmdbCredential>) -> Self {
        Self::with_base_url(networking, DEFAULT_TMDB_BASE_URL.to_string(), credential)
    }

    /// Create client with custom base URL (for proxies/testing)
    pub fn with_base_url(
        networking: Arc<NetworkingManager>,
        base_url: String,
        credential: Option<TmdbCredential>,
    ) -> Self {
        Self {
            networking,
            base_url: base_url.trim_end_matches('/').to_string(),
            credential,
            detail_language: crate::api::search::DEFAULT_SEARCH_LANGUAGE.to_string(),
        }
    }

    /// Language used for detail lookups
    pub fn with_detail_language(mut self, language: &str) -> Self {
        self.detail_language = language.to_string();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        mut pairs: Vec<(&str, String)>,
    ) -> Result<T, ApiError> {
        let credential = self.credential.as_ref().ok_or(ApiError::MissingCredentials)?;

        // Logged before the key is attached
        trace!("GET {}{}?{}", self.base_url, path, encode_pairs(&pairs));

        let mut request_headers = Vec::new();
        match credential {
            TmdbCredential::ApiKey(key) => pairs.push(("api_key", key.clone())),
            TmdbCredential::BearerToken(token) => {
                request_headers.push(("Authorization", format!("Bearer {}", token)))
            }
        }

        let url = format!("{}{}?{}", self.base_url, path, encode_pairs(&pairs));
        let mut request = self
            .networking
            .client()
            .get(&url)
            .header("Accept", "application/json");
        for (name, value) in request_headers {
            request = request.header(name, value);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!("TMDB returned {} for {}", status, path);
            return Err(ApiError::Status {
                status: status.as_u16(),
                endpoint: path.to_string(),
            });
        }

        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

impl SearchApi for TmdbClient {
    async fn search(&self, request: &SearchRequest) -> Result<SearchResponse, ApiError> {
        let path = format!("/search/{}", request.endpoint);
        let response: SearchResponse = self.get_json(&path, request.query_pairs()).await?;
        debug!(
            "{} search for {:?} returned {} hits",
            request.endpoint,
            request.query,
            response.results.len()
        );
        Ok(response)
    }
}

impl DetailApi for TmdbClient {
    async fn details(&self, media_type: MediaType, id: u64) -> Result<EntityDetails, ApiError> {
        let path = format!("/{}/{}", media_type, id);
        let pairs = vec![
            ("language", self.detail_language.clone()),
            ("append_to_response", DETAIL_APPEND.to_string()),
            ("include_image_language", DETAIL_IMAGE_LANGUAGES.to_string()),
            ("include_video_language", DETAIL_IMAGE_LANGUAGES.to_string()),
        ];

        match self.get_json(&path, pairs).await {
            Err(ApiError::Status { status: 404, .. }) => Err(ApiError::NotFound { media_type, id }),
            other => other,
        }
    }
}

type SearchKey = (SearchEndpoint, String, Option<String>);

/// Mock TMDB client (testing)
///
/// Unconfigured searches answer with an empty result list; unconfigured
/// details answer `NotFound`. Every search request is recorded.
#[derive(Clone, Default)]
pub struct MockTmdbClient {
    search_responses: Arc<Mutex<HashMap<SearchKey, Result<SearchResponse, String>>>>,
    detail_responses: Arc<Mutex<HashMap<(MediaType, u64), Result<EntityDetails, String>>>>,
    calls: Arc<Mutex<Vec<SearchRequest>>>,
    delay: Option<Duration>,
}

impl MockTmdbClient {
    /// Create new mock client
    pub fn new() -> Self {
        Self::default()
    }

    /// Add mock search response for an endpoint, query and year filter
    pub async fn with_search_result(
        self,
        endpoint: SearchEndpoint,
        query: &str,
        year: Option<&str>,
        result: Result<SearchResponse, String>,
    ) -> Self {
        self.search_responses.lock().await.insert(
            (endpoint, query.to_string(), year.map(str::to_string)),
            result,
        );
        self
    }

    /// Add mock detail response
    pub async fn with_detail_result(
        self,
        media_type: MediaType,
        id: u64,
        result: Result<EntityDetails, String>,
    ) -> Self {
        self.detail_responses
            .lock()
            .await
            .insert((media_type, id), result);
        self
    }

    /// Delay every search by `delay`
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Search requests received so far, in call order
    pub async fn calls(&self) -> Vec<SearchRequest> {
        self.calls.lock().await.clone()
    }
}

impl SearchApi for MockTmdbClient {
    async fn search(&self, request: &SearchRequest) -> Result<SearchResponse, ApiError> {
        self.calls.lock().await.push(request.clone());

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        let key = (
            request.endpoint,
            request.query.clone(),
            request.year.clone(),
        );
        match self.search_responses.lock().await.get(&key) {
            Some(Ok(response)) => Ok(response.clone()),
            Some(Err(message)) => Err(ApiError::Mock {
                message: message.clone(),
            }),
            None => Ok(SearchResponse::default()),
        }
    }
}

impl DetailApi for MockTmdbClient {
    async fn details(&self, media_type: MediaType, id: u64) -> Result<EntityDetails, ApiError> {
        match self.detail_responses.lock().await.get(&(media_type, id)) {
            Some(Ok(details)) => Ok(details.clone()),
            Some(Err(message)) => Err(ApiError::Mock {
                message: message.clone(),
            }),
            None => Err(ApiError::NotFound { media_type, id }),
        }
    }
}

#[cfg(test)]
mod tests {
    include!("tmdb.test.rs");
}
