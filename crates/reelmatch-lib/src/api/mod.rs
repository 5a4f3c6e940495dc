//! # API Module
//!
//! TMDB API abstraction layer for title search and entity detail.
//!
//! ## Modules
//!
//! - [`search`] - Search/detail traits, request and response types
//! - [`details`] - Entity detail payloads (genres, cast, logos, ratings, videos)
//! - [`tmdb`] - Live HTTP client and in-memory mock

pub mod details;
pub mod search;
pub mod tmdb;

pub use details::EntityDetails;
pub use search::{ApiError, DetailApi, SearchApi, SearchHit, SearchRequest, SearchResponse};
pub use tmdb::{DEFAULT_TMDB_BASE_URL, MockTmdbClient, TmdbClient, TmdbCredential};
