//! # Resolve Module
//!
//! Maps free-text, often bilingual and season-qualified titles to TMDB
//! entities.
//!
//! ## Modules
//!
//! - [`normalize`] - Comparable title forms, season intent, noise detection
//! - [`similarity`] - Dice bigram and containment scoring
//! - [`query`] - Scoring and search variant expansion
//! - [`tuning`] - Weights and thresholds
//! - [`resolver`] - Attempt plan, candidate scoring, selection
//! - [`cached`] - Memoized resolution over a [`crate::networking::ResolutionCache`]

pub mod cached;
pub mod normalize;
pub mod query;
pub mod resolver;
pub mod similarity;
pub mod tuning;

pub use cached::{CacheKey, CachedResolver};
pub use normalize::{
    has_season_intent, is_likely_noisy_query_title, normalize_title_for_match,
    strip_season_and_media_words, to_compact_title_for_match,
};
pub use query::{build_query_title_variants, build_search_query_variants};
pub use resolver::{
    Candidate, QueryProfile, ResolutionAttempt, ResolveError, ResolveRequest, ResolvedEntity,
    Resolver, ScoredCandidate, build_attempt_plan, extract_candidates, score_candidate,
};
pub use similarity::{similarity, title_similarity};
pub use tuning::MatchTuning;
