//! Title-to-entity resolution
//!
//! Runs a fixed, ordered plan of search attempts against a [`SearchApi`],
//! scores every returned candidate against the query variants and returns the
//! first candidate that clears the noise-adaptive threshold. Calls are issued
//! strictly one after another; an earlier attempt is a stronger signal than a
//! later one, so the first qualifying hit wins.

use crate::api::search::{SearchApi, SearchRequest, SearchResponse, parse_year};
use crate::primitives::{MediaType, SearchEndpoint};
use crate::resolve::normalize::{
    compact, has_season_intent, is_likely_noisy_query_title, nfkc, to_compact_title_for_match,
};
use crate::resolve::query::{build_query_title_variants, build_search_query_variants};
use crate::resolve::similarity::similarity_with;
use crate::resolve::tuning::MatchTuning;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::{Arc, LazyLock};
use std::time::Duration;
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, trace};

/// Bonus material that shadows the main series for season queries
static SPECIAL_FEATURE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(?:behind[\s-]+the[\s-]+scenes|making[\s-]+of|featurettes?|documentary|reunion|specials?)\b|幕后|幕後|花絮|特辑|特輯|纪录片|紀錄片|重聚|特别篇|特別篇|特别节目|特別節目",
    )
    .expect("valid special feature pattern")
});

/// Resolution errors
///
/// Not-found is `Ok(None)`, never an error.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("Resolution cancelled")]
    Cancelled,

    #[error("Resolution exceeded deadline of {deadline:?}")]
    DeadlineExceeded { deadline: Duration },

    #[error("Invalid resolve request: {reason}")]
    InvalidInput { reason: String },
}

/// What the caller wants resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolveRequest {
    pub title: String,
    pub year: Option<String>,
    pub preferred: MediaType,
    pub id: Option<u64>,
}

impl ResolveRequest {
    pub fn new(title: &str, preferred: MediaType) -> Self {
        Self {
            title: title.to_string(),
            year: None,
            preferred,
            id: None,
        }
    }

    /// Blank years are dropped
    pub fn with_year(mut self, year: Option<&str>) -> Self {
        self.year = year
            .map(str::trim)
            .filter(|year| !year.is_empty())
            .map(str::to_string);
        self
    }

    pub fn with_id(mut self, id: Option<u64>) -> Self {
        self.id = id;
        self
    }

    /// A positive id, if one was supplied
    pub fn known_id(&self) -> Option<u64> {
        self.id.filter(|id| *id > 0)
    }

    /// Reject requests that carry neither a title nor an id
    pub fn validate(&self) -> Result<(), ResolveError> {
        if self.known_id().is_none() && self.title.trim().is_empty() {
            return Err(ResolveError::InvalidInput {
                reason: "a title or a positive id is required".to_string(),
            });
        }
        Ok(())
    }
}

/// A resolved TMDB entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResolvedEntity {
    pub id: u64,
    pub media_type: MediaType,
}

impl fmt::Display for ResolvedEntity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.media_type, self.id)
    }
}

/// One row of the attempt plan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionAttempt {
    pub endpoint: SearchEndpoint,
    pub year: Option<String>,
}

impl ResolutionAttempt {
    fn new(endpoint: SearchEndpoint, year: Option<&str>) -> Self {
        Self {
            endpoint,
            year: year.map(str::to_string),
        }
    }
}

/// Ordered search attempts for one resolution
///
/// Without season intent: primary with year, primary, other with year,
/// other, multi. With season intent the primary is always tv and the
/// unfiltered tv search goes first, since year-filtered tv searches tend to
/// surface specials ahead of the series itself. Year rows are skipped when
/// no year is known.
pub fn build_attempt_plan(
    primary: MediaType,
    year: Option<&str>,
    season_intent: bool,
) -> Vec<ResolutionAttempt> {
    let rows: [(SearchEndpoint, bool); 5] = if season_intent {
        [
            (SearchEndpoint::Tv, false),
            (SearchEndpoint::Tv, true),
            (SearchEndpoint::Movie, false),
            (SearchEndpoint::Movie, true),
            (SearchEndpoint::Multi, false),
        ]
    } else {
        let other = primary.other();
        [
            (primary.into(), true),
            (primary.into(), false),
            (other.into(), true),
            (other.into(), false),
            (SearchEndpoint::Multi, false),
        ]
    };

    rows.into_iter()
        .filter_map(|(endpoint, with_year)| match (with_year, year) {
            (true, Some(year)) => Some(ResolutionAttempt::new(endpoint, Some(year))),
            (true, None) => None,
            (false, _) => Some(ResolutionAttempt::new(endpoint, None)),
        })
        .collect()
}

/// A usable search hit
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub id: u64,
    pub media_type: MediaType,
    pub title_variants: Vec<String>,
    pub year: Option<i32>,
}

/// A candidate with its final score
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredCandidate {
    pub id: u64,
    pub media_type: MediaType,
    pub score: f64,
}

impl ScoredCandidate {
    pub fn entity(&self) -> ResolvedEntity {
        ResolvedEntity {
            id: self.id,
            media_type: self.media_type,
        }
    }
}

/// Turn the first `limit` hits of a response into candidates
///
/// Hits without a positive id are dropped. Multi-search hits take their media
/// type from the hit and are dropped unless it is movie or tv.
pub fn extract_candidates(
    endpoint: SearchEndpoint,
    response: &SearchResponse,
    limit: usize,
) -> Vec<Candidate> {
    response
        .results
        .iter()
        .take(limit)
        .filter_map(|hit| {
            let id = match hit.id {
                Some(id) if id > 0 => id as u64,
                _ => {
                    trace!("Dropping hit without usable id: {:?}", hit.id);
                    return None;
                }
            };

            let media_type = match endpoint.media_type() {
                Some(media_type) => media_type,
                None => match hit.media_type.as_deref().and_then(MediaType::from_reported) {
                    Some(media_type) => media_type,
                    None => {
                        trace!("Dropping multi hit {} of kind {:?}", id, hit.media_type);
                        return None;
                    }
                },
            };

            Some(Candidate {
                id,
                media_type,
                title_variants: hit.title_variants(),
                year: hit.year(),
            })
        })
        .collect()
}

/// Per-call view of a request: intent, noise, year and both variant sets
#[derive(Debug, Clone)]
pub struct QueryProfile {
    pub season_intent: bool,
    pub noisy: bool,
    /// Preferred type, or tv when the query names a season
    pub primary: MediaType,
    pub year: Option<i32>,
    pub compact_variants: Vec<String>,
    pub search_variants: Vec<String>,
}

impl QueryProfile {
    pub fn from_request(request: &ResolveRequest) -> Self {
        let season_intent = has_season_intent(&request.title);

        let mut compact_variants: Vec<String> = Vec::new();
        for variant in build_query_title_variants(&request.title) {
            let variant = compact(&variant);
            if !variant.is_empty() && !compact_variants.contains(&variant) {
                compact_variants.push(variant);
            }
        }

        Self {
            season_intent,
            noisy: is_likely_noisy_query_title(&request.title),
            primary: if season_intent {
                MediaType::Tv
            } else {
                request.preferred
            },
            year: request.year.as_deref().and_then(parse_year),
            compact_variants,
            search_variants: build_search_query_variants(&request.title),
        }
    }

    /// Year sent as the search filter
    pub fn year_filter(&self) -> Option<String> {
        self.year.map(|year| year.to_string())
    }
}

/// Score one candidate; `None` when no title variant overlaps the query
pub fn score_candidate(
    candidate: &Candidate,
    query: &QueryProfile,
    endpoint: SearchEndpoint,
    tuning: &MatchTuning,
) -> Option<ScoredCandidate> {
    let candidate_titles: Vec<String> = candidate
        .title_variants
        .iter()
        .map(|title| to_compact_title_for_match(title))
        .filter(|title| !title.is_empty())
        .collect();

    let title_score = query
        .compact_variants
        .iter()
        .flat_map(|query_title| {
            candidate_titles
                .iter()
                .map(move |title| similarity_with(query_title, title, tuning))
        })
        .fold(0.0_f64, f64::max);

    if title_score <= 0.0 {
        return None;
    }

    let mut score = title_score + tuning.year_adjustment(query.year, candidate.year);

    if query.season_intent
        && candidate
            .title_variants
            .iter()
            .any(|title| SPECIAL_FEATURE.is_match(&nfkc(title)))
    {
        score += tuning.special_feature_penalty;
    }

    if endpoint == SearchEndpoint::Multi && candidate.media_type == query.primary {
        score += tuning.media_type_boost;
    }

    Some(ScoredCandidate {
        id: candidate.id,
        media_type: candidate.media_type,
        score,
    })
}

/// Best candidate of a list; the earliest wins ties
fn best_of(candidates: impl IntoIterator<Item = ScoredCandidate>) -> Option<ScoredCandidate> {
    candidates.into_iter().fold(None, |best, candidate| match best {
        Some(current) if current.score >= candidate.score => Some(current),
        _ => Some(candidate),
    })
}

/// Title resolver over a search API
pub struct Resolver<S> {
    api: Arc<S>,
    tuning: MatchTuning,
    language: String,
}

impl<S: SearchApi> Resolver<S> {
    pub fn new(api: Arc<S>) -> Self {
        Self {
            api,
            tuning: MatchTuning::default(),
            language: crate::api::search::DEFAULT_SEARCH_LANGUAGE.to_string(),
        }
    }

    pub fn with_tuning(mut self, tuning: MatchTuning) -> Self {
        self.tuning = tuning;
        self
    }

    /// Language sent with every search
    pub fn with_language(mut self, language: &str) -> Self {
        self.language = language.to_string();
        self
    }

    pub fn tuning(&self) -> &MatchTuning {
        &self.tuning
    }

    pub fn api(&self) -> &Arc<S> {
        &self.api
    }

    /// Resolve without a caller signal
    pub async fn resolve(
        &self,
        request: &ResolveRequest,
    ) -> Result<Option<ResolvedEntity>, ResolveError> {
        self.resolve_with_cancel(request, &CancellationToken::new())
            .await
    }

    /// Resolve, giving up when `deadline` passes
    pub async fn resolve_with_deadline(
        &self,
        request: &ResolveRequest,
        deadline: Duration,
    ) -> Result<Option<ResolvedEntity>, ResolveError> {
        let cancel = CancellationToken::new();
        match tokio::time::timeout(deadline, self.resolve_with_cancel(request, &cancel)).await {
            Ok(result) => result,
            Err(_) => {
                cancel.cancel();
                debug!("Resolution of {:?} hit its {:?} deadline", request.title, deadline);
                Err(ResolveError::DeadlineExceeded { deadline })
            }
        }
    }

    /// Resolve, abandoning the run as soon as `cancel` fires
    pub async fn resolve_with_cancel(
        &self,
        request: &ResolveRequest,
        cancel: &CancellationToken,
    ) -> Result<Option<ResolvedEntity>, ResolveError> {
        if let Some(id) = request.known_id() {
            trace!("Request carries id {}, skipping search", id);
            return Ok(Some(ResolvedEntity {
                id,
                media_type: request.preferred,
            }));
        }

        if request.title.trim().is_empty() {
            debug!("Blank title without id, nothing to resolve");
            return Ok(None);
        }

        let query = QueryProfile::from_request(request);
        if query.compact_variants.is_empty() || query.search_variants.is_empty() {
            debug!("Title {:?} normalizes to nothing", request.title);
            return Ok(None);
        }

        let threshold = self.tuning.threshold(query.noisy);
        let year_filter = query.year_filter();
        let plan = build_attempt_plan(query.primary, year_filter.as_deref(), query.season_intent);

        debug!(
            "Resolving {:?}: primary={}, season_intent={}, noisy={}, threshold={}, {} attempts x {} queries",
            request.title,
            query.primary,
            query.season_intent,
            query.noisy,
            threshold,
            plan.len(),
            query.search_variants.len()
        );

        let mut overall_best: Option<ScoredCandidate> = None;

        for attempt in &plan {
            for search_query in &query.search_variants {
                if cancel.is_cancelled() {
                    return Err(ResolveError::Cancelled);
                }

                let search = SearchRequest::new(attempt.endpoint, search_query)
                    .with_year(attempt.year.as_deref())
                    .with_language(&self.language);

                let response = tokio::select! {
                    biased;
                    _ = cancel.cancelled() => return Err(ResolveError::Cancelled),
                    response = self.api.search(&search) => response,
                };

                let response = match response {
                    Ok(response) => response,
                    Err(e) => {
                        debug!(
                            "{} search for {:?} (year {:?}) failed, skipping: {}",
                            attempt.endpoint, search_query, attempt.year, e
                        );
                        continue;
                    }
                };

                let candidates = extract_candidates(
                    attempt.endpoint,
                    &response,
                    self.tuning.max_results_per_search,
                );
                let scored = candidates.iter().filter_map(|candidate| {
                    score_candidate(candidate, &query, attempt.endpoint, &self.tuning)
                });

                let Some(best) = best_of(scored) else {
                    continue;
                };

                trace!(
                    "{} search for {:?}: best {} scored {:.3}",
                    attempt.endpoint,
                    search_query,
                    best.entity(),
                    best.score
                );

                if best.score >= threshold {
                    info!(
                        "Resolved {:?} to {} (score {:.3})",
                        request.title,
                        best.entity(),
                        best.score
                    );
                    return Ok(Some(best.entity()));
                }

                if overall_best.is_none_or(|current| best.score > current.score) {
                    overall_best = Some(best);
                }
            }
        }

        match overall_best {
            Some(best) => debug!(
                "No match for {:?}; closest was {} at {:.3} (threshold {})",
                request.title,
                best.entity(),
                best.score,
                threshold
            ),
            None => debug!("No candidates for {:?}", request.title),
        }

        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    include!("resolver.test.rs");
}
