//! Tunable weights and thresholds for title matching
//!
//! Every number the matcher depends on lives here so callers can override it
//! without touching the scoring code. The defaults are empirically tuned
//! against TMDB search results and should be treated as calibration data,
//! not derived constants.

use serde::{Deserialize, Serialize};

/// One step of the containment score mapping: coverage at or above
/// `min_coverage` scores `score`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContainmentStep {
    pub min_coverage: f64,
    pub score: f64,
}

/// Matching configuration shared by every resolution call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchTuning {
    /// Coverage steps, highest first
    pub containment_steps: [ContainmentStep; 4],
    /// Multiplier applied to coverage below the lowest step
    pub containment_floor_factor: f64,
    /// Candidate year equals the query year
    pub year_exact_bonus: f64,
    /// Candidate year is one year off
    pub year_adjacent_bonus: f64,
    /// Candidate year is two or more years off (negative)
    pub year_distant_penalty: f64,
    /// Applied to bonus/special entries when the query names a season (negative)
    pub special_feature_penalty: f64,
    /// Applied to multi-search hits whose kind matches the primary media type
    pub media_type_boost: f64,
    /// Acceptance threshold for queries that look like release names
    pub noisy_threshold: f64,
    /// Acceptance threshold for ordinary queries
    pub default_threshold: f64,
    /// Results considered per search response
    pub max_results_per_search: usize,
}

impl Default for MatchTuning {
    fn default() -> Self {
        Self {
            containment_steps: [
                ContainmentStep {
                    min_coverage: 0.92,
                    score: 0.98,
                },
                ContainmentStep {
                    min_coverage: 0.75,
                    score: 0.90,
                },
                ContainmentStep {
                    min_coverage: 0.60,
                    score: 0.80,
                },
                ContainmentStep {
                    min_coverage: 0.45,
                    score: 0.68,
                },
            ],
            containment_floor_factor: 0.4,
            year_exact_bonus: 0.08,
            year_adjacent_bonus: 0.03,
            year_distant_penalty: -0.08,
            special_feature_penalty: -0.26,
            media_type_boost: 0.02,
            noisy_threshold: 0.58,
            default_threshold: 0.34,
            max_results_per_search: 8,
        }
    }
}

impl MatchTuning {
    /// Map a containment coverage ratio onto the step function
    pub fn containment_for_coverage(&self, coverage: f64) -> f64 {
        self.containment_steps
            .iter()
            .find(|step| coverage >= step.min_coverage)
            .map(|step| step.score)
            .unwrap_or(coverage * self.containment_floor_factor)
    }

    /// Year proximity adjustment; zero when either year is unknown
    pub fn year_adjustment(&self, query_year: Option<i32>, candidate_year: Option<i32>) -> f64 {
        match (query_year, candidate_year) {
            (Some(query), Some(candidate)) => match (query - candidate).abs() {
                0 => self.year_exact_bonus,
                1 => self.year_adjacent_bonus,
                _ => self.year_distant_penalty,
            },
            _ => 0.0,
        }
    }

    /// Acceptance threshold for a query
    pub fn threshold(&self, noisy: bool) -> f64 {
        if noisy {
            self.noisy_threshold
        } else {
            self.default_threshold
        }
    }
}

#[cfg(test)]
mod tests {
    include!("tuning.test.rs");
}
