//! String similarity for title matching
//!
//! Two complementary metrics over compact (whitespace-free) normalized
//! titles, combined by taking the maximum:
//!
//! - **Dice bigram coefficient** - overlap of 2-character windows
//! - **Containment score** - rewards one title being a near-total substring
//!   of the other, which Dice undervalues when lengths differ
//!
//! # Examples
//!
//! ```
//! use reelmatch_lib::resolve::similarity::similarity;
//!
//! assert_eq!(similarity("流浪地球", "流浪地球"), 1.0);
//! assert!(similarity("流浪地球", "流浪地球2") > 0.34);
//! assert_eq!(similarity("", "流浪地球"), 0.0);
//! ```

use crate::resolve::normalize::to_compact_title_for_match;
use crate::resolve::tuning::MatchTuning;
use std::collections::HashMap;
use std::sync::LazyLock;

static DEFAULT_TUNING: LazyLock<MatchTuning> = LazyLock::new(MatchTuning::default);

/// Similarity of two compact titles in `[0, 1]` using the default tuning
pub fn similarity(a: &str, b: &str) -> f64 {
    similarity_with(a, b, &DEFAULT_TUNING)
}

/// Similarity of two compact titles in `[0, 1]`
///
/// Symmetric; identical non-empty inputs score exactly `1.0` and an empty
/// input always scores `0.0`.
pub fn similarity_with(a: &str, b: &str, tuning: &MatchTuning) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    if a == b {
        return 1.0;
    }
    dice_coefficient(a, b).max(containment_score(a, b, tuning))
}

/// Similarity of two raw titles after normalizing and compacting both
pub fn title_similarity(a: &str, b: &str) -> f64 {
    similarity(
        &to_compact_title_for_match(a),
        &to_compact_title_for_match(b),
    )
}

/// Dice coefficient over multisets of overlapping character bigrams
///
/// A single-character string contributes itself as its only gram so that
/// one-character titles remain comparable.
pub fn dice_coefficient(a: &str, b: &str) -> f64 {
    let grams_a = bigram_counts(a);
    let grams_b = bigram_counts(b);

    let total: usize = grams_a.values().sum::<usize>() + grams_b.values().sum::<usize>();
    if total == 0 {
        return 0.0;
    }

    let shared: usize = grams_a
        .iter()
        .filter_map(|(gram, count_a)| grams_b.get(gram).map(|count_b| (*count_a).min(*count_b)))
        .sum();

    (2 * shared) as f64 / total as f64
}

/// Containment of the shorter title in the longer, mapped through the
/// coverage steps of `tuning`; zero when neither contains the other
pub fn containment_score(a: &str, b: &str, tuning: &MatchTuning) -> f64 {
    let len_a = a.chars().count();
    let len_b = b.chars().count();
    let (shorter, shorter_len, longer, longer_len) = if len_a <= len_b {
        (a, len_a, b, len_b)
    } else {
        (b, len_b, a, len_a)
    };

    if shorter_len == 0 || !longer.contains(shorter) {
        return 0.0;
    }

    tuning.containment_for_coverage(shorter_len as f64 / longer_len as f64)
}

fn bigram_counts(text: &str) -> HashMap<&str, usize> {
    let bounds: Vec<usize> = text
        .char_indices()
        .map(|(index, _)| index)
        .chain(std::iter::once(text.len()))
        .collect();

    let mut counts = HashMap::new();
    match bounds.len() {
        0 | 1 => {}
        2 => {
            counts.insert(text, 1);
        }
        _ => {
            for window in bounds.windows(3) {
                *counts.entry(&text[window[0]..window[2]]).or_insert(0) += 1;
            }
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    include!("similarity.test.rs");
}
