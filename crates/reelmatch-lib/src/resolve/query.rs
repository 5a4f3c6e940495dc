//! Query expansion for title resolution
//!
//! One raw title expands into two independent variant sets:
//!
//! - **scoring variants** ([`build_query_title_variants`]) - fully
//!   normalized forms that candidates are compared against
//! - **search variants** ([`build_search_query_variants`]) - lightly cleaned
//!   literal strings sent to the search API, which does its own tokenizing
//!
//! Both keep first-seen order and drop blanks and duplicates.

use crate::resolve::normalize::{
    collapse_whitespace, nfkc, normalize_title_for_match, strip_season_and_media_words,
};
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

/// Text inside CJK title brackets, 2 to 80 characters
static BRACKETED_TITLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[《「『]([^《》「」『』]{2,80})[》」』]").expect("valid bracketed title pattern")
});

/// Sentence punctuation that ends the first clause
///
/// ASCII `.` and `-` are excluded; they occur inside ordinary titles
/// (`Mr. Robot`, `Spider-Man`).
static CLAUSE_BREAK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[:;,!?|/：；，。！？｜／、]").expect("valid clause break pattern")
});

/// Ordered, de-duplicated collection of non-blank variants
#[derive(Debug, Default)]
struct VariantSet {
    seen: HashSet<String>,
    ordered: Vec<String>,
}

impl VariantSet {
    fn push(&mut self, variant: String) {
        if variant.trim().is_empty() || self.seen.contains(&variant) {
            return;
        }
        self.seen.insert(variant.clone());
        self.ordered.push(variant);
    }

    fn into_vec(self) -> Vec<String> {
        self.ordered
    }
}

/// Normalized variants of a raw title, used for scoring candidates
///
/// Order: the normalized title, its season/media-stripped form, the text
/// inside the first CJK title bracket, and the first clause before sentence
/// punctuation.
pub fn build_query_title_variants(raw: &str) -> Vec<String> {
    let mut variants = VariantSet::default();

    variants.push(normalize_title_for_match(raw));

    let stripped_raw = strip_season_and_media_words(raw);
    let stripped = normalize_title_for_match(&stripped_raw);
    variants.push(stripped.clone());

    if let Some(inner) = bracketed_title(raw) {
        variants.push(normalize_title_for_match(&inner));
    }

    if let Some(clause) = first_clause(&stripped_raw) {
        let clause = normalize_title_for_match(clause);
        if clause != stripped {
            variants.push(clause);
        }
    }

    variants.into_vec()
}

/// Literal search strings for a raw title
///
/// Order: the whitespace-cleaned raw title, the season/media-stripped form,
/// and the first clause of the stripped form. Case and punctuation are kept.
pub fn build_search_query_variants(raw: &str) -> Vec<String> {
    let mut variants = VariantSet::default();

    variants.push(collapse_whitespace(raw));

    let stripped = strip_season_and_media_words(raw);
    variants.push(stripped.clone());

    if let Some(clause) = first_clause(&stripped) {
        variants.push(clause.to_string());
    }

    variants.into_vec()
}

/// Text inside the first `《》`, `「」` or `『』` pair
pub fn bracketed_title(raw: &str) -> Option<String> {
    BRACKETED_TITLE
        .captures(&nfkc(raw))
        .and_then(|caps| caps.get(1))
        .map(|inner| inner.as_str().trim().to_string())
        .filter(|inner| !inner.is_empty())
}

/// Text before the first sentence punctuation mark, if any precedes it
pub fn first_clause(text: &str) -> Option<&str> {
    let found = CLAUSE_BREAK.find(text)?;
    let clause = text[..found.start()].trim();
    (!clause.is_empty()).then_some(clause)
}

#[cfg(test)]
mod tests {
    include!("query.test.rs");
}
