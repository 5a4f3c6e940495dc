//! # Select Module
//!
//! Deterministic best-of-N selection by a chain of tie-break comparators,
//! and its three uses over entity detail payloads.
//!
//! ## Modules
//!
//! - [`logo`] - Localized title logo with aspect ratio
//! - [`rating`] - Content rating by country preference
//! - [`trailer`] - YouTube trailer by official flag and language

use std::cmp::Ordering;

pub mod logo;
pub mod rating;
pub mod trailer;

pub use logo::{LanguagePreference, SelectedLogo, select_logo};
pub use rating::{RATING_COUNTRY_PREFERENCE, RatingTable, select_rating};
pub use trailer::{select_trailer, select_trailer_url};

type Comparator<T> = Box<dyn Fn(&T, &T) -> Ordering + Send + Sync>;

/// Picks the best item by an ordered chain of comparators
///
/// Each comparator orders "better" items first (`Ordering::Less` means the
/// left item wins). Later comparators only break ties left by earlier ones;
/// items tied on every comparator keep input order, so the earliest wins.
///
/// ```
/// use reelmatch_lib::select::PrioritySelector;
///
/// let selector = PrioritySelector::new()
///     .then_by_key_desc(|word: &&str| word.len())
///     .then_by_key(|word: &&str| *word);
///
/// assert_eq!(selector.select(&["fig", "apple", "mango"]), Some(&"apple"));
/// assert_eq!(selector.select(&[]), None);
/// ```
pub struct PrioritySelector<T> {
    comparators: Vec<Comparator<T>>,
}

impl<T> PrioritySelector<T> {
    pub fn new() -> Self {
        Self {
            comparators: Vec::new(),
        }
    }

    /// Append a raw comparator
    pub fn then_by<F>(mut self, comparator: F) -> Self
    where
        F: Fn(&T, &T) -> Ordering + Send + Sync + 'static,
    {
        self.comparators.push(Box::new(comparator));
        self
    }

    /// Lower keys win
    pub fn then_by_key<K, F>(self, key: F) -> Self
    where
        K: Ord,
        F: Fn(&T) -> K + Send + Sync + 'static,
    {
        self.then_by(move |a, b| key(a).cmp(&key(b)))
    }

    /// Higher keys win
    pub fn then_by_key_desc<K, F>(self, key: F) -> Self
    where
        K: Ord,
        F: Fn(&T) -> K + Send + Sync + 'static,
    {
        self.then_by(move |a, b| key(b).cmp(&key(a)))
    }

    /// Higher floats win; NaN ranks below every number
    pub fn then_by_float_desc<F>(self, key: F) -> Self
    where
        F: Fn(&T) -> f64 + Send + Sync + 'static,
    {
        self.then_by(move |a, b| {
            let (a, b) = (key(a), key(b));
            match (a.is_nan(), b.is_nan()) {
                (true, true) => Ordering::Equal,
                (true, false) => Ordering::Greater,
                (false, true) => Ordering::Less,
                (false, false) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
            }
        })
    }

    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.comparators
            .iter()
            .map(|comparator| comparator(a, b))
            .find(|ordering| *ordering != Ordering::Equal)
            .unwrap_or(Ordering::Equal)
    }

    /// Best item, or `None` for an empty slice
    pub fn select<'a>(&self, items: &'a [T]) -> Option<&'a T> {
        self.select_from(items.iter())
    }

    /// Best item of an iterator of references
    pub fn select_from<'a, I>(&self, items: I) -> Option<&'a T>
    where
        I: IntoIterator<Item = &'a T>,
    {
        items.into_iter().fold(None, |best, item| match best {
            Some(current) if self.compare(item, current) != Ordering::Less => Some(current),
            _ => Some(item),
        })
    }
}

impl<T> Default for PrioritySelector<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    include!("mod.test.rs");
}
