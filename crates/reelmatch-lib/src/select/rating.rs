//! Content rating selection

use crate::api::details::EntityDetails;
use crate::select::PrioritySelector;

/// Countries whose rating is shown, most preferred first
pub const RATING_COUNTRY_PREFERENCE: [&str; 5] = ["US", "CN", "GB", "HK", "JP"];

/// One certification per country, in first-seen order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RatingTable {
    entries: Vec<(String, String)>,
}

impl RatingTable {
    /// Build from (country, certification) pairs
    ///
    /// Country codes are upper-cased; blank certifications and repeated
    /// countries are skipped.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut table = Self::default();
        for (country, certification) in pairs {
            table.insert(&country, &certification);
        }
        table
    }

    pub fn from_details(details: &EntityDetails) -> Self {
        Self::from_pairs(details.certifications())
    }

    /// Insert unless the country is already present or the value is blank
    pub fn insert(&mut self, country: &str, certification: &str) {
        let country = country.trim().to_ascii_uppercase();
        let certification = certification.trim();
        if country.is_empty()
            || certification.is_empty()
            || self.entries.iter().any(|(existing, _)| *existing == country)
        {
            return;
        }
        self.entries.push((country, certification.to_string()));
    }

    pub fn get(&self, country: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(existing, _)| existing.eq_ignore_ascii_case(country))
            .map(|(_, certification)| certification.as_str())
    }

    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Rating of the most preferred country, else the first inserted entry
pub fn select_rating(table: &RatingTable) -> Option<(&str, &str)> {
    let selector = PrioritySelector::new().then_by_key(|(country, _): &(String, String)| {
        RATING_COUNTRY_PREFERENCE
            .iter()
            .position(|preferred| *preferred == country.as_str())
            .unwrap_or(RATING_COUNTRY_PREFERENCE.len())
    });

    selector
        .select(table.entries())
        .map(|(country, certification)| (country.as_str(), certification.as_str()))
}

#[cfg(test)]
mod tests {
    include!("rating.test.rs");
}
