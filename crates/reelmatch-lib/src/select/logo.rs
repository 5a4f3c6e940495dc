//! Title logo selection

use crate::api::details::LogoImage;
use crate::select::PrioritySelector;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Which named language ranks first
///
/// Language-neutral logos rank between the two named languages; any other
/// language ranks last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum LanguagePreference {
    #[default]
    ZhFirst,
    EnFirst,
}

impl LanguagePreference {
    /// Higher is better
    pub fn rank(&self, language: Option<&str>) -> u8 {
        let language = language
            .map(str::trim)
            .filter(|language| !language.is_empty())
            .map(str::to_ascii_lowercase);

        let (first, second) = match self {
            LanguagePreference::ZhFirst => ("zh", "en"),
            LanguagePreference::EnFirst => ("en", "zh"),
        };

        match language.as_deref() {
            Some(language) if language == first => 3,
            None => 2,
            Some(language) if language == second => 1,
            Some(_) => 0,
        }
    }
}

/// The chosen logo
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectedLogo {
    pub file_path: String,
    /// `None` when no usable ratio is known; render the text title instead
    pub aspect_ratio: Option<f64>,
}

/// Reported ratio when positive, else width/height when both are positive
pub fn logo_aspect_ratio(reported: Option<f64>, width: u32, height: u32) -> Option<f64> {
    reported
        .filter(|ratio| ratio.is_finite() && *ratio > 0.0)
        .or_else(|| (width > 0 && height > 0).then(|| f64::from(width) / f64::from(height)))
}

/// Best logo by language preference, then vote average, then width
pub fn select_logo(logos: &[LogoImage], preference: LanguagePreference) -> Option<SelectedLogo> {
    let selector = PrioritySelector::new()
        .then_by_key_desc(move |logo: &LogoImage| preference.rank(logo.iso_639_1.as_deref()))
        .then_by_float_desc(|logo: &LogoImage| logo.vote_average)
        .then_by_key_desc(|logo: &LogoImage| logo.width);

    selector
        .select_from(logos.iter().filter(|logo| !logo.file_path.trim().is_empty()))
        .map(|logo| SelectedLogo {
            file_path: logo.file_path.clone(),
            aspect_ratio: logo_aspect_ratio(logo.aspect_ratio, logo.width, logo.height),
        })
}

#[cfg(test)]
mod tests {
    include!("logo.test.rs");
}
