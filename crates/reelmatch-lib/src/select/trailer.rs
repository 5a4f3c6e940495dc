//! Trailer selection

use crate::api::details::Video;
use crate::select::PrioritySelector;

const TRAILER_SITE: &str = "YouTube";
const TRAILER_TYPE: &str = "Trailer";
const WATCH_URL_PREFIX: &str = "https://www.youtube.com/watch?v=";

/// zh 3, en 2, unspecified 1, anything else 0
fn language_rank(language: Option<&str>) -> u8 {
    match language
        .map(str::trim)
        .filter(|language| !language.is_empty())
        .map(str::to_ascii_lowercase)
        .as_deref()
    {
        Some("zh") => 3,
        Some("en") => 2,
        None => 1,
        Some(_) => 0,
    }
}

fn is_trailer(video: &Video) -> bool {
    video.site == TRAILER_SITE && video.video_type == TRAILER_TYPE && !video.key.trim().is_empty()
}

/// Best YouTube trailer: official first, then by language
pub fn select_trailer(videos: &[Video]) -> Option<&Video> {
    PrioritySelector::new()
        .then_by_key_desc(|video: &Video| video.official)
        .then_by_key_desc(|video: &Video| language_rank(video.iso_639_1.as_deref()))
        .select_from(videos.iter().filter(|video| is_trailer(video)))
}

/// Watch URL of the best trailer; empty when none qualifies
pub fn select_trailer_url(videos: &[Video]) -> String {
    select_trailer(videos)
        .map(|video| format!("{}{}", WATCH_URL_PREFIX, video.key.trim()))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    include!("trailer.test.rs");
}
