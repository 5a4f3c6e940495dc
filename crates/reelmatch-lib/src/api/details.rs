//! Entity detail payloads
//!
//! Shapes of the `/movie/{id}` and `/tv/{id}` responses when fetched with
//! `append_to_response=credits,images,videos,release_dates,content_ratings`.
//! Every appended block defaults to empty so partial payloads still parse.

use serde::{Deserialize, Serialize};

/// Movie or TV show detail
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EntityDetails {
    pub id: u64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub original_title: Option<String>,
    #[serde(default)]
    pub original_name: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub first_air_date: Option<String>,
    #[serde(default)]
    pub vote_average: Option<f64>,
    #[serde(default)]
    pub genres: Vec<Genre>,
    #[serde(default)]
    pub credits: Credits,
    #[serde(default)]
    pub images: Images,
    #[serde(default)]
    pub videos: Videos,
    /// Movie certifications per country
    #[serde(default)]
    pub release_dates: ReleaseDates,
    /// TV ratings per country
    #[serde(default)]
    pub content_ratings: ContentRatings,
}

impl EntityDetails {
    /// Localized title, falling back to the original
    pub fn display_title(&self) -> Option<&str> {
        [
            &self.title,
            &self.name,
            &self.original_title,
            &self.original_name,
        ]
        .into_iter()
        .flatten()
        .map(|title| title.trim())
        .find(|title| !title.is_empty())
    }

    pub fn genre_names(&self) -> Vec<&str> {
        self.genres.iter().map(|genre| genre.name.as_str()).collect()
    }

    /// Billed cast in credit order, at most `limit` names
    pub fn top_cast(&self, limit: usize) -> Vec<&str> {
        let mut cast: Vec<&CastMember> = self.credits.cast.iter().collect();
        cast.sort_by_key(|member| member.order.unwrap_or(u32::MAX));
        cast.into_iter()
            .map(|member| member.name.as_str())
            .filter(|name| !name.trim().is_empty())
            .take(limit)
            .collect()
    }

    /// Country code to certification, in payload order
    ///
    /// Movies take the first non-empty certification of each country's
    /// release list; TV shows use the content rating directly.
    pub fn certifications(&self) -> Vec<(String, String)> {
        let movie = self.release_dates.results.iter().filter_map(|country| {
            country
                .release_dates
                .iter()
                .map(|entry| entry.certification.trim())
                .find(|cert| !cert.is_empty())
                .map(|cert| (country.iso_3166_1.clone(), cert.to_string()))
        });

        let tv = self.content_ratings.results.iter().filter_map(|entry| {
            let rating = entry.rating.trim();
            (!rating.is_empty()).then(|| (entry.iso_3166_1.clone(), rating.to_string()))
        });

        movie.chain(tv).collect()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Genre {
    pub id: u64,
    pub name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Credits {
    #[serde(default)]
    pub cast: Vec<CastMember>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CastMember {
    pub name: String,
    #[serde(default)]
    pub character: Option<String>,
    #[serde(default)]
    pub order: Option<u32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Images {
    #[serde(default)]
    pub logos: Vec<LogoImage>,
}

/// One logo image record
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LogoImage {
    pub file_path: String,
    /// `None` marks a language-neutral logo
    #[serde(default)]
    pub iso_639_1: Option<String>,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub width: u32,
    #[serde(default)]
    pub height: u32,
    #[serde(default)]
    pub aspect_ratio: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Videos {
    #[serde(default)]
    pub results: Vec<Video>,
}

/// One video record
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Video {
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub site: String,
    #[serde(default, rename = "type")]
    pub video_type: String,
    #[serde(default)]
    pub official: bool,
    #[serde(default)]
    pub iso_639_1: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReleaseDates {
    #[serde(default)]
    pub results: Vec<ReleaseDateCountry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReleaseDateCountry {
    pub iso_3166_1: String,
    #[serde(default)]
    pub release_dates: Vec<ReleaseDateEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReleaseDateEntry {
    #[serde(default)]
    pub certification: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContentRatings {
    #[serde(default)]
    pub results: Vec<ContentRating>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentRating {
    pub iso_3166_1: String,
    #[serde(default)]
    pub rating: String,
}

#[cfg(test)]
mod tests {
    include!("details.test.rs");
}
