//! reelmatch primitives - core types, errors, and coordination
//!
//! Central collection of shared types that the rest of the crate builds on:
//! media kinds and search endpoints for resolution, log settings for the
//! logger, and the configuration error taxonomy.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

// Shared macros and patterns
mod shared;
use shared::impl_fromstr_for_value_enum;

// ============================================================================
// MEDIA DOMAIN TYPES
// ============================================================================

/// Kind of entity a title resolves to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    /// Feature film
    #[value(alias = "film")]
    Movie,
    /// Series (TV, web series, variety)
    #[value(alias = "series", alias = "show")]
    Tv,
}

impl MediaType {
    /// The other media kind
    pub fn other(self) -> Self {
        match self {
            MediaType::Movie => MediaType::Tv,
            MediaType::Tv => MediaType::Movie,
        }
    }

    /// Path segment used by the TMDB API
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaType::Movie => "movie",
            MediaType::Tv => "tv",
        }
    }

    /// Parse a media kind as reported by multi-search hits
    ///
    /// Returns `None` for kinds that are not resolvable entities (e.g. `person`).
    pub fn from_reported(kind: &str) -> Option<Self> {
        match kind.trim().to_ascii_lowercase().as_str() {
            "movie" => Some(MediaType::Movie),
            "tv" => Some(MediaType::Tv),
            _ => None,
        }
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Search endpoint a single resolution attempt is scoped to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchEndpoint {
    Movie,
    Tv,
    Multi,
}

impl SearchEndpoint {
    /// Path segment under `/search/`
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchEndpoint::Movie => "movie",
            SearchEndpoint::Tv => "tv",
            SearchEndpoint::Multi => "multi",
        }
    }

    /// Media kind implied by a single-media endpoint
    pub fn media_type(&self) -> Option<MediaType> {
        match self {
            SearchEndpoint::Movie => Some(MediaType::Movie),
            SearchEndpoint::Tv => Some(MediaType::Tv),
            SearchEndpoint::Multi => None,
        }
    }

    /// Query parameter carrying the year filter, if the endpoint accepts one
    pub fn year_param(&self) -> Option<&'static str> {
        match self {
            SearchEndpoint::Movie => Some("year"),
            SearchEndpoint::Tv => Some("first_air_date_year"),
            SearchEndpoint::Multi => None,
        }
    }
}

impl From<MediaType> for SearchEndpoint {
    fn from(media_type: MediaType) -> Self {
        match media_type {
            MediaType::Movie => SearchEndpoint::Movie,
            MediaType::Tv => SearchEndpoint::Tv,
        }
    }
}

impl fmt::Display for SearchEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// LOGGING AND OUTPUT TYPES
// ============================================================================

/// Available log output streams
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogOutput {
    /// STDERR
    Stderr,
    /// STDOUT
    Stdout,
}

/// Log levels for structured logging
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Error = 0,
    Warning = 1,
    Info = 2,
    Debug = 3,
    Trace = 4,
}

/// Output formats for structured logging
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// TEXT
    /// alias: text, txt, plain
    Text,

    /// JSON
    /// alias: json
    Json,

    /// PRETTY (multi-line, human oriented)
    /// alias: pretty, yaml, yml
    Pretty,
}

/// Color output intent
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ColorIntent {
    /// Let the terminal decide
    #[value(alias = "automatic", alias = "detect", alias = "default")]
    Auto,

    /// Explicitly enable (useful in non-interactive)
    #[value(alias = "force", alias = "on")]
    Always,

    /// Explicitly disable
    #[value(alias = "off")]
    Never,
}

impl ColorIntent {
    /// Resolve the intent against the current stderr terminal
    pub fn enabled(&self) -> bool {
        match self {
            ColorIntent::Auto => console::colors_enabled_stderr(),
            ColorIntent::Always => true,
            ColorIntent::Never => false,
        }
    }
}

/// Logger configuration derived from application config
#[derive(Debug, Clone)]
pub struct LoggerConfig {
    pub level: LogLevel,
    pub format: LogFormat,
    pub output: LogOutput,
    pub color: bool,
}

// ============================================================================
// STRUCTURED ERROR TYPES
// ============================================================================

/// Application configuration loading and validation errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load environment file '{file}': {source}")]
    EnvFileError {
        file: String,
        source: dotenvy::Error,
    },

    #[error("Failed to parse environment variables: {source}")]
    EnvironmentParsingFailed {
        #[from]
        source: envy::Error,
    },

    #[error("Configuration validation failed: {reason}")]
    ValidationFailed { reason: String },

    #[error("Failed to parse configuration value '{value}': {reason}")]
    ParseError { value: String, reason: String },
}

/// Logger initialization and operation errors
#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("Failed to initialize tracing subscriber: {reason}")]
    InitializationFailed { reason: String },

    #[error("Logger already initialized")]
    AlreadyInitialized,
}

impl LogLevel {
    /// Convert verbosity level from AppConfig to LogLevel
    pub fn from_verbosity(verbosity: u8) -> Self {
        match verbosity {
            0 => LogLevel::Error,
            1 => LogLevel::Warning,
            2 => LogLevel::Info,
            3 => LogLevel::Debug,
            4.. => LogLevel::Trace,
        }
    }

    /// Filter directive understood by `EnvFilter`
    pub fn as_directive(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warning => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

impl ValueEnum for LogLevel {
    fn value_variants<'a>() -> &'a [Self] {
        &[
            Self::Error,
            Self::Warning,
            Self::Info,
            Self::Debug,
            Self::Trace,
        ]
    }

    fn to_possible_value(&self) -> Option<clap::builder::PossibleValue> {
        match self {
            Self::Error => Some(
                clap::builder::PossibleValue::new("error")
                    .alias("err")
                    .alias("fatal"),
            ),
            Self::Warning => Some(clap::builder::PossibleValue::new("warn").alias("warning")),
            Self::Info => Some(clap::builder::PossibleValue::new("info")),
            Self::Debug => Some(clap::builder::PossibleValue::new("debug")),
            Self::Trace => Some(
                clap::builder::PossibleValue::new("trace")
                    .alias("verbose"),
            ),
        }
    }
}

impl ValueEnum for LogFormat {
    fn value_variants<'a>() -> &'a [Self] {
        &[Self::Text, Self::Json, Self::Pretty]
    }

    fn to_possible_value(&self) -> Option<clap::builder::PossibleValue> {
        match self {
            Self::Text => Some(
                clap::builder::PossibleValue::new("text")
                    .alias("txt")
                    .alias("plain"),
            ),
            Self::Json => Some(clap::builder::PossibleValue::new("json")),
            Self::Pretty => Some(
                clap::builder::PossibleValue::new("pretty")
                    .alias("yaml")
                    .alias("yml"),
            ),
        }
    }
}

// Generate FromStr implementations for all ValueEnum types
impl_fromstr_for_value_enum!(LogLevel, "invalid log level");
impl_fromstr_for_value_enum!(LogFormat, "invalid log format");
impl_fromstr_for_value_enum!(LogOutput, "invalid log output stream");
impl_fromstr_for_value_enum!(ColorIntent, "invalid color intent");
impl_fromstr_for_value_enum!(MediaType, "invalid media type (expected movie or tv)");

#[cfg(test)]
mod tests {
    include!("mod.test.rs");
}
