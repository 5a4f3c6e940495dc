//! Application configuration management
//!
//! Handles config loading, validation, and environment variable processing
//! following the precedence: defaults -> .env -> env vars -> CLI args.

use crate::api::TmdbCredential;
use crate::networking::{CacheConfig, NetworkingConfig};
use crate::primitives::*;
use clap::Parser;
use serde::Deserialize;
use std::time::Duration;

/// Default configuration values
pub mod defaults {
    pub const TMDB_BASE_URL: &str = "https://api.themoviedb.org/3";
    pub const LANGUAGE: &str = "zh-CN";
    pub const NET_TIMEOUT: &str = "10";
    pub const RESOLVE_TIMEOUT: &str = "30";
    pub const CACHE_TTL: &str = "600";
    pub const CACHE_CAPACITY: &str = "256";
    pub const JOBS: &str = "4";
    pub const LOG_LEVEL: &str = "0"; // Error-only logging by default
    pub const LOG_FORMAT: &str = "text";
    pub const LOG_OUTPUT: &str = "stderr";
    pub const COLOR: &str = "auto";
}

/// Default value functions for configuration fields
mod default_fns {
    use super::*;

    pub fn tmdb_base_url() -> String {
        defaults::TMDB_BASE_URL.to_string()
    }

    pub fn language() -> String {
        defaults::LANGUAGE.to_string()
    }

    pub fn net_timeout() -> u64 {
        defaults::NET_TIMEOUT.parse().unwrap()
    }

    pub fn resolve_timeout() -> u64 {
        defaults::RESOLVE_TIMEOUT.parse().unwrap()
    }

    pub fn cache_ttl() -> u64 {
        defaults::CACHE_TTL.parse().unwrap()
    }

    pub fn cache_capacity() -> usize {
        defaults::CACHE_CAPACITY.parse().unwrap()
    }

    pub fn jobs() -> u32 {
        defaults::JOBS.parse().unwrap()
    }

    pub fn log_level() -> u8 {
        defaults::LOG_LEVEL.parse().unwrap()
    }

    pub fn log_format() -> LogFormat {
        defaults::LOG_FORMAT.parse().unwrap()
    }

    pub fn log_output() -> LogOutput {
        defaults::LOG_OUTPUT.parse().unwrap()
    }

    pub fn color() -> ColorIntent {
        defaults::COLOR.parse().unwrap()
    }
}

/// Application configuration structure
#[derive(Debug, Clone, Parser, Deserialize)]
pub struct AppConfig {
    /// TMDB v3 API key or v4 read access token
    #[arg(long, env = "REELMATCH_TMDB_API_KEY", hide_env_values = true)]
    #[serde(default)]
    pub tmdb_api_key: Option<String>,

    /// TMDB API base URL
    #[arg(long, env = "REELMATCH_TMDB_BASE_URL", default_value = defaults::TMDB_BASE_URL)]
    #[serde(default = "default_fns::tmdb_base_url")]
    pub tmdb_base_url: String,

    /// Language for search and detail results
    #[arg(long, env = "REELMATCH_LANGUAGE", default_value = defaults::LANGUAGE)]
    #[serde(default = "default_fns::language")]
    pub language: String,

    /// Per-request timeout in seconds
    #[arg(short, long, env = "REELMATCH_NET_TIMEOUT", default_value = defaults::NET_TIMEOUT)]
    #[serde(default = "default_fns::net_timeout")]
    pub net_timeout: u64,

    /// Overall deadline for one title resolution in seconds
    #[arg(long, env = "REELMATCH_RESOLVE_TIMEOUT", default_value = defaults::RESOLVE_TIMEOUT)]
    #[serde(default = "default_fns::resolve_timeout")]
    pub resolve_timeout: u64,

    /// Resolution cache lifetime in seconds
    #[arg(long, env = "REELMATCH_CACHE_TTL", default_value = defaults::CACHE_TTL)]
    #[serde(default = "default_fns::cache_ttl")]
    pub cache_ttl: u64,

    /// Maximum cached resolutions
    #[arg(long, env = "REELMATCH_CACHE_CAPACITY", default_value = defaults::CACHE_CAPACITY)]
    #[serde(default = "default_fns::cache_capacity")]
    pub cache_capacity: usize,

    /// Concurrent resolutions in batch mode
    #[arg(short, long, env = "REELMATCH_JOBS", default_value = defaults::JOBS)]
    #[serde(default = "default_fns::jobs")]
    pub jobs: u32,

    /// Verbosity level (0=error, 1=warn, 2=info, 3=debug, 4=trace)
    #[arg(long, env = "REELMATCH_LOG_LEVEL", default_value = defaults::LOG_LEVEL)]
    #[serde(default = "default_fns::log_level")]
    pub log_level: u8,

    /// Log format (text, json, pretty)
    #[arg(long, env = "REELMATCH_LOG_FORMAT", default_value = defaults::LOG_FORMAT)]
    #[serde(default = "default_fns::log_format")]
    pub log_format: LogFormat,

    /// Log output stream (stderr, stdout)
    #[arg(long, env = "REELMATCH_LOG_OUTPUT", default_value = defaults::LOG_OUTPUT)]
    #[serde(default = "default_fns::log_output")]
    pub log_output: LogOutput,

    /// Color output control (auto, always, never)
    #[arg(short, long, env = "REELMATCH_COLOR", default_value = defaults::COLOR)]
    #[serde(default = "default_fns::color")]
    pub color: ColorIntent,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            tmdb_api_key: None,
            tmdb_base_url: default_fns::tmdb_base_url(),
            language: default_fns::language(),
            net_timeout: default_fns::net_timeout(),
            resolve_timeout: default_fns::resolve_timeout(),
            cache_ttl: default_fns::cache_ttl(),
            cache_capacity: default_fns::cache_capacity(),
            jobs: default_fns::jobs(),
            log_level: default_fns::log_level(),
            log_format: default_fns::log_format(),
            log_output: default_fns::log_output(),
            color: default_fns::color(),
        }
    }
}

impl AppConfig {
    /// Create LoggerConfig from AppConfig
    pub fn to_logger_config(&self) -> LoggerConfig {
        LoggerConfig {
            level: LogLevel::from_verbosity(self.log_level),
            format: self.log_format,
            output: self.log_output,
            color: self.color.enabled(),
        }
    }

    pub fn to_networking_config(&self) -> NetworkingConfig {
        NetworkingConfig {
            max_jobs: self.jobs,
            timeout: Duration::from_secs(self.net_timeout),
            trace_requests: self.log_level >= 4,
        }
    }

    pub fn to_cache_config(&self) -> CacheConfig {
        CacheConfig {
            ttl: Duration::from_secs(self.cache_ttl),
            capacity: self.cache_capacity,
        }
    }

    pub fn resolve_deadline(&self) -> Duration {
        Duration::from_secs(self.resolve_timeout)
    }

    /// Configured TMDB credential, if any
    pub fn credential(&self) -> Option<TmdbCredential> {
        self.tmdb_api_key
            .as_deref()
            .and_then(TmdbCredential::from_secret)
    }

    /// Merge this config with another, taking non-default values from other
    pub fn merge_with(mut self, other: Self) -> Self {
        // For Option fields, take other if it's Some
        if other.tmdb_api_key.is_some() {
            self.tmdb_api_key = other.tmdb_api_key;
        }

        // For primitive fields, take other if it's not the default
        if other.tmdb_base_url != default_fns::tmdb_base_url() {
            self.tmdb_base_url = other.tmdb_base_url;
        }
        if other.language != default_fns::language() {
            self.language = other.language;
        }
        if other.net_timeout != default_fns::net_timeout() {
            self.net_timeout = other.net_timeout;
        }
        if other.resolve_timeout != default_fns::resolve_timeout() {
            self.resolve_timeout = other.resolve_timeout;
        }
        if other.cache_ttl != default_fns::cache_ttl() {
            self.cache_ttl = other.cache_ttl;
        }
        if other.cache_capacity != default_fns::cache_capacity() {
            self.cache_capacity = other.cache_capacity;
        }
        if other.jobs != default_fns::jobs() {
            self.jobs = other.jobs;
        }
        if other.log_level != default_fns::log_level() {
            self.log_level = other.log_level;
        }

        // For enums, detect if it's non-default
        if !matches!(other.log_format, LogFormat::Text) {
            self.log_format = other.log_format;
        }
        if !matches!(other.log_output, LogOutput::Stderr) {
            self.log_output = other.log_output;
        }
        if !matches!(other.color, ColorIntent::Auto) {
            self.color = other.color;
        }

        self
    }

    /// Validate the final configuration
    pub fn validate(&mut self) -> Result<(), ConfigError> {
        let zero_field = [
            ("net-timeout", self.net_timeout == 0),
            ("resolve-timeout", self.resolve_timeout == 0),
            ("cache-ttl", self.cache_ttl == 0),
            ("cache-capacity", self.cache_capacity == 0),
            ("jobs", self.jobs == 0),
        ]
        .into_iter()
        .find(|(_, is_zero)| *is_zero);

        if let Some((field, _)) = zero_field {
            return Err(ConfigError::ValidationFailed {
                reason: format!("{} must be greater than zero", field),
            });
        }

        self.tmdb_base_url = self.tmdb_base_url.trim().trim_end_matches('/').to_string();
        if !(self.tmdb_base_url.starts_with("http://") || self.tmdb_base_url.starts_with("https://"))
        {
            return Err(ConfigError::ValidationFailed {
                reason: format!("tmdb-base-url must be an http(s) URL: {}", self.tmdb_base_url),
            });
        }

        if self.language.trim().is_empty() {
            self.language = default_fns::language();
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    include!("config.test.rs");
}
