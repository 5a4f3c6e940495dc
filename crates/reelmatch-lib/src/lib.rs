//! # reelmatch Library
//!
//! Resolves free-text, often bilingual and season-qualified movie and TV
//! titles to TMDB entities, and picks presentation assets (logo, rating,
//! trailer) from entity detail.
//!
//! ## Core Modules
//!
//! - [`primitives`] - Foundation types and errors
//! - [`logger`] - Structured logging with progress integration
//! - [`networking`] - HTTP client, bounded concurrency, resolution cache
//! - [`api`] - TMDB search and detail clients
//! - [`resolve`] - Normalization, similarity scoring and resolution
//! - [`select`] - Priority-ranked selection of logos, ratings and trailers
//! - [`display`] - Styled output and progress bars
//! - [`application`] - CLI interface and configuration management
//!
//! ## Quick Start
//!
//! ```
//! use reelmatch_lib::api::MockTmdbClient;
//! use reelmatch_lib::primitives::MediaType;
//! use reelmatch_lib::resolve::{ResolveRequest, Resolver};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() {
//!     let resolver = Resolver::new(Arc::new(MockTmdbClient::new()));
//!     let request = ResolveRequest::new("怪奇物语 第四季", MediaType::Movie);
//!
//!     // Nothing is configured on the mock, so nothing resolves
//!     assert_eq!(resolver.resolve(&request).await.unwrap(), None);
//! }
//! ```

pub mod api;
pub mod application;
pub mod display;
pub mod logger;
pub mod networking;
pub mod primitives;
pub mod resolve;
pub mod select;

// Re-export commonly used types for convenience
pub use application::{AppConfig, Cli, Commands, execute_command};
pub use logger::Logger;
pub use networking::{NetworkingConfig, NetworkingManager};
pub use primitives::{
    ColorIntent, ConfigError, LogFormat, LogLevel, LogOutput, LoggerError, MediaType,
};
pub use resolve::{CachedResolver, ResolveRequest, ResolvedEntity, Resolver};

use anyhow::Result;
use std::process::ExitCode;

pub async fn main() -> Result<ExitCode> {
    // Configuration first; the logger depends on it
    let (config, cli) = AppConfig::load()?;
    Logger::init(config.to_logger_config())?;

    let outcome = execute_command(config, cli.command).await?;
    Ok(outcome.exit_code())
}
