use crate::primitives::{ConfigError, MediaType};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::config::AppConfig;

/// reelmatch CLI - resolve free-text titles to TMDB entities
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "reelmatch")]
#[command(about = "Match messy movie and TV titles against TMDB")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Global configuration options
    #[command(flatten)]
    pub config: AppConfig,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Configuration loaded from CLI
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub app_config: AppConfig,
    pub command: Option<Commands>,
}

impl CliConfig {
    /// Load configuration from command line arguments
    pub fn load() -> Result<Self, ConfigError> {
        Ok(Cli::parse().into())
    }
}

impl From<Cli> for CliConfig {
    fn from(cli: Cli) -> Self {
        Self {
            app_config: cli.config,
            command: cli.command,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Subcommand)]
pub enum Commands {
    /// Show how a title is normalized and expanded into queries
    Normalize {
        #[arg(help = "Raw title text")]
        title: String,
    },

    /// Score the similarity of two titles
    Similarity {
        a: String,
        b: String,
    },

    /// Resolve one title to a TMDB entity
    Resolve {
        #[arg(help = "Title to resolve (may be empty when --id is given)")]
        title: String,

        #[arg(short, long, help = "Release or first-air year hint")]
        year: Option<String>,

        #[arg(short, long, value_enum, default_value = "movie", help = "Preferred media type")]
        media_type: MediaType,

        #[arg(long, help = "Known TMDB id; skips searching")]
        id: Option<u64>,

        #[arg(long, help = "Print a JSON object instead of text")]
        json: bool,
    },

    /// Resolve every line of a file (title[|year[|movie|tv]])
    Batch {
        file: PathBuf,

        #[arg(long, help = "Print one JSON object per line")]
        json: bool,
    },

    /// Fetch entity detail and show the picked logo, rating and trailer
    Detail {
        #[arg(value_enum)]
        media_type: MediaType,

        id: u64,

        #[arg(long, help = "Prefer English logos over Chinese ones")]
        prefer_en: bool,
    },
}

impl Commands {
    /// Whether the command talks to TMDB
    pub fn requires_network(&self) -> bool {
        match self {
            Commands::Normalize { .. } | Commands::Similarity { .. } => false,
            Commands::Resolve { .. } | Commands::Batch { .. } | Commands::Detail { .. } => true,
        }
    }
}

#[cfg(test)]
mod tests {
    include!("cli.test.rs");
}
