//! Configuration loading
//!
//! Coordinates the configuration sources in precedence order.

use crate::primitives::ConfigError;

use super::{cli::CliConfig, config::AppConfig, env::EnvironmentConfig};

/// Dotenv files consulted, most specific first
pub const ENV_FILES: [&str; 2] = [".env.local", ".env"];

impl AppConfig {
    /// Load config: defaults -> .env -> env vars -> CLI
    pub fn load() -> Result<(Self, CliConfig), ConfigError> {
        // .env values must be in the process environment before clap reads `env = ...`
        Self::load_env_files()?;
        let cli_config = CliConfig::load()?;
        let config = Self::load_with(cli_config.app_config.clone())?;
        Ok((config, cli_config))
    }

    /// Load dotenv files into the process environment, skipping missing ones
    pub fn load_env_files() -> Result<(), ConfigError> {
        for env_file in ENV_FILES {
            if let Err(e) = dotenvy::from_filename(env_file)
                && !e.not_found()
            {
                return Err(ConfigError::EnvFileError {
                    file: env_file.to_string(),
                    source: e,
                });
            }
        }
        Ok(())
    }

    /// Resolve CLI-provided values against the process environment
    pub fn load_with(cli: AppConfig) -> Result<Self, ConfigError> {
        Self::load_with_env(cli, &EnvironmentConfig::load()?)
    }

    /// Resolve CLI-provided values against an explicit environment
    pub fn load_with_env(cli: AppConfig, env_config: &EnvironmentConfig) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Standard color variables adjust the default intent; an explicit flag still wins
        config.color = env_config.apply_color_config(config.color);

        config = config.merge_with(cli);
        config.validate()?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    include!("loader.test.rs");
}
