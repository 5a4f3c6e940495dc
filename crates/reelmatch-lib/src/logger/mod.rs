use crate::primitives::*;
use std::sync::OnceLock;
use tracing_indicatif::IndicatifLayer;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Global logger instance - ensures single initialization
static GLOBAL_LOGGER: OnceLock<Logger> = OnceLock::new();

/// Crates whose chatter stays at warn regardless of the configured level
const QUIET_CRATES: &[&str] = &["hyper_util", "reqwest", "h2", "tokio", "mio", "want"];

/// Logger implementation using tracing with indicatif progress integration
#[derive(Debug)]
pub struct Logger {
    config: LoggerConfig,
}

impl Logger {
    /// Initialize the global logger
    ///
    /// `RUST_LOG` takes precedence over the configured level when set.
    pub fn init(config: LoggerConfig) -> Result<&'static Self, LoggerError> {
        if GLOBAL_LOGGER.get().is_some() {
            return Err(LoggerError::AlreadyInitialized);
        }

        // Progress bars and log lines share the terminal through this layer
        let indicatif_layer = IndicatifLayer::new();

        let env_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(filter_directives(config.level)));

        let writer = match config.output {
            LogOutput::Stderr => BoxMakeWriter::new(indicatif_layer.get_stderr_writer()),
            LogOutput::Stdout => BoxMakeWriter::new(indicatif_layer.get_stdout_writer()),
        };

        // JSON lines never carry ANSI escapes
        let fmt_layer = match config.format {
            LogFormat::Text => fmt::layer()
                .with_writer(writer)
                .with_ansi(config.color)
                .compact()
                .boxed(),
            LogFormat::Json => fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .json()
                .boxed(),
            LogFormat::Pretty => fmt::layer()
                .with_writer(writer)
                .with_ansi(config.color)
                .pretty()
                .boxed(),
        };

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .with(indicatif_layer)
            .try_init()
            .map_err(|e| LoggerError::InitializationFailed {
                reason: e.to_string(),
            })?;

        GLOBAL_LOGGER
            .set(Logger {
                config: config.clone(),
            })
            .map_err(|_| LoggerError::AlreadyInitialized)?;

        tracing::debug!(
            level = ?config.level,
            format = ?config.format,
            output = ?config.output,
            color = config.color,
            "Logger initialized"
        );

        GLOBAL_LOGGER.get().ok_or(LoggerError::InitializationFailed {
            reason: "global logger missing after initialization".to_string(),
        })
    }

    /// Get reference to the global logger instance
    pub fn global() -> Option<&'static Self> {
        GLOBAL_LOGGER.get()
    }

    /// Check if logger is initialized
    pub fn is_initialized() -> bool {
        GLOBAL_LOGGER.get().is_some()
    }

    /// Configuration the logger was built with
    pub fn config(&self) -> &LoggerConfig {
        &self.config
    }
}

/// Build the default `EnvFilter` directive string for a level
///
/// reelmatch logs at the requested level; HTTP plumbing is held at warn.
pub fn filter_directives(level: LogLevel) -> String {
    let level_str = level.as_directive();
    let mut directives = vec![format!("reelmatch={level_str}"), format!("reelmatch_lib={level_str}")];
    directives.extend(QUIET_CRATES.iter().map(|name| format!("{name}=warn")));
    directives.push(level_str.to_string());
    directives.join(",")
}

#[cfg(test)]
mod tests {
    include!("mod.test.rs");
}
