//! Standard color and CI environment variables
//!
//! These are not `REELMATCH_*` settings; they follow the conventions other
//! terminal tools honour and only ever adjust the color intent.

use crate::primitives::{ColorIntent, ConfigError};
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EnvironmentConfig {
    /// NO_COLOR (any non-empty value disables color)
    pub no_color: Option<String>,
    /// FORCE_COLOR (0/false disables, 1/2/3/true enables)
    pub force_color: Option<String>,
    /// CLICOLOR (0 disables color)
    pub clicolor: Option<String>,
    /// CI (any value means a non-interactive run)
    pub ci: Option<String>,
}

impl EnvironmentConfig {
    /// Read from the process environment
    pub fn load() -> Result<Self, ConfigError> {
        Ok(envy::from_env()?)
    }

    /// Read from explicit key/value pairs
    pub fn from_pairs<I>(pairs: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Ok(envy::from_iter(pairs)?)
    }

    /// Resolve the color intent against these variables
    ///
    /// Precedence, lowest first: CLICOLOR, NO_COLOR, FORCE_COLOR. CI forces
    /// `Never` regardless of the others.
    pub fn apply_color_config(&self, mut color: ColorIntent) -> ColorIntent {
        if self.ci.is_some() {
            return ColorIntent::Never;
        }

        if self.clicolor.as_deref() == Some("0") {
            color = ColorIntent::Never;
        }

        if let Some(no_color) = &self.no_color
            && !no_color.is_empty()
        {
            color = ColorIntent::Never;
        }

        match self.force_color.as_deref() {
            Some("0" | "false") => color = ColorIntent::Never,
            Some("1" | "2" | "3" | "true") => color = ColorIntent::Always,
            _ => {}
        }

        color
    }
}

#[cfg(test)]
mod tests {
    include!("env.test.rs");
}
