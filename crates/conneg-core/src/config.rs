//! Negotiation configuration with environment variable support
//!
//! Every field has a default matching the stock negotiation behavior, so an
//! empty environment yields [`NegotiationConfig::default`].
//!
//! # Example
//!
//! ```ignore
//! use conneg_core::{load_dotenv, NegotiationConfig};
//!
//! // Load .env file at startup
//! load_dotenv();
//!
//! // Reads CONNEG_TRIM_LANGUAGE_TAGS and CONNEG_WARN_ON_MALFORMED_QUALITY
//! let config = NegotiationConfig::from_env()?;
//! ```

use crate::error::{ConfigError, Result};
use serde::Deserialize;
use std::path::Path;

/// Prefix of the environment variables read by [`NegotiationConfig::from_env`]
pub const ENV_PREFIX: &str = "CONNEG_";

/// Tunable negotiation behavior
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct NegotiationConfig {
    /// Trim whitespace around each `Accept-Language` range before parsing.
    ///
    /// Off by default: ranges after the first keep the space that follows
    /// the comma, and downstream locale matching sees the tag as sent.
    pub trim_language_tags: bool,
    /// Report malformed `Accept-Language` qualities to the warning sink
    pub warn_on_malformed_quality: bool,
}

impl Default for NegotiationConfig {
    fn default() -> Self {
        Self {
            trim_language_tags: false,
            warn_on_malformed_quality: true,
        }
    }
}

impl NegotiationConfig {
    /// Load configuration from `CONNEG_*` environment variables.
    ///
    /// Field names map to SCREAMING_SNAKE_CASE after the prefix, e.g.
    /// `trim_language_tags` reads `CONNEG_TRIM_LANGUAGE_TAGS`.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set to a value that does not parse.
    pub fn from_env() -> Result<Self> {
        envy::prefixed(ENV_PREFIX)
            .from_env::<Self>()
            .map_err(ConfigError::from)
    }

    /// Builder: trim `Accept-Language` ranges
    pub fn trim_language_tags(mut self, trim: bool) -> Self {
        self.trim_language_tags = trim;
        self
    }

    /// Builder: report malformed qualities
    pub fn warn_on_malformed_quality(mut self, warn: bool) -> Self {
        self.warn_on_malformed_quality = warn;
        self
    }
}

/// Load environment variables from a `.env` file in the current directory.
///
/// A missing file is not an error.
pub fn load_dotenv() {
    if let Err(err) = dotenvy::dotenv() {
        tracing::debug!(error = %err, "no .env file loaded");
    }
}

/// Load environment variables from the `.env` file at `path`.
///
/// A missing file is not an error.
pub fn load_dotenv_from(path: impl AsRef<Path>) {
    let path = path.as_ref();
    if let Err(err) = dotenvy::from_path(path) {
        tracing::debug!(path = %path.display(), error = %err, "no .env file loaded");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;

    fn clear_env() {
        std::env::remove_var("CONNEG_TRIM_LANGUAGE_TAGS");
        std::env::remove_var("CONNEG_WARN_ON_MALFORMED_QUALITY");
    }

    #[test]
    fn test_default_config() {
        let config = NegotiationConfig::default();
        assert!(!config.trim_language_tags);
        assert!(config.warn_on_malformed_quality);
    }

    #[test]
    fn test_builders() {
        let config = NegotiationConfig::default()
            .trim_language_tags(true)
            .warn_on_malformed_quality(false);
        assert!(config.trim_language_tags);
        assert!(!config.warn_on_malformed_quality);
    }

    #[test]
    #[serial]
    fn test_from_env_empty_uses_defaults() {
        clear_env();
        let config = NegotiationConfig::from_env().unwrap();
        assert_eq!(config, NegotiationConfig::default());
    }

    #[test]
    #[serial]
    fn test_from_env_reads_prefixed_vars() {
        clear_env();
        std::env::set_var("CONNEG_TRIM_LANGUAGE_TAGS", "true");
        std::env::set_var("CONNEG_WARN_ON_MALFORMED_QUALITY", "false");

        let config = NegotiationConfig::from_env().unwrap();
        assert!(config.trim_language_tags);
        assert!(!config.warn_on_malformed_quality);

        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_invalid_value() {
        clear_env();
        std::env::set_var("CONNEG_TRIM_LANGUAGE_TAGS", "maybe");

        let result = NegotiationConfig::from_env();
        assert!(matches!(result, Err(ConfigError::Env(_))));

        clear_env();
    }

    #[test]
    #[serial]
    fn test_load_dotenv_from_file() {
        clear_env();
        let path = std::env::temp_dir().join(format!("conneg-test-{}.env", std::process::id()));
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "CONNEG_TRIM_LANGUAGE_TAGS=true").unwrap();
        drop(file);

        load_dotenv_from(&path);
        let config = NegotiationConfig::from_env().unwrap();
        assert!(config.trim_language_tags);

        std::fs::remove_file(&path).unwrap();
        clear_env();
    }

    #[test]
    fn test_load_dotenv_missing_file_is_ignored() {
        load_dotenv_from("/nonexistent/conneg/.env");
    }
}
