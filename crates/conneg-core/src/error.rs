//! Error types for conneg-core
//!
//! Negotiation itself never fails: every resolver degrades to a default.
//! Errors only come from the configuration surface.

use thiserror::Error;

/// Result type alias for conneg-core operations
pub type Result<T, E = ConfigError> = std::result::Result<T, E>;

/// Error raised while loading a [`NegotiationConfig`](crate::NegotiationConfig)
#[derive(Error, Debug)]
pub enum ConfigError {
    /// An environment variable could not be deserialized into the config
    #[error("Configuration error: {0}")]
    Env(#[from] envy::Error),
}
