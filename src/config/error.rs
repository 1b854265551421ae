//! Configuration error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors from reading, parsing or validating `folio.toml`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file `{}`", .0.display())]
    Io(PathBuf, #[source] std::io::Error),

    /// Carries the TOML message, which names the offending key and line.
    #[error("invalid folio.toml: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid setting {0}")]
    Validation(String),
}
