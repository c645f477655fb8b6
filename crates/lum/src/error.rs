//! CLI error types.

use lum_config::ConfigError;
use lum_nav::{ResolveError, ScanError};

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Resolve(#[from] ResolveError),

    #[error("{0}")]
    Scan(#[from] ScanError),

    #[error("Failed to serialize navigation: {0}")]
    Json(#[from] serde_json::Error),
}
