//! Intake service errors

use std::path::PathBuf;
use thiserror::Error;

use domain_routing::RuleError;

/// Errors raised at the edges of the intake service
///
/// Processing a claim never fails; these cover configuration and reading
/// inputs from disk.
#[derive(Debug, Error)]
pub enum IntakeError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Rules(#[from] RuleError),
}
