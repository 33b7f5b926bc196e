//! Routing domain errors

use thiserror::Error;

/// Errors raised while loading routing rules
///
/// Routing itself never fails; only reading rule definitions can.
#[derive(Debug, Error)]
pub enum RuleError {
    /// Failed to parse rules JSON
    #[error("Failed to parse rules: {0}")]
    Parse(String),

    /// Rules file not found or unreadable
    #[error("Rules file not found: {0}")]
    FileNotFound(String),

    /// Rule definitions are structurally wrong
    #[error("Invalid rule format: {0}")]
    InvalidFormat(String),
}

impl RuleError {
    pub fn invalid_format(msg: impl Into<String>) -> Self {
        Self::InvalidFormat(msg.into())
    }
}
