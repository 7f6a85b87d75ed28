use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    /// A structurally invalid call, e.g. an empty keyword.
    #[error("Validation error: {0}")]
    Validation(String),

    /// A malformed option or configuration value.
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Non-fatal conditions resolved through floor values.
///
/// These are reported alongside a well-formed result and never raised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DegenerateInputWarning {
    EmptyDocument,
    NoKeywordCandidates,
}
