use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::EngineError;

/// The kind of enhancement a revision was requested for.
///
/// Generation happens outside this crate; the tag only decides which score a
/// revision review treats as the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnhancementType {
    Seo,
    Readability,
    #[default]
    General,
}

impl EnhancementType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EnhancementType::Seo => "seo",
            EnhancementType::Readability => "readability",
            EnhancementType::General => "general",
        }
    }
}

impl FromStr for EnhancementType {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "seo" => Ok(EnhancementType::Seo),
            "readability" => Ok(EnhancementType::Readability),
            "general" => Ok(EnhancementType::General),
            other => Err(EngineError::Validation(format!(
                "Invalid enhancement type: {other:?}"
            ))),
        }
    }
}

impl fmt::Display for EnhancementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn default_target_count() -> i64 {
    10
}

/// Wire shape of a keyword request.
///
/// `target_count` is signed so that a negative count arriving from a caller
/// surfaces as a configuration error instead of a deserialization failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordRequest {
    pub text: String,
    #[serde(default = "default_target_count")]
    pub target_count: i64,
}

impl KeywordRequest {
    pub fn new(text: impl Into<String>, target_count: i64) -> Self {
        Self {
            text: text.into(),
            target_count,
        }
    }

    /// The validated count, bounded by `max`.
    pub fn target_count(&self, max: usize) -> Result<usize, EngineError> {
        if self.target_count <= 0 {
            return Err(EngineError::Configuration(format!(
                "target_count must be positive, got {}",
                self.target_count
            )));
        }
        let count = usize::try_from(self.target_count).map_err(|_| {
            EngineError::Configuration(format!("target_count {} out of range", self.target_count))
        })?;
        if count > max {
            return Err(EngineError::Configuration(format!(
                "target_count {count} exceeds maximum {max}"
            )));
        }
        Ok(count)
    }
}
