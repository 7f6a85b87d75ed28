use serde::{Deserialize, Serialize};

use crate::types::{ContentHash, EngineError};

/// Cache key over the input text and the options a result was computed with.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CacheKey(ContentHash);

impl CacheKey {
    pub fn new<O: Serialize + ?Sized>(text: &str, options: &O) -> Result<Self, EngineError> {
        let options_json = serde_json::to_vec(options)?;
        Ok(CacheKey(ContentHash::from_parts([
            text.as_bytes(),
            options_json.as_slice(),
        ])))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}
