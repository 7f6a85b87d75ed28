use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Content hash of raw input text.
///
/// Two documents built from the same bytes always carry the same hash, so the
/// hash is a stable key for caller-side result caches.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentHash(String);

impl ContentHash {
    pub fn from_content(content: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(content);

        let hash = hasher.finalize();
        let hex = hex::encode(hash);

        ContentHash(format!("sha256:{hex}"))
    }

    /// Hash of several byte segments, each terminated by a NUL separator so
    /// that `("ab", "c")` and `("a", "bc")` never collide.
    pub fn from_parts<'a>(parts: impl IntoIterator<Item = &'a [u8]>) -> Self {
        let mut hasher = Sha256::new();
        for part in parts {
            hasher.update(part);
            hasher.update([0u8]);
        }

        ContentHash(format!("sha256:{}", hex::encode(hasher.finalize())))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
