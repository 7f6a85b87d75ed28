use serde::Serialize;

use crate::types::identifiers::ContentHash;
use super::segmenter::{self, Sentence};

/// Immutable segmented text.
///
/// Built once per analysis call. Nothing derived from it is patched in place;
/// changed text means a new `Document`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Document {
    hash: ContentHash,
    text: String,
    sentences: Vec<Sentence>,
    word_count: usize,
}

impl Document {
    /// Segment raw text. Empty text yields zero sentences and zero words.
    pub fn parse(text: impl Into<String>) -> Self {
        let text = text.into();
        let hash = ContentHash::from_content(text.as_bytes());
        let sentences: Vec<Sentence> = segmenter::sentences(&text).collect();
        let word_count = sentences.iter().map(Sentence::word_count).sum();

        Document {
            hash,
            text,
            sentences,
            word_count,
        }
    }

    pub fn hash(&self) -> &ContentHash {
        &self.hash
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn sentences(&self) -> &[Sentence] {
        &self.sentences
    }

    pub fn sentence_count(&self) -> usize {
        self.sentences.len()
    }

    pub fn word_count(&self) -> usize {
        self.word_count
    }

    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// All words in document order.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.sentences
            .iter()
            .flat_map(|s| s.words.iter().map(String::as_str))
    }
}
