pub mod document;
pub mod segmenter;
pub mod syllables;

pub use crate::types::identifiers::ContentHash;
pub use document::Document;
pub use segmenter::{normalized_words, sentences, split_words, Sentence, Sentences};
pub use syllables::{HeuristicSyllableCounter, SyllableCounter};
