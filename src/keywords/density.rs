use serde::{Deserialize, Serialize};

use crate::document::{normalized_words, Document};

/// Occurrence ratio of one keyword in a document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordDensity {
    pub keyword: String,
    pub occurrences: usize,
    pub total_words: usize,
    pub ratio: f64,
}

impl KeywordDensity {
    pub fn percent(&self) -> f64 {
        self.ratio * 100.0
    }
}

/// Case-insensitive word-sequence density. Matches do not span sentences.
pub fn keyword_density(doc: &Document, keyword: &str) -> KeywordDensity {
    let needle = normalized_words(keyword);
    let occurrences = find_occurrences(doc, &needle, None).len();
    let total_words = doc.word_count();

    let ratio = if total_words == 0 {
        0.0
    } else {
        occurrences as f64 / total_words as f64
    };

    KeywordDensity {
        keyword: keyword.trim().to_string(),
        occurrences,
        total_words,
        ratio,
    }
}

/// Global word index of every occurrence of `needle` (already normalized),
/// scanning at most `within_sentences` leading sentences.
pub fn find_occurrences(
    doc: &Document,
    needle: &[String],
    within_sentences: Option<usize>,
) -> Vec<usize> {
    if needle.is_empty() {
        return Vec::new();
    }

    let limit = within_sentences.unwrap_or(usize::MAX);
    let mut positions = Vec::new();
    for sentence in doc.sentences().iter().take(limit) {
        let lower: Vec<String> = sentence.words.iter().map(|w| w.to_lowercase()).collect();
        for (i, window) in lower.windows(needle.len()).enumerate() {
            if window == needle {
                positions.push(sentence.word_start + i);
            }
        }
    }
    positions
}

/// Whether `needle` (already normalized) starts within the leading
/// `within_sentences` sentences.
///
/// Unlike [`find_occurrences`] the match runs over the whole word stream, so a
/// keyword that carries its own terminal punctuation ("Yahoo! Answers") is
/// still found after segmentation splits it.
pub fn contains_keyword(doc: &Document, needle: &[String], within_sentences: Option<usize>) -> bool {
    if needle.is_empty() {
        return false;
    }

    let sentences = doc.sentences();
    let scanned = within_sentences.unwrap_or(usize::MAX).min(sentences.len());
    let start_limit = sentences
        .get(scanned)
        .map_or(doc.word_count(), |s| s.word_start);

    let stream: Vec<String> = doc.words().map(str::to_lowercase).collect();
    stream
        .windows(needle.len())
        .take(start_limit)
        .any(|window| window == needle)
}

/// Byte offsets of every case-insensitive substring match of `keyword` in
/// `text`, overlapping matches included. Useful for highlighting.
pub fn keyword_positions(text: &str, keyword: &str) -> Vec<usize> {
    if keyword.is_empty() {
        return Vec::new();
    }

    text.char_indices()
        .filter(|&(i, _)| starts_with_ignore_case(&text[i..], keyword))
        .map(|(i, _)| i)
        .collect()
}

fn starts_with_ignore_case(haystack: &str, needle: &str) -> bool {
    let mut hay = haystack.chars().flat_map(char::to_lowercase);
    needle
        .chars()
        .flat_map(char::to_lowercase)
        .all(|n| hay.next() == Some(n))
}
