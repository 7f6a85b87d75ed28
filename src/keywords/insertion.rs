//! Contextual keyword insertion.
//!
//! The keyword goes into the shortest sentence of the document's lede, either
//! at the sentence start or right after its first clause boundary, wrapped in
//! a connective template. The sentence's own words are never rewritten and
//! the rest of the text is left byte-for-byte intact.
//!
//! The only clause boundary recognized is the first comma of a sentence that
//! opens with a subordinator ("When it rains, ..."). Conjunctions are not
//! treated as boundaries; every other sentence takes the start template.

use serde::{Deserialize, Serialize};

use crate::config::{InsertionConfig, KEYWORD_PLACEHOLDER};
use crate::document::{normalized_words, segmenter, Document, Sentence};
use crate::types::{EngineError, InsertionResult, InsertionSpan, SkipReason};
use super::density::contains_keyword;

/// Openers after which a start template would read badly; these sentences
/// take the keyword after their first comma instead.
const SUBORDINATORS: &[&str] = &[
    "after", "although", "as", "because", "before", "if", "once", "since", "though", "unless",
    "when", "whenever", "while",
];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsertionOptions {
    /// Insert even when the keyword is already present.
    pub force: bool,
    /// Leading sentences scanned for an existing occurrence. `None` scans all.
    pub tolerance: Option<usize>,
}

pub fn insert_keyword(
    doc: &Document,
    keyword: &str,
    options: &InsertionOptions,
    config: &InsertionConfig,
) -> Result<InsertionResult, EngineError> {
    let keyword = keyword.trim();
    if keyword.is_empty() {
        return Err(EngineError::Validation("Keyword cannot be empty".into()));
    }
    let needle = normalized_words(keyword);
    if needle.is_empty() {
        return Err(EngineError::Validation(format!(
            "Keyword {keyword:?} contains no words"
        )));
    }

    let sentences = doc.sentences();
    if sentences.is_empty() {
        return Ok(InsertionResult::skipped(doc.text(), SkipReason::EmptyDocument));
    }

    if !options.force && contains_keyword(doc, &needle, options.tolerance) {
        return Ok(InsertionResult::skipped(doc.text(), SkipReason::AlreadyPresent));
    }

    let (index, sentence) = pick_sentence(sentences, config.lede_fraction);

    let (rewritten, span) = match clause_boundary(sentence) {
        Some(comma) if !config.clause_templates.is_empty() => {
            let template = &config.clause_templates[index % config.clause_templates.len()];
            after_clause(sentence, comma, template, keyword, needle.len())
        }
        _ => {
            let template = &config.start_templates[index % config.start_templates.len()];
            at_start(sentence, template, keyword, needle.len())
        }
    };

    let text = doc.text();
    let mut modified = String::with_capacity(text.len() + rewritten.len() - sentence.text.len());
    modified.push_str(&text[..sentence.offset]);
    modified.push_str(&rewritten);
    modified.push_str(&text[sentence.end()..]);

    tracing::debug!(
        sentence = index,
        word_start = span.word_start,
        "keyword inserted"
    );

    Ok(InsertionResult::inserted(modified, span))
}

/// Fewest words among the leading `lede_fraction` of sentences; earliest wins ties.
fn pick_sentence(sentences: &[Sentence], lede_fraction: f64) -> (usize, &Sentence) {
    let n = sentences.len();
    // The epsilon keeps 6 * (1/3) at 2.
    let lede = ((n as f64 * lede_fraction - 1e-9).ceil() as usize).clamp(1, n);

    sentences[..lede]
        .iter()
        .enumerate()
        .min_by_key(|(_, s)| s.word_count())
        .unwrap_or((0, &sentences[0]))
}

/// Byte index of the first comma ending a clause, for sentences opening with
/// a subordinate clause.
fn clause_boundary(sentence: &Sentence) -> Option<usize> {
    let opener = sentence.words.first()?.to_lowercase();
    if !SUBORDINATORS.contains(&opener.as_str()) {
        return None;
    }

    let text = &sentence.text;
    text.match_indices(',')
        .map(|(i, _)| i)
        .find(|&i| text[i + 1..].starts_with(char::is_whitespace) && !text[..i].trim().is_empty())
}

fn at_start(
    sentence: &Sentence,
    template: &str,
    keyword: &str,
    keyword_words: usize,
) -> (String, InsertionSpan) {
    let (pre, post) = split_template(template);

    let rewritten = format!("{pre}{keyword}{post}{}", sentence.text);

    let word_start = sentence.word_start + segmenter::words(pre).count();
    let byte_start = sentence.offset + pre.len();
    let span = InsertionSpan {
        byte_start,
        byte_end: byte_start + keyword.len(),
        word_start,
        word_end: word_start + keyword_words,
    };
    (rewritten, span)
}

fn after_clause(
    sentence: &Sentence,
    comma: usize,
    template: &str,
    keyword: &str,
    keyword_words: usize,
) -> (String, InsertionSpan) {
    let (pre, post) = split_template(template);
    let head = &sentence.text[..=comma];
    let tail = &sentence.text[comma + 1..];

    let rewritten = format!("{head}{pre}{keyword}{post}{tail}");

    let word_start =
        sentence.word_start + segmenter::words(head).count() + segmenter::words(pre).count();
    let byte_start = sentence.offset + head.len() + pre.len();
    let span = InsertionSpan {
        byte_start,
        byte_end: byte_start + keyword.len(),
        word_start,
        word_end: word_start + keyword_words,
    };
    (rewritten, span)
}

fn split_template(template: &str) -> (&str, &str) {
    template
        .split_once(KEYWORD_PLACEHOLDER)
        .unwrap_or((template, ""))
}
