//! N-gram keyword extraction.
//!
//! Unigrams exclude stopwords. Phrases (2..=max_ngram words) keep them, so
//! glue such as "of the" or "quality of" is a candidate like any other.
//! Candidates are scored by frequency over document length, times a bonus for
//! every extra word, and ranked by (score desc, term asc).

use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::config::ExtractionConfig;
use crate::document::Document;
use super::stopwords::is_stopword;

/// A scored candidate before categorization.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedTerm {
    pub term: String,
    pub word_count: usize,
    pub frequency: usize,
    pub weight: f64,
    pub relevance: f64,
    pub difficulty: f64,
    /// Global word index where each occurrence starts.
    pub positions: Vec<usize>,
    /// Included only to reach the requested count.
    pub best_effort: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Extraction {
    /// Quality candidates in rank order, followed by best-effort fills.
    pub terms: Vec<RankedTerm>,
    pub best_effort_fills: usize,
    pub total_words: usize,
}

pub fn extract(doc: &Document, target_count: usize, config: &ExtractionConfig) -> Extraction {
    let total_words = doc.word_count();
    if total_words == 0 || target_count == 0 {
        return Extraction {
            total_words,
            ..Extraction::default()
        };
    }

    let occurrences = collect_ngrams(doc, config.max_ngram);
    let ranked = rank(occurrences, total_words, config);

    // Quality terms first, then pad from the rest in rank order.
    let (quality, below_floor): (Vec<RankedTerm>, Vec<RankedTerm>) = ranked
        .into_iter()
        .partition(|t| t.frequency >= config.min_frequency);

    let mut terms: Vec<RankedTerm> = quality.into_iter().take(target_count).collect();
    let missing = target_count - terms.len();
    let fills: Vec<RankedTerm> = below_floor
        .into_iter()
        .take(missing)
        .map(|mut t| {
            t.best_effort = true;
            t
        })
        .collect();
    let best_effort_fills = fills.len();
    terms.extend(fills);

    Extraction {
        terms,
        best_effort_fills,
        total_words,
    }
}

/// term -> (word count, occurrence positions). BTreeMap keeps iteration stable.
fn collect_ngrams(doc: &Document, max_ngram: usize) -> BTreeMap<String, (usize, Vec<usize>)> {
    let mut occurrences: BTreeMap<String, (usize, Vec<usize>)> = BTreeMap::new();

    for sentence in doc.sentences() {
        let lower: Vec<String> = sentence.words.iter().map(|w| w.to_lowercase()).collect();
        for n in 1..=max_ngram {
            for (i, window) in lower.windows(n).enumerate() {
                if !is_candidate(window) {
                    continue;
                }
                occurrences
                    .entry(window.join(" "))
                    .or_insert_with(|| (n, Vec::new()))
                    .1
                    .push(sentence.word_start + i);
            }
        }
    }

    occurrences
}

fn is_candidate(window: &[String]) -> bool {
    match window {
        [] => false,
        [word] => !is_stopword(word) && word.chars().count() > 1 && !is_numeric(word),
        phrase => !phrase.iter().all(|w| is_numeric(w)),
    }
}

fn is_numeric(word: &str) -> bool {
    word.chars().all(|c| !c.is_alphabetic())
}

fn rank(
    occurrences: BTreeMap<String, (usize, Vec<usize>)>,
    total_words: usize,
    config: &ExtractionConfig,
) -> Vec<RankedTerm> {
    let max_frequency = occurrences
        .values()
        .map(|(_, positions)| positions.len())
        .max()
        .unwrap_or(1);

    let mut ranked: Vec<RankedTerm> = occurrences
        .into_iter()
        .map(|(term, (word_count, positions))| {
            let frequency = positions.len();
            let extra_words = (word_count - 1) as f64;
            let weight = frequency as f64 / total_words as f64
                * (1.0 + config.phrase_length_bonus * extra_words);

            // Rare and long terms are harder to rank for.
            let commonality = frequency as f64 / max_frequency as f64;
            let difficulty = (0.7 * (1.0 - commonality) + 0.3 * (extra_words / 3.0)).clamp(0.0, 1.0);

            RankedTerm {
                term,
                word_count,
                frequency,
                weight,
                relevance: 0.0,
                difficulty,
                positions,
                best_effort: false,
            }
        })
        .collect();

    ranked.sort_by(|a, b| {
        b.weight
            .partial_cmp(&a.weight)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.term.cmp(&b.term))
    });

    if let Some(top) = ranked.first().map(|t| t.weight) {
        for term in &mut ranked {
            term.relevance = if top > 0.0 { term.weight / top } else { 0.0 };
        }
    }

    debug_assert!(ranked.windows(2).all(|w| {
        w[0].weight > w[1].weight || (w[0].weight == w[1].weight && w[0].term < w[1].term)
    }));

    ranked
}
