//! Tiering of ranked terms.
//!
//! The ranked list is cut proportionally: the top share is Primary, the next
//! share Secondary. Of the rest, long phrases become LongTail and short terms
//! occurring near a Primary occurrence become Semantic. Everything else is
//! left unclassified. Each term lands in at most one tier.

use crate::config::CategoryConfig;
use crate::types::{KeywordCandidate, KeywordCategory, KeywordSet};
use super::extraction::{Extraction, RankedTerm};

pub fn categorize(extraction: &Extraction, config: &CategoryConfig) -> KeywordSet {
    let ranked = &extraction.terms;
    let n = ranked.len();

    let primary_count = share_count(n, config.primary_share);
    let secondary_count = share_count(n, config.secondary_share).min(n - primary_count);

    let (primary, rest) = ranked.split_at(primary_count);
    let (secondary, rest) = rest.split_at(secondary_count);

    let primary_spans: Vec<(usize, usize)> = primary
        .iter()
        .flat_map(|t| t.positions.iter().map(move |&p| (p, p + t.word_count)))
        .collect();

    let mut set = KeywordSet {
        primary: tier(primary, KeywordCategory::Primary),
        secondary: tier(secondary, KeywordCategory::Secondary),
        best_effort_fills: extraction.best_effort_fills,
        ..KeywordSet::default()
    };

    for term in rest {
        if term.word_count >= config.long_tail_min_words {
            set.long_tail.push(candidate(term, KeywordCategory::LongTail));
        } else if near_any(term, &primary_spans, config.semantic_window) {
            set.semantic.push(candidate(term, KeywordCategory::Semantic));
        } else {
            set.unclassified.push(term.term.clone());
        }
    }

    set
}

/// `ceil(n * share)`, bounded by `n`. The epsilon keeps 10 * 0.3 at 3.
fn share_count(n: usize, share: f64) -> usize {
    let raw = (n as f64 * share - 1e-9).ceil().max(0.0) as usize;
    raw.min(n)
}

fn tier(terms: &[RankedTerm], category: KeywordCategory) -> Vec<KeywordCandidate> {
    terms.iter().map(|t| candidate(t, category)).collect()
}

fn candidate(term: &RankedTerm, category: KeywordCategory) -> KeywordCandidate {
    KeywordCandidate {
        term: term.term.clone(),
        word_count: term.word_count,
        frequency: term.frequency,
        weight: term.weight,
        relevance: term.relevance,
        difficulty: term.difficulty,
        category,
    }
}

/// Whether any occurrence of `term` lies within `window` words of a Primary
/// span. Occurrences inside a Primary span do not count.
fn near_any(term: &RankedTerm, primary_spans: &[(usize, usize)], window: usize) -> bool {
    term.positions.iter().any(|&start| {
        let end = start + term.word_count;
        primary_spans.iter().any(|&(p_start, p_end)| {
            if start >= p_start && end <= p_end {
                return false;
            }
            let gap = if end <= p_start {
                p_start - end
            } else if start >= p_end {
                start - p_end
            } else {
                0
            };
            gap <= window
        })
    })
}
