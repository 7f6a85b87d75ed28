//! Flesch Reading Ease.
//!
//! `206.835 - 1.015 * (words / sentences) - 84.6 * (syllables / words)`

use crate::config::ReadabilityConfig;
use crate::document::{Document, SyllableCounter};
use crate::types::{ReadabilityBand, ReadabilityScore};

pub fn score_readability<C: SyllableCounter + ?Sized>(
    doc: &Document,
    counter: &C,
    config: &ReadabilityConfig,
) -> ReadabilityScore {
    let words = doc.word_count();
    let sentences = doc.sentence_count();

    if words == 0 {
        let neutral = config.neutral_score;
        return ReadabilityScore {
            score: neutral.clamp(0.0, 100.0),
            raw: neutral,
            band: band_for(neutral, config),
            sentences,
            words,
            syllables: 0,
        };
    }

    let syllables: usize = doc
        .words()
        .map(|w| counter.count(w))
        .sum();

    let words_per_sentence = words as f64 / sentences.max(1) as f64;
    let syllables_per_word = syllables as f64 / words as f64;
    let raw = 206.835 - 1.015 * words_per_sentence - 84.6 * syllables_per_word;
    let score = raw.clamp(0.0, 100.0);

    debug_assert!(raw.is_finite(), "readability {raw} is not finite");

    ReadabilityScore {
        score,
        raw,
        band: band_for(score, config),
        sentences,
        words,
        syllables,
    }
}

/// First cut point the score reaches, else the floor band.
pub fn band_for(score: f64, config: &ReadabilityConfig) -> ReadabilityBand {
    config
        .bands
        .iter()
        .find(|cut| score >= cut.min)
        .map(|cut| cut.band)
        .unwrap_or(config.floor_band)
}
