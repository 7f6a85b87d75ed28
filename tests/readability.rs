use content_core::config::{BandCut, EngineConfig};
use content_core::document::{Document, HeuristicSyllableCounter, SyllableCounter};
use content_core::scoring::score_readability;
use content_core::types::ReadabilityBand;
use content_core::ContentEngine;

fn syllables(word: &str) -> usize {
    HeuristicSyllableCounter.count(word)
}

#[test]
fn syllable_vowel_groups() {
    assert_eq!(syllables("cat"), 1);
    assert_eq!(syllables("happy"), 2);
    assert_eq!(syllables("beautiful"), 3);
    assert_eq!(syllables("readability"), 5);
    assert_eq!(syllables("queue"), 1);
}

#[test]
fn syllable_y_is_vowel_unless_initial() {
    assert_eq!(syllables("yellow"), 2);
    assert_eq!(syllables("rhythm"), 1);
    assert_eq!(syllables("Yes"), 1);
}

#[test]
fn syllable_silent_e_and_floor() {
    assert_eq!(syllables("make"), 1);
    // Dropping the "e" would leave zero.
    assert_eq!(syllables("the"), 1);
    assert_eq!(syllables("be"), 1);
    assert_eq!(syllables("2024"), 1);
    assert_eq!(syllables("psst"), 1);
}

#[test]
fn empty_text_scores_neutral() {
    let engine = ContentEngine::default();
    let score = engine.readability("");

    assert_eq!(score.score, 100.0);
    assert_eq!(score.raw, 100.0);
    assert_eq!(score.band, ReadabilityBand::VeryEasy);
    assert_eq!(score.words, 0);
    assert_eq!(score.syllables, 0);
}

#[test]
fn flesch_formula_on_known_text() {
    let engine = ContentEngine::default();
    let score = engine.readability("SEO is great. It helps websites rank higher in search engines.");

    assert_eq!(score.sentences, 2);
    assert_eq!(score.words, 11);
    assert_eq!(score.syllables, 16);

    let expected = 206.835 - 1.015 * (11.0 / 2.0) - 84.6 * (16.0 / 11.0);
    assert!((score.raw - expected).abs() < 1e-9);
    assert!((score.score - 78.198).abs() < 1e-3);
    assert_eq!(score.band, ReadabilityBand::FairlyEasy);
}

#[test]
fn dense_text_clamps_to_zero_but_keeps_raw() {
    let engine = ContentEngine::default();
    let score =
        engine.readability("Internationalization institutionalization telecommunications.");

    assert!(score.raw < 0.0);
    assert!(score.raw.is_finite());
    assert_eq!(score.score, 0.0);
    assert_eq!(score.band, ReadabilityBand::VeryDifficult);
}

#[test]
fn text_without_terminator_counts_as_one_sentence() {
    let engine = ContentEngine::default();
    let score = engine.readability("just some words without an ending");

    assert_eq!(score.sentences, 1);
    assert!(score.score.is_finite());
    assert!((0.0..=100.0).contains(&score.score));
}

#[test]
fn band_table_is_configurable() {
    let mut config = EngineConfig::v0();
    config.readability.bands = vec![BandCut {
        min: 50.0,
        band: ReadabilityBand::Standard,
    }];
    config.readability.floor_band = ReadabilityBand::Difficult;

    let doc = Document::parse("SEO is great. It helps websites rank higher in search engines.");
    let score = score_readability(&doc, &HeuristicSyllableCounter, &config.readability);
    assert_eq!(score.band, ReadabilityBand::Standard);

    let hard = Document::parse("Internationalization institutionalization telecommunications.");
    let score = score_readability(&hard, &HeuristicSyllableCounter, &config.readability);
    assert_eq!(score.band, ReadabilityBand::Difficult);
}

struct OneSyllable;

impl SyllableCounter for OneSyllable {
    fn count(&self, _word: &str) -> usize {
        1
    }
}

#[test]
fn syllable_counter_is_pluggable() {
    let engine = ContentEngine::new(EngineConfig::v0(), OneSyllable).unwrap();
    let score = engine.readability("Extraordinary circumstances. Unbelievable outcomes.");

    assert_eq!(score.words, 4);
    assert_eq!(score.syllables, 4);
}
