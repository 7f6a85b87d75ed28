//! SEO scoring.
//!
//! Three weighted contributions, each normalized to [0, 1]:
//! readability (display score / 100), focus keyword density (full marks
//! inside the target band, linear fall-off outside it) and structure
//! (content length plus sentence rhythm). Every underperforming factor yields
//! exactly one suggestion, in `SeoFactor` order.

use crate::config::SeoConfig;
use crate::document::Document;
use crate::keywords::keyword_density;
use crate::types::{
    KeywordSet, ReadabilityScore, SeoComponents, SeoFactor, SeoInputs, SeoScoreReport,
    Suggestion,
};

pub fn score_seo(
    doc: &Document,
    readability: &ReadabilityScore,
    keywords: &KeywordSet,
    config: &SeoConfig,
) -> SeoScoreReport {
    let focus = keywords.focus_keyword().map(|k| k.term.clone());
    let density = focus
        .as_deref()
        .map(|term| keyword_density(doc, term).ratio)
        .unwrap_or(0.0);

    let lengths: Vec<usize> = doc.sentences().iter().map(|s| s.word_count()).collect();
    let rhythm = SentenceRhythm::measure(&lengths, config.max_sentence_words);

    let components = SeoComponents {
        readability: (readability.score / 100.0).clamp(0.0, 1.0),
        density: if focus.is_some() {
            density_contribution(density, config)
        } else {
            0.0
        },
        structure: structure_contribution(doc.word_count(), &rhythm, config),
    };

    let score = if doc.is_empty() {
        config.empty_score.min(100)
    } else {
        weighted_score(&components, config)
    };

    let inputs = SeoInputs {
        readability_score: readability.score,
        focus_keyword: focus,
        keyword_density: density,
        word_count: doc.word_count(),
        sentence_count: doc.sentence_count(),
    };
    let suggestions = suggest(&inputs, &rhythm, config);

    SeoScoreReport {
        score,
        suggestions,
        components,
        inputs,
    }
}

fn weighted_score(components: &SeoComponents, config: &SeoConfig) -> u8 {
    let w = &config.weights;
    let total_weight = w.readability + w.density + w.structure;
    if total_weight <= 0.0 {
        return config.empty_score.min(100);
    }

    let blended = (w.readability * components.readability
        + w.density * components.density
        + w.structure * components.structure)
        / total_weight;

    let score = (blended * 100.0).round();
    if score.is_finite() {
        score.clamp(0.0, 100.0) as u8
    } else {
        config.empty_score.min(100)
    }
}

fn density_contribution(density: f64, config: &SeoConfig) -> f64 {
    if density < config.density_min {
        density / config.density_min
    } else if density > config.density_max {
        (1.0 - (density - config.density_max) / config.density_overshoot).max(0.0)
    } else {
        1.0
    }
}

fn structure_contribution(words: usize, rhythm: &SentenceRhythm, config: &SeoConfig) -> f64 {
    let length = if config.min_words == 0 {
        1.0
    } else {
        (words as f64 / config.min_words as f64).min(1.0)
    };
    let variety = match rhythm.variation {
        Some(cv) if config.min_sentence_variation > 0.0 => {
            (cv / config.min_sentence_variation).min(1.0)
        }
        _ => 1.0,
    };
    let flow = if rhythm.sentences == 0 {
        0.0
    } else {
        variety * (1.0 - rhythm.long_sentences as f64 / rhythm.sentences as f64)
    };

    let share = config.structure_length_share;
    share * length + (1.0 - share) * flow
}

/// Sentence-length statistics.
struct SentenceRhythm {
    sentences: usize,
    long_sentences: usize,
    /// Coefficient of variation; `None` below three sentences.
    variation: Option<f64>,
}

impl SentenceRhythm {
    fn measure(lengths: &[usize], max_sentence_words: usize) -> Self {
        let sentences = lengths.len();
        let long_sentences = lengths.iter().filter(|&&n| n > max_sentence_words).count();

        let variation = if sentences < 3 {
            None
        } else {
            let mean = lengths.iter().sum::<usize>() as f64 / sentences as f64;
            let variance = lengths
                .iter()
                .map(|&n| (n as f64 - mean).powi(2))
                .sum::<f64>()
                / sentences as f64;
            Some(if mean > 0.0 { variance.sqrt() / mean } else { 0.0 })
        };

        SentenceRhythm {
            sentences,
            long_sentences,
            variation,
        }
    }
}

fn suggest(inputs: &SeoInputs, rhythm: &SentenceRhythm, config: &SeoConfig) -> Vec<Suggestion> {
    let mut suggestions = Vec::new();
    let mut push = |factor: SeoFactor, message: String| {
        suggestions.push(Suggestion { factor, message })
    };

    if inputs.word_count < config.min_words {
        push(
            SeoFactor::ContentLength,
            format!(
                "Increase content length to at least {} words (currently {})",
                config.min_words, inputs.word_count
            ),
        );
    }

    let band = format!(
        "{:.0}%-{:.0}%",
        config.density_min * 100.0,
        config.density_max * 100.0
    );
    match inputs.focus_keyword.as_deref() {
        None => push(
            SeoFactor::KeywordMissing,
            "Add a clear focus keyword and use it consistently".to_string(),
        ),
        Some(term) if inputs.keyword_density < config.density_min => push(
            SeoFactor::KeywordDensityLow,
            format!(
                "Use the focus keyword \"{term}\" more often (density {:.1}%, target {band})",
                inputs.keyword_density * 100.0
            ),
        ),
        Some(term) if inputs.keyword_density > config.density_max => push(
            SeoFactor::KeywordDensityHigh,
            format!(
                "Reduce keyword repetition of \"{term}\" (density {:.1}%, target {band})",
                inputs.keyword_density * 100.0
            ),
        ),
        Some(_) => {}
    }

    if inputs.readability_score < config.readability_target {
        push(
            SeoFactor::Readability,
            format!(
                "Simplify wording to improve readability (score {:.0}, target {:.0})",
                inputs.readability_score, config.readability_target
            ),
        );
    }

    if rhythm.long_sentences > 0 {
        push(
            SeoFactor::LongSentences,
            format!(
                "Shorten long sentences ({} over {} words)",
                rhythm.long_sentences, config.max_sentence_words
            ),
        );
    }

    if rhythm
        .variation
        .is_some_and(|cv| cv < config.min_sentence_variation)
    {
        push(
            SeoFactor::SentenceVariety,
            "Vary sentence length to improve rhythm".to_string(),
        );
    }

    suggestions
}
