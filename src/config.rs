use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::types::{EngineError, ReadabilityBand};

/// Placeholder substituted by the inserted keyword in templates.
pub const KEYWORD_PLACEHOLDER: &str = "{keyword}";

// Key point:
// Serializable
// Comparable
// Explicit defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    pub version: String,
    pub readability: ReadabilityConfig,
    pub extraction: ExtractionConfig,
    pub categories: CategoryConfig,
    pub seo: SeoConfig,
    pub insertion: InsertionConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BandCut {
    pub min: f64,
    pub band: ReadabilityBand,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadabilityConfig {
    /// Score reported for documents with no words.
    pub neutral_score: f64,
    /// Cut points, highest first. Scores below the last cut fall into `floor_band`.
    pub bands: Vec<BandCut>,
    pub floor_band: ReadabilityBand,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractionConfig {
    pub default_target_count: usize,
    pub max_target_count: usize,
    pub max_ngram: usize,
    /// Extra weight per additional word in a phrase.
    pub phrase_length_bonus: f64,
    /// Terms seen fewer times than this are best-effort fills.
    pub min_frequency: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryConfig {
    pub primary_share: f64,
    pub secondary_share: f64,
    pub long_tail_min_words: usize,
    /// Maximum gap, in words, between a term and a Primary occurrence.
    pub semantic_window: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeoWeights {
    pub readability: f64,
    pub density: f64,
    pub structure: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeoConfig {
    pub weights: SeoWeights,
    pub density_min: f64,
    pub density_max: f64,
    /// Distance above `density_max` at which the density contribution reaches zero.
    pub density_overshoot: f64,
    pub min_words: usize,
    /// Share of the structural contribution taken by content length; the
    /// remainder comes from sentence rhythm.
    pub structure_length_share: f64,
    pub max_sentence_words: usize,
    pub min_sentence_variation: f64,
    pub readability_target: f64,
    /// Score for documents with no words.
    pub empty_score: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsertionConfig {
    /// Leading share of sentences considered for insertion.
    pub lede_fraction: f64,
    /// Templates placed at a sentence start; followed by the sentence itself.
    pub start_templates: Vec<String>,
    /// Templates placed after the first clause boundary.
    pub clause_templates: Vec<String>,
}

impl EngineConfig {
    pub fn v0() -> Self {
        Self {
            version: "1".into(),
            readability: ReadabilityConfig {
                neutral_score: 100.0,
                bands: vec![
                    BandCut { min: 90.0, band: ReadabilityBand::VeryEasy },
                    BandCut { min: 80.0, band: ReadabilityBand::Easy },
                    BandCut { min: 70.0, band: ReadabilityBand::FairlyEasy },
                    BandCut { min: 60.0, band: ReadabilityBand::Standard },
                    BandCut { min: 50.0, band: ReadabilityBand::FairlyDifficult },
                    BandCut { min: 30.0, band: ReadabilityBand::Difficult },
                ],
                floor_band: ReadabilityBand::VeryDifficult,
            },
            extraction: ExtractionConfig {
                default_target_count: 10,
                max_target_count: 100,
                max_ngram: 4,
                phrase_length_bonus: 0.5,
                min_frequency: 2,
            },
            categories: CategoryConfig {
                primary_share: 0.2,
                secondary_share: 0.3,
                long_tail_min_words: 3,
                semantic_window: 5,
            },
            seo: SeoConfig {
                weights: SeoWeights {
                    readability: 0.3,
                    density: 0.4,
                    structure: 0.3,
                },
                density_min: 0.01,
                density_max: 0.03,
                density_overshoot: 0.05,
                min_words: 300,
                structure_length_share: 0.6,
                max_sentence_words: 25,
                min_sentence_variation: 0.3,
                readability_target: 60.0,
                empty_score: 0,
            },
            insertion: InsertionConfig {
                lede_fraction: 1.0 / 3.0,
                start_templates: vec!["When it comes to {keyword}, ".into()],
                clause_templates: vec![" especially for {keyword},".into()],
            },
        }
    }

    pub fn from_json(json: &str) -> Result<Self, EngineError> {
        let config: EngineConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: &Path) -> Result<Self, EngineError> {
        let f = std::fs::File::open(path)?;
        let config: EngineConfig = serde_json::from_reader(f)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        let readability = &self.readability;
        if !readability.neutral_score.is_finite() {
            return Err(invalid("readability.neutral_score must be finite"));
        }
        if readability
            .bands
            .windows(2)
            .any(|pair| pair[0].min <= pair[1].min)
        {
            return Err(invalid("readability.bands must be sorted by descending min"));
        }

        let extraction = &self.extraction;
        if !(1..=4).contains(&extraction.max_ngram) {
            return Err(invalid("extraction.max_ngram must be within 1..=4"));
        }
        if extraction.max_target_count == 0 {
            return Err(invalid("extraction.max_target_count must be positive"));
        }
        if extraction.default_target_count == 0
            || extraction.default_target_count > extraction.max_target_count
        {
            return Err(invalid(
                "extraction.default_target_count must be within 1..=max_target_count",
            ));
        }
        if !is_non_negative(extraction.phrase_length_bonus) {
            return Err(invalid("extraction.phrase_length_bonus must be non-negative"));
        }

        let categories = &self.categories;
        if !is_share(categories.primary_share)
            || !is_share(categories.secondary_share)
            || categories.primary_share + categories.secondary_share > 1.0
        {
            return Err(invalid(
                "categories shares must lie in [0, 1] and sum to at most 1",
            ));
        }
        // LongTail means 3+ words, and no longer phrase is ever extracted.
        if categories.long_tail_min_words < 3
            || categories.long_tail_min_words > extraction.max_ngram
        {
            return Err(invalid(
                "categories.long_tail_min_words must be within 3..=extraction.max_ngram",
            ));
        }

        let seo = &self.seo;
        let weights = &seo.weights;
        if !is_non_negative(weights.readability)
            || !is_non_negative(weights.density)
            || !is_non_negative(weights.structure)
        {
            return Err(invalid("seo.weights must be finite and non-negative"));
        }
        if weights.readability + weights.density + weights.structure <= 0.0 {
            return Err(invalid("seo.weights must not all be zero"));
        }
        if !is_non_negative(seo.density_min)
            || !seo.density_max.is_finite()
            || seo.density_min >= seo.density_max
        {
            return Err(invalid("seo.density_min must be below seo.density_max"));
        }
        if !(seo.density_overshoot.is_finite() && seo.density_overshoot > 0.0) {
            return Err(invalid("seo.density_overshoot must be positive"));
        }
        if !is_share(seo.structure_length_share) {
            return Err(invalid("seo.structure_length_share must lie in [0, 1]"));
        }
        if seo.empty_score > 100 {
            return Err(invalid("seo.empty_score must be within 0..=100"));
        }

        let insertion = &self.insertion;
        if !(insertion.lede_fraction > 0.0 && insertion.lede_fraction <= 1.0) {
            return Err(invalid("insertion.lede_fraction must lie in (0, 1]"));
        }
        if insertion.start_templates.is_empty() {
            return Err(invalid("insertion.start_templates must not be empty"));
        }
        if insertion
            .start_templates
            .iter()
            .chain(&insertion.clause_templates)
            .any(|t| t.matches(KEYWORD_PLACEHOLDER).count() != 1)
        {
            return Err(invalid(
                "insertion templates must contain the {keyword} placeholder exactly once",
            ));
        }

        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::v0()
    }
}

fn invalid(msg: &str) -> EngineError {
    EngineError::Configuration(msg.to_string())
}

fn is_non_negative(v: f64) -> bool {
    v.is_finite() && v >= 0.0
}

fn is_share(v: f64) -> bool {
    (0.0..=1.0).contains(&v)
}
