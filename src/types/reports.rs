use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::DegenerateInputWarning;
use super::identifiers::ContentHash;
use super::request::EnhancementType;

/// Qualitative readability band derived from the display score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadabilityBand {
    VeryEasy,
    Easy,
    FairlyEasy,
    Standard,
    FairlyDifficult,
    Difficult,
    VeryDifficult,
}

/// Flesch Reading Ease result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadabilityScore {
    /// Clamped to [0, 100].
    pub score: f64,
    /// Unclamped formula value.
    pub raw: f64,
    pub band: ReadabilityBand,

    pub sentences: usize,
    pub words: usize,
    pub syllables: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeywordCategory {
    Primary,
    Secondary,
    LongTail,
    Semantic,
}

/// A ranked, categorized keyword term.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordCandidate {
    pub term: String,
    pub word_count: usize,
    pub frequency: usize,
    /// Frequency over document length, with the phrase-length bonus applied.
    pub weight: f64,
    /// Weight relative to the best candidate, in [0, 1].
    pub relevance: f64,
    /// Heuristic inverse of commonality, in [0, 1].
    pub difficulty: f64,
    pub category: KeywordCategory,
}

/// The four non-overlapping keyword tiers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KeywordSet {
    pub primary: Vec<KeywordCandidate>,
    pub secondary: Vec<KeywordCandidate>,
    pub long_tail: Vec<KeywordCandidate>,
    pub semantic: Vec<KeywordCandidate>,

    /// Ranked terms that fell into no tier.
    pub unclassified: Vec<String>,
    /// How many ranked terms were padding below the quality floor.
    pub best_effort_fills: usize,
}

impl KeywordSet {
    pub fn is_empty(&self) -> bool {
        self.primary.is_empty()
            && self.secondary.is_empty()
            && self.long_tail.is_empty()
            && self.semantic.is_empty()
    }

    /// The top Primary keyword, used as the SEO focus term.
    pub fn focus_keyword(&self) -> Option<&KeywordCandidate> {
        self.primary.first()
    }

    /// All categorized candidates, tier by tier, each tier in rank order.
    pub fn iter(&self) -> impl Iterator<Item = &KeywordCandidate> {
        self.primary
            .iter()
            .chain(&self.secondary)
            .chain(&self.long_tail)
            .chain(&self.semantic)
    }

    pub fn terms(&self, category: KeywordCategory) -> Vec<&str> {
        let tier = match category {
            KeywordCategory::Primary => &self.primary,
            KeywordCategory::Secondary => &self.secondary,
            KeywordCategory::LongTail => &self.long_tail,
            KeywordCategory::Semantic => &self.semantic,
        };
        tier.iter().map(|c| c.term.as_str()).collect()
    }
}

/// The contributing factor an improvement suggestion addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeoFactor {
    ContentLength,
    KeywordMissing,
    KeywordDensityLow,
    KeywordDensityHigh,
    Readability,
    LongSentences,
    SentenceVariety,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub factor: SeoFactor,
    pub message: String,
}

/// The measurements an SEO score was derived from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeoInputs {
    pub readability_score: f64,
    pub focus_keyword: Option<String>,
    /// Ratio, not percent.
    pub keyword_density: f64,
    pub word_count: usize,
    pub sentence_count: usize,
}

/// Per-factor contributions, each in [0, 1] before weighting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeoComponents {
    pub readability: f64,
    pub density: f64,
    pub structure: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeoScoreReport {
    pub score: u8,
    pub suggestions: Vec<Suggestion>,
    pub components: SeoComponents,
    pub inputs: SeoInputs,
}

/// Result of the `analyze` operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub readability_score: f64,
    pub word_count: usize,
    pub sentence_count: usize,
    pub keywords: Vec<KeywordCandidate>,
    pub seo_score: u8,
    pub improvements: Vec<String>,

    pub content_hash: ContentHash,
    pub readability: ReadabilityScore,
    pub seo: SeoScoreReport,
    pub warnings: Vec<DegenerateInputWarning>,
}

/// Location of an inserted keyword within the modified text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsertionSpan {
    pub byte_start: usize,
    pub byte_end: usize,
    /// Index of the first inserted word across the whole modified document.
    pub word_start: usize,
    pub word_end: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkipReason {
    #[serde(rename = "already present")]
    AlreadyPresent,
    #[serde(rename = "empty document")]
    EmptyDocument,
}

impl SkipReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkipReason::AlreadyPresent => "already present",
            SkipReason::EmptyDocument => "empty document",
        }
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of the `insert_keyword` operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsertionResult {
    pub modified_text: String,
    pub insertion_offset: Option<InsertionSpan>,
    pub skipped: bool,
    pub reason: Option<SkipReason>,
}

impl InsertionResult {
    pub fn skipped(text: &str, reason: SkipReason) -> Self {
        Self {
            modified_text: text.to_string(),
            insertion_offset: None,
            skipped: true,
            reason: Some(reason),
        }
    }

    pub fn inserted(modified_text: String, span: InsertionSpan) -> Self {
        Self {
            modified_text,
            insertion_offset: Some(span),
            skipped: false,
            reason: None,
        }
    }
}

/// Comparison of an original text against a revision produced elsewhere.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevisionReview {
    pub kind: EnhancementType,
    pub seo_delta: i32,
    pub readability_delta: f64,
    pub improved: bool,

    pub before: AnalysisReport,
    pub after: AnalysisReport,
}
