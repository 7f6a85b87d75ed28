use tracing::debug;

use crate::config::EngineConfig;
use crate::document::{Document, HeuristicSyllableCounter, SyllableCounter};
use crate::keywords::{self, InsertionOptions};
use crate::scoring::{score_readability, score_seo};
use crate::types::{
    AnalysisReport, DegenerateInputWarning, EngineError, EnhancementType, InsertionResult,
    KeywordRequest, KeywordSet, ReadabilityScore, RevisionReview,
};

/// Stateless entry point for every engine operation.
///
/// Holds only configuration; each call builds its own `Document` and returns
/// an owned result. Safe to share across threads when `C` is.
#[derive(Debug, Clone)]
pub struct ContentEngine<C = HeuristicSyllableCounter> {
    config: EngineConfig,
    syllables: C,
}

impl Default for ContentEngine<HeuristicSyllableCounter> {
    fn default() -> Self {
        Self {
            config: EngineConfig::v0(),
            syllables: HeuristicSyllableCounter,
        }
    }
}

impl ContentEngine<HeuristicSyllableCounter> {
    pub fn with_config(config: EngineConfig) -> Result<Self, EngineError> {
        Self::new(config, HeuristicSyllableCounter)
    }
}

impl<C> ContentEngine<C>
where
    C: SyllableCounter,
{
    pub fn new(config: EngineConfig, syllables: C) -> Result<Self, EngineError> {
        config.validate()?;
        Ok(Self { config, syllables })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Readability, keywords and SEO score in one report. Never fails:
    /// degenerate input resolves to floor values and is flagged in `warnings`.
    #[tracing::instrument(skip_all, fields(text_len = text.len()))]
    pub fn analyze(&self, text: &str) -> AnalysisReport {
        let doc = Document::parse(text);
        self.analyze_document(&doc)
    }

    pub fn analyze_document(&self, doc: &Document) -> AnalysisReport {
        let readability = self.readability_of(doc);
        let keywords = self.keywords_of(doc, self.config.extraction.default_target_count);
        let seo = score_seo(doc, &readability, &keywords, &self.config.seo);

        let mut warnings = Vec::new();
        if doc.is_empty() {
            warnings.push(DegenerateInputWarning::EmptyDocument);
        } else if keywords.is_empty() {
            warnings.push(DegenerateInputWarning::NoKeywordCandidates);
        }

        debug!(
            words = doc.word_count(),
            sentences = doc.sentence_count(),
            seo_score = seo.score,
            "analysis complete"
        );

        AnalysisReport {
            readability_score: readability.score,
            word_count: doc.word_count(),
            sentence_count: doc.sentence_count(),
            keywords: keywords.iter().cloned().collect(),
            seo_score: seo.score,
            improvements: seo.suggestions.iter().map(|s| s.message.clone()).collect(),
            content_hash: doc.hash().clone(),
            readability,
            seo,
            warnings,
        }
    }

    #[tracing::instrument(skip_all, fields(text_len = text.len()))]
    pub fn readability(&self, text: &str) -> ReadabilityScore {
        self.readability_of(&Document::parse(text))
    }

    /// Ranked keywords split into Primary, Secondary, LongTail and Semantic tiers.
    #[tracing::instrument(skip_all, fields(text_len = text.len(), target_count = target_count))]
    pub fn extract_keywords(
        &self,
        text: &str,
        target_count: usize,
    ) -> Result<KeywordSet, EngineError> {
        let max = self.config.extraction.max_target_count;
        if target_count == 0 || target_count > max {
            return Err(EngineError::Configuration(format!(
                "target_count must be within 1..={max}, got {target_count}"
            )));
        }

        let doc = Document::parse(text);
        Ok(self.keywords_of(&doc, target_count))
    }

    /// [`extract_keywords`](Self::extract_keywords) for a request arriving
    /// with a signed count.
    pub fn extract_keywords_for(&self, request: &KeywordRequest) -> Result<KeywordSet, EngineError> {
        let target_count = request.target_count(self.config.extraction.max_target_count)?;
        self.extract_keywords(&request.text, target_count)
    }

    pub fn insert_keyword(&self, text: &str, keyword: &str) -> Result<InsertionResult, EngineError> {
        self.insert_keyword_with(text, keyword, &InsertionOptions::default())
    }

    #[tracing::instrument(skip_all, fields(text_len = text.len(), force = options.force))]
    pub fn insert_keyword_with(
        &self,
        text: &str,
        keyword: &str,
        options: &InsertionOptions,
    ) -> Result<InsertionResult, EngineError> {
        let doc = Document::parse(text);
        let result = keywords::insert_keyword(&doc, keyword, options, &self.config.insertion)?;
        if let Some(reason) = result.reason {
            debug!(%reason, "keyword insertion skipped");
        }
        Ok(result)
    }

    /// Re-score a revision produced outside the engine against its original.
    ///
    /// `improved` reflects the score the enhancement kind targets: SEO score
    /// for `Seo`, readability for `Readability`, and neither getting worse
    /// for `General`.
    #[tracing::instrument(skip_all, fields(kind = %kind))]
    pub fn review_revision(
        &self,
        original: &str,
        revised: &str,
        kind: EnhancementType,
    ) -> Result<RevisionReview, EngineError> {
        if revised.trim().is_empty() {
            return Err(EngineError::Validation("Revised text cannot be empty".into()));
        }

        let before = self.analyze(original);
        let after = self.analyze(revised);

        let seo_delta = i32::from(after.seo_score) - i32::from(before.seo_score);
        let readability_delta = after.readability_score - before.readability_score;
        let improved = match kind {
            EnhancementType::Seo => seo_delta >= 0,
            EnhancementType::Readability => readability_delta >= 0.0,
            EnhancementType::General => seo_delta >= 0 && readability_delta >= 0.0,
        };

        debug!(seo_delta, readability_delta, improved, "revision reviewed");

        Ok(RevisionReview {
            kind,
            seo_delta,
            readability_delta,
            improved,
            before,
            after,
        })
    }

    fn readability_of(&self, doc: &Document) -> ReadabilityScore {
        score_readability(doc, &self.syllables, &self.config.readability)
    }

    fn keywords_of(&self, doc: &Document, target_count: usize) -> KeywordSet {
        let extraction = keywords::extract(doc, target_count, &self.config.extraction);
        keywords::categorize(&extraction, &self.config.categories)
    }
}
