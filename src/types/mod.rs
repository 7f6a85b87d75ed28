pub mod error;
pub mod identifiers;
pub mod reports;
pub mod request;

pub use error::{DegenerateInputWarning, EngineError};
pub use identifiers::ContentHash;
pub use reports::{
    AnalysisReport, InsertionResult, InsertionSpan, KeywordCandidate, KeywordCategory,
    KeywordSet, ReadabilityBand, ReadabilityScore, RevisionReview, SeoComponents, SeoFactor, SeoInputs,
    SeoScoreReport, SkipReason, Suggestion,
};
pub use request::{EnhancementType, KeywordRequest};
