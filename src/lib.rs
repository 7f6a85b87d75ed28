//! Deterministic, explainable text metrics and keyword operations for
//! content optimization.
//!
//! `content-core` provides sentence/word segmentation, syllable estimation,
//! Flesch readability scoring, n-gram keyword extraction and tiering, SEO
//! scoring with improvement suggestions, and contextual keyword insertion.
//! All operations are pure and deterministic: identical inputs always produce
//! identical outputs. Text generation is out of scope; text produced elsewhere
//! can be re-scored with [`ContentEngine::analyze`] or
//! [`ContentEngine::review_revision`].

pub mod cache;
pub mod config;
pub mod document;
pub mod engine;
pub mod keywords;
pub mod scoring;
pub mod types;

pub use config::EngineConfig;
pub use engine::ContentEngine;
pub use keywords::InsertionOptions;
pub use types::EngineError;
