pub mod cache;
pub mod key;

pub use cache::AnalysisCache;
pub use key::CacheKey;
