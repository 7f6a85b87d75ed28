pub mod categorize;
pub mod density;
pub mod extraction;
pub mod insertion;
pub mod stopwords;

pub use categorize::categorize;
pub use density::{contains_keyword, find_occurrences, keyword_density, keyword_positions, KeywordDensity};
pub use extraction::{extract, Extraction, RankedTerm};
pub use insertion::{insert_keyword, InsertionOptions};
pub use stopwords::is_stopword;
