pub mod readability;
pub mod seo;

pub use readability::{band_for, score_readability};
pub use seo::score_seo;
