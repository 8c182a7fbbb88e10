pub mod date;
pub mod similarity;

pub use date::{normalize_date, try_normalize_date, DateNormalizeError};
pub use similarity::{levenshtein_distance, normalize_text, similarity, CONTAINMENT_SCORE};
