pub mod config;
pub mod document;
pub mod result;

pub use config::{SimilarityThresholds, ValidatorConfig};
pub use document::{DocumentRecord, ExtractedFields, FieldValue};
pub use result::{Inconsistency, InconsistencyField, Severity, VerificationResult};
