pub mod document_set_validator;
pub mod matching;
pub mod models;
pub mod processing;
pub mod report;
pub mod utils;
pub mod validation;

pub use document_set_validator::{build_summary, validate_document_set, DocumentSetValidator};
pub use models::{DocumentRecord, Inconsistency, InconsistencyField, Severity, VerificationResult};
