pub mod document_set;
pub mod extraction;

pub use document_set::{load_document_set, parse_document_set};
pub use extraction::{DocumentSubmission, ExtractionResult, ID_NUMBER_KEYS};
