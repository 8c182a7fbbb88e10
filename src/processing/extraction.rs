// Lifts canonical fields out of an upstream extraction result

use crate::models::{DocumentRecord, ExtractedFields};
use serde::{Deserialize, Serialize};

/// Keys holding a document's identifier, highest priority first: an explicit
/// document number, then the national ID number, then the tax ID number.
pub const ID_NUMBER_KEYS: &[&str] = &["documentNumber", "aadharNumber", "panNumber"];

pub const NAME_KEYS: &[&str] = &["name"];
pub const DATE_OF_BIRTH_KEYS: &[&str] = &["dob", "dateOfBirth"];
pub const GENDER_KEYS: &[&str] = &["gender"];
pub const ADDRESS_KEYS: &[&str] = &["address"];
pub const ACCOUNT_NUMBER_KEYS: &[&str] = &["accountNumber"];
pub const ISSUER_KEYS: &[&str] = &["issuer"];

/// What the upstream verifier reports for a single uploaded document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionResult {
    pub is_valid: bool,
    #[serde(default)]
    pub feedback: String,
    #[serde(default)]
    pub extracted_data: ExtractedFields,
}

impl DocumentRecord {
    /// Build a record from an extraction result. The raw mapping is kept as
    /// `extracted_fields`; canonical fields are looked up by key precedence.
    pub fn from_extraction(document_type: &str, result: ExtractionResult) -> Self {
        let data = result.extracted_data;

        DocumentRecord {
            document_type: document_type.to_string(),
            name: data.first_text(NAME_KEYS),
            date_of_birth: data.first_text(DATE_OF_BIRTH_KEYS),
            gender: data.first_text(GENDER_KEYS),
            address: data.first_text(ADDRESS_KEYS),
            id_number: data.first_text(ID_NUMBER_KEYS),
            account_number: data.first_text(ACCOUNT_NUMBER_KEYS),
            issuer: data.first_text(ISSUER_KEYS),
            extracted_fields: data,
            is_individually_valid: result.is_valid,
            validation_feedback: result.feedback,
        }
    }
}

/// One entry of a submitted document set: either an already-mapped record or
/// a raw extraction result tagged with its document type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DocumentSubmission {
    #[serde(rename_all = "camelCase")]
    Extraction {
        document_type: String,
        result: ExtractionResult,
    },
    Record(DocumentRecord),
}

impl DocumentSubmission {
    pub fn into_record(self) -> DocumentRecord {
        match self {
            DocumentSubmission::Extraction {
                document_type,
                result,
            } => DocumentRecord::from_extraction(&document_type, result),
            DocumentSubmission::Record(record) => record,
        }
    }
}
