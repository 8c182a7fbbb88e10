use serde::{Deserialize, Serialize};
use serde_json::Number;
use std::collections::BTreeMap;

/// A single value lifted out of a document by the upstream extractor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Null,
    Flag(bool),
    Number(Number),
    Text(String),
    List(Vec<FieldValue>),
    Map(BTreeMap<String, FieldValue>),
}

impl FieldValue {
    /// Textual form of scalar values. Numbers keep the digits they were
    /// extracted with, so long account and ID numbers survive unchanged.
    pub fn to_text(&self) -> Option<String> {
        match self {
            FieldValue::Text(s) => Some(s.clone()),
            FieldValue::Number(n) => Some(n.to_string()),
            FieldValue::Flag(_) | FieldValue::List(_) | FieldValue::Map(_) | FieldValue::Null => None,
        }
    }
}

/// Open key/value data extracted from a document, kept in key order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExtractedFields(BTreeMap<String, FieldValue>);

impl ExtractedFields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: &str, value: FieldValue) -> Self {
        self.0.insert(key.to_string(), value);
        self
    }

    pub fn with_text(self, key: &str, value: &str) -> Self {
        self.with(key, FieldValue::Text(value.to_string()))
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.0.get(key)
    }

    /// Non-empty textual value stored under `key`.
    pub fn text(&self, key: &str) -> Option<String> {
        self.get(key)
            .and_then(FieldValue::to_text)
            .filter(|s| !s.is_empty())
    }

    /// First non-empty textual value among `keys`, tried in order.
    pub fn first_text(&self, keys: &[&str]) -> Option<String> {
        keys.iter().find_map(|key| self.text(key))
    }
}

/// Data extracted from one document of a set (ID card, bank statement,
/// address proof, ...). Absent fields mean the document type does not carry
/// them, not that extraction failed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentRecord {
    pub document_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issuer: Option<String>,
    #[serde(default)]
    pub extracted_fields: ExtractedFields,
    pub is_individually_valid: bool,
    #[serde(default)]
    pub validation_feedback: String,
}

impl DocumentRecord {
    /// An individually valid record with no fields set.
    pub fn new(document_type: &str) -> Self {
        DocumentRecord {
            document_type: document_type.to_string(),
            name: None,
            date_of_birth: None,
            gender: None,
            address: None,
            id_number: None,
            account_number: None,
            issuer: None,
            extracted_fields: ExtractedFields::new(),
            is_individually_valid: true,
            validation_feedback: String::new(),
        }
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn with_date_of_birth(mut self, dob: &str) -> Self {
        self.date_of_birth = Some(dob.to_string());
        self
    }

    pub fn with_address(mut self, address: &str) -> Self {
        self.address = Some(address.to_string());
        self
    }

    pub fn with_gender(mut self, gender: &str) -> Self {
        self.gender = Some(gender.to_string());
        self
    }

    pub fn invalid(mut self, feedback: &str) -> Self {
        self.is_individually_valid = false;
        self.validation_feedback = feedback.to_string();
        self
    }

    // Empty strings count as absent, the same as a missing field.
    pub fn name(&self) -> Option<&str> {
        present(&self.name)
    }

    pub fn date_of_birth(&self) -> Option<&str> {
        present(&self.date_of_birth)
    }

    pub fn address(&self) -> Option<&str> {
        present(&self.address)
    }

    pub fn gender(&self) -> Option<&str> {
        present(&self.gender)
    }
}

fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}
