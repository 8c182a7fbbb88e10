use crate::models::DocumentRecord;
use crate::processing::extraction::DocumentSubmission;
use crate::utils::{CrossDocError, Result};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Parse a document set from JSON: either a bare array of submissions or an
/// object with a `documents` array.
pub fn parse_document_set(json: &str) -> Result<Vec<DocumentRecord>> {
    let value: Value = serde_json::from_str(json)?;

    let entries = match value {
        Value::Array(entries) => entries,
        Value::Object(mut map) => match map.remove("documents") {
            Some(Value::Array(entries)) => entries,
            _ => {
                return Err(CrossDocError::Input(
                    "expected a `documents` array".to_string(),
                ))
            }
        },
        _ => {
            return Err(CrossDocError::Input(
                "document set must be a JSON array or an object with `documents`".to_string(),
            ))
        }
    };

    let mut records = Vec::with_capacity(entries.len());
    for (index, entry) in entries.into_iter().enumerate() {
        let submission: DocumentSubmission = serde_json::from_value(entry).map_err(|e| {
            CrossDocError::Input(format!("document #{} is not a recognised submission: {}", index + 1, e))
        })?;
        records.push(submission.into_record());
    }

    Ok(records)
}

pub fn load_document_set(path: &Path) -> Result<Vec<DocumentRecord>> {
    let content = fs::read_to_string(path)?;
    parse_document_set(&content)
}
