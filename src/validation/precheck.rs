use crate::models::{DocumentRecord, Inconsistency, InconsistencyField, Severity};

/// Reports documents that failed their own upstream verification.
pub struct PrecheckValidator;

impl PrecheckValidator {
    /// One high-severity `other` entry per individually invalid document, in
    /// input order.
    pub fn validate(documents: &[DocumentRecord]) -> Vec<Inconsistency> {
        documents
            .iter()
            .filter(|doc| !doc.is_individually_valid)
            .map(|doc| Inconsistency {
                field: InconsistencyField::Other,
                description: format!("Invalid {}: {}", doc.document_type, doc.validation_feedback),
                severity: Severity::High,
                involved_documents: vec![doc.document_type.clone()],
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_valid() {
        let docs = vec![DocumentRecord::new("PAN card"), DocumentRecord::new("bank statement")];
        assert!(PrecheckValidator::validate(&docs).is_empty());
    }

    #[test]
    fn test_invalid_documents_reported_in_order() {
        let docs = vec![
            DocumentRecord::new("PAN card").invalid("Image is blurred"),
            DocumentRecord::new("bank statement"),
            DocumentRecord::new("Aadhaar card").invalid("Not an Aadhaar card"),
        ];

        let issues = PrecheckValidator::validate(&docs);
        assert_eq!(issues.len(), 2);
        assert_eq!(issues[0].description, "Invalid PAN card: Image is blurred");
        assert_eq!(issues[0].field, InconsistencyField::Other);
        assert_eq!(issues[0].severity, Severity::High);
        assert_eq!(issues[1].involved_documents, vec!["Aadhaar card"]);
    }
}
