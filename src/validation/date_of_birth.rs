use crate::matching::try_normalize_date;
use crate::models::{DocumentRecord, Inconsistency, InconsistencyField, Severity};
use crate::utils::DiagnosticSink;
use crate::validation::checker::{field_pairs, FieldChecker};

/// Any date of birth mismatch is high severity.
#[derive(Debug, Default)]
pub struct DateOfBirthChecker;

impl DateOfBirthChecker {
    pub fn new() -> Self {
        DateOfBirthChecker
    }

    fn normalized(&self, document: &DocumentRecord, raw: &str, sink: &dyn DiagnosticSink) -> String {
        match try_normalize_date(raw) {
            Ok(normalized) => normalized,
            Err(err) => {
                sink.warn(&format!(
                    "could not normalize date of birth '{}' on {} ({}); comparing raw value",
                    raw, document.document_type, err
                ));
                raw.to_string()
            }
        }
    }
}

impl FieldChecker for DateOfBirthChecker {
    fn field(&self) -> InconsistencyField {
        InconsistencyField::DateOfBirth
    }

    fn check(&self, documents: &[DocumentRecord], sink: &dyn DiagnosticSink) -> Vec<Inconsistency> {
        let mut inconsistencies = Vec::new();

        for pair in field_pairs(documents, DocumentRecord::date_of_birth) {
            let first = self.normalized(pair.first, pair.first_value, sink);
            let second = self.normalized(pair.second, pair.second_value, sink);

            if first != second {
                inconsistencies.push(Inconsistency {
                    field: InconsistencyField::DateOfBirth,
                    description: format!(
                        "Date of birth mismatch between {} ({}) and {} ({})",
                        pair.first.document_type,
                        pair.first_value,
                        pair.second.document_type,
                        pair.second_value
                    ),
                    severity: Severity::High,
                    involved_documents: pair.document_types(),
                });
            }
        }

        inconsistencies
    }
}
