use crate::matching::similarity;
use crate::models::{
    DocumentRecord, Inconsistency, InconsistencyField, SimilarityThresholds, ValidatorConfig,
};
use crate::utils::DiagnosticSink;
use crate::validation::checker::{field_pairs, fuzzy_severity, FieldChecker};

/// Addresses are long and noisy, so descriptions name only the documents.
pub struct AddressChecker {
    thresholds: SimilarityThresholds,
}

impl AddressChecker {
    pub fn new(thresholds: SimilarityThresholds) -> Self {
        AddressChecker { thresholds }
    }
}

impl Default for AddressChecker {
    fn default() -> Self {
        AddressChecker::new(ValidatorConfig::default().address)
    }
}

impl FieldChecker for AddressChecker {
    fn field(&self) -> InconsistencyField {
        InconsistencyField::Address
    }

    fn check(&self, documents: &[DocumentRecord], sink: &dyn DiagnosticSink) -> Vec<Inconsistency> {
        let mut inconsistencies = Vec::new();

        for pair in field_pairs(documents, DocumentRecord::address) {
            let score = similarity(Some(pair.first_value), Some(pair.second_value));
            sink.debug(&format!(
                "address similarity {:.3} between {} and {}",
                score, pair.first.document_type, pair.second.document_type
            ));

            if let Some(severity) = fuzzy_severity(score, &self.thresholds) {
                inconsistencies.push(Inconsistency {
                    field: InconsistencyField::Address,
                    description: format!(
                        "Address mismatch between {} and {}",
                        pair.first.document_type, pair.second.document_type
                    ),
                    severity,
                    involved_documents: pair.document_types(),
                });
            }
        }

        inconsistencies
    }
}
