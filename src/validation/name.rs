use crate::matching::similarity;
use crate::models::{
    DocumentRecord, Inconsistency, InconsistencyField, SimilarityThresholds, ValidatorConfig,
};
use crate::utils::DiagnosticSink;
use crate::validation::checker::{field_pairs, fuzzy_severity, FieldChecker};

pub struct NameChecker {
    thresholds: SimilarityThresholds,
}

impl NameChecker {
    pub fn new(thresholds: SimilarityThresholds) -> Self {
        NameChecker { thresholds }
    }
}

impl Default for NameChecker {
    fn default() -> Self {
        NameChecker::new(ValidatorConfig::default().name)
    }
}

impl FieldChecker for NameChecker {
    fn field(&self) -> InconsistencyField {
        InconsistencyField::Name
    }

    fn check(&self, documents: &[DocumentRecord], sink: &dyn DiagnosticSink) -> Vec<Inconsistency> {
        let mut inconsistencies = Vec::new();

        for pair in field_pairs(documents, DocumentRecord::name) {
            let score = similarity(Some(pair.first_value), Some(pair.second_value));
            sink.debug(&format!(
                "name similarity {:.3} between {} and {}",
                score, pair.first.document_type, pair.second.document_type
            ));

            if let Some(severity) = fuzzy_severity(score, &self.thresholds) {
                inconsistencies.push(Inconsistency {
                    field: InconsistencyField::Name,
                    description: format!(
                        "Name mismatch between {} ({}) and {} ({})",
                        pair.first.document_type,
                        pair.first_value,
                        pair.second.document_type,
                        pair.second_value
                    ),
                    severity,
                    involved_documents: pair.document_types(),
                });
            }
        }

        inconsistencies
    }
}
