use crate::models::*;
use crate::utils::{DiagnosticSink, NullSink};
use crate::validation::*;
use std::sync::Arc;

pub const ALL_CONSISTENT_SUMMARY: &str =
    "All documents are consistent and valid. Verification successful.";

/// Cross-validates a set of documents submitted together.
///
/// Individually invalid documents short-circuit the run: when any input failed
/// its own verification, no field is compared and only those failures are
/// reported. Otherwise the name, date of birth and address checkers run in
/// that order and their findings are concatenated.
pub struct DocumentSetValidator {
    checkers: Vec<Box<dyn FieldChecker>>,
    sink: Arc<dyn DiagnosticSink>,
}

impl DocumentSetValidator {
    pub fn new() -> Self {
        Self::with_config(&ValidatorConfig::default())
    }

    pub fn with_config(config: &ValidatorConfig) -> Self {
        DocumentSetValidator {
            checkers: vec![
                Box::new(NameChecker::new(config.name)),
                Box::new(DateOfBirthChecker::new()),
                Box::new(AddressChecker::new(config.address)),
            ],
            sink: Arc::new(NullSink),
        }
    }

    pub fn with_sink(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.sink = sink;
        self
    }

    // Main validation function that orchestrates the whole run
    pub fn validate(&self, documents: &[DocumentRecord]) -> VerificationResult {
        self.sink
            .info(&format!("Cross-validating {} document(s)", documents.len()));

        // Step 1: Individual validity comes first
        let failed = PrecheckValidator::validate(documents);
        if !failed.is_empty() {
            self.sink.warn(&format!(
                "{} document(s) failed individual verification; skipping cross-document checks",
                failed.len()
            ));
            return VerificationResult {
                is_valid: false,
                summary: format!("{} document(s) failed individual verification.", failed.len()),
                inconsistencies: failed,
            };
        }

        // Step 2: Field checkers, in registration order
        let mut inconsistencies = Vec::new();
        for checker in &self.checkers {
            let found = checker.check(documents, self.sink.as_ref());
            self.sink.debug(&format!(
                "{} checker found {} inconsistency(ies)",
                checker.field(),
                found.len()
            ));
            inconsistencies.extend(found);
        }

        // Step 3: Verdict and summary
        let is_valid = !inconsistencies
            .iter()
            .any(|i| i.severity == Severity::High);
        let summary = build_summary(&inconsistencies);
        self.sink.info(&summary);

        VerificationResult {
            is_valid,
            inconsistencies,
            summary,
        }
    }
}

impl Default for DocumentSetValidator {
    fn default() -> Self {
        Self::new()
    }
}

/// Validate with default thresholds and no diagnostics.
pub fn validate_document_set(documents: &[DocumentRecord]) -> VerificationResult {
    DocumentSetValidator::new().validate(documents)
}

/// Summary sentence for a set of cross-document findings.
///
/// Only high and medium counts are ever reported; low-severity findings do
/// not appear in the pass branch.
pub fn build_summary(inconsistencies: &[Inconsistency]) -> String {
    if inconsistencies.is_empty() {
        return ALL_CONSISTENT_SUMMARY.to_string();
    }

    let high = inconsistencies
        .iter()
        .filter(|i| i.severity == Severity::High)
        .count();
    if high > 0 {
        return format!(
            "Verification failed due to {} critical inconsistency(ies).",
            high
        );
    }

    let medium = inconsistencies
        .iter()
        .filter(|i| i.severity == Severity::Medium)
        .count();
    format!(
        "Verification passed with {} minor inconsistency(ies) that should be reviewed.",
        medium
    )
}
