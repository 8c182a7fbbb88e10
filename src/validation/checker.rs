use crate::models::{DocumentRecord, Inconsistency, InconsistencyField, Severity, SimilarityThresholds};
use crate::utils::DiagnosticSink;

/// Compares one semantic field across every qualifying pair of documents.
pub trait FieldChecker: Send + Sync {
    fn field(&self) -> InconsistencyField;

    fn check(&self, documents: &[DocumentRecord], sink: &dyn DiagnosticSink) -> Vec<Inconsistency>;
}

/// Two documents that both carry the compared field, with their raw values.
#[derive(Debug, Clone, Copy)]
pub struct FieldPair<'a> {
    pub first: &'a DocumentRecord,
    pub first_value: &'a str,
    pub second: &'a DocumentRecord,
    pub second_value: &'a str,
}

impl<'a> FieldPair<'a> {
    pub fn document_types(&self) -> Vec<String> {
        vec![
            self.first.document_type.clone(),
            self.second.document_type.clone(),
        ]
    }
}

/// Every unordered pair of documents carrying the field, each pair once and in
/// input order. Fewer than two qualifying documents yields no pairs.
pub fn field_pairs<'a, F>(documents: &'a [DocumentRecord], value_of: F) -> Vec<FieldPair<'a>>
where
    F: Fn(&'a DocumentRecord) -> Option<&'a str>,
{
    let present: Vec<(&'a DocumentRecord, &'a str)> = documents
        .iter()
        .filter_map(|doc| value_of(doc).map(|value| (doc, value)))
        .collect();

    let mut pairs = Vec::new();
    for (i, &(first, first_value)) in present.iter().enumerate() {
        for &(second, second_value) in &present[i + 1..] {
            pairs.push(FieldPair {
                first,
                first_value,
                second,
                second_value,
            });
        }
    }
    pairs
}

/// Severity for a fuzzy score, or `None` when the pair is consistent.
pub fn fuzzy_severity(score: f64, thresholds: &SimilarityThresholds) -> Option<Severity> {
    if score >= thresholds.mismatch_below {
        return None;
    }
    if score < thresholds.high_below {
        Some(Severity::High)
    } else {
        Some(Severity::Medium)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pairs_skip_documents_without_field() {
        let docs = vec![
            DocumentRecord::new("PAN card").with_name("A"),
            DocumentRecord::new("bank statement"),
            DocumentRecord::new("Aadhaar card").with_name("B"),
            DocumentRecord::new("address proof").with_name("C"),
        ];

        let pairs = field_pairs(&docs, DocumentRecord::name);
        let labels: Vec<(&str, &str)> = pairs
            .iter()
            .map(|p| (p.first_value, p.second_value))
            .collect();
        assert_eq!(labels, vec![("A", "B"), ("A", "C"), ("B", "C")]);
    }

    #[test]
    fn test_single_document_yields_no_pairs() {
        let docs = vec![
            DocumentRecord::new("PAN card").with_name("A"),
            DocumentRecord::new("bank statement").with_address("somewhere"),
        ];
        assert!(field_pairs(&docs, DocumentRecord::name).is_empty());
        assert!(field_pairs(&[], DocumentRecord::name).is_empty());
    }

    #[test]
    fn test_same_document_type_still_paired() {
        let docs = vec![
            DocumentRecord::new("bank statement").with_name("A"),
            DocumentRecord::new("bank statement").with_name("B"),
        ];
        assert_eq!(field_pairs(&docs, DocumentRecord::name).len(), 1);
    }

    #[test]
    fn test_fuzzy_severity() {
        let thresholds = SimilarityThresholds::new(0.8, 0.5);
        assert_eq!(fuzzy_severity(0.8, &thresholds), None);
        assert_eq!(fuzzy_severity(0.79, &thresholds), Some(Severity::Medium));
        assert_eq!(fuzzy_severity(0.5, &thresholds), Some(Severity::Medium));
        assert_eq!(fuzzy_severity(0.49, &thresholds), Some(Severity::High));
    }
}
