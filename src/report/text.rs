// Plain-text console report

use crate::models::VerificationResult;
use std::fmt::Write;

pub fn render_text(result: &VerificationResult) -> String {
    let mut out = String::new();

    out.push_str("===============================================\n");
    out.push_str("     CROSS-DOCUMENT VERIFICATION REPORT\n");
    out.push_str("===============================================\n\n");

    let _ = writeln!(
        out,
        "Overall Status: {}",
        if result.is_valid {
            "VERIFIED"
        } else {
            "VERIFICATION FAILED"
        }
    );
    let _ = writeln!(out, "{}", result.summary);

    if !result.inconsistencies.is_empty() {
        out.push_str("\nIDENTIFIED ISSUES:\n");
        for issue in &result.inconsistencies {
            let _ = writeln!(
                out,
                "  - [{}] {}",
                issue.severity.label().to_uppercase(),
                issue.description
            );
            let _ = writeln!(out, "      Documents: {}", issue.involved_documents.join(", "));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Inconsistency, InconsistencyField, Severity};

    #[test]
    fn test_text_report() {
        let result = VerificationResult {
            is_valid: true,
            inconsistencies: vec![Inconsistency {
                field: InconsistencyField::Address,
                description: "Address mismatch between Aadhaar card and utility bill".to_string(),
                severity: Severity::Medium,
                involved_documents: vec!["Aadhaar card".to_string(), "utility bill".to_string()],
            }],
            summary: "Verification passed with 1 minor inconsistency(ies) that should be reviewed."
                .to_string(),
        };

        let text = render_text(&result);
        assert!(text.contains("Overall Status: VERIFIED\n"));
        assert!(text.contains("  - [MEDIUM] Address mismatch between Aadhaar card and utility bill\n"));
        assert!(text.contains("      Documents: Aadhaar card, utility bill\n"));
    }

    #[test]
    fn test_text_report_without_issues() {
        let result = VerificationResult {
            is_valid: false,
            inconsistencies: Vec::new(),
            summary: "nothing".to_string(),
        };
        let text = render_text(&result);
        assert!(text.contains("VERIFICATION FAILED"));
        assert!(!text.contains("IDENTIFIED ISSUES"));
    }
}
