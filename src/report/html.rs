// HTML rendering of a verification result for direct display in the UI

use crate::models::{Severity, VerificationResult};
use std::fmt::Write;

fn severity_class(severity: Severity) -> &'static str {
    match severity {
        Severity::High => "text-red-700 bg-red-50",
        Severity::Medium => "text-orange-700 bg-orange-50",
        Severity::Low => "text-yellow-700 bg-yellow-50",
    }
}

/// Escape text for inclusion in HTML element content.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Status banner followed, when there is anything to list, by one item per
/// inconsistency.
pub fn render_html(result: &VerificationResult) -> String {
    let (status_class, status_icon, status_label) = if result.is_valid {
        ("text-green-700 bg-green-50", "✓", "VERIFIED")
    } else {
        ("text-red-700 bg-red-50", "✗", "VERIFICATION FAILED")
    };

    let mut html = String::new();
    // Writing to a String cannot fail
    let _ = write!(
        html,
        r#"<div class="rounded-lg p-4 {} mb-4">
  <div class="font-medium flex items-center">
    <span class="mr-2 text-lg">{}</span>
    <span>Overall Status: {}</span>
  </div>
  <p class="mt-1">{}</p>
</div>
"#,
        status_class,
        status_icon,
        status_label,
        escape_html(&result.summary)
    );

    if result.inconsistencies.is_empty() {
        return html;
    }

    html.push_str("<div class=\"text-gray-800 font-medium mb-2\">Identified Issues:</div>\n");
    html.push_str("<ul class=\"space-y-2\">\n");
    for issue in &result.inconsistencies {
        let _ = write!(
            html,
            r#"  <li class="rounded p-3 {}">
    <div class="font-medium">{} SEVERITY</div>
    <div class="mt-1">{}</div>
    <div class="mt-1 text-sm">Documents: {}</div>
  </li>
"#,
            severity_class(issue.severity),
            issue.severity.label().to_uppercase(),
            escape_html(&issue.description),
            escape_html(&issue.involved_documents.join(", "))
        );
    }
    html.push_str("</ul>\n");

    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Inconsistency, InconsistencyField};

    fn failed_result() -> VerificationResult {
        VerificationResult {
            is_valid: false,
            inconsistencies: vec![
                Inconsistency {
                    field: InconsistencyField::DateOfBirth,
                    description: "Date of birth mismatch between PAN card (01/02/1985) and passport (1985-02-02)".to_string(),
                    severity: Severity::High,
                    involved_documents: vec!["PAN card".to_string(), "passport".to_string()],
                },
                Inconsistency {
                    field: InconsistencyField::Name,
                    description: "Name mismatch between PAN card (Jane Doe) and passport (John Doe)".to_string(),
                    severity: Severity::Medium,
                    involved_documents: vec!["PAN card".to_string(), "passport".to_string()],
                },
            ],
            summary: "Verification failed due to 1 critical inconsistency(ies).".to_string(),
        }
    }

    #[test]
    fn test_verified_banner_without_issue_list() {
        let result = VerificationResult {
            is_valid: true,
            inconsistencies: Vec::new(),
            summary: "All documents are consistent and valid. Verification successful.".to_string(),
        };

        let html = render_html(&result);
        assert!(html.contains("Overall Status: VERIFIED"));
        assert!(html.contains("text-green-700"));
        assert!(html.contains("✓"));
        assert!(!html.contains("Identified Issues"));
        assert!(!html.contains("<ul"));
    }

    #[test]
    fn test_failed_banner_with_issues() {
        let html = render_html(&failed_result());
        assert!(html.contains("Overall Status: VERIFICATION FAILED"));
        assert!(html.contains("✗"));
        assert!(html.contains("Identified Issues:"));
        assert!(html.contains("HIGH SEVERITY"));
        assert!(html.contains("MEDIUM SEVERITY"));
        assert!(html.contains("text-orange-700 bg-orange-50"));
        assert!(html.contains("Documents: PAN card, passport"));
        assert_eq!(html.matches("<li ").count(), 2);
    }

    #[test]
    fn test_rendering_leaves_result_untouched() {
        let result = failed_result();
        let before = result.clone();
        let _ = render_html(&result);
        assert_eq!(result, before);
    }

    #[test]
    fn test_markup_in_values_is_escaped() {
        let mut result = failed_result();
        result.inconsistencies[1].description = "Name mismatch between A (<b>x</b>) and B (y & z)".to_string();

        let html = render_html(&result);
        assert!(html.contains("(&lt;b&gt;x&lt;/b&gt;)"));
        assert!(html.contains("(y &amp; z)"));
    }
}
