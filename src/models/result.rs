use serde::{Deserialize, Serialize};
use std::fmt;

/// Which semantic field an inconsistency concerns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InconsistencyField {
    Name,
    DateOfBirth,
    Address,
    Gender,
    Other,
}

impl fmt::Display for InconsistencyField {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let label = match self {
            InconsistencyField::Name => "name",
            InconsistencyField::DateOfBirth => "dateOfBirth",
            InconsistencyField::Address => "address",
            InconsistencyField::Gender => "gender",
            InconsistencyField::Other => "other",
        };
        write!(f, "{}", label)
    }
}

/// Ordered `Low < Medium < High`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Inconsistency {
    pub field: InconsistencyField,
    pub description: String,
    pub severity: Severity,
    pub involved_documents: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationResult {
    pub is_valid: bool,
    pub inconsistencies: Vec<Inconsistency>,
    pub summary: String,
}

impl VerificationResult {
    pub fn count_with_severity(&self, severity: Severity) -> usize {
        self.inconsistencies
            .iter()
            .filter(|i| i.severity == severity)
            .count()
    }

    pub fn high_severity_count(&self) -> usize {
        self.count_with_severity(Severity::High)
    }

    pub fn medium_severity_count(&self) -> usize {
        self.count_with_severity(Severity::Medium)
    }

    pub fn inconsistencies_for(&self, field: InconsistencyField) -> Vec<&Inconsistency> {
        self.inconsistencies
            .iter()
            .filter(|i| i.field == field)
            .collect()
    }
}
