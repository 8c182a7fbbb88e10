// Best-effort date canonicalization for comparing dates of birth.
//
// Day-first is assumed whenever the year comes last, so "03/04/2020" is read
// as 3 April even when the issuer meant 4 March.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateNormalizeError {
    #[error("expected 3 date components, found {0}")]
    WrongPartCount(usize),

    #[error("no 4-character year component")]
    NoYearPart,
}

// Length only: an OCR-garbled year like "199O" still anchors the order.
fn is_year(part: &str) -> bool {
    part.chars().count() == 4
}

/// Canonicalize `raw` to `YYYY-MM-DD`, or say why it could not be.
pub fn try_normalize_date(raw: &str) -> Result<String, DateNormalizeError> {
    let parts: Vec<&str> = raw.split(|c| c == '-' || c == '/' || c == '.').collect();
    if parts.len() != 3 {
        return Err(DateNormalizeError::WrongPartCount(parts.len()));
    }

    let (year, month, day) = if is_year(parts[0]) {
        (parts[0], parts[1], parts[2])
    } else if is_year(parts[2]) {
        (parts[2], parts[1], parts[0])
    } else {
        return Err(DateNormalizeError::NoYearPart);
    };

    Ok(format!("{}-{:0>2}-{:0>2}", year, month, day))
}

/// Total form of [`try_normalize_date`]: unparseable input comes back
/// unchanged, so comparison falls back to exact string equality.
pub fn normalize_date(raw: &str) -> String {
    try_normalize_date(raw).unwrap_or_else(|_| raw.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iso_and_day_first_agree() {
        assert_eq!(normalize_date("2020-01-05"), "2020-01-05");
        assert_eq!(normalize_date("05/01/2020"), "2020-01-05");
        assert_eq!(normalize_date("5.1.2020"), "2020-01-05");
    }

    #[test]
    fn test_day_first_even_when_ambiguous() {
        assert_eq!(normalize_date("03/04/2020"), "2020-04-03");
        assert_eq!(normalize_date("25-12-1990"), "1990-12-25");
    }

    #[test]
    fn test_mixed_separators() {
        assert_eq!(normalize_date("1990/7-9"), "1990-07-09");
    }

    #[test]
    fn test_unparseable_input_is_returned_unchanged() {
        assert_eq!(normalize_date("12 March 1990"), "12 March 1990");
        assert_eq!(normalize_date("12/03/90"), "12/03/90");
        assert_eq!(normalize_date("1990-03"), "1990-03");
        assert_eq!(normalize_date(""), "");
    }

    #[test]
    fn test_year_is_recognised_by_length() {
        assert_eq!(normalize_date("12/03/199O"), "199O-03-12");
        assert_eq!(normalize_date("12.03.199O"), "199O-03-12");
        assert_eq!(normalize_date("१२/०३/१९९०"), "१९९०-०३-१२");
    }

    #[test]
    fn test_error_reasons() {
        assert_eq!(
            try_normalize_date("1990-03"),
            Err(DateNormalizeError::WrongPartCount(2))
        );
        assert_eq!(
            try_normalize_date("12/03/90"),
            Err(DateNormalizeError::NoYearPart)
        );
    }
}
