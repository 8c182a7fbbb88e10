use thiserror::Error;

/// Errors raised at the crate boundary: reading document sets and
/// configuration. Validation itself never fails.
#[derive(Debug, Error)]
pub enum CrossDocError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Input error: {0}")]
    Input(String),
}

pub type Result<T> = std::result::Result<T, CrossDocError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CrossDocError::Config("name.highBelow exceeds name.mismatchBelow".to_string());
        assert_eq!(
            err.to_string(),
            "Configuration error: name.highBelow exceeds name.mismatchBelow"
        );
    }

    #[test]
    fn test_json_error_conversion() {
        let parse: std::result::Result<serde_json::Value, _> = serde_json::from_str("{");
        let err: CrossDocError = parse.unwrap_err().into();
        assert!(err.to_string().starts_with("JSON error:"));
    }
}
