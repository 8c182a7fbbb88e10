use crate::utils::{CrossDocError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Similarity bounds for one fuzzily compared field.
///
/// A pair is flagged when its similarity falls below `mismatch_below`, and the
/// flag is high severity when it also falls below `high_below`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimilarityThresholds {
    pub mismatch_below: f64,
    pub high_below: f64,
}

impl SimilarityThresholds {
    pub fn new(mismatch_below: f64, high_below: f64) -> Self {
        SimilarityThresholds {
            mismatch_below,
            high_below,
        }
    }

    fn check(&self, field: &str) -> Result<()> {
        for (key, value) in [("mismatchBelow", self.mismatch_below), ("highBelow", self.high_below)] {
            if !(0.0..=1.0).contains(&value) {
                return Err(CrossDocError::Config(format!(
                    "{}.{} must be between 0 and 1, got {}",
                    field, key, value
                )));
            }
        }
        if self.high_below > self.mismatch_below {
            return Err(CrossDocError::Config(format!(
                "{}.highBelow ({}) exceeds {}.mismatchBelow ({})",
                field, self.high_below, field, self.mismatch_below
            )));
        }
        Ok(())
    }
}

/// Tunable parameters of the cross-document validator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ValidatorConfig {
    pub name: SimilarityThresholds,
    pub address: SimilarityThresholds,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        ValidatorConfig {
            name: SimilarityThresholds::new(0.8, 0.5),
            address: SimilarityThresholds::new(0.7, 0.4),
        }
    }
}

impl ValidatorConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: ValidatorConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn validate(&self) -> Result<()> {
        self.name.check("name")?;
        self.address.check("address")
    }
}
