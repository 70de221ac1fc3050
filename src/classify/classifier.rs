use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClassifyError {
    #[error("Classifier unavailable: {0}")]
    Unavailable(String),
    #[error("Classifier timed out after {0:?}")]
    Timeout(Duration),
    #[error("Malformed classifier payload: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// What the external classification service says about one line.
/// Every field is optional and unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct IngredientClassification {
    pub name: Option<String>,
    pub amount: Option<f64>,
    pub unit: Option<String>,
    pub category: Option<String>,
}

impl IngredientClassification {
    pub fn from_json(payload: &str) -> Result<Self, ClassifyError> {
        Ok(serde_json::from_str(payload)?)
    }
}

/// Seam for the external ingredient classification service
pub trait IngredientClassifier: Send + Sync {
    fn classify(&self, line: &str) -> Result<IngredientClassification, ClassifyError>;
}
