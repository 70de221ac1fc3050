use crate::format::fraction::format_amount;
use serde::{Deserialize, Serialize};

/// Structured form of one free-text ingredient line
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedIngredient {
    /// The line exactly as given
    pub original: String,
    /// Leading quantity, absent when none was found. Never negative.
    pub amount: Option<f64>,
    /// Unit token as written, absent for bare counts ("3 eggs")
    pub unit: Option<String>,
    pub name: String,
}

impl ParsedIngredient {
    pub fn new(original: &str, amount: Option<f64>, unit: Option<&str>, name: &str) -> Self {
        Self {
            original: original.to_string(),
            amount,
            unit: unit.map(|u| u.to_string()),
            name: name.to_string(),
        }
    }

    /// Name-only record for text no matcher understood
    pub fn unparsed(line: &str) -> Self {
        Self::new(line, None, None, line.trim())
    }
}

/// A parsed ingredient with its amount scaled for a new serving count.
/// The unit is carried over untouched.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScaledIngredient {
    #[serde(flatten)]
    pub parsed: ParsedIngredient,
    pub scaled_amount: Option<f64>,
    pub scaled_unit: Option<String>,
}

impl ScaledIngredient {
    /// Human-readable line, e.g. "1 1/2 cups flour"
    pub fn display(&self) -> String {
        let mut parts = Vec::new();
        if let Some(amount) = self.scaled_amount {
            parts.push(format_amount(amount));
        }
        if let Some(unit) = &self.scaled_unit {
            parts.push(unit.clone());
        }
        parts.push(self.parsed.name.clone());
        parts.join(" ")
    }
}
