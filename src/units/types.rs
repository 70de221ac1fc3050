use serde::{Deserialize, Serialize};
use std::fmt;

/// Normalized unit every convertible unit reduces to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BaseUnit {
    /// Volume, in millilitres
    Ml,
    /// Weight, in grams
    G,
}

impl BaseUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            BaseUnit::Ml => "ml",
            BaseUnit::G => "g",
        }
    }
}

impl fmt::Display for BaseUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A unit name and how to reach its base unit
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitConversion {
    pub unit: String,
    pub base_unit: BaseUnit,
    /// Multiply an amount in `unit` by this to get the base unit amount
    pub factor: f64,
}

impl UnitConversion {
    pub fn new(unit: &str, base_unit: BaseUnit, factor: f64) -> Self {
        Self {
            unit: unit.to_string(),
            base_unit,
            factor,
        }
    }

    pub fn to_base(&self, amount: f64) -> f64 {
        amount * self.factor
    }

    pub fn from_base(&self, amount: f64) -> f64 {
        amount / self.factor
    }
}
