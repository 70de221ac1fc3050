use crate::parser::models::{ParsedIngredient, ScaledIngredient};
use crate::units::UnitTable;
use std::sync::Arc;

/// Name fragments whose intensity does not grow linearly with batch size
pub const DEFAULT_SEASONINGS: &[&str] = &["salt", "pepper", "spice", "extract", "vanilla"];

/// A count amount this close to a whole number snaps to it
const WHOLE_SNAP: f64 = 0.1;

/// Scales parsed ingredients to a new serving count
#[derive(Debug, Clone)]
pub struct ScalingEngine {
    units: Arc<UnitTable>,
    seasonings: Vec<String>,
}

impl ScalingEngine {
    pub fn new(units: Arc<UnitTable>) -> Self {
        let seasonings = DEFAULT_SEASONINGS.iter().map(|s| s.to_string()).collect();
        Self { units, seasonings }
    }

    pub fn with_seasonings(units: Arc<UnitTable>, seasonings: &[String]) -> Self {
        let seasonings = seasonings
            .iter()
            .map(|s| s.trim().to_lowercase())
            .filter(|s| !s.is_empty())
            .collect();
        Self { units, seasonings }
    }

    /// Scale from `original_servings` to `target_servings`.
    /// Zero original servings counts as one.
    pub fn scale(
        &self,
        parsed: &ParsedIngredient,
        original_servings: u32,
        target_servings: u32,
    ) -> ScaledIngredient {
        self.scale_by_factor(parsed, scale_factor(original_servings, target_servings))
    }

    /// Scale by an arbitrary multiplier. Negative or non-finite factors count as one.
    pub fn scale_by_factor(&self, parsed: &ParsedIngredient, factor: f64) -> ScaledIngredient {
        let factor = if factor.is_finite() && factor >= 0.0 {
            factor
        } else {
            1.0
        };

        let scaled_amount = parsed.amount.map(|amount| self.scale_amount(parsed, amount, factor));

        ScaledIngredient {
            parsed: parsed.clone(),
            scaled_amount,
            scaled_unit: parsed.unit.clone(),
        }
    }

    pub fn scale_all(
        &self,
        parsed: &[ParsedIngredient],
        original_servings: u32,
        target_servings: u32,
    ) -> Vec<ScaledIngredient> {
        parsed
            .iter()
            .map(|p| self.scale(p, original_servings, target_servings))
            .collect()
    }

    pub fn is_seasoning(&self, name: &str) -> bool {
        let name = name.to_lowercase();
        self.seasonings.iter().any(|s| name.contains(s.as_str()))
    }

    fn scale_amount(&self, parsed: &ParsedIngredient, amount: f64, factor: f64) -> f64 {
        let effective = if self.is_seasoning(&parsed.name) {
            factor.sqrt()
        } else {
            factor
        };

        if effective == 1.0 {
            return amount;
        }

        let raw = amount * effective;
        let convertible = parsed
            .unit
            .as_deref()
            .is_some_and(|unit| self.units.is_unit(unit));

        if convertible {
            round_to_hundredths(raw)
        } else {
            round_count(raw)
        }
    }
}

impl Default for ScalingEngine {
    fn default() -> Self {
        Self::new(Arc::new(UnitTable::standard()))
    }
}

pub fn scale_factor(original_servings: u32, target_servings: u32) -> f64 {
    let original = if original_servings == 0 {
        1
    } else {
        original_servings
    };
    f64::from(target_servings) / f64::from(original)
}

fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Whole number if close enough, otherwise the nearest quarter
fn round_count(value: f64) -> f64 {
    let whole = value.round();
    if (value - whole).abs() <= WHOLE_SNAP {
        whole
    } else {
        (value * 4.0).round() / 4.0
    }
}
