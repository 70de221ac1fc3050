use crate::units::error::UnitError;
use crate::units::types::{BaseUnit, UnitConversion};
use std::collections::HashMap;

/// Built-in cooking units: (name, base unit, factor to base)
const STANDARD_UNITS: &[(&str, BaseUnit, f64)] = &[
    // Volume
    ("ml", BaseUnit::Ml, 1.0),
    ("milliliter", BaseUnit::Ml, 1.0),
    ("millilitre", BaseUnit::Ml, 1.0),
    ("l", BaseUnit::Ml, 1000.0),
    ("liter", BaseUnit::Ml, 1000.0),
    ("litre", BaseUnit::Ml, 1000.0),
    ("tsp", BaseUnit::Ml, 5.0),
    ("teaspoon", BaseUnit::Ml, 5.0),
    ("tbsp", BaseUnit::Ml, 15.0),
    ("tablespoon", BaseUnit::Ml, 15.0),
    ("cup", BaseUnit::Ml, 240.0),
    ("floz", BaseUnit::Ml, 30.0),
    ("pint", BaseUnit::Ml, 480.0),
    ("pt", BaseUnit::Ml, 480.0),
    ("quart", BaseUnit::Ml, 960.0),
    ("qt", BaseUnit::Ml, 960.0),
    ("gallon", BaseUnit::Ml, 3840.0),
    ("gal", BaseUnit::Ml, 3840.0),
    // Weight
    ("g", BaseUnit::G, 1.0),
    ("gram", BaseUnit::G, 1.0),
    ("gramme", BaseUnit::G, 1.0),
    ("mg", BaseUnit::G, 0.001),
    ("milligram", BaseUnit::G, 0.001),
    ("kg", BaseUnit::G, 1000.0),
    ("kilogram", BaseUnit::G, 1000.0),
    ("oz", BaseUnit::G, 28.35),
    ("ounce", BaseUnit::G, 28.35),
    ("lb", BaseUnit::G, 453.6),
    ("pound", BaseUnit::G, 453.6),
];

/// Read-only registry of convertible units.
///
/// Lookups are case-insensitive and tolerate a plural "s" and an abbreviation
/// dot ("Tbsp.", "cups"). Volume and weight never convert into each other.
#[derive(Debug, Clone)]
pub struct UnitTable {
    entries: HashMap<String, UnitConversion>,
}

impl UnitTable {
    /// The built-in US/metric cooking units
    pub fn standard() -> Self {
        let entries = STANDARD_UNITS
            .iter()
            .map(|(name, base, factor)| {
                (name.to_string(), UnitConversion::new(name, *base, *factor))
            })
            .collect();
        Self { entries }
    }

    /// The built-in units plus `extra` definitions.
    /// An extra definition replaces a built-in one with the same name.
    pub fn with_definitions(extra: &[UnitConversion]) -> Result<Self, UnitError> {
        let mut table = Self::standard();
        for definition in extra {
            table.insert(definition.clone())?;
        }
        Ok(table)
    }

    fn insert(&mut self, definition: UnitConversion) -> Result<(), UnitError> {
        let key = normalize_token(&definition.unit);
        if key.is_empty() || key.contains(char::is_whitespace) {
            return Err(UnitError::InvalidUnit(definition.unit));
        }
        if !definition.factor.is_finite() || definition.factor <= 0.0 {
            return Err(UnitError::InvalidFactor {
                unit: definition.unit,
                factor: definition.factor,
            });
        }
        let conversion = UnitConversion::new(&key, definition.base_unit, definition.factor);
        self.entries.insert(key, conversion);
        Ok(())
    }

    /// Find the conversion for a unit token ("Cups", "tbsp.", "lbs")
    pub fn lookup(&self, token: &str) -> Option<&UnitConversion> {
        let key = normalize_token(token);
        if key.is_empty() {
            return None;
        }
        if let Some(conversion) = self.entries.get(&key) {
            return Some(conversion);
        }
        key.strip_suffix('s')
            .filter(|singular| !singular.is_empty())
            .and_then(|singular| self.entries.get(singular))
    }

    pub fn is_unit(&self, token: &str) -> bool {
        self.lookup(token).is_some()
    }

    pub fn base_unit_and_factor(&self, token: &str) -> Option<(BaseUnit, f64)> {
        self.lookup(token).map(|c| (c.base_unit, c.factor))
    }

    /// Whether two unit tokens reduce to the same base unit
    pub fn same_base(&self, a: &str, b: &str) -> bool {
        match (self.lookup(a), self.lookup(b)) {
            (Some(a), Some(b)) => a.base_unit == b.base_unit,
            _ => false,
        }
    }

    /// Convert `amount` from one unit to another through their shared base unit.
    /// Returns None when either unit is unknown or the bases differ.
    pub fn convert(&self, amount: f64, from: &str, to: &str) -> Option<f64> {
        let from = self.lookup(from)?;
        let to = self.lookup(to)?;
        if from.base_unit != to.base_unit {
            return None;
        }
        Some(to.from_base(from.to_base(amount)))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for UnitTable {
    fn default() -> Self {
        Self::standard()
    }
}

fn normalize_token(token: &str) -> String {
    token.trim().trim_end_matches('.').to_lowercase()
}
