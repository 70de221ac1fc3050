use crate::format::fraction::format_amount;
use crate::grocery::consolidate::COUNT_UNIT;
use crate::parser::models::ParsedIngredient;
use serde::{Deserialize, Serialize};

/// One line of a grocery list, possibly fed by several recipes
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroceryEntry {
    pub name: String,
    pub category: String,
    pub quantity: f64,
    pub unit: String,
    pub source_recipe_ids: Vec<String>,
}

impl GroceryEntry {
    /// Human-readable line, e.g. "4 cups milk" or "6 eggs"
    pub fn display(&self) -> String {
        if self.unit == COUNT_UNIT {
            format!("{} {}", format_amount(self.quantity), self.name)
        } else {
            format!("{} {} {}", format_amount(self.quantity), self.unit, self.name)
        }
    }
}

fn default_multiplier() -> f64 {
    1.0
}

/// Raw input for grocery consolidation
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroceryLine {
    pub line: String,
    pub recipe_id: String,
    #[serde(default = "default_multiplier")]
    pub serving_multiplier: f64,
}

impl GroceryLine {
    pub fn new(line: &str, recipe_id: &str, serving_multiplier: f64) -> Self {
        Self {
            line: line.to_string(),
            recipe_id: recipe_id.to_string(),
            serving_multiplier,
        }
    }
}

/// An already parsed ingredient headed for consolidation
#[derive(Debug, Clone, PartialEq)]
pub struct ConsolidationItem {
    pub parsed: ParsedIngredient,
    pub recipe_id: String,
    pub serving_multiplier: f64,
    /// Category from an external classifier; the keyword fallback is used when absent
    pub category: Option<String>,
}

impl ConsolidationItem {
    pub fn new(parsed: ParsedIngredient, recipe_id: &str, serving_multiplier: f64) -> Self {
        Self {
            parsed,
            recipe_id: recipe_id.to_string(),
            serving_multiplier,
            category: None,
        }
    }

    pub fn with_category(mut self, category: &str) -> Self {
        self.category = Some(category.to_string());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grocery_line_default_multiplier() {
        let line: GroceryLine =
            serde_json::from_str(r#"{"line": "1 cup milk", "recipeId": "r1"}"#).unwrap();
        assert_eq!(line.serving_multiplier, 1.0);
        assert_eq!(line.recipe_id, "r1");
    }

    #[test]
    fn test_entry_display() {
        let mut entry = GroceryEntry {
            name: "milk".to_string(),
            category: "dairy".to_string(),
            quantity: 4.0,
            unit: "cups".to_string(),
            source_recipe_ids: vec!["r1".to_string()],
        };
        assert_eq!(entry.display(), "4 cups milk");

        entry.name = "eggs".to_string();
        entry.quantity = 6.0;
        entry.unit = COUNT_UNIT.to_string();
        assert_eq!(entry.display(), "6 eggs");
    }

    #[test]
    fn test_entry_serializes_camel_case() {
        let entry = GroceryEntry {
            name: "milk".to_string(),
            category: "dairy".to_string(),
            quantity: 2.0,
            unit: "cup".to_string(),
            source_recipe_ids: vec!["r1".to_string(), "r2".to_string()],
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["sourceRecipeIds"][1], "r2");
    }
}
