use crate::grocery::category::{CategoryResolver, KeywordCategorizer};
use crate::grocery::models::{ConsolidationItem, GroceryEntry, GroceryLine};
use crate::parser::ingredient::IngredientParser;
use crate::units::UnitTable;
use std::collections::HashMap;
use std::sync::Arc;

/// Unit given to bare counts and to lines with no amount
pub const COUNT_UNIT: &str = "piece";

/// (normalized name, category)
type ConsolidationKey = (String, String);

/// Merges ingredients from many recipes into grocery entries.
///
/// Items sharing a consolidation key are summed when their units match or
/// share a base unit; anything else stays a separate entry under the same
/// name rather than being forced together.
#[derive(Clone)]
pub struct ConsolidationEngine {
    units: Arc<UnitTable>,
    categories: Arc<dyn CategoryResolver>,
}

impl ConsolidationEngine {
    pub fn new(units: Arc<UnitTable>) -> Self {
        Self::with_categories(units, Arc::new(KeywordCategorizer::default()))
    }

    pub fn with_categories(units: Arc<UnitTable>, categories: Arc<dyn CategoryResolver>) -> Self {
        Self { units, categories }
    }

    /// Single pass over `items`; entries come back in first-seen order
    pub fn consolidate(&self, items: &[ConsolidationItem]) -> Vec<GroceryEntry> {
        items
            .iter()
            .fold(Accumulator::default(), |mut acc, item| {
                self.add(&mut acc, item);
                acc
            })
            .finish()
    }

    /// Parse each line, then consolidate
    pub fn consolidate_lines(
        &self,
        parser: &IngredientParser,
        lines: &[GroceryLine],
    ) -> Vec<GroceryEntry> {
        let items: Vec<ConsolidationItem> = lines
            .iter()
            .map(|l| ConsolidationItem::new(parser.parse(&l.line), &l.recipe_id, l.serving_multiplier))
            .collect();
        self.consolidate(&items)
    }

    fn add(&self, acc: &mut Accumulator, item: &ConsolidationItem) {
        let name = normalize_name(&item.parsed.name);
        if name.is_empty() {
            log::debug!("Skipping ingredient with empty name: '{}'", item.parsed.original);
            return;
        }

        let category = item
            .category
            .as_deref()
            .map(|c| c.trim().to_lowercase())
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| self.categories.category_for(&name));

        let (quantity, unit) = match item.parsed.amount {
            Some(amount) => (
                amount * multiplier(item.serving_multiplier),
                item.parsed.unit.clone().unwrap_or_else(|| COUNT_UNIT.to_string()),
            ),
            None => (1.0, COUNT_UNIT.to_string()),
        };

        let key = (name.clone(), category.clone());
        let group = acc.groups.entry(key).or_default();

        for &index in group.iter() {
            let entry = &mut acc.entries[index];
            let addend = if entry.unit.eq_ignore_ascii_case(&unit) {
                Some(quantity)
            } else {
                self.units.convert(quantity, &unit, &entry.unit)
            };

            if let Some(addend) = addend {
                entry.quantity += addend;
                if !entry.source_recipe_ids.contains(&item.recipe_id) {
                    entry.source_recipe_ids.push(item.recipe_id.clone());
                }
                return;
            }
        }

        if !group.is_empty() {
            log::debug!(
                "Keeping '{}' in {} separate: no common unit with existing entries",
                name,
                unit
            );
        }

        group.push(acc.entries.len());
        acc.entries.push(GroceryEntry {
            name,
            category,
            quantity,
            unit,
            source_recipe_ids: vec![item.recipe_id.clone()],
        });
    }
}

#[derive(Default)]
struct Accumulator {
    entries: Vec<GroceryEntry>,
    groups: HashMap<ConsolidationKey, Vec<usize>>,
}

impl Accumulator {
    fn finish(self) -> Vec<GroceryEntry> {
        self.entries
            .into_iter()
            .map(|mut entry| {
                entry.quantity = (entry.quantity * 100.0).round() / 100.0;
                entry
            })
            .collect()
    }
}

/// Lower-case, trimmed, single-spaced
pub fn normalize_name(name: &str) -> String {
    name.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

fn multiplier(value: f64) -> f64 {
    if value.is_finite() && value >= 0.0 {
        value
    } else {
        1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::models::ParsedIngredient;

    fn engine() -> (ConsolidationEngine, IngredientParser) {
        let units = Arc::new(UnitTable::standard());
        (
            ConsolidationEngine::new(units.clone()),
            IngredientParser::new(units),
        )
    }

    fn lines(raw: &[(&str, &str)]) -> Vec<GroceryLine> {
        raw.iter()
            .map(|(line, recipe)| GroceryLine::new(line, recipe, 1.0))
            .collect()
    }

    #[test]
    fn test_exact_unit_merge() {
        let (engine, parser) = engine();
        let entries =
            engine.consolidate_lines(&parser, &lines(&[("1 cup milk", "r1"), ("1 cup milk", "r2")]));
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].quantity, 2.0);
        assert_eq!(entries[0].unit, "cup");
        assert_eq!(entries[0].category, "dairy");
        assert_eq!(entries[0].source_recipe_ids, vec!["r1", "r2"]);
    }

    #[test]
    fn test_blank_names_are_skipped() {
        let (engine, parser) = engine();
        let entries = engine.consolidate_lines(
            &parser,
            &lines(&[("1 cup milk", "r1"), ("   ", "r1"), ("", "r2"), ("2 eggs", "r2")]),
        );
        let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["milk", "eggs"]);
        assert_eq!(entries[0].source_recipe_ids, vec!["r1"]);
    }

    #[test]
    fn test_same_recipe_listed_once() {
        let (engine, parser) = engine();
        let entries =
            engine.consolidate_lines(&parser, &lines(&[("1 cup milk", "r1"), ("1 Cup Milk", "r1")]));
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].quantity, 2.0);
        assert_eq!(entries[0].source_recipe_ids, vec!["r1"]);
    }

    #[test]
    fn test_cross_unit_merge_keeps_first_unit() {
        let (engine, parser) = engine();
        let entries = engine
            .consolidate_lines(&parser, &lines(&[("2 cups milk", "r1"), ("480 ml milk", "r2")]));
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].unit, "cups");
        assert!((entries[0].quantity - 4.0).abs() <= 0.01);

        let reversed = engine
            .consolidate_lines(&parser, &lines(&[("480 ml milk", "r2"), ("2 cups milk", "r1")]));
        assert_eq!(reversed[0].unit, "ml");
        assert!((reversed[0].quantity - 960.0).abs() <= 0.01);
    }

    #[test]
    fn test_incompatible_units_stay_separate() {
        let (engine, parser) = engine();
        let entries = engine.consolidate_lines(
            &parser,
            &lines(&[("1 cup flour", "r1"), ("200 g flour", "r2"), ("1 tbsp flour", "r3")]),
        );
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].unit, "cup");
        assert_eq!(entries[0].quantity, 1.06);
        assert_eq!(entries[1].unit, "g");
        assert_eq!(entries[1].quantity, 200.0);
        assert_eq!(entries[0].name, entries[1].name);
    }

    #[test]
    fn test_counts_and_missing_amounts() {
        let (engine, parser) = engine();
        let entries = engine.consolidate_lines(
            &parser,
            &lines(&[("3 eggs", "r1"), ("2 eggs", "r2"), ("salt", "r1"), ("salt", "r2")]),
        );
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].quantity, 5.0);
        assert_eq!(entries[0].unit, COUNT_UNIT);
        assert_eq!(entries[1].name, "salt");
        assert_eq!(entries[1].quantity, 2.0);
        assert_eq!(entries[1].unit, COUNT_UNIT);
    }

    #[test]
    fn test_serving_multiplier_applied_before_merge() {
        let (engine, parser) = engine();
        let input = vec![
            GroceryLine::new("1 cup rice", "r1", 2.0),
            GroceryLine::new("1/2 cup rice", "r2", 3.0),
        ];
        let entries = engine.consolidate_lines(&parser, &input);
        assert_eq!(entries[0].quantity, 3.5);
    }

    #[test]
    fn test_external_category_splits_key() {
        let (engine, _) = engine();
        let milk = ParsedIngredient::new("1 cup milk", Some(1.0), Some("cup"), "milk");
        let items = vec![
            ConsolidationItem::new(milk.clone(), "r1", 1.0),
            ConsolidationItem::new(milk, "r2", 1.0).with_category("Beverages"),
        ];
        let entries = engine.consolidate(&items);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].category, "dairy");
        assert_eq!(entries[1].category, "beverages");
    }

    #[test]
    fn test_normalize_name() {
        assert_eq!(normalize_name("  Whole   Milk "), "whole milk");
    }
}
