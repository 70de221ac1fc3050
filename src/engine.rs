use crate::classify::{ClassifiedParser, IngredientClassifier};
use crate::config::{ConfigError, EngineConfig};
use crate::format::FractionFormatter;
use crate::grocery::{
    CategoryResolver, ConsolidationEngine, ConsolidationItem, GroceryEntry, GroceryLine,
    KeywordCategorizer,
};
use crate::parser::{IngredientParser, ParsedIngredient, ScaledIngredient};
use crate::scaling::ScalingEngine;
use crate::units::UnitTable;
use std::sync::Arc;
use std::time::Duration;

/// All engine components built from one [`EngineConfig`], sharing a single
/// read-only [`UnitTable`]. Cheap to clone and safe to share between threads.
#[derive(Clone)]
pub struct QuantityEngine {
    units: Arc<UnitTable>,
    parser: IngredientParser,
    scaler: ScalingEngine,
    formatter: FractionFormatter,
    categories: Arc<dyn CategoryResolver>,
    consolidator: ConsolidationEngine,
    classifier_timeout: Duration,
}

impl QuantityEngine {
    pub fn new(config: &EngineConfig) -> Result<Self, ConfigError> {
        let units = config.unit_table()?;
        Ok(Self::build(units, config))
    }

    fn build(units: UnitTable, config: &EngineConfig) -> Self {
        let units = Arc::new(units);
        let categories: Arc<dyn CategoryResolver> =
            Arc::new(KeywordCategorizer::new(&config.categories));

        Self {
            parser: IngredientParser::with_descriptors(units.clone(), &config.descriptors),
            scaler: ScalingEngine::with_seasonings(units.clone(), &config.seasonings),
            formatter: FractionFormatter::new(),
            consolidator: ConsolidationEngine::with_categories(units.clone(), categories.clone()),
            categories,
            classifier_timeout: config.classifier.timeout(),
            units,
        }
    }

    pub fn units(&self) -> &UnitTable {
        &self.units
    }

    pub fn parser(&self) -> &IngredientParser {
        &self.parser
    }

    pub fn scaler(&self) -> &ScalingEngine {
        &self.scaler
    }

    pub fn parse_ingredient(&self, line: &str) -> ParsedIngredient {
        self.parser.parse(line)
    }

    pub fn scale_ingredient(
        &self,
        parsed: &ParsedIngredient,
        original_servings: u32,
        target_servings: u32,
    ) -> ScaledIngredient {
        self.scaler.scale(parsed, original_servings, target_servings)
    }

    /// Parse then scale
    pub fn scale_line(
        &self,
        line: &str,
        original_servings: u32,
        target_servings: u32,
    ) -> ScaledIngredient {
        self.scale_ingredient(&self.parse_ingredient(line), original_servings, target_servings)
    }

    pub fn format_amount(&self, amount: f64) -> String {
        self.formatter.format(amount)
    }

    pub fn consolidate(&self, lines: &[GroceryLine]) -> Vec<GroceryEntry> {
        self.consolidator.consolidate_lines(&self.parser, lines)
    }

    pub fn consolidate_items(&self, items: &[ConsolidationItem]) -> Vec<GroceryEntry> {
        self.consolidator.consolidate(items)
    }

    /// A parser that consults `classifier` first, bounded by the configured timeout
    pub fn classified_parser(
        &self,
        classifier: Option<Arc<dyn IngredientClassifier>>,
    ) -> ClassifiedParser {
        let parser = ClassifiedParser::new(
            self.parser.clone(),
            self.categories.clone(),
            self.classifier_timeout,
        );
        match classifier {
            Some(classifier) => parser.with_classifier(classifier),
            None => parser,
        }
    }

    /// Consolidate using categories from a classifier-backed parser
    pub fn consolidate_classified(
        &self,
        classified: &ClassifiedParser,
        lines: &[GroceryLine],
    ) -> Vec<GroceryEntry> {
        let items: Vec<ConsolidationItem> = lines
            .iter()
            .map(|line| classified.consolidation_item(line))
            .collect();
        self.consolidator.consolidate(&items)
    }
}

impl Default for QuantityEngine {
    fn default() -> Self {
        Self::build(UnitTable::standard(), &EngineConfig::default())
    }
}
