use crate::classify::classifier::{ClassifyError, IngredientClassification, IngredientClassifier};
use crate::grocery::category::CategoryResolver;
use crate::grocery::consolidate::normalize_name;
use crate::grocery::models::{ConsolidationItem, GroceryLine};
use crate::parser::ingredient::IngredientParser;
use crate::parser::models::ParsedIngredient;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// Where a classified ingredient's data came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassificationSource {
    Classifier,
    Fallback,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClassifiedIngredient {
    pub parsed: ParsedIngredient,
    pub category: String,
    pub source: ClassificationSource,
}

impl ClassifiedIngredient {
    pub fn into_item(self, recipe_id: &str, serving_multiplier: f64) -> ConsolidationItem {
        let category = self.category.clone();
        ConsolidationItem::new(self.parsed, recipe_id, serving_multiplier).with_category(&category)
    }
}

/// Parses lines through the external classifier when one is configured,
/// falling back to the local parser and keyword categories on error or timeout.
/// There is no retry.
#[derive(Clone)]
pub struct ClassifiedParser {
    parser: IngredientParser,
    categories: Arc<dyn CategoryResolver>,
    classifier: Option<Arc<dyn IngredientClassifier>>,
    timeout: Duration,
}

impl ClassifiedParser {
    pub fn new(
        parser: IngredientParser,
        categories: Arc<dyn CategoryResolver>,
        timeout: Duration,
    ) -> Self {
        Self {
            parser,
            categories,
            classifier: None,
            timeout,
        }
    }

    pub fn with_classifier(mut self, classifier: Arc<dyn IngredientClassifier>) -> Self {
        self.classifier = Some(classifier);
        self
    }

    pub fn parse(&self, line: &str) -> ClassifiedIngredient {
        let local = self.parser.parse(line);

        let Some(classifier) = &self.classifier else {
            return self.fallback(local);
        };

        match self.classify_with_timeout(classifier, line) {
            Ok(classification) => self.merge(local, classification),
            Err(e) => {
                log::warn!("Using local parser for '{}': {}", line.trim(), e);
                self.fallback(local)
            }
        }
    }

    pub fn consolidation_item(&self, line: &GroceryLine) -> ConsolidationItem {
        self.parse(&line.line)
            .into_item(&line.recipe_id, line.serving_multiplier)
    }

    fn classify_with_timeout(
        &self,
        classifier: &Arc<dyn IngredientClassifier>,
        line: &str,
    ) -> Result<IngredientClassification, ClassifyError> {
        let (tx, rx) = mpsc::channel();
        let classifier = Arc::clone(classifier);
        let owned = line.to_string();

        thread::spawn(move || {
            // The receiver is gone if we already timed out
            let _ = tx.send(classifier.classify(&owned));
        });

        match rx.recv_timeout(self.timeout) {
            Ok(result) => result,
            Err(RecvTimeoutError::Timeout) => Err(ClassifyError::Timeout(self.timeout)),
            Err(RecvTimeoutError::Disconnected) => Err(ClassifyError::Unavailable(
                "classifier stopped without a result".to_string(),
            )),
        }
    }

    fn fallback(&self, parsed: ParsedIngredient) -> ClassifiedIngredient {
        let category = self.categories.category_for(&normalize_name(&parsed.name));
        ClassifiedIngredient {
            parsed,
            category,
            source: ClassificationSource::Fallback,
        }
    }

    /// Take what the classifier supplied and fill gaps from the local parse
    fn merge(
        &self,
        local: ParsedIngredient,
        classification: IngredientClassification,
    ) -> ClassifiedIngredient {
        let name = non_empty(classification.name).unwrap_or(local.name);
        let amount = classification
            .amount
            .filter(|a| a.is_finite() && *a >= 0.0)
            .or(local.amount);
        let unit = non_empty(classification.unit).or(local.unit);
        let category = non_empty(classification.category)
            .map(|c| c.to_lowercase())
            .unwrap_or_else(|| self.categories.category_for(&normalize_name(&name)));

        ClassifiedIngredient {
            parsed: ParsedIngredient {
                original: local.original,
                amount,
                unit,
                name,
            },
            category,
            source: ClassificationSource::Classifier,
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grocery::category::KeywordCategorizer;

    struct Offline;

    impl IngredientClassifier for Offline {
        fn classify(&self, _line: &str) -> Result<IngredientClassification, ClassifyError> {
            Err(ClassifyError::Unavailable("connection refused".to_string()))
        }
    }

    struct Slow;

    impl IngredientClassifier for Slow {
        fn classify(&self, _line: &str) -> Result<IngredientClassification, ClassifyError> {
            thread::sleep(Duration::from_millis(500));
            Ok(IngredientClassification::default())
        }
    }

    struct Canned(&'static str);

    impl IngredientClassifier for Canned {
        fn classify(&self, _line: &str) -> Result<IngredientClassification, ClassifyError> {
            IngredientClassification::from_json(self.0)
        }
    }

    fn pipeline(timeout_ms: u64) -> ClassifiedParser {
        ClassifiedParser::new(
            IngredientParser::default(),
            Arc::new(KeywordCategorizer::default()),
            Duration::from_millis(timeout_ms),
        )
    }

    #[test]
    fn test_no_classifier_uses_local() {
        let result = pipeline(100).parse("2 cups flour");
        assert_eq!(result.source, ClassificationSource::Fallback);
        assert_eq!(result.parsed, IngredientParser::default().parse("2 cups flour"));
        assert_eq!(result.category, "pantry");
    }

    #[test]
    fn test_failure_falls_back_to_local() {
        let parser = pipeline(100).with_classifier(Arc::new(Offline));
        let result = parser.parse("3 eggs");
        assert_eq!(result.source, ClassificationSource::Fallback);
        assert_eq!(result.parsed, IngredientParser::default().parse("3 eggs"));
        assert_eq!(result.category, "dairy");
    }

    #[test]
    fn test_timeout_falls_back_to_local() {
        let parser = pipeline(20).with_classifier(Arc::new(Slow));
        let result = parser.parse("1/2 tsp salt");
        assert_eq!(result.source, ClassificationSource::Fallback);
        assert_eq!(result.parsed.amount, Some(0.5));
    }

    #[test]
    fn test_malformed_payload_falls_back() {
        let parser = pipeline(1000).with_classifier(Arc::new(Canned("{oops")));
        let result = parser.parse("1 cup milk");
        assert_eq!(result.source, ClassificationSource::Fallback);
        assert_eq!(result.parsed.unit.as_deref(), Some("cup"));
    }

    #[test]
    fn test_classifier_fields_win_and_gaps_fill() {
        let parser = pipeline(1000).with_classifier(Arc::new(Canned(
            r#"{"name": "Whole Milk", "category": "Beverages", "unit": ""}"#,
        )));
        let result = parser.parse("1 cup milk");
        assert_eq!(result.source, ClassificationSource::Classifier);
        assert_eq!(result.parsed.name, "Whole Milk");
        assert_eq!(result.parsed.amount, Some(1.0));
        assert_eq!(result.parsed.unit.as_deref(), Some("cup"));
        assert_eq!(result.category, "beverages");
    }

    #[test]
    fn test_consolidation_item_carries_category() {
        let parser = pipeline(1000).with_classifier(Arc::new(Canned(r#"{"category": "baking"}"#)));
        let item = parser.consolidation_item(&GroceryLine::new("2 cups flour", "r1", 2.0));
        assert_eq!(item.category.as_deref(), Some("baking"));
        assert_eq!(item.recipe_id, "r1");
        assert_eq!(item.serving_multiplier, 2.0);
    }
}
