use crate::parser::matchers::{MatchContext, Matcher, DEFAULT_DESCRIPTORS};
use crate::parser::models::ParsedIngredient;
use crate::units::UnitTable;
use std::sync::Arc;

/// Turns free-text ingredient lines into [`ParsedIngredient`] records.
///
/// Runs [`Matcher::CASCADE`] in order and keeps the first hit. Text no matcher
/// accepts becomes a name-only record, so parsing never fails.
#[derive(Debug, Clone)]
pub struct IngredientParser {
    units: Arc<UnitTable>,
    descriptors: Vec<String>,
}

impl IngredientParser {
    pub fn new(units: Arc<UnitTable>) -> Self {
        let descriptors = DEFAULT_DESCRIPTORS.iter().map(|d| d.to_string()).collect();
        Self { units, descriptors }
    }

    pub fn with_descriptors(units: Arc<UnitTable>, descriptors: &[String]) -> Self {
        let descriptors = descriptors
            .iter()
            .map(|d| d.trim().to_lowercase())
            .filter(|d| !d.is_empty())
            .collect();
        Self { units, descriptors }
    }

    pub fn parse(&self, line: &str) -> ParsedIngredient {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return ParsedIngredient::unparsed(line);
        }

        let context = MatchContext {
            units: &self.units,
            descriptors: &self.descriptors,
        };

        for matcher in Matcher::CASCADE {
            if let Some(parsed) = matcher.try_match(line, trimmed, &context) {
                log::debug!("'{}' matched {}", trimmed, matcher.name());
                return parsed;
            }
        }

        log::debug!("'{}' matched no pattern, keeping as name", trimmed);
        ParsedIngredient::unparsed(line)
    }

    pub fn parse_all<S: AsRef<str>>(&self, lines: &[S]) -> Vec<ParsedIngredient> {
        lines.iter().map(|l| self.parse(l.as_ref())).collect()
    }
}

impl Default for IngredientParser {
    fn default() -> Self {
        Self::new(Arc::new(UnitTable::standard()))
    }
}
