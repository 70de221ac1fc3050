use crate::parser::amount::{parse_amount, AMOUNT_PATTERN};
use crate::parser::models::ParsedIngredient;
use crate::units::UnitTable;
use lazy_static::lazy_static;
use regex::Regex;

/// Words that read like a unit slot but belong to the ingredient name
pub const DEFAULT_DESCRIPTORS: &[&str] = &[
    "large", "medium", "small", "whole", "fresh", "dried", "chopped", "diced", "sliced", "minced",
];

lazy_static! {
    /// "2 cups flour", "500g sugar", "1 1/2 Tbsp. butter"
    static ref AMOUNT_UNIT_NAME: Regex = Regex::new(&format!(
        r"^({amount})\s*([A-Za-z]+\.?)\s+(.+)$",
        amount = AMOUNT_PATTERN
    ))
    .unwrap();

    /// "flour, 2 cups"
    static ref NAME_AMOUNT_UNIT: Regex = Regex::new(&format!(
        r"^(.+?),\s*({amount})\s*([A-Za-z]+\.?)$",
        amount = AMOUNT_PATTERN
    ))
    .unwrap();

    /// "3 eggs", "2 large onions"
    static ref AMOUNT_REST: Regex =
        Regex::new(&format!(r"^({amount})\s+(.+)$", amount = AMOUNT_PATTERN)).unwrap();

    static ref LEADING_OF: Regex = Regex::new(r"(?i)^of\s+").unwrap();
}

/// Lookup tables a matcher consults
pub struct MatchContext<'a> {
    pub units: &'a UnitTable,
    pub descriptors: &'a [String],
}

/// One rule in the parse cascade
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Matcher {
    /// `<amount> <unit> <name>`
    AmountUnitName,
    /// `<name>, <amount> <unit>`
    NameAmountUnit,
    /// `<amount> <descriptor> <name>`, descriptor kept in the name
    AmountDescriptorName,
    /// `<amount> <name>`
    AmountName,
}

impl Matcher {
    /// Priority order; the first matcher that succeeds wins
    pub const CASCADE: [Matcher; 4] = [
        Matcher::AmountUnitName,
        Matcher::NameAmountUnit,
        Matcher::AmountDescriptorName,
        Matcher::AmountName,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Matcher::AmountUnitName => "amount-unit-name",
            Matcher::NameAmountUnit => "name-amount-unit",
            Matcher::AmountDescriptorName => "amount-descriptor-name",
            Matcher::AmountName => "amount-name",
        }
    }

    /// Try this rule against a trimmed line; `original` is kept verbatim on the result
    pub fn try_match(
        &self,
        original: &str,
        line: &str,
        context: &MatchContext,
    ) -> Option<ParsedIngredient> {
        match self {
            Matcher::AmountUnitName => {
                let caps = AMOUNT_UNIT_NAME.captures(line)?;
                let amount = parse_amount(&caps[1])?;
                let unit = unit_token(&caps[2], context.units)?;
                let name = clean_name(&caps[3])?;
                Some(ParsedIngredient::new(original, Some(amount), Some(unit), name))
            }
            Matcher::NameAmountUnit => {
                let caps = NAME_AMOUNT_UNIT.captures(line)?;
                let name = clean_name(&caps[1])?;
                let amount = parse_amount(&caps[2])?;
                let unit = unit_token(&caps[3], context.units)?;
                Some(ParsedIngredient::new(original, Some(amount), Some(unit), name))
            }
            Matcher::AmountDescriptorName => {
                let caps = AMOUNT_REST.captures(line)?;
                let amount = parse_amount(&caps[1])?;
                let rest = caps[2].trim();
                let first_word = rest.split_whitespace().next()?.to_lowercase();
                let is_descriptor = context.descriptors.iter().any(|d| *d == first_word);
                // A bare descriptor with nothing after it is not a name
                if !is_descriptor || rest.split_whitespace().count() < 2 {
                    return None;
                }
                Some(ParsedIngredient::new(original, Some(amount), None, rest))
            }
            Matcher::AmountName => {
                let caps = AMOUNT_REST.captures(line)?;
                let amount = parse_amount(&caps[1])?;
                let name = clean_name(&caps[2])?;
                Some(ParsedIngredient::new(original, Some(amount), None, name))
            }
        }
    }
}

/// Accept a unit token only if the table knows it; returns it without a trailing dot
fn unit_token<'a>(token: &'a str, units: &UnitTable) -> Option<&'a str> {
    if units.is_unit(token) {
        Some(token.trim_end_matches('.'))
    } else {
        None
    }
}

fn clean_name(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    let name = match LEADING_OF.find(trimmed) {
        Some(m) => &trimmed[m.end()..],
        None => trimmed,
    };
    if name.is_empty() {
        None
    } else {
        Some(name)
    }
}
