use lazy_static::lazy_static;
use regex::Regex;

/// Regex fragment for a leading quantity: mixed number ("1 1/2"), fraction
/// ("1/2"), integer or decimal ("2", "1.5", ".5"). Mixed numbers come first so
/// "1 1/2" is never read as "1".
pub const AMOUNT_PATTERN: &str = r"\d+\s+\d+/\d+|\d+/\d+|\d+(?:\.\d+)?|\.\d+";

lazy_static! {
    static ref MIXED: Regex = Regex::new(r"^(\d+)\s+(\d+)/(\d+)$").unwrap();
    static ref FRACTION: Regex = Regex::new(r"^(\d+)/(\d+)$").unwrap();
    static ref DECIMAL: Regex = Regex::new(r"^(?:\d+(?:\.\d+)?|\.\d+)$").unwrap();
}

/// Parse a quantity token into a float.
///
/// Accepts the same grammar as [`AMOUNT_PATTERN`]. A zero denominator makes
/// the token invalid.
pub fn parse_amount(token: &str) -> Option<f64> {
    let token = token.trim();

    if let Some(caps) = MIXED.captures(token) {
        let whole: f64 = caps[1].parse().ok()?;
        let fraction = fraction_value(&caps[2], &caps[3])?;
        return Some(whole + fraction).filter(|v| v.is_finite());
    }

    if let Some(caps) = FRACTION.captures(token) {
        return fraction_value(&caps[1], &caps[2]);
    }

    if DECIMAL.is_match(token) {
        return token.parse::<f64>().ok().filter(|v| v.is_finite());
    }

    None
}

fn fraction_value(numerator: &str, denominator: &str) -> Option<f64> {
    let numerator: f64 = numerator.parse().ok()?;
    let denominator: f64 = denominator.parse().ok()?;
    if denominator == 0.0 {
        return None;
    }
    Some(numerator / denominator).filter(|v| v.is_finite())
}
