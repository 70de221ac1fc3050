pub mod classify;
pub mod config;
pub mod engine;
pub mod error;
pub mod format;
pub mod grocery;
pub mod parser;
pub mod scaling;
pub mod units;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use config::{ConfigError, EngineConfig};
pub use engine::QuantityEngine;
pub use error::LarderError;
pub use grocery::{GroceryEntry, GroceryLine};
pub use parser::{parse_amount, ParsedIngredient, ScaledIngredient};

use lazy_static::lazy_static;

lazy_static! {
    /// Engine over the built-in tables, for callers without a config
    static ref DEFAULT_ENGINE: QuantityEngine = QuantityEngine::default();
}

pub fn parse_ingredient(line: &str) -> ParsedIngredient {
    DEFAULT_ENGINE.parse_ingredient(line)
}

pub fn scale_ingredient(
    parsed: &ParsedIngredient,
    original_servings: u32,
    target_servings: u32,
) -> ScaledIngredient {
    DEFAULT_ENGINE.scale_ingredient(parsed, original_servings, target_servings)
}

pub fn format_amount(amount: f64) -> String {
    format::format_amount(amount)
}

pub fn consolidate(items: &[GroceryLine]) -> Vec<GroceryEntry> {
    DEFAULT_ENGINE.consolidate(items)
}
