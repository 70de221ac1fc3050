// WebAssembly bindings for the quantity engine
use crate::config::EngineConfig;
use crate::engine::QuantityEngine;
use crate::grocery::GroceryLine;
use crate::parser::ParsedIngredient;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct LarderWasm {
    engine: QuantityEngine,
}

impl Default for LarderWasm {
    fn default() -> Self {
        Self {
            engine: QuantityEngine::default(),
        }
    }
}

#[wasm_bindgen]
impl LarderWasm {
    /// Create an engine, optionally from TOML config content
    #[wasm_bindgen(constructor)]
    pub fn new(config_content: Option<String>) -> Result<LarderWasm, JsValue> {
        let config = match config_content {
            Some(content) => EngineConfig::load_from_str(&content)
                .map_err(|e| JsValue::from_str(&format!("Failed to load config: {}", e)))?,
            None => EngineConfig::default(),
        };
        let engine = QuantityEngine::new(&config)
            .map_err(|e| JsValue::from_str(&format!("Failed to build engine: {}", e)))?;
        Ok(Self { engine })
    }

    /// Parse one ingredient line
    /// Returns JSON string of the parsed ingredient
    #[wasm_bindgen]
    pub fn parse_ingredient(&self, line: &str) -> Result<String, JsValue> {
        let parsed = self.engine.parse_ingredient(line);
        serde_json::to_string(&parsed)
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize ingredient: {}", e)))
    }

    /// Scale a parsed ingredient (JSON, as returned by parse_ingredient)
    /// Returns JSON string of the scaled ingredient
    #[wasm_bindgen]
    pub fn scale_ingredient(
        &self,
        parsed_json: &str,
        original_servings: u32,
        target_servings: u32,
    ) -> Result<String, JsValue> {
        let parsed: ParsedIngredient = serde_json::from_str(parsed_json)
            .map_err(|e| JsValue::from_str(&format!("Failed to parse ingredient JSON: {}", e)))?;

        let scaled = self
            .engine
            .scale_ingredient(&parsed, original_servings, target_servings);

        serde_json::to_string(&scaled)
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize ingredient: {}", e)))
    }

    #[wasm_bindgen]
    pub fn format_amount(&self, amount: f64) -> String {
        self.engine.format_amount(amount)
    }

    /// Consolidate a JSON array of {line, recipeId, servingMultiplier}
    /// Returns JSON string array of grocery entries
    #[wasm_bindgen]
    pub fn consolidate(&self, items_json: &str) -> Result<String, JsValue> {
        let lines: Vec<GroceryLine> = serde_json::from_str(items_json)
            .map_err(|e| JsValue::from_str(&format!("Failed to parse items JSON: {}", e)))?;

        let entries = self.engine.consolidate(&lines);

        serde_json::to_string(&entries)
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize entries: {}", e)))
    }
}
