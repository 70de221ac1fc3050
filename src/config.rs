use crate::grocery::category::{default_category_rules, CategoryRule};
use crate::parser::matchers::DEFAULT_DESCRIPTORS;
use crate::scaling::engine::DEFAULT_SEASONINGS;
use crate::units::{UnitConversion, UnitError, UnitTable};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid config: {0}")]
    Toml(#[from] toml::de::Error),
    #[error(transparent)]
    Unit(#[from] UnitError),
}

/// Lookup tables for the engine. Every field has a default, so an empty
/// file reproduces the built-in behaviour.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EngineConfig {
    // Units added to (or overriding) the built-in table
    #[serde(default)]
    pub units: Vec<UnitConversion>,

    // Name fragments that get square-root scaling
    #[serde(default = "default_seasonings")]
    pub seasonings: Vec<String>,

    // Words after the amount that are part of the name, not a unit
    #[serde(default = "default_descriptors")]
    pub descriptors: Vec<String>,

    // Keyword fallback for grocery categories, in priority order
    #[serde(default = "default_category_rules")]
    pub categories: Vec<CategoryRule>,

    #[serde(default)]
    pub classifier: ClassifierConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ClassifierConfig {
    // How long to wait for the external classifier before using the local parser
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl ClassifierConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            timeout_ms: default_timeout_ms(),
        }
    }
}

fn default_seasonings() -> Vec<String> {
    DEFAULT_SEASONINGS.iter().map(|s| s.to_string()).collect()
}

fn default_descriptors() -> Vec<String> {
    DEFAULT_DESCRIPTORS.iter().map(|d| d.to_string()).collect()
}

fn default_timeout_ms() -> u64 {
    2000
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            units: Vec::new(),
            seasonings: default_seasonings(),
            descriptors: default_descriptors(),
            categories: default_category_rules(),
            classifier: ClassifierConfig::default(),
        }
    }
}

impl EngineConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::load_from_str(&content)?;
        log::info!(
            "Loaded config from {} ({} extra units)",
            path.display(),
            config.units.len()
        );
        Ok(config)
    }

    pub fn load_from_str(content: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = toml::from_str(content)?;
        // Surface bad unit definitions at load time rather than first use
        config.unit_table()?;
        Ok(config)
    }

    pub fn unit_table(&self) -> Result<UnitTable, ConfigError> {
        Ok(UnitTable::with_definitions(&self.units)?)
    }
}
