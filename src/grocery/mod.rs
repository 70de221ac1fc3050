pub mod category;
pub mod consolidate;
pub mod models;

pub use category::{
    default_category_rules, CategoryResolver, CategoryRule, KeywordCategorizer, DEFAULT_CATEGORY,
};
pub use consolidate::{normalize_name, ConsolidationEngine, COUNT_UNIT};
pub use models::*;
