// Cooking unit registry: volume units reduce to ml, weight units to g

pub mod error;
pub mod table;
pub mod types;

pub use error::UnitError;
pub use table::UnitTable;
pub use types::{BaseUnit, UnitConversion};
