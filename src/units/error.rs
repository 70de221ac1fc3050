use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum UnitError {
    #[error("Invalid unit name: '{0}'")]
    InvalidUnit(String),
    #[error("Invalid conversion factor {factor} for unit '{unit}'")]
    InvalidFactor { unit: String, factor: f64 },
}
