pub mod fraction;

pub use fraction::{format_amount, FractionFormatter};
