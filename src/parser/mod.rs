pub mod amount;
pub mod ingredient;
pub mod matchers;
pub mod models;

#[cfg(test)]
mod tests;

pub use amount::parse_amount;
pub use ingredient::*;
pub use matchers::{Matcher, DEFAULT_DESCRIPTORS};
pub use models::*;
