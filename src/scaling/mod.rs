pub mod engine;

pub use engine::{scale_factor, ScalingEngine, DEFAULT_SEASONINGS};
