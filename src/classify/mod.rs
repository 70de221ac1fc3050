// Boundary to the external ingredient classification service

pub mod classifier;
pub mod pipeline;

pub use classifier::{ClassifyError, IngredientClassification, IngredientClassifier};
pub use pipeline::{ClassificationSource, ClassifiedIngredient, ClassifiedParser};
