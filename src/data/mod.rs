//! Data module - CSV loading and table transforms

pub mod classify;
pub mod loader;
pub mod transform;

pub use classify::KeywordClassifier;
pub use loader::LoaderError;
pub use transform::TransformError;
