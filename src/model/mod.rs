//! Data model shared by the engine and its loaders

/// Reference standards and weights grouped for the engine
pub mod catalog;
/// Co-occurrence sums consumed by association coefficients
pub mod contingency;
/// Labeled integer feature grid
pub mod matrix;
/// Closed enumeration of class labels
pub mod standard;

pub use catalog::Catalog;
pub use contingency::ContingencySummary;
pub use matrix::{Matrix, Shape};
pub use standard::Standard;
