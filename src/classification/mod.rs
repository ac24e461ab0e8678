//! Classification engine: formulas, selection rules and orchestration

/// Association coefficients over contingency summaries
pub mod coefficient;
/// Distance formulas between two equally shaped matrices
pub mod distance;
/// Entry points classifying an input against a catalog
pub mod engine;
/// Arg-min and arg-max selection over score tables
pub mod selection;

pub use coefficient::Coefficient;
pub use distance::Formula;
pub use engine::{classify, classify_all, classify_by_coefficients};
