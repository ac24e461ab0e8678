//! Character recognition by comparing feature matrices with reference standards
//!
//! An unknown binary matrix is scored against every labeled standard with a
//! fixed family of distance formulas (closest standard wins) and association
//! coefficients (most similar standard wins).

#![forbid(unsafe_code)]

/// Distance formulas, association coefficients and selection rules
pub mod classification;
/// Matrix files, catalog loading, presentation and the command line
pub mod io;
/// Matrices, labels, contingency sums and the reference catalog
pub mod model;

pub use io::error::{ClassificationError, Result};
