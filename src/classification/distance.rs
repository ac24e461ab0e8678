//! Distance formulas between an input character and one standard
//!
//! Every formula folds a per-cell term over both grids and applies a closing
//! transform to the sum. Lower scores mean closer standards.

use crate::io::error::{ClassificationError, Result};
use crate::model::matrix::{Matrix, ensure_same_shape, ensure_shapes_agree};
use ndarray::Zip;
use std::fmt;
use std::str::FromStr;

/// Fixed set of distance formulas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Formula {
    /// Euclidean distance
    SquareRoot,
    /// Manhattan distance
    Module,
    /// Euclidean distance with per-feature weights
    Coefficient,
    /// Sum of offset difference-over-sum fractions
    ModuleAndFraction,
    /// Angle in degrees derived from offset cell products
    ArcCos,
}

impl Formula {
    /// Every formula in reporting order
    pub const ALL: [Self; 5] = [
        Self::SquareRoot,
        Self::Module,
        Self::Coefficient,
        Self::ModuleAndFraction,
        Self::ArcCos,
    ];

    /// Identifier accepted on the command line
    pub const fn name(self) -> &'static str {
        match self {
            Self::SquareRoot => "with-square-root",
            Self::Module => "with-module",
            Self::Coefficient => "with-coefficient",
            Self::ModuleAndFraction => "with-module-and-fraction",
            Self::ArcCos => "with-arccos",
        }
    }

    /// Whether the formula needs a weight matrix per standard
    pub const fn requires_metadata(self) -> bool {
        matches!(self, Self::Coefficient)
    }

    /// Score one standard against the input
    ///
    /// `weights` is only read by [`Formula::Coefficient`].
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` if the grids differ in shape, or
    /// `MissingMetadata` if the weighted formula gets no weights
    pub fn distance(self, input: &Matrix, standard: &Matrix, weights: Option<&Matrix>) -> Result<f64> {
        match self {
            Self::SquareRoot => euclidean(input, standard),
            Self::Module => manhattan(input, standard),
            Self::Coefficient => {
                let weights = weights.ok_or(ClassificationError::MissingMetadata {
                    standard: standard.label(),
                })?;
                weighted_euclidean(input, standard, weights)
            }
            Self::ModuleAndFraction => module_fraction(input, standard),
            Self::ArcCos => angular(input, standard),
        }
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Formula {
    type Err = ClassificationError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|formula| formula.name() == normalized)
            .ok_or_else(|| ClassificationError::UnsupportedFormula {
                name: s.to_string(),
            })
    }
}

fn fold_cells(input: &Matrix, standard: &Matrix, term: impl Fn(f64, f64) -> f64) -> f64 {
    input
        .rows()
        .iter()
        .zip(standard.rows())
        .fold(0.0, |total, (x_row, s_row)| {
            Zip::from(x_row)
                .and(s_row)
                .fold(total, |sum, &x, &s| sum + term(f64::from(x), f64::from(s)))
        })
}

/// Square root of the summed squared differences
///
/// # Errors
///
/// Returns `DimensionMismatch` if the grids differ in shape
pub fn euclidean(input: &Matrix, standard: &Matrix) -> Result<f64> {
    ensure_same_shape(input, standard)?;
    Ok(fold_cells(input, standard, |x, s| (x - s).powi(2)).sqrt())
}

/// Sum of absolute differences
///
/// # Errors
///
/// Returns `DimensionMismatch` if the grids differ in shape
pub fn manhattan(input: &Matrix, standard: &Matrix) -> Result<f64> {
    ensure_same_shape(input, standard)?;
    Ok(fold_cells(input, standard, |x, s| (x - s).abs()))
}

/// Euclidean distance with each squared difference scaled by its weight
///
/// # Errors
///
/// Returns `DimensionMismatch` unless all three grids share a shape
pub fn weighted_euclidean(input: &Matrix, standard: &Matrix, weights: &Matrix) -> Result<f64> {
    ensure_shapes_agree(input, standard, weights)?;

    let rows = input.rows().iter().zip(standard.rows()).zip(weights.rows());
    let sum = rows.fold(0.0, |total, ((x_row, s_row), w_row)| {
        Zip::from(x_row)
            .and(s_row)
            .and(w_row)
            .fold(total, |sum, &x, &s, &w| {
                f64::from(w).mul_add((f64::from(x) - f64::from(s)).powi(2), sum)
            })
    });

    Ok(sum.sqrt())
}

/// Sum of `(|x - s| + 1) / (|x + s| + 1)` over every cell
///
/// The offsets keep both terms away from zero when both cells are zero.
///
/// # Errors
///
/// Returns `DimensionMismatch` if the grids differ in shape
pub fn module_fraction(input: &Matrix, standard: &Matrix) -> Result<f64> {
    ensure_same_shape(input, standard)?;
    Ok(fold_cells(input, standard, |x, s| {
        ((x - s).abs() + 1.0) / ((x + s).abs() + 1.0)
    }))
}

/// Angle in degrees from the summed offset cell products
///
/// Each cell contributes `(x * s + 1) / ((|x| + 1) * (|s| + 1))`. The sum is
/// folded back into `[-1, 1]` through `cos` before `acos`, so the result
/// always lies in `[0, 180]`.
///
/// # Errors
///
/// Returns `DimensionMismatch` if the grids differ in shape
pub fn angular(input: &Matrix, standard: &Matrix) -> Result<f64> {
    ensure_same_shape(input, standard)?;
    let sum = fold_cells(input, standard, |x, s| {
        x.mul_add(s, 1.0) / ((x.abs() + 1.0) * (s.abs() + 1.0))
    });
    Ok(sum.cos().acos().to_degrees())
}
