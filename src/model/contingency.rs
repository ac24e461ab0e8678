//! Co-occurrence sums between an input character and one standard

use crate::io::error::Result;
use crate::model::matrix::{Matrix, ensure_same_shape};
use ndarray::Zip;

/// Aggregate co-occurrence counts feeding the association coefficients
///
/// Every sum except `h` carries a `+1` offset per cell, so for binary
/// inputs `a`, `b` and `g` are strictly positive on any non-empty grid.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ContingencySummary {
    /// Features set in both matrices
    pub a: f64,
    /// Features clear in both matrices
    pub b: f64,
    /// Features set in the input but clear in the standard
    pub g: f64,
    /// Features clear in the input but set in the standard
    pub h: f64,
}

impl ContingencySummary {
    /// Accumulate the four sums over every cell pair
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` if the matrices differ in shape
    pub fn between(input: &Matrix, standard: &Matrix) -> Result<Self> {
        ensure_same_shape(input, standard)?;

        let summary = input.rows().iter().zip(standard.rows()).fold(
            Self::default(),
            |running, (x_row, s_row)| {
                Zip::from(x_row).and(s_row).fold(running, |mut acc, &x, &s| {
                    let x = f64::from(x);
                    let s = f64::from(s);
                    acc.a += x.mul_add(s, 1.0);
                    acc.b += (1.0 - x).mul_add(1.0 - s, 1.0);
                    acc.g += x.mul_add(1.0 - s, 1.0);
                    acc.h += (1.0 - x) * s;
                    acc
                })
            },
        );

        Ok(summary)
    }

    /// Sum of all four counts
    pub const fn total(&self) -> f64 {
        self.a + self.b + self.g + self.h
    }
}
