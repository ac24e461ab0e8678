//! Labeled integer feature grid representing one character

use crate::io::error::{Result, dimension_mismatch};
use crate::model::standard::Standard;
use ndarray::{Array1, Array2};
use std::fmt;

/// Row count and the length of every row
///
/// Rows of one matrix may differ in length; two matrices are compatible only
/// when their shapes are equal row for row.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Shape {
    row_lengths: Vec<usize>,
}

impl Shape {
    /// Shape of a grid whose rows all share one length
    pub fn rectangular(rows: usize, cols: usize) -> Self {
        Self {
            row_lengths: vec![cols; rows],
        }
    }

    /// Shape from explicit per-row lengths
    pub const fn from_row_lengths(row_lengths: Vec<usize>) -> Self {
        Self { row_lengths }
    }

    /// Number of rows
    pub const fn rows(&self) -> usize {
        self.row_lengths.len()
    }

    /// Length of every row in order
    pub fn row_lengths(&self) -> &[usize] {
        &self.row_lengths
    }

    /// Common row length, if every row has the same one
    pub fn uniform_cols(&self) -> Option<usize> {
        match self.row_lengths.split_first() {
            None => Some(0),
            Some((&first, rest)) => rest.iter().all(|&len| len == first).then_some(first),
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.uniform_cols() {
            Some(cols) => write!(f, "{}x{cols}", self.rows()),
            None => {
                let lengths: Vec<String> =
                    self.row_lengths.iter().map(ToString::to_string).collect();
                write!(f, "{} rows of lengths [{}]", self.rows(), lengths.join(", "))
            }
        }
    }
}

/// Row-major integer grid with an optional class label
///
/// The input character being classified carries no label; reference and
/// weight matrices are always labeled. Two matrices compare equal when their
/// labels are equal, regardless of content.
#[derive(Debug, Clone)]
pub struct Matrix {
    rows: Vec<Array1<i32>>,
    label: Option<Standard>,
}

impl Matrix {
    /// Wrap a rectangular grid
    pub fn new(data: Array2<i32>, label: Option<Standard>) -> Self {
        let rows = data.rows().into_iter().map(|row| row.to_owned()).collect();
        Self { rows, label }
    }

    /// Build a matrix from row vectors, which may differ in length
    pub fn from_rows(rows: Vec<Vec<i32>>, label: Option<Standard>) -> Self {
        Self {
            rows: rows.into_iter().map(Array1::from).collect(),
            label,
        }
    }

    /// Rows in order
    pub fn rows(&self) -> &[Array1<i32>] {
        &self.rows
    }

    /// Class label, absent for the character being classified
    pub const fn label(&self) -> Option<Standard> {
        self.label
    }

    /// Number of rows and the length of every row
    pub fn shape(&self) -> Shape {
        Shape::from_row_lengths(self.rows.iter().map(Array1::len).collect())
    }

    /// Whether both matrices have identical row count and row lengths
    pub fn has_same_shape(&self, other: &Self) -> bool {
        self.rows.len() == other.rows.len()
            && self
                .rows
                .iter()
                .zip(&other.rows)
                .all(|(mine, theirs)| mine.len() == theirs.len())
    }

    /// Grid as nested row vectors
    pub fn to_rows(&self) -> Vec<Vec<i32>> {
        self.rows.iter().map(Array1::to_vec).collect()
    }
}

impl PartialEq for Matrix {
    fn eq(&self, other: &Self) -> bool {
        self.label == other.label
    }
}

/// Whether input, reference and weights agree pairwise on shape
pub fn shapes_agree(input: &Matrix, reference: &Matrix, weights: &Matrix) -> bool {
    input.has_same_shape(reference) && reference.has_same_shape(weights)
}

/// Require input and reference to share a shape
///
/// # Errors
///
/// Returns `DimensionMismatch` naming the reference's label
pub fn ensure_same_shape(input: &Matrix, reference: &Matrix) -> Result<()> {
    if input.has_same_shape(reference) {
        Ok(())
    } else {
        Err(dimension_mismatch(
            reference.label(),
            input.shape(),
            reference.shape(),
            None,
        ))
    }
}

/// Require input, reference and weights to share a shape
///
/// # Errors
///
/// Returns `DimensionMismatch` reporting all three shapes
pub fn ensure_shapes_agree(input: &Matrix, reference: &Matrix, weights: &Matrix) -> Result<()> {
    if shapes_agree(input, reference, weights) {
        Ok(())
    } else {
        Err(dimension_mismatch(
            reference.label(),
            input.shape(),
            reference.shape(),
            Some(weights.shape()),
        ))
    }
}
