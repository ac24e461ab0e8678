//! Classification entry points over a full catalog
//!
//! Every call validates the shape of each catalog entry before the first
//! score is computed, then scores all standards and selects the winner:
//! arg-min for distance formulas, arg-max for association coefficients.

use crate::classification::coefficient::Coefficient;
use crate::classification::distance::Formula;
use crate::classification::selection::{Polarity, Score, select};
use crate::io::error::{ClassificationError, Result};
use crate::model::catalog::Catalog;
use crate::model::contingency::ContingencySummary;
use crate::model::matrix::{Matrix, ensure_same_shape, ensure_shapes_agree};
use crate::model::standard::Standard;

/// Winner and full score table for one formula or coefficient
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome<K> {
    /// Formula or coefficient that produced the scores
    pub kind: K,
    /// Selected standard
    pub winner: Standard,
    /// Score of every standard in catalog order
    pub scores: Vec<Score>,
}

/// Results of every requested formula and coefficient for one input
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ClassificationReport {
    /// Distance formula outcomes in request order
    pub formulas: Vec<Outcome<Formula>>,
    /// Coefficient outcomes in request order
    pub coefficients: Vec<Outcome<Coefficient>>,
}

impl ClassificationReport {
    /// Winning standard of each coefficient in request order
    pub fn coefficient_winners(&self) -> Vec<Standard> {
        self.coefficients.iter().map(|outcome| outcome.winner).collect()
    }
}

fn label_of(standard: &Matrix, position: usize) -> Result<Standard> {
    standard
        .label()
        .ok_or(ClassificationError::UnlabeledReference { position })
}

fn weights_for<'a>(catalog: &'a Catalog, standard: &Matrix) -> Result<&'a Matrix> {
    standard
        .label()
        .and_then(|label| catalog.metadata_for(label))
        .ok_or(ClassificationError::MissingMetadata {
            standard: standard.label(),
        })
}

/// Check every catalog entry against the input before any arithmetic
///
/// The weighted formula additionally requires a weight matrix per standard
/// sharing the same shape.
///
/// # Errors
///
/// Returns `DimensionMismatch` for the first incompatible standard, or
/// `MissingMetadata` if `formula` needs weights that are not loaded
pub fn validate_catalog(input: &Matrix, catalog: &Catalog, formula: Option<Formula>) -> Result<()> {
    let needs_weights = formula.is_some_and(Formula::requires_metadata);

    for standard in catalog.standards() {
        if needs_weights {
            ensure_shapes_agree(input, standard, weights_for(catalog, standard)?)?;
        } else {
            ensure_same_shape(input, standard)?;
        }
    }

    Ok(())
}

/// Distance from the input to every standard, in catalog order
///
/// # Errors
///
/// Returns `DimensionMismatch` or `MissingMetadata` from validation
pub fn score_formula(input: &Matrix, catalog: &Catalog, formula: Formula) -> Result<Vec<Score>> {
    validate_catalog(input, catalog, Some(formula))?;

    catalog
        .standards()
        .iter()
        .enumerate()
        .map(|(position, standard)| {
            let weights = if formula.requires_metadata() {
                Some(weights_for(catalog, standard)?)
            } else {
                None
            };
            Ok(Score {
                standard: label_of(standard, position)?,
                value: formula.distance(input, standard, weights)?,
            })
        })
        .collect()
}

/// Similarity of the input to every standard, in catalog order
///
/// # Errors
///
/// Returns `DimensionMismatch` if any standard differs in shape
pub fn score_coefficient(
    input: &Matrix,
    catalog: &Catalog,
    coefficient: Coefficient,
) -> Result<Vec<Score>> {
    validate_catalog(input, catalog, None)?;

    catalog
        .standards()
        .iter()
        .enumerate()
        .map(|(position, standard)| {
            let summary = ContingencySummary::between(input, standard)?;
            Ok(Score {
                standard: label_of(standard, position)?,
                value: coefficient.similarity(&summary),
            })
        })
        .collect()
}

fn formula_outcome(input: &Matrix, catalog: &Catalog, formula: Formula) -> Result<Outcome<Formula>> {
    let scores = score_formula(input, catalog, formula)?;
    let winner = select(&scores, Polarity::Minimize).ok_or(ClassificationError::NoCandidates {
        selection: formula.name(),
    })?;

    Ok(Outcome {
        kind: formula,
        winner,
        scores,
    })
}

fn coefficient_outcome(
    input: &Matrix,
    catalog: &Catalog,
    coefficient: Coefficient,
) -> Result<Outcome<Coefficient>> {
    let scores = score_coefficient(input, catalog, coefficient)?;
    let winner = select(&scores, Polarity::Maximize).ok_or(ClassificationError::NoCandidates {
        selection: coefficient.name(),
    })?;

    Ok(Outcome {
        kind: coefficient,
        winner,
        scores,
    })
}

/// Closest standard under one distance formula
///
/// # Errors
///
/// Returns `DimensionMismatch` or `MissingMetadata` from validation, or
/// `NoCandidates` if the catalog is empty
pub fn classify(input: &Matrix, catalog: &Catalog, formula: Formula) -> Result<Standard> {
    formula_outcome(input, catalog, formula).map(|outcome| outcome.winner)
}

/// Most similar standard under each coefficient
///
/// Labels come back in [`Coefficient::ALL`] order.
///
/// # Errors
///
/// Returns `DimensionMismatch` from validation, or `NoCandidates` if the
/// catalog is empty
pub fn classify_by_coefficients(input: &Matrix, catalog: &Catalog) -> Result<Vec<Standard>> {
    Coefficient::ALL
        .into_iter()
        .map(|coefficient| {
            coefficient_outcome(input, catalog, coefficient).map(|outcome| outcome.winner)
        })
        .collect()
}

/// Run the requested formulas and coefficients against one input
///
/// # Errors
///
/// Propagates the first failure of any requested formula or coefficient
pub fn evaluate(
    input: &Matrix,
    catalog: &Catalog,
    formulas: &[Formula],
    coefficients: &[Coefficient],
) -> Result<ClassificationReport> {
    let formulas = formulas
        .iter()
        .map(|&formula| formula_outcome(input, catalog, formula))
        .collect::<Result<Vec<_>>>()?;
    let coefficients = coefficients
        .iter()
        .map(|&coefficient| coefficient_outcome(input, catalog, coefficient))
        .collect::<Result<Vec<_>>>()?;

    Ok(ClassificationReport {
        formulas,
        coefficients,
    })
}

/// Run every formula and every coefficient against one input
///
/// # Errors
///
/// Propagates the first failure of any formula or coefficient
pub fn classify_all(input: &Matrix, catalog: &Catalog) -> Result<ClassificationReport> {
    evaluate(input, catalog, &Formula::ALL, &Coefficient::ALL)
}
