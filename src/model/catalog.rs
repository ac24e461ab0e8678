//! Reference standards and their per-feature weights

use crate::io::error::{ClassificationError, Result};
use crate::model::matrix::Matrix;
use crate::model::standard::Standard;
use std::collections::BTreeMap;

/// Labeled reference matrices the engine classifies against
///
/// Standards are kept in [`Standard`] order with at most one matrix per
/// label; a later matrix for the same label replaces the earlier one.
/// Weights are looked up by label for the weighted formula.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    standards: Vec<Matrix>,
    metadata: BTreeMap<Standard, Matrix>,
}

impl Catalog {
    /// Build a catalog from reference and weight matrices
    ///
    /// # Errors
    ///
    /// Returns `UnlabeledReference` if any matrix has no label
    pub fn new(standards: Vec<Matrix>, metadata: Vec<Matrix>) -> Result<Self> {
        let mut by_label = BTreeMap::new();
        for (position, matrix) in standards.into_iter().enumerate() {
            let label = matrix
                .label()
                .ok_or(ClassificationError::UnlabeledReference { position })?;
            by_label.insert(label, matrix);
        }

        let mut weights = BTreeMap::new();
        for (position, matrix) in metadata.into_iter().enumerate() {
            let label = matrix
                .label()
                .ok_or(ClassificationError::UnlabeledReference { position })?;
            weights.insert(label, matrix);
        }

        Ok(Self {
            standards: by_label.into_values().collect(),
            metadata: weights,
        })
    }

    /// Reference matrices in catalog order
    pub fn standards(&self) -> &[Matrix] {
        &self.standards
    }

    /// Weight matrix paired with a standard
    pub fn metadata_for(&self, standard: Standard) -> Option<&Matrix> {
        self.metadata.get(&standard)
    }

    /// Labels of every loaded standard
    pub fn labels(&self) -> Vec<Standard> {
        self.standards.iter().filter_map(Matrix::label).collect()
    }

    /// Labels of every loaded weight matrix
    pub fn metadata_labels(&self) -> Vec<Standard> {
        self.metadata.keys().copied().collect()
    }

    /// Whether no standards are loaded
    pub const fn is_empty(&self) -> bool {
        self.standards.is_empty()
    }
}
