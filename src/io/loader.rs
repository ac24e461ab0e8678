//! Loading reference standards and weights from a data root

use crate::io::configuration::{MATRIX_EXTENSION, METADATA_DIR, STANDARDS_DIR};
use crate::io::error::{ClassificationError, Result};
use crate::io::reader::read_matrix;
use crate::model::catalog::Catalog;
use crate::model::matrix::Matrix;
use crate::model::standard::Standard;
use std::path::{Path, PathBuf};

/// Catalog plus the standards whose files could not be read
#[derive(Debug, Clone)]
pub struct LoadedCatalog {
    /// Standards and weights that loaded successfully
    pub catalog: Catalog,
    /// Standards with no readable reference file
    pub skipped_standards: Vec<Standard>,
    /// Standards with no readable weight file
    pub skipped_metadata: Vec<Standard>,
}

/// Reads `<root>/standards/<LABEL>.csv` and `<root>/meta/<LABEL>.csv`
#[derive(Debug, Clone)]
pub struct StandardsLoader {
    root: PathBuf,
}

impl StandardsLoader {
    /// Create a loader rooted at a data directory
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Data directory this loader reads from
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the reference file for one standard
    pub fn standard_path(&self, standard: Standard) -> PathBuf {
        self.matrix_path(STANDARDS_DIR, standard)
    }

    /// Path of the weight file for one standard
    pub fn metadata_path(&self, standard: Standard) -> PathBuf {
        self.matrix_path(METADATA_DIR, standard)
    }

    fn matrix_path(&self, directory: &str, standard: Standard) -> PathBuf {
        self.root
            .join(directory)
            .join(format!("{standard}.{MATRIX_EXTENSION}"))
    }

    /// Load every standard and weight matrix that exists
    ///
    /// Unreadable or empty files are skipped and reported; the catalog may
    /// end up empty.
    ///
    /// # Errors
    ///
    /// Returns `InvalidMatrix` if a file exists but is malformed
    pub fn load(&self) -> Result<LoadedCatalog> {
        let (standards, skipped_standards) = Self::load_directory(|s| self.standard_path(s))?;
        let (metadata, skipped_metadata) = Self::load_directory(|s| self.metadata_path(s))?;

        Ok(LoadedCatalog {
            catalog: Catalog::new(standards, metadata)?,
            skipped_standards,
            skipped_metadata,
        })
    }

    fn load_directory(
        path_for: impl Fn(Standard) -> PathBuf,
    ) -> Result<(Vec<Matrix>, Vec<Standard>)> {
        let mut loaded = Vec::new();
        let mut skipped = Vec::new();

        for standard in Standard::ALL {
            match read_matrix(&path_for(standard), Some(standard)) {
                Ok(matrix) => loaded.push(matrix),
                Err(ClassificationError::MatrixUnavailable { .. }) => skipped.push(standard),
                Err(err) => return Err(err),
            }
        }

        Ok((loaded, skipped))
    }
}
