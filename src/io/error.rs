//! Error types for classification, matrix parsing and catalog loading

use crate::model::matrix::Shape;
use crate::model::standard::Standard;
use std::fmt;
use std::path::PathBuf;

/// Main error type for all classification operations
#[derive(Debug)]
pub enum ClassificationError {
    /// Compared matrices disagree in row count or row length
    ///
    /// Raised before any score is computed, so a classification call never
    /// returns a partial result.
    DimensionMismatch {
        /// Label of the reference matrix that failed the check, if any
        standard: Option<Standard>,
        /// Shape of the input matrix
        input: Shape,
        /// Shape of the reference matrix
        reference: Shape,
        /// Shape of the weight matrix, for the weighted formula
        metadata: Option<Shape>,
    },

    /// Formula identifier outside the fixed formula set
    UnsupportedFormula {
        /// Identifier that failed to parse
        name: String,
    },

    /// Selection ran over an empty catalog
    NoCandidates {
        /// Name of the formula or coefficient being selected on
        selection: &'static str,
    },

    /// Weighted formula requested but no weights exist for a standard
    MissingMetadata {
        /// Standard with no weight matrix
        standard: Option<Standard>,
    },

    /// Reference matrix handed to a catalog without a label
    UnlabeledReference {
        /// Position of the matrix in the supplied list
        position: usize,
    },

    /// Matrix source could not be opened or holds no rows
    MatrixUnavailable {
        /// Path of the source
        path: PathBuf,
        /// Underlying I/O error, absent when the source was simply empty
        source: Option<std::io::Error>,
    },

    /// Matrix source holds something other than a rectangular integer grid
    InvalidMatrix {
        /// Path of the source
        path: PathBuf,
        /// 1-based line number of the offending row
        line: usize,
        /// Description of what's wrong with the row
        reason: String,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Runtime parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },
}

fn describe_label(standard: Option<Standard>) -> String {
    standard.map_or_else(|| "unlabeled reference".to_string(), |s| format!("standard {s}"))
}

impl fmt::Display for ClassificationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DimensionMismatch {
                standard,
                input,
                reference,
                metadata,
            } => {
                write!(
                    f,
                    "Input matrix {input} does not match {} {reference}",
                    describe_label(*standard)
                )?;
                if let Some(weights) = metadata {
                    write!(f, " (weights {weights})")?;
                }
                Ok(())
            }
            Self::UnsupportedFormula { name } => {
                write!(f, "Formula '{name}' is not supported")
            }
            Self::NoCandidates { selection } => {
                write!(f, "No standards available to select by {selection}")
            }
            Self::MissingMetadata { standard } => {
                write!(f, "No weight matrix loaded for {}", describe_label(*standard))
            }
            Self::UnlabeledReference { position } => {
                write!(f, "Reference matrix at position {position} has no label")
            }
            Self::MatrixUnavailable { path, source } => match source {
                Some(source) => {
                    write!(f, "Matrix unavailable at '{}': {source}", path.display())
                }
                None => write!(f, "Matrix unavailable at '{}': source is empty", path.display()),
            },
            Self::InvalidMatrix { path, line, reason } => {
                write!(
                    f,
                    "Invalid matrix in '{}' at line {line}: {reason}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
        }
    }
}

impl std::error::Error for ClassificationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::MatrixUnavailable {
                source: Some(source),
                ..
            }
            | Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for classification results
pub type Result<T> = std::result::Result<T, ClassificationError>;

impl From<std::io::Error> for ClassificationError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> ClassificationError {
    ClassificationError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a dimension mismatch error from the matrices that were compared
pub fn dimension_mismatch(
    standard: Option<Standard>,
    input: Shape,
    reference: Shape,
    metadata: Option<Shape>,
) -> ClassificationError {
    ClassificationError::DimensionMismatch {
        standard,
        input,
        reference,
        metadata,
    }
}
