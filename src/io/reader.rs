//! Comma-delimited matrix files
//!
//! One line per row, one signed integer per field. Blank lines are skipped
//! and trailing empty fields are dropped, so `1,0,` reads as two columns.
//! Rows may differ in length; compatibility between matrices is checked
//! row for row when they are compared.

use crate::io::configuration::FIELD_DELIMITER;
use crate::io::error::{ClassificationError, Result};
use crate::model::matrix::Matrix;
use crate::model::standard::Standard;
use std::path::{Path, PathBuf};

fn parse_row(line: &str, line_number: usize, path: &Path) -> Result<Vec<i32>> {
    let mut fields: Vec<&str> = line.split(FIELD_DELIMITER).map(str::trim).collect();
    while fields.last().is_some_and(|field| field.is_empty()) {
        fields.pop();
    }

    fields
        .into_iter()
        .map(|field| {
            field
                .parse::<i32>()
                .map_err(|err| ClassificationError::InvalidMatrix {
                    path: path.to_path_buf(),
                    line: line_number,
                    reason: format!("'{field}' is not an integer: {err}"),
                })
        })
        .collect()
}

fn parse_at(text: &str, label: Option<Standard>, path: &Path) -> Result<Matrix> {
    let mut rows = Vec::new();

    for (index, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let row = parse_row(line, index + 1, path)?;
        if row.is_empty() {
            return Err(ClassificationError::InvalidMatrix {
                path: path.to_path_buf(),
                line: index + 1,
                reason: "row holds no values".to_string(),
            });
        }
        rows.push(row);
    }

    if rows.is_empty() {
        return Err(ClassificationError::MatrixUnavailable {
            path: path.to_path_buf(),
            source: None,
        });
    }

    Ok(Matrix::from_rows(rows, label))
}

/// Parse a matrix from in-memory text
///
/// # Errors
///
/// Returns `MatrixUnavailable` if the text holds no rows, or
/// `InvalidMatrix` for non-integer fields and rows without values
pub fn parse_matrix(text: &str, label: Option<Standard>) -> Result<Matrix> {
    parse_at(text, label, Path::new("<memory>"))
}

/// Read a matrix file
///
/// # Errors
///
/// Returns `MatrixUnavailable` if the file cannot be opened or is empty,
/// or `InvalidMatrix` if its content is not UTF-8 or is malformed
pub fn read_matrix(path: &Path, label: Option<Standard>) -> Result<Matrix> {
    let bytes = std::fs::read(path).map_err(|err| ClassificationError::MatrixUnavailable {
        path: path.to_path_buf(),
        source: Some(err),
    })?;

    let text = String::from_utf8(bytes).map_err(|err| {
        let valid = err.as_bytes().get(..err.utf8_error().valid_up_to()).unwrap_or_default();
        ClassificationError::InvalidMatrix {
            path: path.to_path_buf(),
            line: valid.iter().filter(|&&byte| byte == b'\n').count() + 1,
            reason: err.utf8_error().to_string(),
        }
    })?;

    parse_at(&text, label, path)
}

/// Serialize a matrix back to its text form
pub fn to_csv(matrix: &Matrix) -> String {
    let delimiter = FIELD_DELIMITER.to_string();
    matrix
        .rows()
        .iter()
        .map(|row| {
            let fields: Vec<String> = row.iter().map(ToString::to_string).collect();
            format!("{}\n", fields.join(&delimiter))
        })
        .collect()
}

/// Write a matrix file, replacing any existing content
///
/// # Errors
///
/// Returns `FileSystem` if the file cannot be written
pub fn write_matrix(path: &Path, matrix: &Matrix) -> Result<()> {
    std::fs::write(path, to_csv(matrix)).map_err(|err| ClassificationError::FileSystem {
        path: PathBuf::from(path),
        operation: "write",
        source: err,
    })
}
