//! Command-line interface for classifying matrix files against the standards

use crate::classification::coefficient::Coefficient;
use crate::classification::distance::Formula;
use crate::classification::engine::evaluate;
use crate::io::configuration::{DEFAULT_DATA_ROOT, MATRIX_EXTENSION};
use crate::io::error::{ClassificationError, Result, invalid_parameter};
use crate::io::loader::{LoadedCatalog, StandardsLoader};
use crate::io::presenter::{render_catalog_summary, render_load_warnings, render_report};
use crate::io::progress::ProgressManager;
use crate::io::reader::read_matrix;
use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "charmatch")]
#[command(
    author,
    version,
    about = "Recognize a character matrix by comparing it with reference standards"
)]
/// Command-line arguments for the classifier
pub struct Cli {
    /// Matrix file, or directory of matrix files, to classify
    #[arg(short = 'f', long = "file", value_name = "TARGET")]
    pub target: PathBuf,

    /// Directory containing the `standards` and `meta` folders
    #[arg(short, long, default_value = DEFAULT_DATA_ROOT)]
    pub data_root: PathBuf,

    /// Run a single distance formula instead of all five
    #[arg(long, value_name = "NAME")]
    pub formula: Option<Formula>,

    /// Skip the association coefficients
    #[arg(long)]
    pub no_coefficients: bool,

    /// Print the score of every standard
    #[arg(short, long)]
    pub scores: bool,

    /// Suppress progress output and warnings
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Distance formulas selected by the arguments
    pub fn formulas(&self) -> Vec<Formula> {
        self.formula
            .map_or_else(|| Formula::ALL.to_vec(), |formula| vec![formula])
    }

    /// Association coefficients selected by the arguments
    pub fn coefficients(&self) -> Vec<Coefficient> {
        if self.no_coefficients {
            Vec::new()
        } else {
            Coefficient::ALL.to_vec()
        }
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Loads the catalog once and classifies every target file against it
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Classify files according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog cannot be loaded, an input file is
    /// unavailable or malformed, or classification fails
    pub fn process(&mut self) -> Result<()> {
        let loaded = StandardsLoader::new(&self.cli.data_root).load()?;
        if !self.cli.quiet {
            self.report_catalog(&loaded);
        }

        let files = self.collect_files()?;
        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        let mut reports = Vec::with_capacity(files.len());
        for file in &files {
            if let Some(ref pm) = self.progress_manager {
                pm.start_file(file);
            }

            reports.push(self.classify_file(file, &loaded)?);

            if let Some(ref pm) = self.progress_manager {
                pm.complete_file();
            }
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        for report in &reports {
            Self::emit(report);
        }

        Ok(())
    }

    /// Classify one file and render its report
    ///
    /// # Errors
    ///
    /// Returns `MatrixUnavailable` or `InvalidMatrix` for a bad input file,
    /// or any classification error
    pub fn classify_file(&self, path: &Path, loaded: &LoadedCatalog) -> Result<String> {
        let input = read_matrix(path, None)?;
        let report = evaluate(
            &input,
            &loaded.catalog,
            &self.cli.formulas(),
            &self.cli.coefficients(),
        )?;

        Ok(render_report(
            &path.display().to_string(),
            &report,
            self.cli.scores,
        ))
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        if !self.cli.target.is_dir() {
            return Ok(vec![self.cli.target.clone()]);
        }

        let mut files = Vec::new();
        let entries =
            std::fs::read_dir(&self.cli.target).map_err(|err| ClassificationError::FileSystem {
                path: self.cli.target.clone(),
                operation: "read directory",
                source: err,
            })?;
        for entry in entries {
            let path = entry?.path();
            if path.extension().and_then(|s| s.to_str()) == Some(MATRIX_EXTENSION) {
                files.push(path);
            }
        }

        if files.is_empty() {
            return Err(invalid_parameter(
                "file",
                &self.cli.target.display(),
                &format!("directory holds no .{MATRIX_EXTENSION} files"),
            ));
        }

        files.sort();
        Ok(files)
    }

    // Allow print for user feedback about standards that could not be loaded
    #[allow(clippy::print_stderr)]
    fn report_catalog(&self, loaded: &LoadedCatalog) {
        Self::emit(&render_catalog_summary(loaded));

        let weights_required = self
            .cli
            .formulas()
            .iter()
            .any(|formula| formula.requires_metadata());
        for warning in render_load_warnings(loaded, weights_required) {
            eprintln!("{warning}");
        }
    }

    // Allow print for classification results, the program's output
    #[allow(clippy::print_stdout)]
    fn emit(text: &str) {
        println!("{text}");
    }
}
