//! Collaborators around the engine: files, catalog, output and command line

/// Command-line parsing and batch processing
pub mod cli;
/// File layout constants and output settings
pub mod configuration;
/// Error type shared by the whole crate
pub mod error;
/// Catalog loading from a data root
pub mod loader;
/// Text rendering of results and formula diagrams
pub mod presenter;
/// Progress display for batch runs
pub mod progress;
/// Matrix file parsing and serialization
pub mod reader;
