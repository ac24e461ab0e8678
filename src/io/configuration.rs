//! File layout constants and runtime configuration defaults

// Reference data layout under the data root
/// Data root used when none is given on the command line
pub const DEFAULT_DATA_ROOT: &str = "resources";
/// Directory holding one reference matrix per standard
pub const STANDARDS_DIR: &str = "standards";
/// Directory holding one weight matrix per standard
pub const METADATA_DIR: &str = "meta";

// Matrix file format
/// Extension of matrix files
pub const MATRIX_EXTENSION: &str = "csv";
/// Separator between fields of one row
pub const FIELD_DELIMITER: char = ',';

// Output settings
/// Rule printed above and below each result banner
pub const BANNER_RULE: &str = "-------------------------------------------";
/// Decimal places shown when printing scores
pub const SCORE_PRECISION: usize = 4;

// Progress bar display settings
/// Minimum number of input files before a progress bar is shown
pub const MIN_FILES_FOR_PROGRESS: usize = 2;
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
