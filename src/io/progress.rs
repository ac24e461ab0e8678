//! Batch progress display when classifying a directory of inputs

use crate::io::configuration::{MIN_FILES_FOR_PROGRESS, PROGRESS_BAR_WIDTH};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] Files: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Single progress bar over the files of one run
///
/// Stays hidden for runs below [`MIN_FILES_FOR_PROGRESS`] files.
pub struct ProgressManager {
    bar: Option<ProgressBar>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a manager with no bar yet
    pub const fn new() -> Self {
        Self { bar: None }
    }

    /// Show a bar if the batch is large enough
    pub fn initialize(&mut self, file_count: usize) {
        if file_count >= MIN_FILES_FOR_PROGRESS {
            let bar = ProgressBar::new(file_count as u64);
            bar.set_style(BATCH_STYLE.clone());
            self.bar = Some(bar);
        }
    }

    /// Whether a bar is currently displayed
    pub const fn is_visible(&self) -> bool {
        self.bar.is_some()
    }

    /// Name the file being classified
    pub fn start_file(&self, path: &Path) {
        if let Some(ref bar) = self.bar {
            let display_name = path
                .file_name()
                .unwrap_or_default()
                .to_string_lossy()
                .to_string();
            bar.set_message(display_name);
        }
    }

    /// Advance past a finished file
    pub fn complete_file(&self) {
        if let Some(ref bar) = self.bar {
            bar.inc(1);
        }
    }

    /// Remove the bar from the terminal
    pub fn finish(&self) {
        if let Some(ref bar) = self.bar {
            bar.finish_and_clear();
        }
    }
}
