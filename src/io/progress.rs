//! Progress display for a generation run

use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;

static COMPOSITE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{bar:30.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks composite generation progress on a single bar
pub struct ProgressManager {
    bar: ProgressBar,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a progress manager with an unstarted bar
    pub fn new() -> Self {
        let bar = ProgressBar::new(0);
        bar.set_style(COMPOSITE_STYLE.clone());
        Self { bar }
    }

    /// Set the total number of composites for this run
    pub fn initialize(&self, total: usize) {
        self.bar.set_length(total as u64);
        self.bar.set_position(0);
    }

    /// Display the composite currently being generated
    pub fn start_output(&self, stem: &str) {
        self.bar.set_message(stem.to_string());
    }

    /// Record one finished composite
    pub fn complete_output(&self) {
        self.bar.inc(1);
    }

    /// Clear the bar and print the final summary
    // Allow print for user feedback on run completion
    #[allow(clippy::print_stderr)]
    pub fn finish(&self, written: usize, output_dir: &Path) {
        self.bar.finish_and_clear();
        eprintln!("{written} composites written to {}", output_dir.display());
    }
}
