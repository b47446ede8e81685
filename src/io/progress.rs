//! Progress display for batch level generation
//!
//! Small batches get one bar per background; larger ones additionally show a
//! single bar counting finished backgrounds, with per-background bars reused
//! for the most recent files.

use crate::io::configuration::MAX_INDIVIDUAL_PROGRESS_BARS;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;

static LEVEL_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{prefix:>24} [{bar:30.green/white}] {pos}/{len} levels {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("=> ")
});

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Backgrounds: [{bar:40.green/white}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

/// Coordinates progress bars for a batch of backgrounds
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
    level_bars: Vec<ProgressBar>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a progress manager with no bars
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            batch_bar: None,
            level_bars: Vec::new(),
        }
    }

    /// Create bars for `file_count` backgrounds
    pub fn initialize(&mut self, file_count: usize) {
        if file_count > MAX_INDIVIDUAL_PROGRESS_BARS {
            let batch_bar = ProgressBar::new(file_count as u64);
            batch_bar.set_style(BATCH_STYLE.clone());
            self.batch_bar = Some(self.multi_progress.add(batch_bar));
        }

        for _ in 0..file_count.min(MAX_INDIVIDUAL_PROGRESS_BARS) {
            let bar = ProgressBar::new(0);
            bar.set_style(LEVEL_STYLE.clone());
            self.level_bars.push(self.multi_progress.add(bar));
        }
    }

    fn bar_for(&self, index: usize) -> Option<&ProgressBar> {
        self.level_bars
            .get(index % MAX_INDIVIDUAL_PROGRESS_BARS.max(1))
    }

    /// Reset the bar for background `index` to count `levels` levels
    pub fn start_file(&self, index: usize, path: &Path, levels: u32) {
        if let Some(bar) = self.bar_for(index) {
            bar.set_prefix(
                path.file_name()
                    .unwrap_or_default()
                    .to_string_lossy()
                    .to_string(),
            );
            bar.set_length(u64::from(levels));
            bar.set_position(0);
            bar.set_message(String::new());
        }
    }

    /// Record a finished level and how many objects it received
    pub fn level_done(&self, index: usize, placed: usize, requested: u32) {
        if let Some(bar) = self.bar_for(index) {
            bar.inc(1);
            bar.set_message(format!("last: {placed}/{requested} objects"));
        }
    }

    /// Mark background `index` as finished
    pub fn complete_file(&self, index: usize) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.inc(1);
        }
        if let Some(bar) = self.bar_for(index) {
            bar.set_message("done".to_string());
        }
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.finish_with_message("All backgrounds processed");
        }
        let _ = self.multi_progress.clear();
    }
}
