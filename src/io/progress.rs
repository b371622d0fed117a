//! Batch progress display with automatic batching for large file sets

use crate::io::configuration::MAX_INDIVIDUAL_PROGRESS_BARS;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;

static STAGE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{prefix:>24} [{bar:30.cyan/blue}] {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Files: [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

/// Processing stage of a single input file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Counting term frequencies
    Extract,
    /// Building the mask
    Mask,
    /// Rendering outputs
    Render,
    /// Writing files
    Export,
}

impl Stage {
    /// Number of stages per file
    pub const COUNT: u64 = 4;

    const fn position(self) -> u64 {
        match self {
            Self::Extract => 0,
            Self::Mask => 1,
            Self::Render => 2,
            Self::Export => 3,
        }
    }

    const fn label(self) -> &'static str {
        match self {
            Self::Extract => "extracting frequencies",
            Self::Mask => "building mask",
            Self::Render => "rendering",
            Self::Export => "exporting",
        }
    }
}

/// Coordinates progress display for batch runs
///
/// Shows one bar per file for small batches; larger batches add a single
/// overall bar and reuse a rolling window of file bars.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
    file_bars: Vec<ProgressBar>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a new progress manager
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            batch_bar: None,
            file_bars: Vec::new(),
        }
    }

    /// Create bars for `file_count` files
    pub fn initialize(&mut self, file_count: usize) {
        if file_count > MAX_INDIVIDUAL_PROGRESS_BARS + 1 {
            let batch_bar = ProgressBar::new(file_count as u64);
            batch_bar.set_style(BATCH_STYLE.clone());
            self.batch_bar = Some(self.multi_progress.add(batch_bar));
        }

        for _ in 0..file_count.min(MAX_INDIVIDUAL_PROGRESS_BARS) {
            let bar = ProgressBar::new(Stage::COUNT);
            bar.set_style(STAGE_STYLE.clone());
            self.file_bars.push(self.multi_progress.add(bar));
        }
    }

    fn bar(&self, index: usize) -> Option<&ProgressBar> {
        self.file_bars.get(index % MAX_INDIVIDUAL_PROGRESS_BARS)
    }

    /// Configure a bar for a new file
    pub fn start_file(&self, index: usize, path: &Path) {
        if let Some(bar) = self.bar(index) {
            bar.reset();
            bar.set_prefix(path.file_name().unwrap_or_default().to_string_lossy().to_string());
            bar.set_message(String::new());
        }
    }

    /// Report the stage a file has reached
    pub fn update_stage(&self, index: usize, stage: Stage) {
        if let Some(bar) = self.bar(index) {
            bar.set_position(stage.position());
            bar.set_message(stage.label());
        }
    }

    /// Mark a file as completed
    pub fn complete_file(&self, index: usize) {
        if let Some(bar) = self.bar(index) {
            bar.set_position(Stage::COUNT);
            bar.set_message("✓ done");
        }
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.inc(1);
        }
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.finish_with_message("All files processed");
        }
        let _ = self.multi_progress.clear();
    }
}
