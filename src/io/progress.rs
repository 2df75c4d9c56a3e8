//! Batch progress tracking with a per-file stage bar

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;
use std::time::Duration;

/// Processing steps applied to each file, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Decoding the source image
    Load,
    /// Building the partition tree
    Build,
    /// Mirroring the tree
    Flip,
    /// Collapsing subtrees within tolerance
    Prune,
    /// Checking partition invariants
    Verify,
    /// Rendering and encoding the output image
    Save,
}

impl Stage {
    /// Every stage in processing order
    pub const ALL: [Self; 6] = [
        Self::Load,
        Self::Build,
        Self::Flip,
        Self::Prune,
        Self::Verify,
        Self::Save,
    ];

    /// Short label shown next to the stage bar
    pub const fn label(self) -> &'static str {
        match self {
            Self::Load => "loading",
            Self::Build => "building",
            Self::Flip => "flipping",
            Self::Prune => "pruning",
            Self::Verify => "verifying",
            Self::Save => "saving",
        }
    }

    /// One-based position of the stage within [`Self::ALL`]
    pub const fn ordinal(self) -> u64 {
        match self {
            Self::Load => 1,
            Self::Build => 2,
            Self::Flip => 3,
            Self::Prune => 4,
            Self::Verify => 5,
            Self::Save => 6,
        }
    }
}

/// Coordinates progress display for batch operations
///
/// Shows a stage bar for the file being processed and, when more than one
/// file is queued, a batch bar counting finished files.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
    stage_bar: Option<ProgressBar>,
    file_count: usize,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

static STAGE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "{{msg:>10}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{prefix}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] Files: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

impl ProgressManager {
    /// Create a new progress manager
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            batch_bar: None,
            stage_bar: None,
            file_count: 0,
        }
    }

    /// Initialize progress bars based on file count
    pub fn initialize(&mut self, file_count: usize) {
        self.file_count = file_count;
        if file_count == 0 {
            return;
        }

        if file_count > 1 {
            let batch_bar = ProgressBar::new(file_count as u64);
            batch_bar.set_style(BATCH_STYLE.clone());
            self.batch_bar = Some(self.multi_progress.add(batch_bar));
        }

        let stage_bar = ProgressBar::new(Stage::ALL.len() as u64);
        stage_bar.set_style(STAGE_STYLE.clone());
        self.stage_bar = Some(self.multi_progress.add(stage_bar));
    }

    /// Number of files the bars were initialized for
    pub const fn file_count(&self) -> usize {
        self.file_count
    }

    /// Reset the stage bar for a new file
    pub fn start_file(&self, path: &Path) {
        if let Some(ref bar) = self.stage_bar {
            bar.set_position(0);
            bar.set_prefix(
                path.file_name()
                    .unwrap_or_default()
                    .to_string_lossy()
                    .to_string(),
            );
            bar.set_message("");
        }
    }

    /// Report that the current file has entered `stage`
    pub fn enter_stage(&self, stage: Stage) {
        if let Some(ref bar) = self.stage_bar {
            bar.set_message(stage.label());
            bar.set_position(stage.ordinal().saturating_sub(1));
        }
    }

    /// Mark the current file as completed and update batch progress
    pub fn complete_file(&self, nodes: usize, leaves: usize, elapsed: Duration) {
        if let Some(ref bar) = self.stage_bar {
            bar.set_position(Stage::ALL.len() as u64);
            bar.set_message(format!("✓ {leaves}/{nodes} in {:.2}s", elapsed.as_secs_f64()));
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
        if let Some(ref bar) = self.stage_bar {
            bar.finish();
        }
        let _ = self.multi_progress.clear();
    }
}
