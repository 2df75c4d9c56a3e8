//! Command-line interface for batch pruning of PNG files

use crate::io::configuration::{
    DEFAULT_LOG_LEVEL, DEFAULT_TOLERANCE, IMAGE_EXTENSION, OUTPUT_SUFFIX,
};
use crate::io::error::{Result, invalid_parameter, io_error};
use crate::io::image::{load_hsla, save_hsla};
use crate::io::progress::{ProgressManager, Stage};
use crate::tree::PartitionTree;
use clap::{ArgAction, Parser};
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "parttree")]
#[command(
    author,
    version,
    about = "Compress images by pruning a binary partition tree"
)]
/// Command-line arguments for the pruning tool
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Input PNG file or directory to process
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Color distance within which a subtree collapses into one leaf
    #[arg(short, long, default_value_t = DEFAULT_TOLERANCE)]
    pub tolerance: f64,

    /// Mirror the image left to right before pruning
    #[arg(long)]
    pub flip_horizontal: bool,

    /// Mirror the image top to bottom before pruning
    #[arg(long)]
    pub flip_vertical: bool,

    /// Check partition invariants of every pruned tree
    #[arg(long)]
    pub verify: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Process files even if output exists
    #[arg(short, long)]
    pub no_skip: bool,

    /// Increase log detail (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Log filter directive implied by the verbosity count
    pub const fn log_directive(&self) -> &'static str {
        match self.verbose {
            0 => DEFAULT_LOG_LEVEL,
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    /// Whether processing a file passes through `stage` under these flags
    pub const fn runs_stage(&self, stage: Stage) -> bool {
        match stage {
            Stage::Flip => self.flip_horizontal || self.flip_vertical,
            Stage::Verify => self.verify,
            Stage::Load | Stage::Build | Stage::Prune | Stage::Save => true,
        }
    }

    /// Validate numeric arguments
    ///
    /// # Errors
    ///
    /// Returns an error if the tolerance is negative, infinite or NaN
    pub fn validate(&self) -> Result<()> {
        if !self.tolerance.is_finite() || self.tolerance < 0.0 {
            return Err(invalid_parameter(
                "tolerance",
                &self.tolerance,
                &"must be a finite, non-negative number",
            ));
        }
        Ok(())
    }
}

/// Outcome of processing one image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    /// Source image
    pub input: PathBuf,
    /// Written rendering of the pruned tree
    pub output: PathBuf,
    /// Pixels in the source image
    pub pixels: usize,
    /// Nodes remaining after pruning
    pub nodes: usize,
    /// Leaves remaining after pruning
    pub leaves: usize,
}

/// Orchestrates batch processing of PNG files with progress tracking
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

    /// Process files according to CLI arguments
    ///
    /// Returns one report per file written; skipped files are not reported.
    ///
    /// # Errors
    ///
    /// Returns an error if argument validation, target validation or file
    /// processing fails
    pub fn process(&mut self) -> Result<Vec<FileReport>> {
        self.cli.validate()?;
        let files = self.collect_files()?;

        if files.is_empty() {
            return Ok(Vec::new());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        let mut reports = Vec::with_capacity(files.len());
        for file in &files {
            reports.push(self.process_file(file)?);
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(reports)
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        if self.cli.target.is_file() {
            if has_image_extension(&self.cli.target) {
                if self.should_process_file(&self.cli.target) {
                    Ok(vec![self.cli.target.clone()])
                } else {
                    Ok(vec![])
                }
            } else {
                Err(io_error("Target file must be a PNG image"))
            }
        } else if self.cli.target.is_dir() {
            let mut files = Vec::new();
            for entry in std::fs::read_dir(&self.cli.target)? {
                let path = entry?.path();
                if has_image_extension(&path)
                    && !is_generated_output(&path)
                    && self.should_process_file(&path)
                {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(io_error("Target must be a PNG file or directory"))
        }
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let output_path = Self::get_output_path(input_path);
        if output_path.exists() {
            tracing::info!(path = %input_path.display(), "Skipping, output exists");
            false
        } else {
            true
        }
    }

    fn process_file(&self, input_path: &Path) -> Result<FileReport> {
        let start_time = Instant::now();
        let output_path = Self::get_output_path(input_path);
        let pm = self.progress_manager.as_ref();
        let enter = |stage| {
            if let Some(pm) = pm.filter(|_| self.cli.runs_stage(stage)) {
                pm.enter_stage(stage);
            }
        };

        if let Some(pm) = pm {
            pm.start_file(input_path);
        }

        enter(Stage::Load);
        let image = load_hsla(input_path)?;

        enter(Stage::Build);
        let mut tree = PartitionTree::new(&image)?;

        enter(Stage::Flip);
        if self.cli.flip_horizontal {
            tree = tree.flip_horizontal();
        }
        if self.cli.flip_vertical {
            tree = tree.flip_vertical();
        }

        enter(Stage::Prune);
        let pruned = tree.prune(self.cli.tolerance);

        enter(Stage::Verify);
        if self.cli.verify {
            pruned.verify()?;
        }

        enter(Stage::Save);
        save_hsla(&pruned.render(), &output_path)?;

        let report = FileReport {
            input: input_path.to_path_buf(),
            output: output_path,
            pixels: image.width() * image.height(),
            nodes: pruned.size(),
            leaves: pruned.leaf_count(),
        };
        tracing::info!(
            path = %report.input.display(),
            pixels = report.pixels,
            nodes = report.nodes,
            leaves = report.leaves,
            elapsed_ms = start_time.elapsed().as_millis(),
            "Pruned image written"
        );

        if let Some(pm) = pm {
            pm.complete_file(report.nodes, report.leaves, start_time.elapsed());
        }

        Ok(report)
    }

    /// Path the pruned rendering of `input_path` is written to
    pub fn get_output_path(input_path: &Path) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let output_name = format!(
            "{}{OUTPUT_SUFFIX}.{IMAGE_EXTENSION}",
            stem.to_string_lossy()
        );

        if let Some(parent) = input_path.parent() {
            parent.join(output_name)
        } else {
            PathBuf::from(output_name)
        }
    }
}

fn has_image_extension(path: &Path) -> bool {
    path.extension().and_then(|s| s.to_str()) == Some(IMAGE_EXTENSION)
}

// Outputs land next to their inputs, so a directory rerun would pick them up
fn is_generated_output(path: &Path) -> bool {
    path.file_stem()
        .is_some_and(|stem| stem.to_string_lossy().ends_with(OUTPUT_SUFFIX))
}
