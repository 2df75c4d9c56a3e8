//! Tolerances, output naming and runtime configuration defaults

// Pruning
/// Default color tolerance for pruning, in `Hsla::distance` units
pub const DEFAULT_TOLERANCE: f64 = 0.05;

// Output settings
/// Suffix added to output filenames
pub const OUTPUT_SUFFIX: &str = "_pruned";
/// Extension of accepted input and produced output files
pub const IMAGE_EXTENSION: &str = "png";

// Logging
/// Log directive used when `RUST_LOG` is unset and no `-v` is given
pub const DEFAULT_LOG_LEVEL: &str = "warn";

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
