//! Input/output, configuration and error handling

/// Command-line interface and batch file processing
pub mod cli;
/// Compile-time defaults and constants
pub mod configuration;
/// Error type shared across the crate
pub mod error;
/// PNG loading and saving as HSLA rasters
pub mod image;
/// Batch progress display
pub mod progress;
