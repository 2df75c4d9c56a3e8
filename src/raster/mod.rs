//! Raster storage for HSLA pixels

/// Owned HSLA image with coordinate accessors and mirroring
pub mod image;

pub use image::HslaImage;
