//! Binary partition trees over raster images
//!
//! An image is split recursively into halves until every region is a single
//! pixel; each node stores the average color of its region. The tree can be
//! rendered back to an image, pruned by collapsing subtrees whose pixels all
//! lie within a color tolerance of their average, and mirrored.

#![forbid(unsafe_code)]

/// Color values, distance and hue arithmetic
pub mod color;
/// Input/output operations and error handling
pub mod io;
/// Pixel storage for HSLA images
pub mod raster;
/// Partition tree construction, rendering, pruning and flipping
pub mod tree;

pub use color::Hsla;
pub use io::error::{Result, TreeError};
pub use raster::HslaImage;
pub use tree::{PartitionTree, Pruned, Unpruned};
