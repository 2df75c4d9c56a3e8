//! Binary partition trees over images
//!
//! This module contains the tree itself and its operations:
//! - Regions, nodes and traversal
//! - Construction with per-region circular-hue averages
//! - Rendering, pruning, flipping and integrity checks

/// Recursive construction and region averaging
pub mod build;
/// Partition invariant verification
pub mod integrity;
/// Regions, nodes and preorder traversal
pub mod node;
/// The owning tree type and its pruning state
pub mod partition;
/// Tolerance-based subtree collapsing
pub mod prune;
/// Leaf painting into rasters
pub mod render;

pub use node::{Node, Region};
pub use partition::{PartitionTree, PruneState, Pruned, Unpruned};
