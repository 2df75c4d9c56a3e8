//! The owning partition tree and its public operations
//!
//! Pruning decisions assume the leaves are the original single pixels, so a
//! tree may be pruned at most once. The state parameter encodes this:
//! [`PartitionTree::prune`] consumes an [`Unpruned`] tree and returns a
//! [`Pruned`] one, which has no `prune` method. Clones keep their state.

use crate::io::error::{Result, TreeError};
use crate::raster::HslaImage;
use crate::tree::node::Node;
use std::marker::PhantomData;

mod sealed {
    pub trait Sealed {}
    impl Sealed for super::Unpruned {}
    impl Sealed for super::Pruned {}
}

/// Marker for the pruning state of a [`PartitionTree`]
pub trait PruneState: sealed::Sealed {}

/// State of a tree whose leaves are still the original pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Unpruned;

/// State of a tree that has been pruned and must not be pruned again
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Pruned;

impl PruneState for Unpruned {}
impl PruneState for Pruned {}

/// Binary partition tree over an image
///
/// The tree owns its root, and every node owns its children exclusively,
/// so `clone` yields a fully independent deep copy and dropping the tree
/// releases every node once.
#[derive(Debug, Clone, PartialEq)]
pub struct PartitionTree<S: PruneState = Unpruned> {
    root: Node,
    state: PhantomData<S>,
}

impl PartitionTree<Unpruned> {
    /// Build a tree covering the whole of `image`
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::EmptyImage`] if the image has zero width or
    /// height.
    pub fn new(image: &HslaImage) -> Result<Self> {
        if image.is_empty() {
            return Err(TreeError::EmptyImage {
                width: image.width(),
                height: image.height(),
            });
        }
        let tree = Self::rebuild(image);
        tracing::debug!(
            width = image.width(),
            height = image.height(),
            nodes = tree.size(),
            depth = tree.root.depth(),
            "Built partition tree"
        );
        Ok(tree)
    }

    /// Collapse every subtree, as close to the root as possible, whose
    /// leaves all lie within `tolerance` of the subtree root's color
    ///
    /// Each collapsed node keeps its region and average color and becomes a
    /// leaf. `tolerance` is measured with [`crate::Hsla::distance`]; zero
    /// collapses only uniform subtrees, and negative or NaN values collapse
    /// nothing.
    pub fn prune(mut self, tolerance: f64) -> PartitionTree<Pruned> {
        let collapsed = self.root.prune(tolerance);
        tracing::debug!(
            tolerance,
            collapsed,
            nodes = self.root.size(),
            leaves = self.root.leaf_count(),
            "Pruned partition tree"
        );
        PartitionTree {
            root: self.root,
            state: PhantomData,
        }
    }

    // Caller guarantees a non-empty image
    fn rebuild(image: &HslaImage) -> Self {
        Self {
            root: Node::build(image, image.bounds()),
            state: PhantomData,
        }
    }
}

impl<S: PruneState> PartitionTree<S> {
    /// Root node, for inspecting the structure
    pub const fn root(&self) -> &Node {
        &self.root
    }

    /// Total number of nodes, internal and leaf
    pub fn size(&self) -> usize {
        self.root.size()
    }

    /// Number of leaves
    pub fn leaf_count(&self) -> usize {
        self.root.leaf_count()
    }

    /// Width and height of the image the tree covers
    pub const fn dimensions(&self) -> (usize, usize) {
        let region = self.root.region();
        (region.width, region.height)
    }

    /// Reconstruct the image described by the leaves
    pub fn render(&self) -> HslaImage {
        self.root.render()
    }

    /// Check the partition invariants of the current structure
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::InvalidPartition`] if any node's children do not
    /// tile it or the leaves do not cover the image exactly once.
    pub fn verify(&self) -> Result<()> {
        self.root.verify()
    }

    /// Mirror the tree so that it renders flipped left to right
    ///
    /// The current rendering is mirrored and a fresh tree is built from it,
    /// so any pruning is discarded and may be applied again afterwards.
    pub fn flip_horizontal(self) -> PartitionTree<Unpruned> {
        let mut image = self.render();
        image.flip_horizontal();
        tracing::debug!(width = image.width(), height = image.height(), "Flipped horizontally");
        PartitionTree::<Unpruned>::rebuild(&image)
    }

    /// Mirror the tree so that it renders flipped top to bottom
    ///
    /// Like [`Self::flip_horizontal`], this rebuilds from the mirrored
    /// rendering and discards any pruning.
    pub fn flip_vertical(self) -> PartitionTree<Unpruned> {
        let mut image = self.render();
        image.flip_vertical();
        tracing::debug!(width = image.width(), height = image.height(), "Flipped vertically");
        PartitionTree::<Unpruned>::rebuild(&image)
    }
}
