//! Structural checks for the partition invariants

use crate::io::error::{Result, TreeError};
use crate::tree::node::{Node, Region};
use bitvec::bitvec;

impl Node {
    /// Check that this subtree is a valid partition of its region
    ///
    /// Every internal node's two children must lie inside it, must not
    /// overlap, and must together cover exactly its area. Independently, the
    /// leaf regions must cover the root region with every pixel hit once.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::InvalidPartition`] naming the first offending
    /// region.
    pub fn verify(&self) -> Result<()> {
        for node in self.nodes() {
            let region = node.region();
            if region.is_empty() {
                return Err(invalid_partition(region, "node covers no pixels"));
            }
            if let Some((first, second)) = node.children() {
                check_children(region, first.region(), second.region())?;
            }
        }
        check_leaf_coverage(self)
    }
}

fn check_children(parent: Region, first: Region, second: Region) -> Result<()> {
    if !parent.contains_region(&first) || !parent.contains_region(&second) {
        return Err(invalid_partition(parent, "child extends beyond its parent"));
    }
    if first.overlaps(&second) {
        return Err(invalid_partition(parent, "children overlap"));
    }
    if first.area() + second.area() != parent.area() {
        return Err(invalid_partition(
            parent,
            format!(
                "children cover {} of {} pixels",
                first.area() + second.area(),
                parent.area()
            ),
        ));
    }
    Ok(())
}

fn check_leaf_coverage(root: &Node) -> Result<()> {
    let bounds = root.region();
    let mut covered = bitvec![0; bounds.area()];

    for leaf in root.leaves() {
        let region = leaf.region();
        if !bounds.contains_region(&region) {
            return Err(invalid_partition(region, "leaf lies outside the root region"));
        }
        for (x, y) in region.pixels() {
            let index = (y - bounds.y) * bounds.width + (x - bounds.x);
            if covered.replace(index, true) {
                return Err(invalid_partition(
                    region,
                    format!("pixel ({x}, {y}) is covered by more than one leaf"),
                ));
            }
        }
    }

    match covered.first_zero() {
        Some(index) => Err(invalid_partition(
            bounds,
            format!(
                "pixel ({}, {}) is not covered by any leaf",
                bounds.x + index % bounds.width,
                bounds.y + index / bounds.width
            ),
        )),
        None => Ok(()),
    }
}

fn invalid_partition(region: Region, reason: impl Into<String>) -> TreeError {
    TreeError::InvalidPartition {
        region,
        reason: reason.into(),
    }
}
