//! Tolerance-based collapsing of subtrees into leaves

use crate::tree::node::Node;

impl Node {
    /// Whether every leaf under this node is within `tolerance` of this
    /// node's average color
    ///
    /// A leaf is prunable at any non-negative tolerance. A negative or NaN
    /// tolerance admits nothing.
    pub fn is_prunable(&self, tolerance: f64) -> bool {
        let reference = self.color();
        self.leaves()
            .all(|leaf| within_tolerance(reference.distance(&leaf.color()), tolerance))
    }

    // Collapses the highest prunable subtrees, top-down. The predicate for a
    // node is decided before anything beneath it changes, so every decision
    // sees the leaves as built. Returns the number of subtrees collapsed.
    pub(crate) fn prune(&mut self, tolerance: f64) -> usize {
        if self.is_leaf() {
            return 0;
        }
        if self.is_prunable(tolerance) {
            return usize::from(self.collapse());
        }
        self.children_mut().map_or(0, |[first, second]| {
            first.prune(tolerance) + second.prune(tolerance)
        })
    }
}

/// Inclusive tolerance test
///
/// Negative and NaN tolerances reject every distance.
pub fn within_tolerance(distance: f64, tolerance: f64) -> bool {
    tolerance >= 0.0 && distance <= tolerance
}
