//! Tests for partition invariant checks

#[cfg(test)]
mod tests {
    use parttree::tree::{Node, Region};
    use parttree::{Hsla, HslaImage, TreeError};

    fn leaf(x: usize, y: usize, width: usize, height: usize) -> Node {
        Node::leaf(Region::new(x, y, width, height), Hsla::WHITE)
    }

    fn parent(width: usize, first: Node, second: Node) -> Node {
        Node::branch(Region::new(0, 0, width, 1), Hsla::WHITE, first, second)
    }

    fn failure_reason(node: &Node) -> String {
        match node.verify() {
            Err(TreeError::InvalidPartition { reason, .. }) => reason,
            other => panic!("expected an invalid partition, got {other:?}"),
        }
    }

    // Tests built trees satisfy every invariant
    // Verified by splitting odd dimensions into equal halves
    #[test]
    fn test_built_tree_verifies() {
        let image = HslaImage::from_fn(7, 5, |x, y| Hsla::opaque((x * y) as f64, 0.5, 0.5));
        let root = Node::build(&image, image.bounds());

        assert!(root.verify().is_ok());
    }

    // Tests overlapping children are rejected
    // Verified by checking only the summed area
    #[test]
    fn test_overlapping_children_rejected() {
        let node = parent(2, leaf(0, 0, 1, 1), leaf(0, 0, 1, 1));

        assert!(failure_reason(&node).contains("overlap"));
    }

    // Tests children leaving a gap are rejected
    // Verified by checking only containment
    #[test]
    fn test_gap_between_children_rejected() {
        let node = parent(3, leaf(0, 0, 1, 1), leaf(1, 0, 1, 1));

        assert!(failure_reason(&node).contains("2 of 3"));
    }

    // Tests a child reaching past its parent is rejected
    // Verified by checking only the leaf coverage mask
    #[test]
    fn test_child_outside_parent_rejected() {
        let node = parent(2, leaf(0, 0, 1, 1), leaf(1, 0, 2, 1));

        assert!(failure_reason(&node).contains("beyond"));
    }

    // Tests nodes covering no pixels are rejected
    // Verified by accepting empty leaves
    #[test]
    fn test_empty_node_rejected() {
        assert!(failure_reason(&leaf(0, 0, 0, 1)).contains("no pixels"));
    }

    // Tests the error names the offending parent region
    // Verified by reporting the child region
    #[test]
    fn test_error_names_parent_region() {
        let node = parent(2, leaf(0, 0, 1, 1), leaf(0, 0, 1, 1));

        match node.verify() {
            Err(TreeError::InvalidPartition { region, .. }) => {
                assert_eq!(region, Region::new(0, 0, 2, 1));
            }
            other => panic!("expected an invalid partition, got {other:?}"),
        }
    }
}
