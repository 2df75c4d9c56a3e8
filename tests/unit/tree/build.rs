//! Tests for recursive construction and per-region averaging

#[cfg(test)]
mod tests {
    use parttree::color::hue::angular_distance;
    use parttree::tree::build::region_average;
    use parttree::tree::{Node, Region};
    use parttree::{Hsla, HslaImage};

    fn distinct_2x2() -> HslaImage {
        HslaImage::from_fn(2, 2, |x, y| match (x, y) {
            (0, 0) => Hsla::opaque(0.0, 1.0, 0.5),
            (1, 0) => Hsla::opaque(120.0, 1.0, 0.5),
            (0, _) => Hsla::opaque(240.0, 1.0, 0.5),
            _ => Hsla::opaque(60.0, 0.5, 0.25),
        })
    }

    // Tests a single pixel builds a leaf with the exact pixel color
    // Verified by storing the default color in leaves
    #[test]
    fn test_single_pixel_is_exact_leaf() {
        let color = Hsla::new(33.0, 0.25, 0.75, 0.5);
        let image = HslaImage::filled(1, 1, color);
        let node = Node::build(&image, image.bounds());

        assert!(node.is_leaf());
        assert_eq!(node.color(), color);
        assert_eq!(node.region(), Region::new(0, 0, 1, 1));
    }

    // Tests a 2x2 image splits side by side first and then top/bottom
    // Verified by splitting squares top/bottom
    #[test]
    fn test_two_by_two_structure() {
        let image = distinct_2x2();
        let root = Node::build(&image, image.bounds());

        assert_eq!(root.size(), 7);
        assert_eq!(root.leaf_count(), 4);

        let (left, right) = root.children().expect("root is internal");
        assert_eq!(left.region(), Region::new(0, 0, 1, 2));
        assert_eq!(right.region(), Region::new(1, 0, 1, 2));

        let (top_left, bottom_left) = left.children().expect("column is internal");
        assert_eq!(top_left.region(), Region::new(0, 0, 1, 1));
        assert_eq!(bottom_left.region(), Region::new(0, 1, 1, 1));
        assert_eq!(Some(&top_left.color()), image.get(0, 0));
        assert_eq!(Some(&bottom_left.color()), image.get(0, 1));
    }

    // Tests every leaf of a full build is a single pixel holding that pixel
    // Verified by stopping recursion one level early
    #[test]
    fn test_full_build_leaves_are_pixels() {
        let image = HslaImage::from_fn(5, 3, |x, y| {
            Hsla::opaque((x * 70 + y * 13) as f64, 0.5, (x + y) as f64 / 8.0)
        });
        let root = Node::build(&image, image.bounds());

        assert_eq!(root.leaf_count(), 15);
        for leaf in root.leaves() {
            let region = leaf.region();
            assert!(region.is_single_pixel());
            assert_eq!(Some(&leaf.color()), image.get(region.x, region.y));
        }
    }

    // Tests internal colors average the whole region, not the two child colors
    // Verified by averaging the children's averages
    #[test]
    fn test_internal_color_is_true_region_average() {
        let image = HslaImage::from_fn(3, 1, |x, _| {
            Hsla::opaque(0.0, 0.0, if x == 2 { 0.9 } else { 0.0 })
        });
        let root = Node::build(&image, image.bounds());

        // Children cover 1 and 2 pixels, so equal weighting would give 0.225
        assert!((root.color().l - 0.3).abs() < 1e-12);

        let (_, right) = root.children().expect("root is internal");
        assert!((right.color().l - 0.45).abs() < 1e-12);
    }

    // Tests the average over a region uses circular hue
    // Verified by averaging hue degrees linearly
    #[test]
    fn test_region_average_hue_wraps() {
        let image = HslaImage::from_fn(2, 1, |x, _| {
            Hsla::opaque(if x == 0 { 355.0 } else { 15.0 }, 1.0, 0.5)
        });
        let average = region_average(&image, image.bounds());

        assert!(angular_distance(average.h, 5.0) < 1e-9, "got {}", average.h);
    }

    // Tests averages only read pixels inside the region
    // Verified by averaging the whole image
    #[test]
    fn test_region_average_respects_bounds() {
        let image = HslaImage::from_fn(4, 1, |x, _| Hsla::opaque(0.0, 0.0, x as f64 / 4.0));

        let average = region_average(&image, Region::new(2, 0, 2, 1));
        assert!((average.l - 0.625).abs() < 1e-12);

        let outside = region_average(&image, Region::new(10, 10, 2, 2));
        assert_eq!(outside, Hsla::default());
    }

    // Tests building a sub-region keeps absolute coordinates
    // Verified by resetting the origin to zero
    #[test]
    fn test_build_sub_region() {
        let image =
            HslaImage::from_fn(4, 4, |x, y| Hsla::opaque(0.0, 0.0, (x + 4 * y) as f64 / 16.0));
        let node = Node::build(&image, Region::new(2, 1, 2, 3));

        assert_eq!(node.region(), Region::new(2, 1, 2, 3));
        assert_eq!(node.leaf_count(), 6);
        assert!(node.leaves().all(|leaf| {
            let region = leaf.region();
            Region::new(2, 1, 2, 3).contains(region.x, region.y)
        }));
    }
}
