//! Tests for painting leaves back into images

#[cfg(test)]
mod tests {
    use parttree::tree::{Node, Region};
    use parttree::{Hsla, HslaImage};

    fn gradient(width: usize, height: usize) -> HslaImage {
        HslaImage::from_fn(width, height, |x, y| {
            Hsla::new((x * 40) as f64, 0.8, (y + 1) as f64 / 10.0, 1.0 - x as f64 / 20.0)
        })
    }

    // Tests an unpruned subtree renders its source exactly
    // Verified by painting internal nodes after leaves
    #[test]
    fn test_render_reproduces_source() {
        let image = gradient(5, 3);
        let root = Node::build(&image, image.bounds());

        assert_eq!(root.render(), image);
    }

    // Tests a non-root node renders its own block shifted to the origin
    // Verified by painting at absolute coordinates
    #[test]
    fn test_render_subtree_is_translated() {
        let image = gradient(4, 2);
        let root = Node::build(&image, image.bounds());
        let (_, right) = root.children().expect("root is internal");
        let rendered = right.render();

        assert_eq!(rendered.width(), 2);
        assert_eq!(rendered.height(), 2);
        for (x, y, color) in rendered.enumerate_pixels() {
            assert_eq!(Some(color), image.get(x + 2, y));
        }
    }

    // Tests a leaf covering a block paints the whole block flat
    // Verified by painting only the leaf's origin pixel
    #[test]
    fn test_leaf_block_is_painted_flat() {
        let block = Hsla::opaque(200.0, 0.5, 0.5);
        let pixel = Hsla::opaque(10.0, 0.9, 0.2);
        let root = Node::branch(
            Region::new(0, 0, 3, 2),
            Hsla::BLACK,
            Node::leaf(Region::new(0, 0, 1, 2), pixel),
            Node::leaf(Region::new(1, 0, 2, 2), block),
        );
        let rendered = root.render();

        assert_eq!(rendered.get(0, 1), Some(&pixel));
        for (x, y) in Region::new(1, 0, 2, 2).pixels() {
            assert_eq!(rendered.get(x, y), Some(&block));
        }
        assert!(rendered.enumerate_pixels().all(|(_, _, color)| *color != Hsla::BLACK));
    }

    // Tests painting into a larger canvas leaves other pixels untouched
    // Verified by clearing the canvas before painting
    #[test]
    fn test_paint_into_existing_canvas() {
        let leaf = Node::leaf(Region::new(0, 0, 1, 1), Hsla::BLACK);
        let mut canvas = HslaImage::new(2, 2);
        leaf.paint(&mut canvas);

        assert_eq!(canvas.get(0, 0), Some(&Hsla::BLACK));
        assert_eq!(canvas.get(1, 1), Some(&Hsla::WHITE));
    }
}
