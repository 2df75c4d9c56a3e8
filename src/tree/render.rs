//! Painting leaf colors back into rasters

use crate::raster::HslaImage;
use crate::tree::node::Node;

impl Node {
    /// Render this subtree into a new image the size of its region
    ///
    /// Only leaves paint; each fills its whole region with its color.
    /// Coordinates are shifted so the node's upper-left pixel lands at the
    /// image origin.
    pub fn render(&self) -> HslaImage {
        let region = self.region();
        let mut image = HslaImage::new(region.width, region.height);
        self.paint(&mut image);
        image
    }

    /// Paint this subtree's leaves into `image`, offset by this node's origin
    pub fn paint(&self, image: &mut HslaImage) {
        let origin = self.region();
        for leaf in self.leaves() {
            image.fill_region(leaf.region().relative_to(&origin), leaf.color());
        }
    }
}
