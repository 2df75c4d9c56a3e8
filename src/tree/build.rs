//! Recursive construction of partition trees from images
//!
//! Every internal node averages its whole region directly from the source
//! pixels instead of combining its children's averages. Each pixel is read
//! once per tree level it belongs to, and the halving split keeps the depth
//! logarithmic, so a full build costs O(N log N) pixel reads.

use crate::color::Hsla;
use crate::raster::HslaImage;
use crate::tree::node::{Node, Region};

impl Node {
    /// Build the subtree covering `region` of `image`
    ///
    /// Single-pixel regions become leaves holding the exact source pixel.
    /// Larger regions store their average color and recurse into the two
    /// halves given by [`Region::split`].
    pub fn build(image: &HslaImage, region: Region) -> Self {
        match region.split() {
            None => Self::leaf(
                region,
                image.get(region.x, region.y).copied().unwrap_or_default(),
            ),
            Some((first, second)) => Self::branch(
                region,
                region_average(image, region),
                Self::build(image, first),
                Self::build(image, second),
            ),
        }
    }
}

/// Average color of the pixels of `image` inside `region`
///
/// Hue uses the circular mean. A region that misses the image entirely
/// averages to the default color.
pub fn region_average(image: &HslaImage, region: Region) -> Hsla {
    Hsla::mean(image.region(region)).unwrap_or_default()
}
