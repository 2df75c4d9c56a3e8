//! In-memory HSLA raster backed by a row-major `ndarray` grid

use crate::color::Hsla;
use crate::tree::node::Region;
use ndarray::{Array2, Axis, Slice};

/// Raster of HSLA pixels addressed by `(x, y)` with the origin top-left
///
/// Pixels are stored as an `Array2` indexed `(row, col)`, i.e. `(y, x)`.
#[derive(Debug, Clone, PartialEq)]
pub struct HslaImage {
    pixels: Array2<Hsla>,
}

impl HslaImage {
    /// Create a blank (opaque white) image
    pub fn new(width: usize, height: usize) -> Self {
        Self::filled(width, height, Hsla::default())
    }

    /// Create an image where every pixel has the same color
    pub fn filled(width: usize, height: usize, color: Hsla) -> Self {
        Self {
            pixels: Array2::from_elem((height, width), color),
        }
    }

    /// Create an image by evaluating `f(x, y)` for every pixel
    pub fn from_fn<F>(width: usize, height: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> Hsla,
    {
        Self {
            pixels: Array2::from_shape_fn((height, width), |(y, x)| f(x, y)),
        }
    }

    /// Image width in pixels
    pub fn width(&self) -> usize {
        self.pixels.ncols()
    }

    /// Image height in pixels
    pub fn height(&self) -> usize {
        self.pixels.nrows()
    }

    /// Whether the image has no pixels at all
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Region covering the whole image
    pub fn bounds(&self) -> Region {
        Region::new(0, 0, self.pixels.ncols(), self.pixels.nrows())
    }

    /// Pixel at `(x, y)`, or `None` outside the image
    pub fn get(&self, x: usize, y: usize) -> Option<&Hsla> {
        self.pixels.get((y, x))
    }

    /// Mutable pixel at `(x, y)`, or `None` outside the image
    pub fn get_mut(&mut self, x: usize, y: usize) -> Option<&mut Hsla> {
        self.pixels.get_mut((y, x))
    }

    /// Overwrite the pixel at `(x, y)`; returns `false` if it lies outside
    pub fn put(&mut self, x: usize, y: usize, color: Hsla) -> bool {
        self.get_mut(x, y).map(|pixel| *pixel = color).is_some()
    }

    /// Iterate the pixels inside `region`, row by row
    ///
    /// The region is clipped to the image bounds.
    pub fn region(&self, region: Region) -> impl Iterator<Item = &Hsla> + '_ {
        let x_end = region.right().min(self.width());
        let y_end = region.bottom().min(self.height());
        let x_start = region.x.min(x_end);
        let y_start = region.y.min(y_end);
        let mut view = self.pixels.view();
        view.slice_axis_inplace(Axis(0), Slice::from(y_start..y_end));
        view.slice_axis_inplace(Axis(1), Slice::from(x_start..x_end));
        view.into_iter()
    }

    /// Paint every pixel inside `region` with `color`, clipped to the image
    pub fn fill_region(&mut self, region: Region, color: Hsla) {
        let x_end = region.right().min(self.width());
        let y_end = region.bottom().min(self.height());
        let x_start = region.x.min(x_end);
        let y_start = region.y.min(y_end);
        let mut view = self.pixels.view_mut();
        view.slice_axis_inplace(Axis(0), Slice::from(y_start..y_end));
        view.slice_axis_inplace(Axis(1), Slice::from(x_start..x_end));
        view.fill(color);
    }

    /// Mirror the image over its vertical center line (swap columns)
    pub fn flip_horizontal(&mut self) {
        self.pixels.invert_axis(Axis(1));
    }

    /// Mirror the image over its horizontal center line (swap rows)
    pub fn flip_vertical(&mut self) {
        self.pixels.invert_axis(Axis(0));
    }

    /// Iterate all pixels with their coordinates as `(x, y, color)`
    pub fn enumerate_pixels(&self) -> impl Iterator<Item = (usize, usize, &Hsla)> + '_ {
        self.pixels
            .indexed_iter()
            .map(|((y, x), color)| (x, y, color))
    }
}
