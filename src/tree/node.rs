//! Tree nodes and the rectangular regions they cover

use crate::color::Hsla;
use std::fmt;

/// Axis-aligned rectangle of pixels
///
/// `(x, y)` is the upper-left pixel; the region spans `width` columns and
/// `height` rows from there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Region {
    /// Column of the upper-left pixel
    pub x: usize,
    /// Row of the upper-left pixel
    pub y: usize,
    /// Number of columns
    pub width: usize,
    /// Number of rows
    pub height: usize,
}

impl Region {
    /// Create a region from its upper-left corner and dimensions
    pub const fn new(x: usize, y: usize, width: usize, height: usize) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Number of pixels covered
    pub const fn area(&self) -> usize {
        self.width * self.height
    }

    /// One past the rightmost column
    pub const fn right(&self) -> usize {
        self.x + self.width
    }

    /// One past the bottom row
    pub const fn bottom(&self) -> usize {
        self.y + self.height
    }

    /// Whether the region covers no pixels
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Whether the region is exactly one pixel
    pub const fn is_single_pixel(&self) -> bool {
        self.width == 1 && self.height == 1
    }

    /// Whether pixel `(x, y)` lies inside the region
    pub const fn contains(&self, x: usize, y: usize) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Whether `other` lies entirely inside this region
    pub const fn contains_region(&self, other: &Self) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    /// Whether the two regions share at least one pixel
    pub const fn overlaps(&self, other: &Self) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    /// Split into the two child regions, or `None` for a single pixel
    ///
    /// Regions at least as wide as they are tall are cut into a left and a
    /// right half; taller regions into a top and a bottom half. When the cut
    /// dimension is odd the second half is the larger one.
    pub const fn split(&self) -> Option<(Self, Self)> {
        if self.is_empty() || self.is_single_pixel() {
            return None;
        }
        if self.width >= self.height {
            let half = self.width / 2;
            Some((
                Self::new(self.x, self.y, half, self.height),
                Self::new(self.x + half, self.y, self.width - half, self.height),
            ))
        } else {
            let half = self.height / 2;
            Some((
                Self::new(self.x, self.y, self.width, half),
                Self::new(self.x, self.y + half, self.width, self.height - half),
            ))
        }
    }

    /// This region expressed relative to the upper-left corner of `origin`
    pub const fn relative_to(&self, origin: &Self) -> Self {
        Self::new(
            self.x.saturating_sub(origin.x),
            self.y.saturating_sub(origin.y),
            self.width,
            self.height,
        )
    }

    /// Iterate the pixel coordinates of the region, row by row
    pub fn pixels(&self) -> impl Iterator<Item = (usize, usize)> + use<> {
        let Self {
            x,
            y,
            width,
            height,
        } = *self;
        (y..y + height).flat_map(move |row| (x..x + width).map(move |col| (col, row)))
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}+{}+{}", self.width, self.height, self.x, self.y)
    }
}

/// Node of a partition tree
///
/// Covers one region and stores the average color over it. A node has either
/// two children that tile its region (first child left/top, second child
/// right/bottom) or none, in which case it is a leaf and its color stands
/// for every pixel of its region.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    region: Region,
    color: Hsla,
    children: Option<Box<[Node; 2]>>,
}

impl Node {
    /// Create a leaf node
    pub const fn leaf(region: Region, color: Hsla) -> Self {
        Self {
            region,
            color,
            children: None,
        }
    }

    /// Create an internal node owning two children
    pub fn branch(region: Region, color: Hsla, first: Self, second: Self) -> Self {
        Self {
            region,
            color,
            children: Some(Box::new([first, second])),
        }
    }

    /// Region covered by this node
    pub const fn region(&self) -> Region {
        self.region
    }

    /// Average color over this node's region
    pub const fn color(&self) -> Hsla {
        self.color
    }

    /// Whether this node has no children
    pub const fn is_leaf(&self) -> bool {
        self.children.is_none()
    }

    /// The two children (left/top first), or `None` for a leaf
    pub fn children(&self) -> Option<(&Self, &Self)> {
        self.children.as_deref().map(|[first, second]| (first, second))
    }

    pub(crate) fn children_mut(&mut self) -> Option<&mut [Self; 2]> {
        self.children.as_deref_mut()
    }

    // Drops both subtrees, turning this node into a leaf
    pub(crate) fn collapse(&mut self) -> bool {
        self.children.take().is_some()
    }

    /// Preorder traversal of this subtree, starting with this node
    pub fn nodes(&self) -> Nodes<'_> {
        Nodes { stack: vec![self] }
    }

    /// Leaves of this subtree in left-to-right order
    pub fn leaves(&self) -> impl Iterator<Item = &Self> + '_ {
        self.nodes().filter(|node| node.is_leaf())
    }

    /// Total number of nodes in this subtree
    pub fn size(&self) -> usize {
        self.nodes().count()
    }

    /// Number of leaves in this subtree
    pub fn leaf_count(&self) -> usize {
        self.leaves().count()
    }

    /// Number of levels in this subtree; a lone leaf has depth 1
    pub fn depth(&self) -> usize {
        1 + self
            .children()
            .map_or(0, |(first, second)| first.depth().max(second.depth()))
    }
}

/// Preorder iterator over the nodes of a subtree
#[derive(Debug, Clone)]
pub struct Nodes<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iterator for Nodes<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        if let Some((first, second)) = node.children() {
            self.stack.push(second);
            self.stack.push(first);
        }
        Some(node)
    }
}
