//! Point quadtree with capacity-bounded leaves.
//!
//! Each node owns its four children through a single `Box`, so dropping a
//! node releases its whole subtree.

use geometry::{Point, Rect};
use std::fmt;
use tracing::debug;

/// Maximum points a leaf holds before it subdivides.
pub const CAPACITY: usize = 4;

/// The four quadrants of a divided node.
struct Children {
    nw: QuadTree,
    ne: QuadTree,
    sw: QuadTree,
    se: QuadTree,
}

impl Children {
    /// Hand the point to the first child that accepts it: nw, ne, sw, se.
    ///
    /// A point on an internal split line fits several children; the order
    /// above is the tie-break.
    #[inline]
    fn insert(&mut self, p: Point) -> bool {
        self.nw.insert(p) || self.ne.insert(p) || self.sw.insert(p) || self.se.insert(p)
    }

    #[inline]
    fn as_array(&self) -> [&QuadTree; 4] {
        [&self.nw, &self.ne, &self.sw, &self.se]
    }
}

/// Summary of a subtree's shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TreeStats {
    /// Total nodes, this one included.
    pub nodes: usize,
    /// Nodes that were never divided.
    pub leaves: usize,
    /// Points stored anywhere in the subtree.
    pub points: usize,
    /// Deepest node depth, relative to the root of the tree.
    pub max_depth: u32,
}

/// A quadtree node over a fixed boundary.
///
/// The root is built with [`QuadTree::new`] and never grows: points outside
/// its boundary are rejected by [`QuadTree::insert`].
pub struct QuadTree {
    boundary: Rect,
    points: Vec<Point>,
    children: Option<Box<Children>>,
    depth: u32,
    /// Depth at which nodes stop subdividing. `None` means unbounded.
    max_depth: Option<u32>,
}

impl QuadTree {
    /// Create an empty root over `boundary` with no depth limit.
    ///
    /// More than [`CAPACITY`] coincident points make such a tree subdivide
    /// until the stack is exhausted. Use [`QuadTree::with_max_depth`] when the
    /// input may contain clusters of identical points.
    pub fn new(boundary: Rect) -> Self {
        Self::node(boundary, 0, None)
    }

    /// Create an empty root whose nodes stop subdividing at `max_depth`.
    ///
    /// A full leaf at that depth keeps accepting points past [`CAPACITY`].
    pub fn with_max_depth(boundary: Rect, max_depth: u32) -> Self {
        Self::node(boundary, 0, Some(max_depth))
    }

    fn node(boundary: Rect, depth: u32, max_depth: Option<u32>) -> Self {
        Self {
            boundary,
            points: Vec::with_capacity(CAPACITY),
            children: None,
            depth,
            max_depth,
        }
    }

    /// Store `p` somewhere in this subtree.
    ///
    /// Returns `false` if `p` lies outside the boundary; the tree is left
    /// untouched in that case.
    pub fn insert(&mut self, p: Point) -> bool {
        if !self.boundary.contains(p) {
            return false;
        }

        if self.children.is_none() {
            if self.points.len() < CAPACITY || self.at_depth_limit() {
                self.points.push(p);
                return true;
            }

            self.subdivide();
            if let Some(children) = self.children.as_deref_mut() {
                // Float rounding in the quadrant centers can leave a point on
                // the outer edge outside every child; such points stay here.
                self.points.retain(|&held| !children.insert(held));
            }
            if !self.points.is_empty() {
                debug!(
                    "{} point(s) kept at depth {} after redistribution",
                    self.points.len(),
                    self.depth
                );
            }
        }

        match self.children.as_deref_mut() {
            Some(children) => children.insert(p),
            None => false,
        }
    }

    /// Split into four quadrant children. Points are not moved.
    fn subdivide(&mut self) {
        let [nw, ne, sw, se] = self.boundary.quadrants();
        let depth = self.depth + 1;
        let max_depth = self.max_depth;
        self.children = Some(Box::new(Children {
            nw: Self::node(nw, depth, max_depth),
            ne: Self::node(ne, depth, max_depth),
            sw: Self::node(sw, depth, max_depth),
            se: Self::node(se, depth, max_depth),
        }));
        debug!(
            "Subdivided node at depth {} ({}, {}) half {}x{}",
            self.depth,
            self.boundary.x(),
            self.boundary.y(),
            self.boundary.half_width(),
            self.boundary.half_height()
        );
    }

    #[inline]
    fn at_depth_limit(&self) -> bool {
        self.max_depth.is_some_and(|max| self.depth >= max)
    }

    /// Find all stored points inside `range`, edges included.
    ///
    /// Points held by a node come before those of its children, and children
    /// are visited nw, ne, sw, se.
    pub fn query_range(&self, range: &Rect) -> Vec<Point> {
        let mut result = Vec::new();
        self.query_range_into(range, &mut result);
        result
    }

    /// Same as [`QuadTree::query_range`], appending into `out`.
    pub fn query_range_into(&self, range: &Rect, out: &mut Vec<Point>) {
        if !self.boundary.intersects(range) {
            return;
        }

        out.extend(self.points.iter().copied().filter(|&p| range.contains(p)));

        if let Some(children) = &self.children {
            for child in children.as_array() {
                child.query_range_into(range, out);
            }
        }
    }

    /// The area this node covers.
    #[inline]
    pub fn boundary(&self) -> &Rect {
        &self.boundary
    }

    /// Points held directly by this node.
    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[inline]
    pub fn is_divided(&self) -> bool {
        self.children.is_some()
    }

    /// Depth of this node; the root is 0.
    #[inline]
    pub fn depth(&self) -> u32 {
        self.depth
    }

    #[inline]
    pub fn max_depth(&self) -> Option<u32> {
        self.max_depth
    }

    /// The four children in `[nw, ne, sw, se]` order, if divided.
    #[inline]
    pub fn children(&self) -> Option<[&QuadTree; 4]> {
        self.children.as_deref().map(Children::as_array)
    }

    #[inline]
    pub fn nw(&self) -> Option<&QuadTree> {
        self.children.as_deref().map(|c| &c.nw)
    }

    #[inline]
    pub fn ne(&self) -> Option<&QuadTree> {
        self.children.as_deref().map(|c| &c.ne)
    }

    #[inline]
    pub fn sw(&self) -> Option<&QuadTree> {
        self.children.as_deref().map(|c| &c.sw)
    }

    #[inline]
    pub fn se(&self) -> Option<&QuadTree> {
        self.children.as_deref().map(|c| &c.se)
    }

    /// Walk the subtree pre-order, children in nw, ne, sw, se order.
    pub fn visit<F: FnMut(&QuadTree)>(&self, f: &mut F) {
        f(self);
        if let Some(children) = &self.children {
            for child in children.as_array() {
                child.visit(f);
            }
        }
    }

    /// Number of points stored in this subtree.
    pub fn len(&self) -> usize {
        let mut total = 0;
        self.visit(&mut |node| total += node.points.len());
        total
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Count nodes, leaves and points, and find the deepest node.
    pub fn stats(&self) -> TreeStats {
        let mut stats = TreeStats::default();
        self.visit(&mut |node| {
            stats.nodes += 1;
            if !node.is_divided() {
                stats.leaves += 1;
            }
            stats.points += node.points.len();
            stats.max_depth = stats.max_depth.max(node.depth - self.depth);
        });
        stats
    }

    /// Indented one-line-per-node rendering of the tree shape.
    pub fn dump(&self) -> Dump<'_> {
        Dump(self)
    }

    /// Write [`QuadTree::dump`] to stdout.
    pub fn print(&self) {
        print!("{}", self.dump());
    }
}

impl fmt::Debug for QuadTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuadTree")
            .field("boundary", &self.boundary)
            .field("points", &self.points.len())
            .field("divided", &self.is_divided())
            .field("depth", &self.depth)
            .finish()
    }
}

/// Display adapter returned by [`QuadTree::dump`].
pub struct Dump<'a>(&'a QuadTree);

impl Dump<'_> {
    fn write_node(f: &mut fmt::Formatter<'_>, node: &QuadTree, level: usize) -> fmt::Result {
        writeln!(f, "{:indent$}Node: {} points", "", node.points.len(), indent = level * 2)?;
        if let Some(children) = node.children() {
            for child in children {
                Self::write_node(f, child, level + 1)?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for Dump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Self::write_node(f, self.0, 0)
    }
}
