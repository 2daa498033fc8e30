//! Spatial indexing.
//!
//! Point quadtree with fixed nw, ne, sw, se child ordering.

mod quadtree;

pub use quadtree::{Dump, QuadTree, TreeStats, CAPACITY};
