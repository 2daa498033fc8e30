//! Shared geometry crate for the quadtree workspace.
//!
//! This crate contains:
//! - `Point`, an immutable 2D coordinate pair
//! - `Rect`, an axis-aligned box given by center and half-extents
//! - `GeometryError` for rejected rectangle input

mod error;
mod rect;

pub use error::GeometryError;
pub use rect::Rect;

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// A 2D point. Duplicates are distinct values with no identity.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<DVec2> for Point {
    #[inline]
    fn from(v: DVec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Point> for DVec2 {
    #[inline]
    fn from(p: Point) -> Self {
        DVec2::new(p.x, p.y)
    }
}

impl From<(f64, f64)> for Point {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}
