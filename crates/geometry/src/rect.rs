//! Axis-aligned rectangle given by center and half-extents.

use crate::{GeometryError, Point};
use glam::DVec2;

/// Closed axis-aligned box `[x - hw, x + hw] x [y - hh, y + hh]`.
///
/// Half-extents are always finite and non-negative; `Rect::new` rejects
/// anything else, so a degenerate box is at worst a single line or point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    x: f64,
    y: f64,
    half_width: f64,
    half_height: f64,
}

impl Rect {
    /// Create a rectangle from its center and half-extents.
    pub fn new(x: f64, y: f64, half_width: f64, half_height: f64) -> Result<Self, GeometryError> {
        if !(x.is_finite() && y.is_finite() && half_width.is_finite() && half_height.is_finite()) {
            return Err(GeometryError::NonFinite);
        }
        if half_width < 0.0 || half_height < 0.0 {
            return Err(GeometryError::NegativeExtent { half_width, half_height });
        }
        let rect = Self { x, y, half_width, half_height };
        // Edges and spans must stay representable for sampling inside the box.
        let spans = [rect.max_x() - rect.min_x(), rect.max_y() - rect.min_y()];
        if !spans.iter().all(|s| s.is_finite()) {
            return Err(GeometryError::NonFinite);
        }
        Ok(rect)
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.x
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.y
    }

    #[inline]
    pub fn half_width(&self) -> f64 {
        self.half_width
    }

    #[inline]
    pub fn half_height(&self) -> f64 {
        self.half_height
    }

    #[inline]
    pub fn center(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }

    #[inline]
    pub fn min_x(&self) -> f64 {
        self.x - self.half_width
    }

    #[inline]
    pub fn max_x(&self) -> f64 {
        self.x + self.half_width
    }

    #[inline]
    pub fn min_y(&self) -> f64 {
        self.y - self.half_height
    }

    #[inline]
    pub fn max_y(&self) -> f64 {
        self.y + self.half_height
    }

    /// Get the full width.
    #[inline]
    pub fn width(&self) -> f64 {
        self.half_width * 2.0
    }

    /// Get the full height.
    #[inline]
    pub fn height(&self) -> f64 {
        self.half_height * 2.0
    }

    /// Check if the point lies inside the box, edges included.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.min_x() && p.x <= self.max_x() && p.y >= self.min_y() && p.y <= self.max_y()
    }

    /// Check if two boxes overlap. Touching edges count.
    #[inline]
    pub fn intersects(&self, other: &Rect) -> bool {
        !(other.min_x() > self.max_x()
            || other.max_x() < self.min_x()
            || other.min_y() > self.max_y()
            || other.max_y() < self.min_y())
    }

    /// Split into four quadrants in `[nw, ne, sw, se]` order.
    ///
    /// North is negative y. Adjacent quadrants share their edges.
    pub fn quadrants(&self) -> [Rect; 4] {
        let half = DVec2::new(self.half_width, self.half_height) / 2.0;
        let c = self.center();
        let quad = |sx: f64, sy: f64| {
            let center = c + DVec2::new(sx * half.x, sy * half.y);
            Rect {
                x: center.x,
                y: center.y,
                half_width: half.x,
                half_height: half.y,
            }
        };
        [quad(-1.0, -1.0), quad(1.0, -1.0), quad(-1.0, 1.0), quad(1.0, 1.0)]
    }
}
