//! Geometry error types.

use thiserror::Error;

/// Errors that can occur when building a rectangle.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum GeometryError {
    #[error("Negative half-extent: half_width={half_width}, half_height={half_height}")]
    NegativeExtent { half_width: f64, half_height: f64 },

    #[error("Non-finite rectangle component")]
    NonFinite,
}
