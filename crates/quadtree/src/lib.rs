//! Point quadtree library.

pub mod config;
pub mod driver;
pub mod scatter;
pub mod spatial;

// Re-export commonly used types
pub use config::Config;
pub use driver::{run, Session};
pub use geometry::{GeometryError, Point, Rect};
pub use scatter::{scatter, scatter_seeded, ScatterReport};
pub use spatial::{Dump, QuadTree, TreeStats, CAPACITY};
