//! Driver configuration.

use geometry::{GeometryError, Point, Rect};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// Default config file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "quadtree.toml";

/// Root configuration structure.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub boundary: RectConfig,
    #[serde(default)]
    pub tree: TreeConfig,
    #[serde(default)]
    pub scatter: ScatterConfig,
    #[serde(default)]
    pub insert: InsertConfig,
    /// Range to query once all points are in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<RectConfig>,
}

impl Config {
    /// Load configuration from `quadtree.toml` or use defaults.
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(CONFIG_FILE)
    }

    /// Load configuration from `path`, writing the defaults there if missing.
    pub fn load_from(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            let contents = std::fs::read_to_string(path)?;
            Ok(toml::from_str(&contents)?)
        } else {
            info!("No {} found, creating default config", path.display());
            let default_config = Self::default();
            std::fs::write(path, toml::to_string_pretty(&default_config)?)?;
            Ok(default_config)
        }
    }
}

/// A rectangle as written in the config: center and half-extents.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct RectConfig {
    #[serde(default = "default_center_x")]
    pub x: f64,
    #[serde(default = "default_center_y")]
    pub y: f64,
    #[serde(default = "default_half_width")]
    pub half_width: f64,
    #[serde(default = "default_half_height")]
    pub half_height: f64,
}

impl RectConfig {
    pub fn to_rect(&self) -> Result<Rect, GeometryError> {
        Rect::new(self.x, self.y, self.half_width, self.half_height)
    }
}

// 1000x600 canvas with its origin in the top-left corner.
impl Default for RectConfig {
    fn default() -> Self {
        Self {
            x: default_center_x(),
            y: default_center_y(),
            half_width: default_half_width(),
            half_height: default_half_height(),
        }
    }
}

fn default_center_x() -> f64 {
    500.0
}
fn default_center_y() -> f64 {
    300.0
}
fn default_half_width() -> f64 {
    500.0
}
fn default_half_height() -> f64 {
    300.0
}

/// Tree shape settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TreeConfig {
    /// Depth at which nodes stop subdividing (0 = unbounded).
    #[serde(default = "default_max_depth")]
    pub max_depth: u32,
}

impl TreeConfig {
    /// The depth cap to build the tree with, if any.
    pub fn depth_limit(&self) -> Option<u32> {
        (self.max_depth > 0).then_some(self.max_depth)
    }
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            max_depth: default_max_depth(),
        }
    }
}

fn default_max_depth() -> u32 {
    32
}

/// Random point generation.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScatterConfig {
    /// Number of random points to generate.
    #[serde(default = "default_scatter_count")]
    pub count: usize,
    /// Fixed RNG seed; omit for a fresh layout every run.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for ScatterConfig {
    fn default() -> Self {
        Self {
            count: default_scatter_count(),
            seed: None,
        }
    }
}

fn default_scatter_count() -> usize {
    100
}

/// Literal points inserted before scattering.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct InsertConfig {
    #[serde(default = "default_points")]
    pub points: Vec<Point>,
}

impl Default for InsertConfig {
    fn default() -> Self {
        Self {
            points: default_points(),
        }
    }
}

fn default_points() -> Vec<Point> {
    vec![
        Point::new(550.0, 330.0),
        Point::new(350.0, 420.0),
        Point::new(800.0, 240.0),
        Point::new(850.0, 390.0),
        Point::new(100.0, 30.0),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.boundary, RectConfig::default());
        assert_eq!(config.tree.max_depth, 32);
        assert_eq!(config.scatter.count, 100);
        assert_eq!(config.scatter.seed, None);
        assert_eq!(config.insert.points.len(), 5);
        assert!(config.query.is_none());
    }

    #[test]
    fn test_partial_override() {
        let config: Config = toml::from_str(
            r#"
            [boundary]
            x = 0.0
            y = 0.0

            [tree]
            max_depth = 0

            [scatter]
            count = 7
            seed = 42

            [insert]
            points = [{ x = 1.0, y = 2.0 }]

            [query]
            half_width = 10.0
            "#,
        )
        .unwrap();

        assert_eq!(config.boundary.x, 0.0);
        assert_eq!(config.boundary.half_width, 500.0);
        assert_eq!(config.tree.depth_limit(), None);
        assert_eq!(config.scatter.count, 7);
        assert_eq!(config.scatter.seed, Some(42));
        assert_eq!(config.insert.points, vec![Point::new(1.0, 2.0)]);
        let query = config.query.unwrap();
        assert_eq!(query.half_width, 10.0);
        assert_eq!(query.half_height, 300.0);
    }

    #[test]
    fn test_default_serializes_and_parses_back() {
        let text = toml::to_string_pretty(&Config::default()).unwrap();
        let parsed: Config = toml::from_str(&text).unwrap();
        assert_eq!(parsed.boundary, RectConfig::default());
        assert_eq!(parsed.insert.points, default_points());
        assert!(parsed.query.is_none());
    }

    #[test]
    fn test_default_points_fit_default_boundary() {
        let boundary = RectConfig::default().to_rect().unwrap();
        assert!(default_points().into_iter().all(|p| boundary.contains(p)));
    }

    #[test]
    fn test_negative_boundary_is_rejected() {
        let config: Config = toml::from_str("[boundary]\nhalf_width = -1.0\n").unwrap();
        assert!(config.boundary.to_rect().is_err());
    }

    #[test]
    fn test_load_from_writes_default_when_missing() {
        let dir = std::env::temp_dir().join(format!("quadtree-config-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join(CONFIG_FILE);
        let _ = std::fs::remove_file(&path);

        let created = Config::load_from(&path).unwrap();
        assert!(path.exists());
        let reloaded = Config::load_from(&path).unwrap();
        assert_eq!(created.boundary, reloaded.boundary);
        assert_eq!(created.scatter.count, reloaded.scatter.count);

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
