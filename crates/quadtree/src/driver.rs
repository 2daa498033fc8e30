//! Builds a tree from a [`Config`]: literal points first, then random ones.

use crate::config::Config;
use crate::scatter::scatter_seeded;
use crate::spatial::QuadTree;
use geometry::Point;
use tracing::{info, warn};

/// Everything a run produced.
#[derive(Debug)]
pub struct Session {
    pub tree: QuadTree,
    /// Every accepted point, in insertion order.
    pub points: Vec<Point>,
    /// Points the tree rejected as out of bounds.
    pub rejected: usize,
    /// Result of the configured query, if one was set.
    pub query_hits: Option<Vec<Point>>,
}

/// Build and populate a tree as described by `config`.
pub fn run(config: &Config) -> anyhow::Result<Session> {
    let boundary = config.boundary.to_rect()?;
    let mut tree = match config.tree.depth_limit() {
        Some(max_depth) => QuadTree::with_max_depth(boundary, max_depth),
        None => QuadTree::new(boundary),
    };

    let mut points = Vec::with_capacity(config.insert.points.len() + config.scatter.count);
    let mut rejected = 0;

    for &p in &config.insert.points {
        if tree.insert(p) {
            points.push(p);
        } else {
            warn!("Point ({}, {}) is outside the boundary, skipped", p.x, p.y);
            rejected += 1;
        }
    }

    let report = scatter_seeded(&mut tree, config.scatter.count, config.scatter.seed);
    info!("Scattered {} random points ({} rejected)", report.accepted.len(), report.rejected);
    points.extend(report.accepted);
    rejected += report.rejected;

    let stats = tree.stats();
    info!(
        "Tree: {} points in {} nodes ({} leaves), depth {}",
        stats.points, stats.nodes, stats.leaves, stats.max_depth
    );

    let query_hits = match &config.query {
        Some(range) => {
            let range = range.to_rect()?;
            let hits = tree.query_range(&range);
            info!(
                "Query ({}, {}) {}x{}: {} points",
                range.x(),
                range.y(),
                range.width(),
                range.height(),
                hits.len()
            );
            Some(hits)
        }
        None => None,
    };

    Ok(Session {
        tree,
        points,
        rejected,
        query_hits,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RectConfig;

    #[test]
    fn test_run_with_defaults_and_seed() {
        let mut config = Config::default();
        config.scatter.seed = Some(5);

        let session = run(&config).unwrap();
        assert_eq!(session.rejected, 0);
        assert_eq!(session.points.len(), 105);
        assert_eq!(session.tree.len(), 105);
        assert_eq!(&session.points[..5], &config.insert.points[..]);
        assert!(session.query_hits.is_none());
    }

    #[test]
    fn test_run_reports_rejections_and_query() {
        let mut config = Config::default();
        config.boundary = RectConfig {
            x: 0.0,
            y: 0.0,
            half_width: 10.0,
            half_height: 10.0,
        };
        config.scatter.count = 0;
        config.insert.points = vec![
            Point::new(1.0, 1.0),
            Point::new(-3.0, 4.0),
            Point::new(6.0, -2.0),
            Point::new(7.0, 3.0),
            Point::new(-8.0, -9.0),
            Point::new(11.0, 0.0),
        ];
        config.query = Some(RectConfig {
            x: 5.0,
            y: 5.0,
            half_width: 5.0,
            half_height: 5.0,
        });

        let session = run(&config).unwrap();
        assert_eq!(session.rejected, 1);
        assert_eq!(session.points.len(), 5);
        assert!(session.tree.is_divided());
        assert_eq!(
            session.query_hits.unwrap(),
            vec![Point::new(1.0, 1.0), Point::new(7.0, 3.0)]
        );
    }

    #[test]
    fn test_run_rejects_invalid_boundary() {
        let mut config = Config::default();
        config.boundary.half_height = -1.0;
        assert!(run(&config).is_err());
    }

    #[test]
    fn test_run_rejects_overflowing_boundary() {
        let mut config = Config::default();
        config.boundary.x = 1e308;
        config.boundary.half_width = 1e308;
        config.scatter.seed = Some(1);

        let err = run(&config).unwrap_err();
        assert!(err.downcast_ref::<geometry::GeometryError>().is_some());
    }
}
