//! Qtree - builds a quadtree from config and prints its structure

use quadtree::Config;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("Qtree v{}", env!("CARGO_PKG_VERSION"));

    // Config path may be given as the first argument
    let config = match std::env::args().nth(1) {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    info!("Loaded configuration");
    info!(
        "  Boundary: ({}, {}) half {}x{}",
        config.boundary.x, config.boundary.y, config.boundary.half_width, config.boundary.half_height
    );
    info!("  Max depth: {}", config.tree.max_depth);
    info!("  Scatter: {} points", config.scatter.count);

    let session = quadtree::run(&config)?;
    session.tree.print();

    Ok(())
}
