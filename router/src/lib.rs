pub mod error;
pub mod grid;
pub mod path;
pub mod utils;

use error::GridError;
use grid::SparseGrid;
use maze_common::geom::coord::GridCoord;
use maze_common::util::config::Config;
use path::RoutePath;

/// Builds a grid for the configured job: obstructions first, then already
/// committed routes, then this job's terminals.
pub fn prepare_grid(config: &Config) -> Result<SparseGrid, GridError> {
    let job = &config.job;
    let mut grid = SparseGrid::from_config(&config.grid)?;

    grid.set_blocked_all(to_coords(&job.blockages)?, true);

    for (i, route) in job.routes.iter().enumerate() {
        let route: RoutePath = to_coords(route)?.into();
        log::debug!(
            "Committing route {} ({} cells, {} vias)",
            i,
            route.len(),
            route.via_count()
        );
        grid.block_path(&route);
    }

    grid.clear_source();
    grid.clear_target();
    grid.add_sources(&to_coords(&job.sources)?);
    grid.add_targets(&to_coords(&job.targets)?);
    if let Some(side) = job.perimeter_side {
        grid.add_perimeter_target(side);
    }

    log::info!("Prepared routing grid: {}", grid.stats());
    Ok(grid)
}

fn to_coords(raw: &[[i32; 3]]) -> Result<Vec<GridCoord>, GridError> {
    raw.iter()
        .map(|&[x, y, z]| match z {
            0 | 1 => Ok(GridCoord::new(x, y, z as u8)),
            _ => Err(GridError::InvalidLayer(z)),
        })
        .collect()
}
