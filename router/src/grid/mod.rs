pub mod cell;
pub mod cost;
pub mod sparse;

pub use cell::Cell;
pub use maze_common::geom::side::Side;
pub use sparse::{GridStats, SparseGrid};

use maze_common::geom::coord::GridCoord;
use std::collections::HashSet;

/// Read-only view a pathfinder expands over. Searches start from `sources()`,
/// stop at any coordinate where `is_target` holds and never enter an obstacle.
pub trait RoutingGrid {
    fn lower_left(&self) -> GridCoord;
    fn upper_right(&self) -> GridCoord;
    fn layers(&self) -> u8 {
        2
    }

    fn is_obstacle(&self, coord: GridCoord) -> bool;
    fn is_target(&self, coord: GridCoord) -> bool;
    fn sources(&self) -> &HashSet<GridCoord>;

    /// Cost of stepping into `to`, or `None` if the move is not a unit step
    /// or `to` is blocked.
    fn move_cost(&self, from: GridCoord, to: GridCoord) -> Option<u32> {
        if to.z >= self.layers() || self.is_obstacle(to) {
            return None;
        }
        cost::step_cost(from, to)
    }
}
