use crate::grid::SparseGrid;
use crate::grid::cost::step_cost;
use maze_common::geom::coord::GridCoord;

/// Something that can mark its own coordinates on a grid. Route commitment
/// goes through this so any path representation can be blocked.
pub trait GridPath {
    fn set_path(&self, grid: &mut SparseGrid, value: bool);
    fn set_blocked(&self, grid: &mut SparseGrid, value: bool);
}

impl GridPath for [GridCoord] {
    fn set_path(&self, grid: &mut SparseGrid, value: bool) {
        grid.set_path_all(self.iter().copied(), value);
    }

    fn set_blocked(&self, grid: &mut SparseGrid, value: bool) {
        grid.set_blocked_all(self.iter().copied(), value);
    }
}

impl GridPath for Vec<GridCoord> {
    fn set_path(&self, grid: &mut SparseGrid, value: bool) {
        self.as_slice().set_path(grid, value);
    }

    fn set_blocked(&self, grid: &mut SparseGrid, value: bool) {
        self.as_slice().set_blocked(grid, value);
    }
}

/// Ordered coordinates of a found route, source first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RoutePath {
    coords: Vec<GridCoord>,
}

impl RoutePath {
    pub fn new(coords: Vec<GridCoord>) -> Self {
        Self { coords }
    }

    pub fn coords(&self) -> &[GridCoord] {
        &self.coords
    }

    pub fn len(&self) -> usize {
        self.coords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// Total routing cost, or `None` if two consecutive coordinates are not
    /// one step apart.
    pub fn cost(&self) -> Option<u32> {
        self.coords
            .windows(2)
            .map(|w| step_cost(w[0], w[1]))
            .sum()
    }

    pub fn via_count(&self) -> usize {
        self.coords
            .windows(2)
            .filter(|w| w[0].z != w[1].z)
            .count()
    }

    /// Claims the route on the grid without committing it.
    pub fn mark(&self, grid: &mut SparseGrid) {
        self.set_path(grid, true);
    }
}

impl From<Vec<GridCoord>> for RoutePath {
    fn from(coords: Vec<GridCoord>) -> Self {
        Self::new(coords)
    }
}

impl FromIterator<GridCoord> for RoutePath {
    fn from_iter<I: IntoIterator<Item = GridCoord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl GridPath for RoutePath {
    fn set_path(&self, grid: &mut SparseGrid, value: bool) {
        self.coords.set_path(grid, value);
    }

    fn set_blocked(&self, grid: &mut SparseGrid, value: bool) {
        self.coords.set_blocked(grid, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::cost::{NONPREFERRED_COST, PREFERRED_COST, VIA_COST};
    use maze_common::geom::point::Point;

    fn l_route() -> RoutePath {
        [
            GridCoord::new(0, 0, 0),
            GridCoord::new(1, 0, 0),
            GridCoord::new(1, 0, 1),
            GridCoord::new(1, 1, 1),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn cost_sums_steps() {
        let route = l_route();
        assert_eq!(route.cost(), Some(PREFERRED_COST + VIA_COST + PREFERRED_COST));
        assert_eq!(route.via_count(), 1);
    }

    #[test]
    fn jog_beats_via_detour() {
        let jog = RoutePath::new(vec![
            GridCoord::new(0, 0, 0),
            GridCoord::new(0, 1, 0),
        ]);
        let detour = RoutePath::new(vec![
            GridCoord::new(0, 0, 0),
            GridCoord::new(0, 0, 1),
            GridCoord::new(0, 1, 1),
            GridCoord::new(0, 1, 0),
        ]);
        assert_eq!(jog.cost(), Some(NONPREFERRED_COST));
        assert!(jog.cost() < detour.cost());
    }

    #[test]
    fn disjoint_route_has_no_cost() {
        let route = RoutePath::new(vec![GridCoord::new(0, 0, 0), GridCoord::new(3, 0, 0)]);
        assert_eq!(route.cost(), None);
        assert_eq!(RoutePath::default().cost(), Some(0));
    }

    #[test]
    fn mark_then_block() {
        let mut grid = SparseGrid::new(Point::new(0.0, 0.0), Point::new(4.0, 4.0), 1.0).unwrap();
        let route = l_route();
        route.mark(&mut grid);
        assert_eq!(grid.stats().path, route.len());

        grid.block_path(&route);
        let stats = grid.stats();
        assert_eq!(stats.path, 0);
        assert_eq!(stats.blocked, route.len());
    }
}
