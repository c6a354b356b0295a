use super::RoutingGrid;
use super::cell::Cell;
use crate::error::GridError;
use crate::path::GridPath;
use crate::utils::conversion::GridConverter;
use maze_common::geom::coord::GridCoord;
use maze_common::geom::point::Point;
use maze_common::geom::side::Side;
use maze_common::util::config::GridConfig;
use std::collections::{HashMap, HashSet};
use std::fmt;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GridStats {
    pub cells: usize,
    pub blocked: usize,
    pub path: usize,
    pub sources: usize,
    pub targets: usize,
}

impl fmt::Display for GridStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cells: {}, blocked: {}, path: {}, sources: {}, targets: {}",
            self.cells, self.blocked, self.path, self.sources, self.targets
        )
    }
}

/// Two-layer routing map. Cells are created on first touch and never removed;
/// clearing resets flags only.
///
/// Coordinates outside `[ll, ur]` are accepted without complaint. Only
/// `add_all_grids` and `add_perimeter_target` look at the bounds, so keeping
/// direct mutations in range is up to the caller.
pub struct SparseGrid {
    ll: GridCoord,
    ur: GridCoord,
    converter: GridConverter,
    map: HashMap<GridCoord, Cell>,
    source: HashSet<GridCoord>,
    target: HashSet<GridCoord>,
}

impl SparseGrid {
    pub fn new(ll: Point<f64>, ur: Point<f64>, track_pitch: f64) -> Result<Self, GridError> {
        if !track_pitch.is_finite() || track_pitch <= 0.0 {
            return Err(GridError::InvalidTrackPitch(track_pitch));
        }
        let converter = GridConverter::new(track_pitch);
        let scale = |p: Point<f64>| {
            converter
                .to_grid(p, 0)
                .ok_or(GridError::InvalidBounds { x: p.x, y: p.y })
        };
        let ll = scale(ll)?;
        let ur = scale(ur)?;

        log::debug!("Routing grid bounds {} .. {} (pitch {})", ll, ur, track_pitch);

        Ok(Self {
            ll,
            ur,
            converter,
            map: HashMap::new(),
            source: HashSet::new(),
            target: HashSet::new(),
        })
    }

    pub fn from_config(config: &GridConfig) -> Result<Self, GridError> {
        Self::new(config.lower_left, config.upper_right, config.track_pitch)
    }

    pub fn ll(&self) -> GridCoord {
        self.ll
    }
    pub fn ur(&self) -> GridCoord {
        self.ur
    }
    pub fn track_pitch(&self) -> f64 {
        self.converter.track_pitch()
    }
    pub fn track_factor(&self) -> [f64; 3] {
        self.converter.track_factor()
    }
    pub fn track_widths(&self) -> [f64; 3] {
        self.converter.track_widths()
    }

    /// Number of materialized cells.
    pub fn len(&self) -> usize {
        self.map.len()
    }
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
    pub fn contains(&self, coord: GridCoord) -> bool {
        self.map.contains_key(&coord)
    }
    pub fn cell(&self, coord: GridCoord) -> Option<&Cell> {
        self.map.get(&coord)
    }
    pub fn cells(&self) -> impl Iterator<Item = (&GridCoord, &Cell)> {
        self.map.iter()
    }

    #[inline]
    fn cell_mut(&mut self, coord: GridCoord) -> &mut Cell {
        self.map.entry(coord).or_default()
    }

    pub fn ensure_cell(&mut self, coord: GridCoord) {
        self.cell_mut(coord);
    }

    pub fn ensure_cells(&mut self, coords: impl IntoIterator<Item = GridCoord>) {
        for c in coords {
            self.ensure_cell(c);
        }
    }

    /// Materializes every in-bounds coordinate on both layers.
    pub fn add_all_grids(&mut self) {
        for x in self.ll.x..self.ur.x {
            for y in self.ll.y..self.ur.y {
                self.ensure_cell(GridCoord::new(x, y, 0));
                self.ensure_cell(GridCoord::new(x, y, 1));
            }
        }
    }

    pub fn set_blocked(&mut self, coord: GridCoord, value: bool) {
        self.cell_mut(coord).blocked = value;
    }

    pub fn set_blocked_all(&mut self, coords: impl IntoIterator<Item = GridCoord>, value: bool) {
        for c in coords {
            self.set_blocked(c, value);
        }
    }

    /// Reads the blocked flag, creating the cell if it was never touched.
    pub fn is_blocked(&mut self, coord: GridCoord) -> bool {
        self.cell_mut(coord).blocked
    }

    /// True if any coordinate is blocked. Every coordinate is materialized.
    pub fn is_any_blocked(&mut self, coords: impl IntoIterator<Item = GridCoord>) -> bool {
        coords
            .into_iter()
            .fold(false, |any, c| self.is_blocked(c) || any)
    }

    /// Non-materializing read; unknown coordinates are open.
    pub fn blocked_at(&self, coord: GridCoord) -> bool {
        self.map.get(&coord).is_some_and(|c| c.blocked)
    }

    pub fn set_path(&mut self, coord: GridCoord, value: bool) {
        self.cell_mut(coord).path = value;
    }

    pub fn set_path_all(&mut self, coords: impl IntoIterator<Item = GridCoord>, value: bool) {
        for c in coords {
            self.set_path(c, value);
        }
    }

    pub fn clear_blockages(&mut self) {
        for cell in self.map.values_mut() {
            cell.blocked = false;
        }
    }

    pub fn clear_source(&mut self) {
        for cell in self.map.values_mut() {
            cell.source = false;
        }
        self.source.clear();
    }

    pub fn clear_target(&mut self) {
        for cell in self.map.values_mut() {
            cell.target = false;
        }
        self.target.clear();
    }

    /// Registers a source. Terminals are never blocked.
    pub fn set_source(&mut self, coord: GridCoord) {
        let cell = self.cell_mut(coord);
        cell.source = true;
        cell.blocked = false;
        self.source.insert(coord);
    }

    pub fn set_sources(&mut self, coords: impl IntoIterator<Item = GridCoord>) {
        for c in coords {
            self.set_source(c);
        }
    }

    /// Registers a target. Terminals are never blocked.
    pub fn set_target(&mut self, coord: GridCoord) {
        let cell = self.cell_mut(coord);
        cell.target = true;
        cell.blocked = false;
        self.target.insert(coord);
    }

    pub fn set_targets(&mut self, coords: impl IntoIterator<Item = GridCoord>) {
        for c in coords {
            self.set_target(c);
        }
    }

    pub fn add_sources(&mut self, track_list: &[GridCoord]) {
        log::debug!("Adding source list={:?}", track_list);
        for &c in track_list {
            log::trace!("Adding source {}", c);
            self.set_source(c);
        }
    }

    pub fn add_targets(&mut self, track_list: &[GridCoord]) {
        log::debug!("Adding target list={:?}", track_list);
        for &c in track_list {
            log::trace!("Adding target {}", c);
            self.set_target(c);
        }
    }

    /// Edge coordinates on both layers. Sweeps stop short of `ur` along the
    /// edge, so the (ur.x, ur.y) corner is never produced.
    pub fn perimeter_coords(&self, side: Side) -> Vec<GridCoord> {
        let mut perimeter = Vec::new();
        let mut push_both = |x: i32, y: i32| {
            perimeter.push(GridCoord::new(x, y, 0));
            perimeter.push(GridCoord::new(x, y, 1));
        };

        if side.includes(Side::Left) {
            for y in self.ll.y..self.ur.y {
                push_both(self.ll.x, y);
            }
        }
        if side.includes(Side::Right) {
            for y in self.ll.y..self.ur.y {
                push_both(self.ur.x, y);
            }
        }
        if side.includes(Side::Bottom) {
            for x in self.ll.x..self.ur.x {
                push_both(x, self.ll.y);
            }
        }
        if side.includes(Side::Top) {
            for x in self.ll.x..self.ur.x {
                push_both(x, self.ur.y);
            }
        }
        perimeter
    }

    pub fn add_perimeter_target(&mut self, side: Side) {
        log::debug!("Adding perimeter target ({:?})", side);
        let perimeter = self.perimeter_coords(side);
        self.set_targets(perimeter);
    }

    pub fn is_source(&self, coord: GridCoord) -> bool {
        self.source.contains(&coord)
    }

    /// Pure lookup in the target set; does not create a cell.
    pub fn is_target(&self, coord: GridCoord) -> bool {
        self.target.contains(&coord)
    }

    pub fn sources(&self) -> &HashSet<GridCoord> {
        &self.source
    }

    pub fn targets(&self) -> &HashSet<GridCoord> {
        &self.target
    }

    /// Commits a found route: drops its transient path marking and turns it
    /// into a permanent obstruction for later routes.
    pub fn block_path<P: GridPath + ?Sized>(&mut self, path: &P) {
        path.set_path(self, false);
        path.set_blocked(self, true);
    }

    pub fn stats(&self) -> GridStats {
        let mut stats = GridStats {
            cells: self.map.len(),
            sources: self.source.len(),
            targets: self.target.len(),
            ..Default::default()
        };
        for cell in self.map.values() {
            stats.blocked += cell.blocked as usize;
            stats.path += cell.path as usize;
        }
        stats
    }
}

impl RoutingGrid for SparseGrid {
    fn lower_left(&self) -> GridCoord {
        self.ll
    }
    fn upper_right(&self) -> GridCoord {
        self.ur
    }
    fn is_obstacle(&self, coord: GridCoord) -> bool {
        self.blocked_at(coord)
    }
    fn is_target(&self, coord: GridCoord) -> bool {
        SparseGrid::is_target(self, coord)
    }
    fn sources(&self) -> &HashSet<GridCoord> {
        &self.source
    }
}
