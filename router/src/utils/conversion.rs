use maze_common::geom::coord::GridCoord;
use maze_common::geom::point::Point;

/// Scales physical coordinates onto the track grid. x and y are divided by the
/// track pitch; the layer index passes through unscaled.
#[derive(Clone, Debug)]
pub struct GridConverter {
    track_pitch: f64,
    track_factor: [f64; 3],
}

impl GridConverter {
    /// `track_pitch` must already be validated as positive.
    pub fn new(track_pitch: f64) -> Self {
        Self {
            track_pitch,
            track_factor: [1.0 / track_pitch, 1.0 / track_pitch, 1.0],
        }
    }

    pub fn track_pitch(&self) -> f64 {
        self.track_pitch
    }

    pub fn track_factor(&self) -> [f64; 3] {
        self.track_factor
    }

    pub fn track_widths(&self) -> [f64; 3] {
        [self.track_pitch, self.track_pitch, 1.0]
    }

    /// Nearest grid coordinate, ties to even. `None` when the scaled point is
    /// not finite or does not fit in an `i32`. Not clamped to any bounds.
    pub fn to_grid(&self, p: Point<f64>, layer: u8) -> Option<GridCoord> {
        let x = scale_axis(p.x, self.track_factor[0])?;
        let y = scale_axis(p.y, self.track_factor[1])?;
        Some(GridCoord::new(x, y, layer))
    }
}

fn scale_axis(v: f64, factor: f64) -> Option<i32> {
    let scaled = (v * factor).round_ties_even();
    if scaled.is_finite() && scaled >= i32::MIN as f64 && scaled <= i32::MAX as f64 {
        Some(scaled as i32)
    } else {
        None
    }
}
