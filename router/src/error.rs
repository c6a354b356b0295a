use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum GridError {
    #[error("track pitch must be finite and positive, got {0}")]
    InvalidTrackPitch(f64),
    #[error("grid bounds corner ({x}, {y}) does not scale to a finite grid coordinate")]
    InvalidBounds { x: f64, y: f64 },
    #[error("layer {0} is outside the two-layer grid")]
    InvalidLayer(i32),
}
