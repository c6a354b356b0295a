pub mod coord;
pub mod point;
pub mod side;
