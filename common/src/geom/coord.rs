use std::fmt;

/// Grid-unit location: one track pitch per step in x/y, one routing layer in z.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GridCoord {
    pub x: i32,
    pub y: i32,
    pub z: u8,
}

impl GridCoord {
    pub fn new(x: i32, y: i32, z: u8) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub fn offset(&self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy, self.z)
    }

    #[inline]
    pub fn with_layer(&self, z: u8) -> Self {
        Self::new(self.x, self.y, z)
    }
}

impl fmt::Display for GridCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayerDirection {
    Horizontal,
    Vertical,
}

impl LayerDirection {
    /// Two-layer Manhattan convention: layer 0 runs horizontal, layer 1 vertical.
    pub fn of_layer(z: u8) -> Self {
        if z % 2 == 0 {
            LayerDirection::Horizontal
        } else {
            LayerDirection::Vertical
        }
    }
}
