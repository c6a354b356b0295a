use serde::Deserialize;

/// Bounding edge(s) of a routing region.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    All,
    Left,
    Right,
    Top,
    Bottom,
}

impl Side {
    /// Whether this selection covers `edge`.
    pub fn includes(self, edge: Side) -> bool {
        self == Side::All || self == edge
    }
}
