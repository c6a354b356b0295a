/// Routing state of one grid location. Flags are independent; any
/// combination is representable. Identity comes from the owning coordinate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Cell {
    /// Permanently impassable.
    pub blocked: bool,
    /// Claimed by a route that has not been committed yet.
    pub path: bool,
    pub source: bool,
    pub target: bool,
}

impl Cell {
    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.source || self.target
    }
}
