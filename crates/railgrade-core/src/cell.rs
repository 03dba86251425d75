//! Grid cell coordinates and the [`TickId`] counter.

use std::fmt;

/// A grid position, used as a key everywhere in the overlay.
///
/// Cell identities are permanent for the lifetime of the grid; the
/// overlay never invents cells, it only keys state by the coordinates
/// the host hands it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    /// Column coordinate.
    pub x: i32,
    /// Row coordinate.
    pub y: i32,
}

impl Cell {
    /// Construct a cell from its coordinates.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Cell {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// Monotonically increasing simulation tick counter.
///
/// Supplied by the host via [`Host::current_tick`](crate::Host::current_tick);
/// the overlay never advances it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TickId(pub u64);

impl TickId {
    /// Ticks elapsed since `earlier`, saturating at zero if the host's
    /// counter ever runs backwards.
    pub fn since(self, earlier: TickId) -> u64 {
        self.0.saturating_sub(earlier.0)
    }
}

impl fmt::Display for TickId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
