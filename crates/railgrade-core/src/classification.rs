//! Derived cell categories and agent affiliation.

/// The derived category of a cell, used to select its cost and speed
/// treatment.
///
/// Classifications are computed on demand from the host's current
/// occupant and terrain state and are never cached across mutations:
/// a classification must always reflect the occupants as of the tick
/// in which it is read.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CellClassification {
    /// A rail segment with no impassable occupant: a free lane.
    RailClear,
    /// A rail segment under an impassable occupant: walls win over
    /// rails, the cell is fully blocked.
    RailBlocked,
    /// Unfloored terrain that could carry a floor: scaled up to push
    /// traffic toward rails.
    NaturalTerrain,
    /// Terrain with a constructed floor applied: viable, but strictly
    /// worse than rails.
    FlooredTerrain,
    /// Everything else; cost passes through unchanged.
    Plain,
}

impl CellClassification {
    /// True for either rail classification.
    pub fn has_rail(self) -> bool {
        matches!(self, Self::RailClear | Self::RailBlocked)
    }
}

/// Whether a moving agent benefits from rail lanes.
///
/// "Player-aligned" is read narrowly: owned colonists and their tamed
/// animals. Allied-but-not-owned agents (visiting traders, wild
/// animals, hostiles) are [`Unaligned`](Affiliation::Unaligned) and get
/// no rail boost.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Affiliation {
    /// An owned colonist or tamed animal.
    PlayerAligned,
    /// Any other agent.
    Unaligned,
}
