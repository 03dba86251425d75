//! Occupant and terrain descriptors handed across the host seam.

use std::fmt;

/// Stable identity of an occupant, assigned by the host.
///
/// Used for targeted destruction (vegetation clearing on boosted rail
/// traversal). The overlay never allocates these; it only echoes back
/// IDs the host returned from [`occupants_at`](crate::Host::occupants_at).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OccupantId(pub u64);

impl fmt::Display for OccupantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Structural category of a buildable occupant.
///
/// Walls, fences, and edifices may always be placed over rail segments;
/// see the placement policy in `railgrade-overlay`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StructureClass {
    /// A full wall section.
    Wall,
    /// A fence or barricade.
    Fence,
    /// Any other load-bearing edifice (doors, gates, supports).
    Edifice,
    /// Free-standing furniture and equipment.
    Furniture,
}

/// What kind of thing occupies a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OccupantKind {
    /// A rail segment: clear rails are near-free lanes for
    /// player-aligned agents.
    Rail,
    /// A built structure of the given class.
    Structure(StructureClass),
    /// A plant. Non-tree vegetation is cleared as boosted agents pass.
    Vegetation {
        /// Trees survive rail traversal; brush and grass do not.
        tree: bool,
    },
    /// A moving agent (colonist, animal, raider).
    Agent,
    /// Anything else the host tracks on the grid.
    Other,
}

/// One occupant overlapping a cell, as reported by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Occupant {
    /// Host-assigned identity.
    pub id: OccupantId,
    /// What the occupant is.
    pub kind: OccupantKind,
    /// Whether the occupant blocks traversal entirely. An impassable
    /// occupant always dominates a rail segment on the same cell.
    pub impassable: bool,
}

impl Occupant {
    /// True if this occupant is a rail segment.
    pub fn is_rail(&self) -> bool {
        self.kind == OccupantKind::Rail
    }

    /// True if this occupant is vegetation that boosted traversal clears
    /// (anything planted except trees).
    pub fn is_clearable_vegetation(&self) -> bool {
        matches!(self.kind, OccupantKind::Vegetation { tree: false })
    }
}

/// Terrain flags for a cell, as reported by the host.
///
/// `floor_applied` implies the terrain supported a floor; the overlay
/// checks `floor_applied` first and only consults `supports_floor` for
/// unfloored cells.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TerrainInfo {
    /// Whether a constructed floor layer can be applied here.
    pub supports_floor: bool,
    /// Whether a constructed floor is currently applied.
    pub floor_applied: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rail_and_vegetation_predicates() {
        let rail = Occupant {
            id: OccupantId(1),
            kind: OccupantKind::Rail,
            impassable: false,
        };
        assert!(rail.is_rail());
        assert!(!rail.is_clearable_vegetation());

        let grass = Occupant {
            id: OccupantId(2),
            kind: OccupantKind::Vegetation { tree: false },
            impassable: false,
        };
        let tree = Occupant {
            id: OccupantId(3),
            kind: OccupantKind::Vegetation { tree: true },
            impassable: false,
        };
        assert!(grass.is_clearable_vegetation());
        assert!(!tree.is_clearable_vegetation());
    }
}
