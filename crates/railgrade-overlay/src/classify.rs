//! Occupancy classifier: the ordered predicate chain deriving a
//! [`CellClassification`] from current world state.

use railgrade_core::{Cell, CellClassification, Host};

/// Classify a cell from its current occupants and terrain.
///
/// Pure function of host state, recomputed on every call — never
/// memoized, so it always reflects the occupants as of the current
/// tick. The predicates are ordered: an impassable occupant dominates
/// a rail segment on the same cell, and any rail presence dominates
/// the terrain rules.
pub fn classify(host: &dyn Host, cell: Cell) -> CellClassification {
    let occupants = host.occupants_at(cell);
    let has_rail = occupants.iter().any(|o| o.is_rail());
    let blocked = occupants.iter().any(|o| o.impassable);

    if has_rail {
        return if blocked {
            CellClassification::RailBlocked
        } else {
            CellClassification::RailClear
        };
    }

    match host.terrain_at(cell) {
        Some(t) if t.floor_applied => CellClassification::FlooredTerrain,
        Some(t) if t.supports_floor => CellClassification::NaturalTerrain,
        _ => CellClassification::Plain,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use railgrade_core::{OccupantKind, StructureClass, TerrainInfo};
    use railgrade_test_utils::GridHost;

    const CELL: Cell = Cell::new(4, 4);

    #[test]
    fn clear_rail_beats_terrain() {
        let mut host = GridHost::new();
        host.set_terrain(
            CELL,
            TerrainInfo {
                supports_floor: true,
                floor_applied: false,
            },
        );
        host.place_rail(CELL);
        assert_eq!(classify(&host, CELL), CellClassification::RailClear);
    }

    #[test]
    fn impassable_occupant_beats_rail() {
        let mut host = GridHost::new();
        host.place_rail(CELL);
        host.place_wall(CELL);
        assert_eq!(classify(&host, CELL), CellClassification::RailBlocked);
    }

    #[test]
    fn passable_structure_leaves_rail_clear() {
        let mut host = GridHost::new();
        host.place_rail(CELL);
        host.place(CELL, OccupantKind::Structure(StructureClass::Fence), false);
        assert_eq!(classify(&host, CELL), CellClassification::RailClear);
    }

    #[test]
    fn terrain_rules_without_rail() {
        let mut host = GridHost::new();

        host.set_terrain(
            CELL,
            TerrainInfo {
                supports_floor: true,
                floor_applied: false,
            },
        );
        assert_eq!(classify(&host, CELL), CellClassification::NaturalTerrain);

        host.set_terrain(
            CELL,
            TerrainInfo {
                supports_floor: true,
                floor_applied: true,
            },
        );
        assert_eq!(classify(&host, CELL), CellClassification::FlooredTerrain);

        host.set_terrain(
            CELL,
            TerrainInfo {
                supports_floor: false,
                floor_applied: false,
            },
        );
        assert_eq!(classify(&host, CELL), CellClassification::Plain);
    }

    #[test]
    fn missing_terrain_is_plain() {
        let host = GridHost::new();
        assert_eq!(classify(&host, CELL), CellClassification::Plain);
    }

    #[test]
    fn classification_is_idempotent_for_unchanged_state() {
        let mut host = GridHost::new();
        host.place_rail(CELL);
        let first = classify(&host, CELL);
        let second = classify(&host, CELL);
        assert_eq!(first, second);
    }
}
