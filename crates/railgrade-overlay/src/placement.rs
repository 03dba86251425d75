//! Placement policy: whether a structure may be placed on a cell that
//! hosts a rail segment.

use railgrade_core::{Cell, Host, OccupantKind, StructureClass};

/// Placement-override predicate.
///
/// Returns `true` when the cell already hosts a rail segment (rails
/// are always overbuildable), or when the candidate kind is a wall,
/// fence, or edifice (those may always be placed regardless of rail
/// presence). A `false` is not a rejection — it means "no override,
/// defer to the host's default placement rules".
pub fn allows_placement(host: &dyn Host, kind: &OccupantKind, cell: Cell) -> bool {
    if host.occupants_at(cell).iter().any(|o| o.is_rail()) {
        return true;
    }
    matches!(
        kind,
        OccupantKind::Structure(
            StructureClass::Wall | StructureClass::Fence | StructureClass::Edifice
        )
    )
}
