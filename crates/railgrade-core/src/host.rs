//! The [`Host`] trait: the narrow seam between the overlay and the
//! host simulation.
//!
//! The overlay owns no grid data. Everything it knows about the world
//! — occupants, terrain, native costs, the tick counter — flows in
//! through this trait, and every effect it has — cost writes, region
//! invalidation, bulk recomputes, vegetation destruction — flows back
//! out through it. The trait is object-safe; the overlay takes
//! `&mut dyn Host` in its hooks.
//!
//! The host guarantees serialized tick execution: all methods are
//! called from the single simulation thread, so implementations need
//! no locking.

use crate::cell::{Cell, TickId};
use crate::occupant::{Occupant, OccupantId, TerrainInfo};
use smallvec::SmallVec;

/// Occupant list for one cell. Cells rarely hold more than a handful
/// of occupants, so the common case stays on the stack.
pub type OccupantList = SmallVec<[Occupant; 4]>;

/// Services the host simulation must expose to the overlay.
pub trait Host {
    /// All occupants overlapping `cell`, in host-defined order.
    ///
    /// Returns an empty list for vacant or out-of-range cells.
    fn occupants_at(&self, cell: Cell) -> OccupantList;

    /// Terrain flags at `cell`, or `None` if the host has no terrain
    /// record there.
    fn terrain_at(&self, cell: Cell) -> Option<TerrainInfo>;

    /// The host's native, terrain-only path cost for `cell`.
    ///
    /// `None` is a lookup failure; the overlay degrades to cost 1 and
    /// records a diagnostic rather than stalling movement.
    fn base_cost_at(&self, cell: Cell) -> Option<i32>;

    /// Overwrite `cell`'s entry in the shared pathfinding cost table.
    ///
    /// Entries are overwritten in place and never removed; a cell
    /// always has some cost.
    fn write_cost(&mut self, cell: Cell, cost: i32);

    /// Notify the host's spatial index that walkability changed at
    /// `cell`.
    fn invalidate_region(&mut self, cell: Cell, walkable: bool);

    /// Rebuild the host's derived pathfinding structures in bulk.
    ///
    /// Expensive; the overlay's scheduler rate-limits calls to this.
    fn trigger_full_recompute(&mut self);

    /// Remove one occupant from the world (vegetation clearing).
    ///
    /// A stale or unknown `id` must be a no-op.
    fn destroy_occupant(&mut self, cell: Cell, id: OccupantId);

    /// The current simulation tick.
    fn current_tick(&self) -> TickId;
}
