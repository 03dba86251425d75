//! Railgrade: a dynamic path-cost overlay for grid-based movement
//! simulations.
//!
//! Rail cells become near-free travel lanes for player-aligned agents
//! while other terrain is scaled up, steering traffic onto the rail
//! network. The engine plugs into a host simulation through the
//! [`Host`](types::Host) trait and keeps the host's pathfinding cache
//! consistent through a dirty-set tracker and a coalescing
//! recalculation scheduler — no O(map) recompute per mutation.
//!
//! This is the top-level facade crate re-exporting the public API from
//! the Railgrade sub-crates; for most hosts, depending on `railgrade`
//! alone is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use railgrade::prelude::*;
//! use std::collections::HashMap;
//!
//! // A minimal host: one flat map of occupants and costs.
//! #[derive(Default)]
//! struct MiniHost {
//!     occupants: HashMap<Cell, Vec<Occupant>>,
//!     costs: HashMap<Cell, i32>,
//!     tick: TickId,
//!     recomputes: u32,
//! }
//!
//! impl Host for MiniHost {
//!     fn occupants_at(&self, cell: Cell) -> OccupantList {
//!         self.occupants.get(&cell).map(|v| v.iter().copied().collect()).unwrap_or_default()
//!     }
//!     fn terrain_at(&self, _cell: Cell) -> Option<TerrainInfo> { None }
//!     fn base_cost_at(&self, _cell: Cell) -> Option<i32> { Some(1) }
//!     fn write_cost(&mut self, cell: Cell, cost: i32) { self.costs.insert(cell, cost); }
//!     fn invalidate_region(&mut self, _cell: Cell, _walkable: bool) {}
//!     fn trigger_full_recompute(&mut self) { self.recomputes += 1; }
//!     fn destroy_occupant(&mut self, cell: Cell, id: OccupantId) {
//!         if let Some(v) = self.occupants.get_mut(&cell) { v.retain(|o| o.id != id); }
//!     }
//!     fn current_tick(&self) -> TickId { self.tick }
//! }
//!
//! let mut host = MiniHost::default();
//! let mut overlay = RailOverlay::with_defaults();
//!
//! // Lay a rail segment and notify the overlay.
//! let cell = Cell::new(4, 2);
//! let rail = Occupant { id: OccupantId(1), kind: OccupantKind::Rail, impassable: false };
//! host.occupants.entry(cell).or_default().push(rail);
//! overlay.occupant_spawned(&mut host, cell, &rail);
//! assert_eq!(host.costs[&cell], 0);
//!
//! // A colonist stepping onto the rail moves five times faster.
//! let ctx = AgentContext { affiliation: Affiliation::PlayerAligned, cell, dest: None };
//! assert_eq!(overlay.movement_multiplier(&mut host, &ctx), RAIL_BOOST);
//!
//! // Ticking past the coalescing window releases one bulk refresh.
//! for t in 1..=20 {
//!     host.tick = TickId(t);
//!     overlay.tick(&mut host);
//! }
//! assert_eq!(host.recomputes, 1);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub use railgrade_core as types;
pub use railgrade_overlay as overlay;

/// Everything a typical host integration needs.
pub mod prelude {
    pub use railgrade_core::{
        Affiliation, Cell, CellClassification, Host, Occupant, OccupantId, OccupantKind,
        OccupantList, OverlayFault, StructureClass, TerrainInfo, TickId,
    };
    pub use railgrade_overlay::{
        allows_placement, classify, falloff_multiplier, transform_cost, AgentContext,
        OverlayConfig, OverlayMetrics, RailOverlay, IMPASSABLE_COST, NATURAL_COST_CAP, RAIL_BOOST,
    };
}
