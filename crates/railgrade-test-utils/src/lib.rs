//! Test utilities and mock host for Railgrade development.
//!
//! Provides [`GridHost`], an in-memory implementation of the
//! [`Host`] trait backed by hash maps, with setup helpers for placing
//! occupants and terrain and with recording of every side effect the
//! overlay performs (cost writes, invalidations, bulk recomputes,
//! occupant destruction) so tests can assert on them.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::collections::HashMap;

use railgrade_core::{
    Cell, Host, Occupant, OccupantId, OccupantKind, OccupantList, StructureClass, TerrainInfo,
    TickId,
};

/// In-memory mock of the host simulation.
///
/// Occupants, terrain, and base costs are pre-populated with the
/// `place_*` / `set_*` helpers before the overlay runs. Side effects
/// are recorded in the public fields; inspect them directly.
pub struct GridHost {
    occupants: HashMap<Cell, Vec<Occupant>>,
    terrain: HashMap<Cell, TerrainInfo>,
    base_costs: HashMap<Cell, i32>,
    cost_table: HashMap<Cell, i32>,
    tick: TickId,
    next_id: u64,
    /// Every `invalidate_region` call, in order: `(cell, walkable)`.
    pub invalidations: Vec<(Cell, bool)>,
    /// Number of `trigger_full_recompute` calls.
    pub full_recomputes: u64,
    /// Tick at which each full recompute was triggered.
    pub recompute_ticks: Vec<TickId>,
    /// Every occupant the overlay destroyed, in order.
    pub destroyed: Vec<(Cell, OccupantId)>,
}

impl GridHost {
    pub fn new() -> Self {
        Self {
            occupants: HashMap::new(),
            terrain: HashMap::new(),
            base_costs: HashMap::new(),
            cost_table: HashMap::new(),
            tick: TickId(0),
            next_id: 1,
            invalidations: Vec::new(),
            full_recomputes: 0,
            recompute_ticks: Vec::new(),
            destroyed: Vec::new(),
        }
    }

    /// Advance the tick counter by one.
    pub fn advance_tick(&mut self) {
        self.tick.0 += 1;
    }

    /// Jump the tick counter to an absolute value.
    pub fn set_tick(&mut self, tick: u64) {
        self.tick = TickId(tick);
    }

    /// Place an occupant and return a copy of it (for feeding the
    /// overlay's spawn hook).
    pub fn place(&mut self, cell: Cell, kind: OccupantKind, impassable: bool) -> Occupant {
        let occ = Occupant {
            id: OccupantId(self.next_id),
            kind,
            impassable,
        };
        self.next_id += 1;
        self.occupants.entry(cell).or_default().push(occ);
        occ
    }

    /// Place a passable rail segment.
    pub fn place_rail(&mut self, cell: Cell) -> Occupant {
        self.place(cell, OccupantKind::Rail, false)
    }

    /// Place an impassable wall.
    pub fn place_wall(&mut self, cell: Cell) -> Occupant {
        self.place(cell, OccupantKind::Structure(StructureClass::Wall), true)
    }

    /// Remove an occupant by id and return it (for feeding the
    /// overlay's destroy hook). Panics if the occupant is not there —
    /// that is a test bug, not a scenario.
    pub fn remove(&mut self, cell: Cell, id: OccupantId) -> Occupant {
        let list = self.occupants.get_mut(&cell).expect("no occupants at cell");
        let pos = list
            .iter()
            .position(|o| o.id == id)
            .expect("occupant not at cell");
        list.remove(pos)
    }

    pub fn set_terrain(&mut self, cell: Cell, terrain: TerrainInfo) {
        self.terrain.insert(cell, terrain);
    }

    pub fn set_base_cost(&mut self, cell: Cell, cost: i32) {
        self.base_costs.insert(cell, cost);
    }

    /// Read back the shared cost table for assertions.
    pub fn cost_at(&self, cell: Cell) -> Option<i32> {
        self.cost_table.get(&cell).copied()
    }
}

impl Default for GridHost {
    fn default() -> Self {
        Self::new()
    }
}

impl Host for GridHost {
    fn occupants_at(&self, cell: Cell) -> OccupantList {
        self.occupants
            .get(&cell)
            .map(|v| v.iter().copied().collect())
            .unwrap_or_default()
    }

    fn terrain_at(&self, cell: Cell) -> Option<TerrainInfo> {
        self.terrain.get(&cell).copied()
    }

    fn base_cost_at(&self, cell: Cell) -> Option<i32> {
        self.base_costs.get(&cell).copied()
    }

    fn write_cost(&mut self, cell: Cell, cost: i32) {
        self.cost_table.insert(cell, cost);
    }

    fn invalidate_region(&mut self, cell: Cell, walkable: bool) {
        self.invalidations.push((cell, walkable));
    }

    fn trigger_full_recompute(&mut self) {
        self.full_recomputes += 1;
        self.recompute_ticks.push(self.tick);
    }

    fn destroy_occupant(&mut self, cell: Cell, id: OccupantId) {
        if let Some(list) = self.occupants.get_mut(&cell) {
            if let Some(pos) = list.iter().position(|o| o.id == id) {
                list.remove(pos);
                self.destroyed.push((cell, id));
            }
        }
    }

    fn current_tick(&self) -> TickId {
        self.tick
    }
}
