//! [`RailOverlay`]: the host-facing orchestrator.
//!
//! Owns the dirty tracker, the flush scheduler, the sanitized
//! configuration, and the metrics counters. The host drives it through
//! six hooks:
//!
//! - [`cost_at`](RailOverlay::cost_at) after its native cost
//!   computation for a cell;
//! - [`movement_multiplier`](RailOverlay::movement_multiplier) once per
//!   agent per movement step;
//! - [`occupant_spawned`](RailOverlay::occupant_spawned) /
//!   [`occupant_destroyed`](RailOverlay::occupant_destroyed) on world
//!   mutations;
//! - [`tick`](RailOverlay::tick) once per simulation tick;
//! - [`allows_placement`](RailOverlay::allows_placement) on
//!   placement-validity queries.
//!
//! Everything runs synchronously on the host's simulation thread.

use railgrade_core::{
    Affiliation, Cell, CellClassification, Host, Occupant, OccupantKind, OverlayFault,
};

use crate::classify::classify;
use crate::config::OverlayConfig;
use crate::cost::transform_cost;
use crate::metrics::OverlayMetrics;
use crate::placement;
use crate::scheduler::{FlushDecision, FlushState, RecalcScheduler};
use crate::speed::{falloff_multiplier, AgentContext, RAIL_BOOST};
use crate::tracker::DirtyTracker;

/// The path-cost overlay engine.
pub struct RailOverlay {
    config: OverlayConfig,
    tracker: DirtyTracker,
    scheduler: RecalcScheduler,
    metrics: OverlayMetrics,
}

impl RailOverlay {
    /// Construct the overlay, sanitizing the configuration.
    ///
    /// Invalid tunables are clamped, warned about, and counted; they
    /// never fail construction.
    pub fn new(config: OverlayConfig) -> Self {
        let (config, faults) = config.sanitized();
        let mut metrics = OverlayMetrics::default();
        for fault in &faults {
            log::warn!("{fault}");
            metrics.config_clamps += 1;
        }
        let scheduler = RecalcScheduler::new(config.flush_interval, config.backlog_limit);
        Self {
            config,
            tracker: DirtyTracker::new(),
            scheduler,
            metrics,
        }
    }

    /// Construct with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(OverlayConfig::default())
    }

    // ── Cost query hook ──────────────────────────────────────────────

    /// Post-process the host's native cost for `cell`.
    ///
    /// The caller writes the returned value into the shared cost
    /// table; this hook itself has no side effects.
    pub fn cost_at(&self, host: &dyn Host, cell: Cell, base_cost: i32) -> i32 {
        transform_cost(classify(host, cell), base_cost, self.config.terrain_scale_up)
    }

    // ── Movement hook ────────────────────────────────────────────────

    /// Movement-speed multiplier for one agent stepping into a cell.
    ///
    /// Classification and path cost are looked up fresh on every call.
    /// A player-aligned agent on a clear rail gets the flat
    /// [`RAIL_BOOST`] and clears any non-tree vegetation on the cell;
    /// other agents on rails get no boost; everything else follows the
    /// inverse-square-root falloff on the transformed cost. A failed
    /// cost lookup degrades to base cost 1 — movement never stalls.
    pub fn movement_multiplier(&mut self, host: &mut dyn Host, ctx: &AgentContext) -> f32 {
        let classification = classify(host, ctx.cell);
        if classification == CellClassification::RailClear {
            return match ctx.affiliation {
                Affiliation::PlayerAligned => {
                    self.clear_vegetation(host, ctx.cell);
                    RAIL_BOOST
                }
                Affiliation::Unaligned => 1.0,
            };
        }
        let base = self.base_cost_or_fallback(host, ctx.cell);
        let path_cost = transform_cost(classification, base, self.config.terrain_scale_up);
        falloff_multiplier(path_cost)
    }

    // ── Mutation hooks ───────────────────────────────────────────────

    /// Notify the overlay that `occupant` spawned at `cell`.
    ///
    /// Fires after the host has inserted the occupant into its grid,
    /// so walkability is computed from the cell's full occupant list.
    /// Spawns that involve no rail, directly or by overlap, are
    /// ignored. Redundant notifications are idempotent on the dirty
    /// set.
    pub fn occupant_spawned(&mut self, host: &mut dyn Host, cell: Cell, occupant: &Occupant) {
        match occupant.kind {
            OccupantKind::Rail => {
                let walkable = !host.occupants_at(cell).iter().any(|o| o.impassable);
                host.invalidate_region(cell, walkable);
                self.mark_and_rewrite(host, cell);
            }
            _ if occupant.impassable => {
                let has_rail = host.occupants_at(cell).iter().any(|o| o.is_rail());
                if has_rail {
                    // Wall wins over the rail underneath it.
                    host.invalidate_region(cell, false);
                    self.mark_and_rewrite(host, cell);
                }
            }
            _ => {}
        }
    }

    /// Notify the overlay that `occupant` was destroyed at `cell`.
    ///
    /// Fires after the host has removed the occupant, so walkability
    /// is recomputed from the remaining occupants.
    pub fn occupant_destroyed(&mut self, host: &mut dyn Host, cell: Cell, occupant: &Occupant) {
        match occupant.kind {
            OccupantKind::Rail => {
                let walkable = !host.occupants_at(cell).iter().any(|o| o.impassable);
                host.invalidate_region(cell, walkable);
                self.mark_and_rewrite(host, cell);
            }
            _ if occupant.impassable => {
                let remaining = host.occupants_at(cell);
                if remaining.iter().any(|o| o.is_rail()) {
                    let walkable = !remaining.iter().any(|o| o.impassable);
                    host.invalidate_region(cell, walkable);
                    self.mark_and_rewrite(host, cell);
                }
            }
            _ => {}
        }
    }

    // ── Tick hook ────────────────────────────────────────────────────

    /// Advance the scheduler by one simulation tick.
    ///
    /// Releases the accumulated burst when the coalescing window has
    /// elapsed (or the backlog bound is exceeded): rewrites every
    /// dirty cell's cost entry, triggers exactly one bulk recompute,
    /// and clears the dirty set.
    pub fn tick(&mut self, host: &mut dyn Host) {
        let now = host.current_tick();
        match self.scheduler.poll(now, self.tracker.len()) {
            FlushDecision::Hold => {}
            FlushDecision::Flush { forced } => {
                if forced {
                    let fault = OverlayFault::SchedulerBacklog {
                        dirty: self.tracker.len(),
                    };
                    log::warn!("{fault}");
                    self.metrics.forced_flushes += 1;
                }
                for cell in self.tracker.drain() {
                    self.rewrite_cell(host, cell);
                }
                host.trigger_full_recompute();
                self.metrics.full_recomputes += 1;
            }
        }
    }

    // ── Placement hook ───────────────────────────────────────────────

    /// Placement-validity query: may `kind` be placed at `cell`?
    ///
    /// `true` is an override (rail cells are always overbuildable;
    /// walls, fences, and edifices always place); `false` defers to
    /// the host's default rules.
    pub fn allows_placement(&mut self, host: &dyn Host, kind: &OccupantKind, cell: Cell) -> bool {
        let allowed = placement::allows_placement(host, kind, cell);
        if allowed {
            self.metrics.placement_overrides += 1;
        }
        allowed
    }

    // ── Observability ────────────────────────────────────────────────

    /// Cumulative activity counters.
    pub fn metrics(&self) -> &OverlayMetrics {
        &self.metrics
    }

    /// The sanitized configuration in effect.
    pub fn config(&self) -> &OverlayConfig {
        &self.config
    }

    /// Number of cells currently awaiting the next flush.
    pub fn pending_cells(&self) -> usize {
        self.tracker.len()
    }

    /// Current scheduler state, for observability and tests.
    pub fn flush_state(&self) -> FlushState {
        self.scheduler.state()
    }

    // ── Internals ────────────────────────────────────────────────────

    /// Mark a cell dirty and synchronously rewrite its cost entry.
    ///
    /// Per-cell recomputation is never deferred; only the bulk cache
    /// refresh waits out the coalescing window.
    fn mark_and_rewrite(&mut self, host: &mut dyn Host, cell: Cell) {
        if self.tracker.mark(cell) {
            self.metrics.dirty_marks += 1;
            self.scheduler.note_dirty(host.current_tick());
        } else {
            self.metrics.redundant_marks += 1;
        }
        self.rewrite_cell(host, cell);
    }

    /// Reclassify `cell` and overwrite its cost-table entry.
    fn rewrite_cell(&mut self, host: &mut dyn Host, cell: Cell) {
        let base = self.base_cost_or_fallback(host, cell);
        let cost = transform_cost(classify(host, cell), base, self.config.terrain_scale_up);
        host.write_cost(cell, cost);
        self.metrics.cells_recomputed += 1;
    }

    /// Fetch the host's native cost, degrading to 1 on a failed lookup.
    fn base_cost_or_fallback(&mut self, host: &dyn Host, cell: Cell) -> i32 {
        match host.base_cost_at(cell) {
            Some(cost) => cost,
            None => {
                let fault = OverlayFault::LookupFailure { cell };
                log::warn!("{fault}");
                self.metrics.lookup_failures += 1;
                1
            }
        }
    }

    /// Destroy every non-tree vegetation occupant at `cell`.
    fn clear_vegetation(&mut self, host: &mut dyn Host, cell: Cell) {
        let occupants = host.occupants_at(cell);
        for occ in occupants {
            if occ.is_clearable_vegetation() {
                host.destroy_occupant(cell, occ.id);
                self.metrics.vegetation_cleared += 1;
            }
        }
    }
}

impl Default for RailOverlay {
    fn default() -> Self {
        Self::with_defaults()
    }
}
