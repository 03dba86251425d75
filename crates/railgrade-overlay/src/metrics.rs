//! Cumulative counters for overlay activity and fault diagnostics.

/// Counters accumulated over the overlay's lifetime.
///
/// Read them via [`RailOverlay::metrics`](crate::RailOverlay::metrics);
/// the host's telemetry layer can snapshot and diff them per frame.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OverlayMetrics {
    /// Per-cell cost-table rewrites performed.
    pub cells_recomputed: u64,
    /// Bulk pathfinding-cache refreshes triggered.
    pub full_recomputes: u64,
    /// Flushes forced early by the backlog bound.
    pub forced_flushes: u64,
    /// Cells newly inserted into the dirty set.
    pub dirty_marks: u64,
    /// Mutation events that re-marked an already-dirty cell.
    pub redundant_marks: u64,
    /// Host cost lookups that came back empty and were degraded.
    pub lookup_failures: u64,
    /// Configuration fields clamped at construction.
    pub config_clamps: u64,
    /// Non-tree vegetation destroyed by boosted rail traversal.
    pub vegetation_cleared: u64,
    /// Placement queries answered with an override.
    pub placement_overrides: u64,
}
