//! Dirty-set mutation tracker.
//!
//! Cells whose classification changed since the last flush. Owned
//! exclusively by [`RailOverlay`](crate::RailOverlay); the scheduler
//! clears it atomically on flush.

use indexmap::IndexSet;
use railgrade_core::Cell;

/// Set of cells pending recomputation.
///
/// A cell appears at most once regardless of how many mutation events
/// touched it between flushes. Backed by an `IndexSet` so the drain
/// order is the insertion order — recompute sequencing stays
/// deterministic under identical event streams.
#[derive(Debug, Default)]
pub struct DirtyTracker {
    dirty: IndexSet<Cell>,
}

impl DirtyTracker {
    /// Create an empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a cell dirty. Returns `true` if the cell was newly
    /// inserted, `false` if it was already pending (idempotent).
    pub fn mark(&mut self, cell: Cell) -> bool {
        self.dirty.insert(cell)
    }

    /// Number of cells pending recomputation.
    pub fn len(&self) -> usize {
        self.dirty.len()
    }

    /// True when nothing is pending.
    pub fn is_empty(&self) -> bool {
        self.dirty.is_empty()
    }

    /// Take all pending cells, leaving the tracker empty.
    pub fn drain(&mut self) -> Vec<Cell> {
        self.dirty.drain(..).collect()
    }
}
