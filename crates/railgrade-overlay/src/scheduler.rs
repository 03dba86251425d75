//! Recalculation scheduler: the coalescing flush state machine.
//!
//! Rapid bursts of rail placement must not each trigger an O(map)
//! pathfinding-cache rebuild. The scheduler holds bursts in a fixed
//! coalescing window and releases them as one bulk refresh; the dirty
//! set exceeding its sanity bound overrides the window.

use railgrade_core::TickId;

/// Where the scheduler is in its flush cycle.
///
/// The flushing step itself is transient: a poll that decides to flush
/// performs the transition back to `Idle` in the same call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlushState {
    /// Dirty set empty; nothing to do.
    Idle,
    /// Dirty set non-empty, waiting out the coalescing window.
    Pending {
        /// Tick at which the dirty set first became non-empty.
        since: TickId,
    },
}

/// Outcome of one per-tick poll.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlushDecision {
    /// Keep coalescing.
    Hold,
    /// Flush now: rewrite all dirty cells and trigger the bulk
    /// recompute.
    Flush {
        /// True when the backlog bound forced the flush early.
        forced: bool,
    },
}

/// The rate limiter for bulk recomputes.
#[derive(Debug)]
pub struct RecalcScheduler {
    state: FlushState,
    flush_interval: u64,
    backlog_limit: usize,
}

impl RecalcScheduler {
    /// Create a scheduler with the given coalescing window (ticks) and
    /// dirty-set sanity bound.
    pub fn new(flush_interval: u64, backlog_limit: usize) -> Self {
        Self {
            state: FlushState::Idle,
            flush_interval,
            backlog_limit,
        }
    }

    /// Current state, for observability and tests.
    pub fn state(&self) -> FlushState {
        self.state
    }

    /// Note that the dirty set became (or stayed) non-empty at `now`.
    ///
    /// Transitions `Idle → Pending`; re-noting while pending is a
    /// no-op so the window is anchored at the first mutation of the
    /// burst.
    pub fn note_dirty(&mut self, now: TickId) {
        if self.state == FlushState::Idle {
            self.state = FlushState::Pending { since: now };
        }
    }

    /// Per-tick poll. Decides whether the accumulated burst should be
    /// released this tick, given the current dirty-set size.
    ///
    /// A flush decision resets the scheduler to `Idle`; the caller is
    /// responsible for actually draining the dirty set and triggering
    /// the host's bulk recompute.
    pub fn poll(&mut self, now: TickId, dirty_len: usize) -> FlushDecision {
        let FlushState::Pending { since } = self.state else {
            return FlushDecision::Hold;
        };
        if dirty_len == 0 {
            // Dirty set emptied out from under us; nothing to release.
            self.state = FlushState::Idle;
            return FlushDecision::Hold;
        }
        let forced = dirty_len > self.backlog_limit;
        if forced || now.since(since) > self.flush_interval {
            self.state = FlushState::Idle;
            FlushDecision::Flush { forced }
        } else {
            FlushDecision::Hold
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_scheduler_holds() {
        let mut s = RecalcScheduler::new(15, 4096);
        assert_eq!(s.poll(TickId(100), 0), FlushDecision::Hold);
        assert_eq!(s.state(), FlushState::Idle);
    }

    #[test]
    fn window_is_anchored_at_first_mutation() {
        let mut s = RecalcScheduler::new(15, 4096);
        s.note_dirty(TickId(10));
        s.note_dirty(TickId(14)); // later events do not move the anchor
        assert_eq!(s.state(), FlushState::Pending { since: TickId(10) });

        // Dirty-age 15 is not yet over the window.
        assert_eq!(s.poll(TickId(25), 3), FlushDecision::Hold);
        // First tick where the age exceeds the window.
        assert_eq!(s.poll(TickId(26), 3), FlushDecision::Flush { forced: false });
        assert_eq!(s.state(), FlushState::Idle);
    }

    #[test]
    fn backlog_overrides_the_window() {
        let mut s = RecalcScheduler::new(15, 8);
        s.note_dirty(TickId(10));
        assert_eq!(s.poll(TickId(11), 9), FlushDecision::Flush { forced: true });
        assert_eq!(s.state(), FlushState::Idle);
    }

    #[test]
    fn flush_rearms_for_the_next_burst() {
        let mut s = RecalcScheduler::new(15, 4096);
        s.note_dirty(TickId(0));
        assert_eq!(s.poll(TickId(16), 1), FlushDecision::Flush { forced: false });
        s.note_dirty(TickId(20));
        assert_eq!(s.poll(TickId(30), 1), FlushDecision::Hold);
        assert_eq!(s.poll(TickId(36), 1), FlushDecision::Flush { forced: false });
    }
}
