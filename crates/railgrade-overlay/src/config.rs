//! Overlay configuration and sanitization.

use railgrade_core::OverlayFault;

/// Tunables for the overlay, fixed at construction.
///
/// The host exposes `terrain_scale_up` through whatever settings
/// mechanism it has; the overlay treats the whole struct as immutable
/// after [`RailOverlay::new`](crate::RailOverlay::new).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OverlayConfig {
    /// Multiplier applied to natural-terrain base costs. Default: 30.
    pub terrain_scale_up: i32,
    /// Coalescing window in ticks: how long a burst of mutations is
    /// held before one bulk cache refresh. Default: 15.
    pub flush_interval: u64,
    /// Sanity bound on the dirty set; exceeding it forces an immediate
    /// flush regardless of the window. Default: 4096.
    pub backlog_limit: usize,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            terrain_scale_up: 30,
            flush_interval: 15,
            backlog_limit: 4096,
        }
    }
}

impl OverlayConfig {
    /// Clamp invalid fields to safe values, returning the faults that
    /// describe what was clamped.
    ///
    /// A non-positive scale-up becomes 1 (costs pass through nearly
    /// unchanged rather than inverting or zeroing), and a zero backlog
    /// limit becomes 1. Configuration problems are never fatal.
    pub fn sanitized(mut self) -> (Self, Vec<OverlayFault>) {
        let mut faults = Vec::new();
        if self.terrain_scale_up <= 0 {
            faults.push(OverlayFault::ConfigurationInvalid {
                value: self.terrain_scale_up,
            });
            self.terrain_scale_up = 1;
        }
        if self.backlog_limit == 0 {
            self.backlog_limit = 1;
        }
        (self, faults)
    }
}
