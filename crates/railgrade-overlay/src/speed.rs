//! Speed modulator: the per-step multiplier applied to an agent's
//! movement cost.
//!
//! The pure pieces live here; [`RailOverlay`](crate::RailOverlay)
//! orchestrates the host queries and the vegetation-clearing side
//! effect in `movement_multiplier`.

use railgrade_core::{Affiliation, Cell};

/// Multiplier for a player-aligned agent on a clear rail cell: a flat
/// 5× speed boost, regardless of the underlying path cost.
pub const RAIL_BOOST: f32 = 0.2;

/// Per-step movement context for one agent. Ephemeral: built for a
/// single multiplier query and discarded.
#[derive(Clone, Copy, Debug)]
pub struct AgentContext {
    /// Whether the agent benefits from rail lanes.
    pub affiliation: Affiliation,
    /// The cell being entered.
    pub cell: Cell,
    /// Where the agent is ultimately headed, when known. Not consulted
    /// by the current policy; carried for host-side diagnostics.
    pub dest: Option<Cell>,
}

/// Smooth inverse-square-root falloff for non-rail cells.
///
/// `2 / sqrt(max(path_cost, 1))`: higher-cost cells proportionally
/// slow movement, and the clamp guarantees the result is always
/// finite and positive — never zero, never a division by zero.
pub fn falloff_multiplier(path_cost: i32) -> f32 {
    2.0 / (path_cost.max(1) as f32).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn falloff_anchors() {
        assert!((falloff_multiplier(1) - 2.0).abs() < f32::EPSILON);
        assert!((falloff_multiplier(4) - 1.0).abs() < f32::EPSILON);
        assert!((falloff_multiplier(400) - 0.1).abs() < 1e-6);
    }

    #[test]
    fn falloff_clamps_degenerate_costs() {
        assert_eq!(falloff_multiplier(0), falloff_multiplier(1));
        assert_eq!(falloff_multiplier(-50), falloff_multiplier(1));
    }

    proptest! {
        #[test]
        fn falloff_is_positive_and_bounded(cost in i32::MIN..i32::MAX) {
            let m = falloff_multiplier(cost);
            prop_assert!(m > 0.0);
            prop_assert!(m <= 2.0);
            prop_assert!(m.is_finite());
        }

        #[test]
        fn falloff_is_non_increasing(cost in 1i32..1_000_000) {
            prop_assert!(falloff_multiplier(cost + 1) <= falloff_multiplier(cost));
        }
    }
}
