//! Cost transform: maps a classification plus the host's native cost
//! to the final path cost written into the shared table.

use railgrade_core::CellClassification;

/// The host pathfinder's impassable sentinel. A blocked rail cell is
/// forced to this value so the frontier never enters it.
pub const IMPASSABLE_COST: i32 = 10_000;

/// Ceiling on scaled natural-terrain cost. Keeps the multiplied cost
/// from overflowing or starving the pathfinder's frontier.
pub const NATURAL_COST_CAP: i32 = 10_000;

/// Transform the host's native cost for a cell according to its
/// classification.
///
/// Invoked as a post-processing step after the host computes its own
/// cost; the caller writes the result into the shared cost table.
///
/// - [`RailClear`](CellClassification::RailClear): free movement, 0.
/// - [`RailBlocked`](CellClassification::RailBlocked): [`IMPASSABLE_COST`].
/// - [`NaturalTerrain`](CellClassification::NaturalTerrain):
///   `min(base * scale_up, NATURAL_COST_CAP)`.
/// - [`FlooredTerrain`](CellClassification::FlooredTerrain):
///   `base + scale_up` — additive, so floors stay viable but strictly
///   worse than rails.
/// - [`Plain`](CellClassification::Plain): `base` unchanged.
pub fn transform_cost(classification: CellClassification, base_cost: i32, scale_up: i32) -> i32 {
    match classification {
        CellClassification::RailClear => 0,
        CellClassification::RailBlocked => IMPASSABLE_COST,
        CellClassification::NaturalTerrain => {
            base_cost.saturating_mul(scale_up).min(NATURAL_COST_CAP)
        }
        CellClassification::FlooredTerrain => base_cost.saturating_add(scale_up),
        CellClassification::Plain => base_cost,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use railgrade_core::CellClassification::*;

    #[test]
    fn clear_rail_is_free() {
        assert_eq!(transform_cost(RailClear, 0, 30), 0);
        assert_eq!(transform_cost(RailClear, 9999, 30), 0);
    }

    #[test]
    fn blocked_rail_is_impassable() {
        assert_eq!(transform_cost(RailBlocked, 1, 30), IMPASSABLE_COST);
    }

    #[test]
    fn natural_terrain_scales_and_caps() {
        assert_eq!(transform_cost(NaturalTerrain, 50, 30), 1500);
        assert_eq!(transform_cost(NaturalTerrain, 400, 30), NATURAL_COST_CAP);
    }

    #[test]
    fn floored_terrain_is_additive() {
        assert_eq!(transform_cost(FlooredTerrain, 10, 30), 40);
    }

    #[test]
    fn plain_passes_through() {
        assert_eq!(transform_cost(Plain, 17, 30), 17);
    }

    proptest! {
        #[test]
        fn natural_never_exceeds_cap(base in 0i32..100_000, scale in 1i32..1_000) {
            prop_assert!(transform_cost(NaturalTerrain, base, scale) <= NATURAL_COST_CAP);
        }

        #[test]
        fn natural_is_monotone_below_cap(base in 0i32..200, scale in 1i32..50) {
            let lo = transform_cost(NaturalTerrain, base, scale);
            let hi = transform_cost(NaturalTerrain, base + 1, scale);
            prop_assert!(hi >= lo);
        }

        #[test]
        fn floored_is_strictly_worse_than_rail(base in 0i32..10_000, scale in 1i32..1_000) {
            prop_assert!(transform_cost(FlooredTerrain, base, scale) > transform_cost(RailClear, base, scale));
        }
    }
}
