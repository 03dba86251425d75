//! Burst coalescing: rapid rail placement must produce exactly one
//! bulk pathfinding-cache refresh per coalescing window.
//!
//! **Setup:** 10 rail segments placed within a single tick, then 20
//! ticks of simulated advance.
//!
//! **Pass criterion:** exactly one full recompute, triggered on the
//! first tick where the accumulated dirty-age exceeds the 15-tick
//! window; every placed cell's cost entry reads 0.

use railgrade_core::{Cell, TickId};
use railgrade_overlay::RailOverlay;
use railgrade_test_utils::GridHost;

#[test]
fn ten_rails_one_tick_one_recompute() {
    let mut host = GridHost::new();
    let mut overlay = RailOverlay::with_defaults();
    host.set_tick(1);

    let cells: Vec<Cell> = (0..10).map(|x| Cell::new(x, 0)).collect();
    for &cell in &cells {
        host.set_base_cost(cell, 5);
        let rail = host.place_rail(cell);
        overlay.occupant_spawned(&mut host, cell, &rail);
    }
    assert_eq!(overlay.pending_cells(), 10);
    assert_eq!(host.full_recomputes, 0);

    for _ in 0..20 {
        host.advance_tick();
        overlay.tick(&mut host);
    }

    assert_eq!(host.full_recomputes, 1);
    // Placed at tick 1; dirty-age first exceeds 15 at tick 17.
    assert_eq!(host.recompute_ticks, vec![TickId(17)]);
    assert_eq!(overlay.pending_cells(), 0);
    assert_eq!(overlay.metrics().full_recomputes, 1);
    for &cell in &cells {
        assert_eq!(host.cost_at(cell), Some(0));
    }
}

#[test]
fn separate_bursts_get_separate_flushes() {
    let mut host = GridHost::new();
    let mut overlay = RailOverlay::with_defaults();

    let first = Cell::new(0, 0);
    host.set_base_cost(first, 5);
    let rail = host.place_rail(first);
    overlay.occupant_spawned(&mut host, first, &rail);

    for _ in 0..20 {
        host.advance_tick();
        overlay.tick(&mut host);
    }
    assert_eq!(host.full_recomputes, 1);

    let second = Cell::new(1, 0);
    host.set_base_cost(second, 5);
    let rail = host.place_rail(second);
    overlay.occupant_spawned(&mut host, second, &rail);

    for _ in 0..20 {
        host.advance_tick();
        overlay.tick(&mut host);
    }
    assert_eq!(host.full_recomputes, 2);
}

#[test]
fn quiet_ticks_trigger_nothing() {
    let mut host = GridHost::new();
    let mut overlay = RailOverlay::with_defaults();
    for _ in 0..100 {
        host.advance_tick();
        overlay.tick(&mut host);
    }
    assert_eq!(host.full_recomputes, 0);
    assert_eq!(overlay.metrics().full_recomputes, 0);
}

#[test]
fn backlog_forces_an_early_flush() {
    let mut host = GridHost::new();
    let mut overlay = RailOverlay::new(railgrade_overlay::OverlayConfig {
        backlog_limit: 8,
        ..Default::default()
    });
    host.set_tick(1);

    for x in 0..9 {
        let cell = Cell::new(x, 0);
        host.set_base_cost(cell, 5);
        let rail = host.place_rail(cell);
        overlay.occupant_spawned(&mut host, cell, &rail);
    }

    // Well inside the 15-tick window, but over the backlog bound.
    host.advance_tick();
    overlay.tick(&mut host);

    assert_eq!(host.full_recomputes, 1);
    assert_eq!(overlay.metrics().forced_flushes, 1);
    assert_eq!(overlay.pending_cells(), 0);
}
