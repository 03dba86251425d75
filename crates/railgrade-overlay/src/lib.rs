//! Path-cost overlay engine.
//!
//! [`RailOverlay`] is the single entry point: a synchronous,
//! single-threaded component the host simulation drives through six
//! hooks — cost query post-processing, per-step movement multiplier,
//! occupant spawn, occupant destroy, tick advance, and placement
//! validity. Internally it composes:
//!
//! - [`classify`]: the ordered-predicate occupancy classifier;
//! - [`cost`]: the classification-to-path-cost transform;
//! - [`speed`]: the movement-speed multiplier policy;
//! - [`tracker`]: the dirty set fed by spawn/destroy events;
//! - [`scheduler`]: the coalescing flush state machine;
//! - [`placement`]: the rail overbuild predicate.
//!
//! All work is O(affected cells) per mutation; the only O(map)
//! operation is the rate-limited bulk cache refresh.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod classify;
pub mod config;
pub mod cost;
pub mod metrics;
pub mod overlay;
pub mod placement;
pub mod scheduler;
pub mod speed;
pub mod tracker;

pub use classify::classify;
pub use config::OverlayConfig;
pub use cost::{transform_cost, IMPASSABLE_COST, NATURAL_COST_CAP};
pub use metrics::OverlayMetrics;
pub use overlay::RailOverlay;
pub use placement::allows_placement;
pub use speed::{falloff_multiplier, AgentContext, RAIL_BOOST};
