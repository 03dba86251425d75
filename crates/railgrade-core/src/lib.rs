//! Core types and host contract for the Railgrade path-cost overlay.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the grid vocabulary shared across the workspace — cells, occupants,
//! terrain, classifications — plus the [`Host`] trait through which the
//! overlay reaches the host simulation, and the non-fatal fault
//! taxonomy.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cell;
pub mod classification;
pub mod error;
pub mod host;
pub mod occupant;

pub use cell::{Cell, TickId};
pub use classification::{Affiliation, CellClassification};
pub use error::OverlayFault;
pub use host::{Host, OccupantList};
pub use occupant::{Occupant, OccupantId, OccupantKind, StructureClass, TerrainInfo};
