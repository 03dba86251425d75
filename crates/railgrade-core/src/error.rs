//! Non-fatal fault taxonomy for the overlay.
//!
//! Every fault here is locally recovered: the overlay degrades to a
//! safe value, bumps a metrics counter, and logs a diagnostic. None of
//! them ever propagates far enough to abort a simulation tick —
//! movement must silently fall back to unmodified costs rather than
//! freeze agents.

use crate::cell::Cell;
use std::error::Error;
use std::fmt;

/// A recoverable fault observed by the overlay.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OverlayFault {
    /// A host query returned no data for a cell. The overlay degrades
    /// to a base cost of 1 and continues.
    LookupFailure {
        /// The cell whose lookup failed.
        cell: Cell,
    },
    /// The configured terrain scale-up was not positive. The overlay
    /// clamps it to 1 at construction.
    ConfigurationInvalid {
        /// The rejected value.
        value: i32,
    },
    /// The dirty set exceeded its sanity bound; the scheduler flushes
    /// immediately instead of waiting for the cooldown.
    SchedulerBacklog {
        /// Number of dirty cells at the time of the forced flush.
        dirty: usize,
    },
}

impl fmt::Display for OverlayFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LookupFailure { cell } => {
                write!(f, "host cost lookup failed at {cell}, degrading to base cost 1")
            }
            Self::ConfigurationInvalid { value } => {
                write!(f, "terrain scale-up {value} is not positive, clamping to 1")
            }
            Self::SchedulerBacklog { dirty } => {
                write!(f, "dirty set holds {dirty} cells, forcing immediate flush")
            }
        }
    }
}

impl Error for OverlayFault {}
