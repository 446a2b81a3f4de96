//! Wavefront distance-transform engine over toroidal grids.
//!
//! The entry point is [`distance_transform`] (or
//! [`distance_transform_named`] when the metric arrives as a string): it
//! validates its inputs, seeds the origin at distance 0, and expands a
//! frontier round by round through a [`fathom_space`] lattice until every
//! reachable foreground cell is settled.
//!
//! Supporting modules are public for callers that want the pieces:
//!
//! - [`state`]: per-cell settlement state and result finalization
//! - [`frontier`]: round bookkeeping and minimum-merge candidate offers
//! - [`crop`]: bounding-box pre-processing of grids and position lists

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod crop;
pub mod engine;
pub mod frontier;
pub mod state;

pub use crop::{crop_to_positions, CropError, Cropped};
pub use engine::{distance_transform, distance_transform_named};
pub use frontier::{CandidateSet, Frontier, FrontierEntry};
pub use state::{CellState, StateGrid};

pub use fathom_core::TransformError;
