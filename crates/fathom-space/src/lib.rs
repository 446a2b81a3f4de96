//! Toroidal lattice topologies for the Fathom distance transform.
//!
//! This crate defines the [`Lattice`] trait, the topology abstraction the
//! wavefront engine walks, along with the two periodic backends the
//! transform supports:
//!
//! - [`Torus2D`]: 2D grid where both axes wrap ([`Connectivity::Four`] or
//!   [`Connectivity::Eight`])
//! - [`Torus3D`]: 3D grid where all three axes wrap ([`Connectivity::Six`]
//!   or [`Connectivity::TwentySix`])
//!
//! Every cell of a torus has the full neighbour complement for its
//! connectivity; there are no boundary cells. At extent 1 along an axis
//! the wrap folds a step back onto the cell itself, so neighbour lists
//! may contain the centre cell or repeats of the same cell. Callers that
//! care about distinct cells deduplicate by rank.
//!
//! [`Connectivity::Four`]: fathom_core::Connectivity::Four
//! [`Connectivity::Eight`]: fathom_core::Connectivity::Eight
//! [`Connectivity::Six`]: fathom_core::Connectivity::Six
//! [`Connectivity::TwentySix`]: fathom_core::Connectivity::TwentySix

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod axis;
pub mod error;
pub mod lattice;
pub mod torus2d;
pub mod torus3d;

#[cfg(test)]
pub(crate) mod compliance;

pub use error::LatticeError;
pub use lattice::{Lattice, Neighbour};
pub use torus2d::Torus2D;
pub use torus3d::Torus3D;
