//! Test fixtures and reference implementations for Fathom development.
//!
//! Provides compact grid builders ([`grid_from_rows`], [`grid_from_layers`],
//! [`full_grid`]) for readable test setup, and an independently written
//! toroidal breadth-first search ([`reference_bfs`]) that the transform's
//! unit-increment metrics are checked against.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;
pub mod reference;

pub use fixtures::{full_grid, grid_from_layers, grid_from_rows};
pub use reference::reference_bfs;
