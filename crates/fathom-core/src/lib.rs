//! Core types for the Fathom distance-transform library.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! vocabulary shared by every Fathom crate: the [`Coord`] type, the metric
//! catalog ([`Metric`], [`Connectivity`], [`AxisShift`]), the grid
//! containers ([`BitGrid`], [`DistanceField`]), and the entry-point error
//! type ([`TransformError`]).

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod coord;
pub mod error;
pub mod grid;
pub mod metric;

pub use coord::{cell_count, coord_of_rank, rank_of_coord, Coord};
pub use error::TransformError;
pub use grid::{BitGrid, DistanceField, GridError};
pub use metric::{AxisShift, Connectivity, Metric, UnknownMetric};
