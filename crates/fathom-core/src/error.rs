//! Errors reported by the distance-transform entry point.

use crate::coord::Coord;
use crate::metric::UnknownMetric;
use std::error::Error;
use std::fmt;

/// Why a transform request was rejected.
///
/// All inputs are validated before any propagation begins, so a transform
/// either fails with one of these up front or runs to completion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TransformError {
    /// The grid has a number of axes no metric supports.
    UnsupportedDimension {
        /// Number of axes the grid actually has.
        ndim: usize,
    },
    /// The origin is out of bounds, has the wrong arity, or lands on a
    /// background cell.
    InvalidOrigin {
        /// The offending origin coordinate.
        origin: Coord,
    },
    /// The metric name did not parse.
    UnknownMetric {
        /// The unrecognised name.
        name: String,
    },
}

impl fmt::Display for TransformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedDimension { ndim } => {
                write!(f, "grids must have 2 or 3 axes, got {ndim}")
            }
            Self::InvalidOrigin { origin } => {
                write!(f, "origin {origin:?} is not a foreground cell of the grid")
            }
            Self::UnknownMetric { name } => {
                write!(
                    f,
                    "unknown metric '{name}' (expected one of: city, chess, borges, quasi)"
                )
            }
        }
    }
}

impl Error for TransformError {}

impl From<UnknownMetric> for TransformError {
    fn from(err: UnknownMetric) -> Self {
        Self::UnknownMetric { name: err.name }
    }
}
