//! Error types for lattice construction.

use fathom_core::Connectivity;
use std::fmt;

/// Errors arising from lattice construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LatticeError {
    /// Attempted to construct a lattice with zero cells.
    EmptyLattice,
    /// An axis extent exceeds the coordinate range.
    ExtentTooLarge {
        /// Which axis ("layers", "rows", or "cols").
        name: &'static str,
        /// The offending extent.
        value: u32,
        /// Largest representable extent.
        max: u32,
    },
    /// The connectivity belongs to a different dimensionality.
    ConnectivityMismatch {
        /// The connectivity that was requested.
        connectivity: Connectivity,
        /// Number of axes the lattice has.
        ndim: usize,
    },
    /// The extents multiply out beyond addressable memory.
    TooManyCells,
}

impl fmt::Display for LatticeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyLattice => write!(f, "lattice must have at least one cell"),
            Self::ExtentTooLarge { name, value, max } => {
                write!(f, "{name} extent {value} exceeds maximum {max}")
            }
            Self::ConnectivityMismatch { connectivity, ndim } => {
                write!(
                    f,
                    "{connectivity} applies to {}D lattices, not {ndim}D",
                    connectivity.ndim()
                )
            }
            Self::TooManyCells => write!(f, "extents multiply out beyond addressable memory"),
        }
    }
}

impl std::error::Error for LatticeError {}
