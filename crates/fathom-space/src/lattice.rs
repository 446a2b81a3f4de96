//! The core `Lattice` trait and `dyn Lattice` downcast support.

use crate::axis;
use fathom_core::{coord_of_rank, rank_of_coord, AxisShift, Connectivity, Coord};
use smallvec::SmallVec;
use std::any::Any;

/// One entry in a neighbour enumeration.
///
/// Carries the wrapped coordinate, its row-major rank, and the
/// [`AxisShift`] class of the offset that produced it. The shift class is
/// what the transform feeds to `Metric::increment` to price the step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Neighbour {
    /// Wrapped coordinate of the neighbouring cell.
    pub coord: Coord,
    /// Row-major rank of `coord`.
    pub rank: usize,
    /// How many axes the producing offset moved along.
    pub shift: AxisShift,
}

/// Periodic lattice topology the wavefront engine walks.
///
/// Concrete backends ([`Torus2D`](crate::Torus2D), [`Torus3D`](crate::Torus3D))
/// implement it to define their wrap arithmetic and neighbour tables.
///
/// # Object Safety
///
/// This trait is designed for use as `dyn Lattice`: the engine picks a
/// backend at runtime from the grid's dimensionality. Use `downcast_ref`
/// for opt-in specialization on concrete types.
///
/// # Enumeration Order
///
/// [`neighbours`](Self::neighbours) returns offsets in a fixed order,
/// single-axis steps first, then double-axis, then (in 3D) triple-axis,
/// with a fixed sequence inside each class. Two calls with the same
/// coordinate return identical sequences, which keeps the transform's
/// propagation order reproducible.
pub trait Lattice: Any + Send + Sync + 'static {
    /// Number of spatial axes.
    fn ndim(&self) -> usize;

    /// Per-axis extents.
    fn extents(&self) -> &[u32];

    /// Total number of cells in the lattice.
    fn cell_count(&self) -> usize;

    /// The neighbourhood this lattice enumerates.
    fn connectivity(&self) -> Connectivity;

    /// Enumerate the neighbours of a cell in the fixed order.
    ///
    /// `coord` must have [`ndim`](Self::ndim) entries but may lie outside
    /// the canonical range; it is wrapped before offsets are applied. The
    /// returned list always has exactly `connectivity().degree()` entries.
    /// On axes of extent 1 or 2 distinct offsets can fold onto the same
    /// cell, so entries may repeat and may include the centre cell itself.
    fn neighbours(&self, coord: &[i32]) -> SmallVec<[Neighbour; 26]>;

    /// Fold a coordinate into the canonical range `[0, extent)` per axis.
    ///
    /// `coord` must have [`ndim`](Self::ndim) entries.
    fn wrap(&self, coord: &[i32]) -> Coord {
        debug_assert_eq!(coord.len(), self.ndim());
        coord
            .iter()
            .zip(self.extents())
            .map(|(&v, &n)| axis::wrap_axis(v, n))
            .collect()
    }

    /// Row-major rank of a canonical coordinate.
    ///
    /// Returns `None` if `coord` has the wrong arity or lies outside the
    /// canonical range; wrap first if the coordinate may be unfolded.
    fn rank_of(&self, coord: &[i32]) -> Option<usize> {
        rank_of_coord(self.extents(), coord)
    }

    /// Coordinate at a row-major rank, or `None` if out of range.
    fn coord_of(&self, rank: usize) -> Option<Coord> {
        coord_of_rank(self.extents(), rank)
    }

    /// All cells in row-major order.
    ///
    /// Two calls on the same lattice return the same sequence.
    fn canonical_ordering(&self) -> Vec<Coord> {
        axis::ordering_by_rank(self.extents(), self.cell_count())
    }
}

impl dyn Lattice {
    /// Attempt to downcast a trait object to a concrete lattice type.
    ///
    /// Code that works with `&dyn Lattice` can check for a known backend
    /// and use type-specific fast paths.
    pub fn downcast_ref<T: Lattice>(&self) -> Option<&T> {
        (self as &dyn Any).downcast_ref::<T>()
    }
}
