//! 2D periodic grid with 4- or 8-connected neighbourhood.

use crate::axis;
use crate::error::LatticeError;
use crate::lattice::{Lattice, Neighbour};
use fathom_core::{cell_count, AxisShift, Connectivity};
use smallvec::{smallvec, SmallVec};

/// All 8 offsets in enumeration order: single-axis steps N, S, W, E,
/// then diagonals NW, NE, SW, SE. 4-connectivity takes the first four.
const OFFSETS_2D: [(i32, i32, AxisShift); 8] = [
    (-1, 0, AxisShift::Single),
    (1, 0, AxisShift::Single),
    (0, -1, AxisShift::Single),
    (0, 1, AxisShift::Single),
    (-1, -1, AxisShift::Double),
    (-1, 1, AxisShift::Double),
    (1, -1, AxisShift::Double),
    (1, 1, AxisShift::Double),
];

/// A two-dimensional grid where both axes wrap.
///
/// Each cell has coordinate `[row, col]`. Stepping off any edge re-enters
/// from the opposite edge, so every cell sees the full neighbour
/// complement for its connectivity. On an axis of extent 1 the wrap folds
/// a step back onto the cell itself; extent 2 folds the two opposing
/// steps onto the same cell.
#[derive(Debug, Clone)]
pub struct Torus2D {
    extents: [u32; 2],
    connectivity: Connectivity,
}

impl Torus2D {
    /// Maximum per-axis extent: coordinates use `i32`, so extents must fit.
    pub const MAX_EXTENT: u32 = i32::MAX as u32;

    /// Create a torus with `rows * cols` cells and the given connectivity.
    ///
    /// Returns `Err(LatticeError::EmptyLattice)` if either extent is 0,
    /// `Err(LatticeError::ExtentTooLarge)` if either exceeds `i32::MAX`,
    /// and `Err(LatticeError::ConnectivityMismatch)` unless `connectivity`
    /// is [`Connectivity::Four`] or [`Connectivity::Eight`].
    pub fn new(rows: u32, cols: u32, connectivity: Connectivity) -> Result<Self, LatticeError> {
        if rows == 0 || cols == 0 {
            return Err(LatticeError::EmptyLattice);
        }
        if rows > Self::MAX_EXTENT {
            return Err(LatticeError::ExtentTooLarge {
                name: "rows",
                value: rows,
                max: Self::MAX_EXTENT,
            });
        }
        if cols > Self::MAX_EXTENT {
            return Err(LatticeError::ExtentTooLarge {
                name: "cols",
                value: cols,
                max: Self::MAX_EXTENT,
            });
        }
        if connectivity.ndim() != 2 {
            return Err(LatticeError::ConnectivityMismatch {
                connectivity,
                ndim: 2,
            });
        }
        if cell_count(&[rows, cols]).is_none() {
            return Err(LatticeError::TooManyCells);
        }
        Ok(Self {
            extents: [rows, cols],
            connectivity,
        })
    }

    /// Number of rows.
    pub fn rows(&self) -> u32 {
        self.extents[0]
    }

    /// Number of columns.
    pub fn cols(&self) -> u32 {
        self.extents[1]
    }
}

impl Lattice for Torus2D {
    fn ndim(&self) -> usize {
        2
    }

    fn extents(&self) -> &[u32] {
        &self.extents
    }

    fn cell_count(&self) -> usize {
        (self.extents[0] as usize) * (self.extents[1] as usize)
    }

    fn connectivity(&self) -> Connectivity {
        self.connectivity
    }

    fn neighbours(&self, coord: &[i32]) -> SmallVec<[Neighbour; 26]> {
        let [rows, cols] = self.extents;
        let r = axis::wrap_axis(coord[0], rows);
        let c = axis::wrap_axis(coord[1], cols);
        let degree = self.connectivity.degree();
        let mut out = SmallVec::with_capacity(degree);
        for &(dr, dc, shift) in &OFFSETS_2D[..degree] {
            let nr = axis::wrap_axis(r + dr, rows);
            let nc = axis::wrap_axis(c + dc, cols);
            out.push(Neighbour {
                coord: smallvec![nr, nc],
                rank: (nr as usize) * (cols as usize) + nc as usize,
                shift,
            });
        }
        out
    }
}
