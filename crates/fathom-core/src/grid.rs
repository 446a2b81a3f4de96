//! Binary input grids and distance-field outputs.
//!
//! Both containers are flat row-major buffers behind a per-axis extent
//! list, addressed through the rank arithmetic in [`crate::coord`]. A
//! [`BitGrid`] classifies cells as foreground/background; a
//! [`DistanceField`] is the transform's output, carrying `f64::INFINITY`
//! for every cell the wavefront never reached.
//!
//! Construction validates extents and buffer length but deliberately does
//! **not** constrain the number of axes: the 2-or-3 dimensionality rule is
//! enforced by the transform entry point, where violating it is a
//! reportable error rather than an unrepresentable state.

use crate::coord::{cell_count, coord_of_rank, rank_of_coord, Coord};
use smallvec::SmallVec;
use std::error::Error;
use std::fmt;

/// Errors from grid construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// An axis extent of zero was given.
    EmptyExtent {
        /// Index of the zero-sized axis.
        axis: usize,
    },
    /// An axis extent exceeds the coordinate range.
    ExtentTooLarge {
        /// Index of the oversized axis.
        axis: usize,
        /// The offending extent.
        value: u32,
        /// Largest representable extent.
        max: u32,
    },
    /// The flat cell buffer disagrees with the extents.
    CellCountMismatch {
        /// Cell count implied by the extents.
        expected: usize,
        /// Length of the buffer actually given.
        found: usize,
    },
    /// The extents multiply out beyond addressable memory.
    TooManyCells,
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyExtent { axis } => {
                write!(f, "axis {axis} has extent 0; every axis needs at least one cell")
            }
            Self::ExtentTooLarge { axis, value, max } => {
                write!(f, "axis {axis} extent {value} exceeds maximum {max}")
            }
            Self::CellCountMismatch { expected, found } => {
                write!(f, "cell buffer holds {found} cells, extents imply {expected}")
            }
            Self::TooManyCells => write!(f, "extents multiply out beyond addressable memory"),
        }
    }
}

impl Error for GridError {}

/// Per-axis extent check shared by both containers.
fn validate_extents(extents: &[u32]) -> Result<usize, GridError> {
    for (axis, &extent) in extents.iter().enumerate() {
        if extent == 0 {
            return Err(GridError::EmptyExtent { axis });
        }
        if extent > BitGrid::MAX_EXTENT {
            return Err(GridError::ExtentTooLarge {
                axis,
                value: extent,
                max: BitGrid::MAX_EXTENT,
            });
        }
    }
    cell_count(extents).ok_or(GridError::TooManyCells)
}

/// A D-dimensional binary grid: `true` cells are foreground.
///
/// Cells are stored row-major (last axis fastest) behind the extents.
/// Any rank ≥ 1 can be constructed; the distance transform itself only
/// accepts 2 or 3 axes and reports other ranks as errors.
///
/// # Examples
///
/// ```
/// use fathom_core::BitGrid;
///
/// let grid = BitGrid::from_fn(&[2, 3], |c| c[0] == c[1]).unwrap();
/// assert_eq!(grid.ndim(), 2);
/// assert_eq!(grid.cell_count(), 6);
/// assert_eq!(grid.get(&[1, 1]), Some(true));
/// assert_eq!(grid.get(&[1, 2]), Some(false));
/// assert_eq!(grid.get(&[2, 0]), None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BitGrid {
    extents: SmallVec<[u32; 4]>,
    cells: Vec<bool>,
}

impl BitGrid {
    /// Maximum per-axis extent: coordinates use `i32`, so extents must fit.
    pub const MAX_EXTENT: u32 = i32::MAX as u32;

    /// Build a grid from extents and a row-major cell buffer.
    ///
    /// Returns `Err(GridError::EmptyExtent)` for a zero extent,
    /// `Err(GridError::ExtentTooLarge)` for an extent above
    /// [`MAX_EXTENT`](Self::MAX_EXTENT), and
    /// `Err(GridError::CellCountMismatch)` when the buffer length is not
    /// the product of the extents.
    pub fn new(extents: &[u32], cells: Vec<bool>) -> Result<Self, GridError> {
        let expected = validate_extents(extents)?;
        if cells.len() != expected {
            return Err(GridError::CellCountMismatch {
                expected,
                found: cells.len(),
            });
        }
        Ok(Self {
            extents: SmallVec::from_slice(extents),
            cells,
        })
    }

    /// Build a grid by evaluating `classify` at every coordinate, in
    /// row-major order.
    pub fn from_fn(
        extents: &[u32],
        mut classify: impl FnMut(&[i32]) -> bool,
    ) -> Result<Self, GridError> {
        let total = validate_extents(extents)?;
        let mut cells = Vec::with_capacity(total);
        for rank in 0..total {
            let coord = coord_of_rank(extents, rank)
                .expect("rank below validated cell count has a coordinate");
            cells.push(classify(&coord));
        }
        Ok(Self {
            extents: SmallVec::from_slice(extents),
            cells,
        })
    }

    /// Build a grid with every cell set to `value`.
    pub fn filled(extents: &[u32], value: bool) -> Result<Self, GridError> {
        let total = validate_extents(extents)?;
        Ok(Self {
            extents: SmallVec::from_slice(extents),
            cells: vec![value; total],
        })
    }

    /// Number of axes.
    pub fn ndim(&self) -> usize {
        self.extents.len()
    }

    /// Per-axis extents.
    pub fn extents(&self) -> &[u32] {
        &self.extents
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Row-major rank of `coord`, or `None` if out of bounds or wrong arity.
    pub fn rank_of(&self, coord: &[i32]) -> Option<usize> {
        rank_of_coord(&self.extents, coord)
    }

    /// Coordinate at row-major `rank`, or `None` if out of range.
    pub fn coord_of(&self, rank: usize) -> Option<Coord> {
        coord_of_rank(&self.extents, rank)
    }

    /// Foreground flag at `coord`, or `None` if out of bounds.
    pub fn get(&self, coord: &[i32]) -> Option<bool> {
        self.rank_of(coord).map(|rank| self.cells[rank])
    }

    /// The flat row-major cell buffer.
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// Number of foreground cells.
    pub fn foreground_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }
}

/// A grid-shaped field of distances produced by the transform.
///
/// Same shape as the input [`BitGrid`]; background cells and foreground
/// cells the wavefront never reached carry [`DistanceField::UNREACHED`].
/// Two fields compare equal exactly when every cell matches bit for bit
/// (`INFINITY == INFINITY` holds), which makes repeat-run idempotence
/// directly assertable.
#[derive(Clone, Debug, PartialEq)]
pub struct DistanceField {
    extents: SmallVec<[u32; 4]>,
    values: Vec<f64>,
}

impl DistanceField {
    /// Sentinel for background and unreachable cells.
    pub const UNREACHED: f64 = f64::INFINITY;

    /// Build a field from extents and a row-major value buffer.
    ///
    /// Same validation as [`BitGrid::new`].
    pub fn new(extents: &[u32], values: Vec<f64>) -> Result<Self, GridError> {
        let expected = validate_extents(extents)?;
        if values.len() != expected {
            return Err(GridError::CellCountMismatch {
                expected,
                found: values.len(),
            });
        }
        Ok(Self {
            extents: SmallVec::from_slice(extents),
            values,
        })
    }

    /// Number of axes.
    pub fn ndim(&self) -> usize {
        self.extents.len()
    }

    /// Per-axis extents.
    pub fn extents(&self) -> &[u32] {
        &self.extents
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.values.len()
    }

    /// Distance at `coord`, or `None` if out of bounds or wrong arity.
    ///
    /// A `Some(f64::INFINITY)` is an in-bounds cell the wavefront never
    /// reached; `None` is not a cell at all.
    pub fn get(&self, coord: &[i32]) -> Option<f64> {
        rank_of_coord(&self.extents, coord).map(|rank| self.values[rank])
    }

    /// The flat row-major value buffer.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of cells holding a finite distance.
    pub fn reached_count(&self) -> usize {
        self.values.iter().filter(|v| v.is_finite()).count()
    }
}
