//! The [`Coord`] type alias and row-major rank arithmetic.
//!
//! Every grid-shaped container in Fathom (binary grids, distance fields,
//! lattice cell state) stores its cells in one flat row-major buffer. The
//! helpers here are the single home of the rank arithmetic, so that grid
//! containers and lattice backends cannot disagree about cell order.

use smallvec::SmallVec;

/// A lattice coordinate: one `i32` per axis, axes in canonical order.
///
/// 2D grids use `[row, col]`; 3D grids use `[layer, row, col]`, layer
/// first, matching the slice-stacking convention of image import. The
/// inline capacity of 4 keeps both shapes off the heap.
pub type Coord = SmallVec<[i32; 4]>;

/// Total cell count for the given per-axis extents.
///
/// Returns `None` if the product overflows `usize`.
pub fn cell_count(extents: &[u32]) -> Option<usize> {
    extents
        .iter()
        .try_fold(1usize, |acc, &e| acc.checked_mul(e as usize))
}

/// Row-major flat rank of `coord` within `extents`.
///
/// The last axis varies fastest. Returns `None` if `coord` has a different
/// number of axes than `extents` or any component lies outside `[0, extent)`.
pub fn rank_of_coord(extents: &[u32], coord: &[i32]) -> Option<usize> {
    if coord.len() != extents.len() {
        return None;
    }
    let mut rank = 0usize;
    for (&extent, &c) in extents.iter().zip(coord) {
        if c < 0 || c >= extent as i32 {
            return None;
        }
        rank = rank * extent as usize + c as usize;
    }
    Some(rank)
}

/// Coordinate at row-major flat `rank` within `extents`.
///
/// Inverse of [`rank_of_coord`]. Returns `None` if `rank` is out of range.
pub fn coord_of_rank(extents: &[u32], rank: usize) -> Option<Coord> {
    let total = cell_count(extents)?;
    if rank >= total {
        return None;
    }
    let mut coord: Coord = SmallVec::from_elem(0, extents.len());
    let mut rest = rank;
    for (axis, &extent) in extents.iter().enumerate().rev() {
        coord[axis] = (rest % extent as usize) as i32;
        rest /= extent as usize;
    }
    Some(coord)
}
