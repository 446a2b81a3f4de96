//! Shared axis arithmetic for the toroidal backends.

use fathom_core::{coord_of_rank, Coord};

/// Fold a single axis value into `[0, extent)`.
///
/// Works for any `i32` input, including values several multiples of the
/// extent away from the canonical range. `extent` must be nonzero and fit
/// in `i32`; both are guaranteed by lattice construction.
///
/// # Examples
///
/// ```
/// use fathom_space::axis::wrap_axis;
///
/// assert_eq!(wrap_axis(7, 5), 2);
/// assert_eq!(wrap_axis(-1, 5), 4);
/// assert_eq!(wrap_axis(-11, 5), 4);
/// assert_eq!(wrap_axis(3, 5), 3);
/// ```
pub fn wrap_axis(value: i32, extent: u32) -> i32 {
    value.rem_euclid(extent as i32)
}

/// Row-major canonical ordering for the given extents.
pub(crate) fn ordering_by_rank(extents: &[u32], cell_count: usize) -> Vec<Coord> {
    (0..cell_count)
        .map(|rank| {
            coord_of_rank(extents, rank).expect("rank below cell count has a coordinate")
        })
        .collect()
}
