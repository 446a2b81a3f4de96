//! Bounding-box cropping of grids and position lists.
//!
//! Shrinks a grid to the minimal axis-aligned box containing a set of
//! positions of interest, rewriting the positions into the cropped frame.
//! Used to cut the transform's working set down before a run.
//!
//! Cropping changes the topology: the cropped grid wraps at its own
//! edges, not the original's. Distances computed on the crop therefore
//! match the full grid only when the relevant foreground does not cross
//! the cut.

use fathom_core::{BitGrid, Coord};
use std::error::Error;
use std::fmt;

/// Errors from bounding-box cropping.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CropError {
    /// No positions were given, so no bounding box exists.
    NoPositions,
    /// A position is outside the grid or has the wrong arity.
    PositionOutOfBounds {
        /// The offending position.
        position: Coord,
    },
}

impl fmt::Display for CropError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoPositions => write!(f, "cannot crop to an empty position list"),
            Self::PositionOutOfBounds { position } => {
                write!(f, "position {position:?} is outside the grid")
            }
        }
    }
}

impl Error for CropError {}

/// A cropped grid together with the positions rewritten into its frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cropped {
    /// The minimal sub-grid containing every input position.
    pub grid: BitGrid,
    /// Input positions translated by minus the per-axis minimum, in the
    /// input order.
    pub positions: Vec<Coord>,
}

/// Crop `grid` to the minimal axis-aligned box containing `positions`.
///
/// Positions must be canonical coordinates of `grid`. The returned
/// positions are the inputs shifted so the box minimum becomes the
/// origin of the cropped grid.
///
/// # Examples
///
/// ```
/// use fathom_core::BitGrid;
/// use fathom_transform::crop_to_positions;
/// use smallvec::smallvec;
///
/// let grid = BitGrid::filled(&[6, 6], true)?;
/// let cropped = crop_to_positions(&grid, &[smallvec![2, 1], smallvec![4, 3]])?;
/// assert_eq!(cropped.grid.extents(), &[3, 3]);
/// assert_eq!(cropped.positions[0].as_slice(), &[0, 0]);
/// assert_eq!(cropped.positions[1].as_slice(), &[2, 2]);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn crop_to_positions(grid: &BitGrid, positions: &[Coord]) -> Result<Cropped, CropError> {
    let first = positions.first().ok_or(CropError::NoPositions)?;
    for position in positions {
        if grid.rank_of(position).is_none() {
            return Err(CropError::PositionOutOfBounds {
                position: position.clone(),
            });
        }
    }

    let mut min = first.clone();
    let mut max = first.clone();
    for position in &positions[1..] {
        for (axis, &v) in position.iter().enumerate() {
            min[axis] = min[axis].min(v);
            max[axis] = max[axis].max(v);
        }
    }

    let extents: Vec<u32> = min
        .iter()
        .zip(&max)
        .map(|(&lo, &hi)| (hi - lo + 1) as u32)
        .collect();
    let cropped = BitGrid::from_fn(&extents, |c| {
        let source: Coord = c.iter().zip(&min).map(|(&v, &lo)| v + lo).collect();
        grid.get(&source)
            .expect("cropped coordinate stays inside the source grid")
    })
    .expect("crop extents are within the validated source extents");

    let rewritten = positions
        .iter()
        .map(|position| position.iter().zip(&min).map(|(&v, &lo)| v - lo).collect())
        .collect();

    Ok(Cropped {
        grid: cropped,
        positions: rewritten,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    #[test]
    fn crop_copies_the_bounding_block() {
        let grid = BitGrid::from_fn(&[4, 5], |c| c[0] == c[1]).unwrap();
        let cropped =
            crop_to_positions(&grid, &[smallvec![1, 1], smallvec![2, 3]]).unwrap();
        assert_eq!(cropped.grid.extents(), &[2, 3]);
        // Diagonal cells (1,1) and (2,2) of the source land at (0,0), (1,1).
        assert_eq!(cropped.grid.get(&[0, 0]), Some(true));
        assert_eq!(cropped.grid.get(&[1, 1]), Some(true));
        assert_eq!(cropped.grid.get(&[0, 1]), Some(false));
        assert_eq!(
            cropped.positions,
            vec![Coord::from_slice(&[0, 0]), Coord::from_slice(&[1, 2])]
        );
    }

    #[test]
    fn single_position_crops_to_one_cell() {
        let grid = BitGrid::from_fn(&[3, 3], |c| c == &[2, 1][..]).unwrap();
        let cropped = crop_to_positions(&grid, &[smallvec![2, 1]]).unwrap();
        assert_eq!(cropped.grid.extents(), &[1, 1]);
        assert_eq!(cropped.grid.cells(), &[true]);
        assert_eq!(cropped.positions[0].as_slice(), &[0, 0]);
    }

    #[test]
    fn full_span_crop_is_identity() {
        let grid = BitGrid::from_fn(&[3, 4], |c| (c[0] + c[1]) % 2 == 0).unwrap();
        let cropped =
            crop_to_positions(&grid, &[smallvec![0, 0], smallvec![2, 3]]).unwrap();
        assert_eq!(cropped.grid, grid);
        assert_eq!(cropped.positions[1].as_slice(), &[2, 3]);
    }

    #[test]
    fn crop_3d_block() {
        let grid = BitGrid::filled(&[4, 4, 4], true).unwrap();
        let cropped =
            crop_to_positions(&grid, &[smallvec![1, 0, 2], smallvec![2, 3, 2]]).unwrap();
        assert_eq!(cropped.grid.extents(), &[2, 4, 1]);
        assert_eq!(cropped.positions[0].as_slice(), &[0, 0, 0]);
        assert_eq!(cropped.positions[1].as_slice(), &[1, 3, 0]);
    }

    #[test]
    fn empty_position_list_is_rejected() {
        let grid = BitGrid::filled(&[3, 3], true).unwrap();
        assert_eq!(crop_to_positions(&grid, &[]), Err(CropError::NoPositions));
    }

    #[test]
    fn out_of_bounds_and_wrong_arity_are_rejected() {
        let grid = BitGrid::filled(&[3, 3], true).unwrap();
        for bad in [&[3, 0][..], &[0, -1][..], &[1][..]] {
            let err =
                crop_to_positions(&grid, &[Coord::from_slice(bad)]).unwrap_err();
            assert!(matches!(err, CropError::PositionOutOfBounds { .. }), "{bad:?}");
        }
    }
}
