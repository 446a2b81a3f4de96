//! 3D periodic grid with 6- or 26-connected neighbourhood.

use crate::axis;
use crate::error::LatticeError;
use crate::lattice::{Lattice, Neighbour};
use fathom_core::{cell_count, AxisShift, Connectivity};
use smallvec::{smallvec, SmallVec};

/// All 26 offsets in enumeration order: 6 single-axis steps, then the 12
/// double-axis diagonals grouped layer/row, layer/col, row/col, then the
/// 8 triple-axis corners covering every sign pattern. 6-connectivity
/// takes the first six.
const OFFSETS_3D: [(i32, i32, i32, AxisShift); 26] = [
    (-1, 0, 0, AxisShift::Single),
    (1, 0, 0, AxisShift::Single),
    (0, -1, 0, AxisShift::Single),
    (0, 1, 0, AxisShift::Single),
    (0, 0, -1, AxisShift::Single),
    (0, 0, 1, AxisShift::Single),
    (-1, -1, 0, AxisShift::Double),
    (-1, 1, 0, AxisShift::Double),
    (1, -1, 0, AxisShift::Double),
    (1, 1, 0, AxisShift::Double),
    (-1, 0, -1, AxisShift::Double),
    (-1, 0, 1, AxisShift::Double),
    (1, 0, -1, AxisShift::Double),
    (1, 0, 1, AxisShift::Double),
    (0, -1, -1, AxisShift::Double),
    (0, -1, 1, AxisShift::Double),
    (0, 1, -1, AxisShift::Double),
    (0, 1, 1, AxisShift::Double),
    (-1, -1, -1, AxisShift::Triple),
    (-1, -1, 1, AxisShift::Triple),
    (-1, 1, -1, AxisShift::Triple),
    (-1, 1, 1, AxisShift::Triple),
    (1, -1, -1, AxisShift::Triple),
    (1, -1, 1, AxisShift::Triple),
    (1, 1, -1, AxisShift::Triple),
    (1, 1, 1, AxisShift::Triple),
];

/// A three-dimensional grid where all three axes wrap.
///
/// Each cell has coordinate `[layer, row, col]`. Stepping off any face
/// re-enters from the opposite face, so every cell sees the full
/// neighbour complement for its connectivity. As in
/// [`Torus2D`](crate::Torus2D), axes of extent 1 or 2 fold distinct
/// offsets onto the same cell.
#[derive(Debug, Clone)]
pub struct Torus3D {
    extents: [u32; 3],
    connectivity: Connectivity,
}

impl Torus3D {
    /// Maximum per-axis extent: coordinates use `i32`, so extents must fit.
    pub const MAX_EXTENT: u32 = i32::MAX as u32;

    /// Create a torus with `layers * rows * cols` cells and the given
    /// connectivity.
    ///
    /// Returns `Err(LatticeError::EmptyLattice)` if any extent is 0,
    /// `Err(LatticeError::ExtentTooLarge)` if any exceeds `i32::MAX`,
    /// `Err(LatticeError::ConnectivityMismatch)` unless `connectivity` is
    /// [`Connectivity::Six`] or [`Connectivity::TwentySix`], and
    /// `Err(LatticeError::TooManyCells)` when the product overflows.
    pub fn new(
        layers: u32,
        rows: u32,
        cols: u32,
        connectivity: Connectivity,
    ) -> Result<Self, LatticeError> {
        if layers == 0 || rows == 0 || cols == 0 {
            return Err(LatticeError::EmptyLattice);
        }
        for (name, value) in [("layers", layers), ("rows", rows), ("cols", cols)] {
            if value > Self::MAX_EXTENT {
                return Err(LatticeError::ExtentTooLarge {
                    name,
                    value,
                    max: Self::MAX_EXTENT,
                });
            }
        }
        if connectivity.ndim() != 3 {
            return Err(LatticeError::ConnectivityMismatch {
                connectivity,
                ndim: 3,
            });
        }
        if cell_count(&[layers, rows, cols]).is_none() {
            return Err(LatticeError::TooManyCells);
        }
        Ok(Self {
            extents: [layers, rows, cols],
            connectivity,
        })
    }

    /// Number of layers.
    pub fn layers(&self) -> u32 {
        self.extents[0]
    }

    /// Number of rows per layer.
    pub fn rows(&self) -> u32 {
        self.extents[1]
    }

    /// Number of columns per row.
    pub fn cols(&self) -> u32 {
        self.extents[2]
    }
}

impl Lattice for Torus3D {
    fn ndim(&self) -> usize {
        3
    }

    fn extents(&self) -> &[u32] {
        &self.extents
    }

    fn cell_count(&self) -> usize {
        (self.extents[0] as usize) * (self.extents[1] as usize) * (self.extents[2] as usize)
    }

    fn connectivity(&self) -> Connectivity {
        self.connectivity
    }

    fn neighbours(&self, coord: &[i32]) -> SmallVec<[Neighbour; 26]> {
        let [layers, rows, cols] = self.extents;
        let l = axis::wrap_axis(coord[0], layers);
        let r = axis::wrap_axis(coord[1], rows);
        let c = axis::wrap_axis(coord[2], cols);
        let degree = self.connectivity.degree();
        let mut out = SmallVec::with_capacity(degree);
        for &(dl, dr, dc, shift) in &OFFSETS_3D[..degree] {
            let nl = axis::wrap_axis(l + dl, layers);
            let nr = axis::wrap_axis(r + dr, rows);
            let nc = axis::wrap_axis(c + dc, cols);
            let rank =
                ((nl as usize) * (rows as usize) + nr as usize) * (cols as usize) + nc as usize;
            out.push(Neighbour {
                coord: smallvec![nl, nr, nc],
                rank,
                shift,
            });
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compliance;
    use fathom_core::Coord;
    use proptest::prelude::*;

    fn c(l: i32, r: i32, col: i32) -> Coord {
        smallvec![l, r, col]
    }

    fn coords(lattice: &Torus3D, at: &[i32]) -> Vec<Coord> {
        lattice.neighbours(at).into_iter().map(|n| n.coord).collect()
    }

    // ── Neighbour tests ─────────────────────────────────────────

    #[test]
    fn six_interior() {
        let t = Torus3D::new(4, 4, 4, Connectivity::Six).unwrap();
        assert_eq!(
            coords(&t, &[1, 1, 1]),
            vec![
                c(0, 1, 1),
                c(2, 1, 1),
                c(1, 0, 1),
                c(1, 2, 1),
                c(1, 1, 0),
                c(1, 1, 2),
            ]
        );
    }

    #[test]
    fn twenty_six_shift_classes_in_order() {
        let t = Torus3D::new(4, 4, 4, Connectivity::TwentySix).unwrap();
        let shifts: Vec<_> = t
            .neighbours(&[1, 1, 1])
            .into_iter()
            .map(|n| n.shift)
            .collect();
        assert_eq!(shifts.len(), 26);
        assert_eq!(&shifts[..6], &[AxisShift::Single; 6]);
        assert_eq!(&shifts[6..18], &[AxisShift::Double; 12]);
        assert_eq!(&shifts[18..], &[AxisShift::Triple; 8]);
    }

    #[test]
    fn triple_offsets_cover_all_sign_patterns() {
        let t = Torus3D::new(4, 4, 4, Connectivity::TwentySix).unwrap();
        let corners: Vec<_> = coords(&t, &[1, 1, 1])[18..].to_vec();
        assert_eq!(
            corners,
            vec![
                c(0, 0, 0),
                c(0, 0, 2),
                c(0, 2, 0),
                c(0, 2, 2),
                c(2, 0, 0),
                c(2, 0, 2),
                c(2, 2, 0),
                c(2, 2, 2),
            ]
        );
    }

    #[test]
    fn twenty_six_interior_cells_are_distinct() {
        let t = Torus3D::new(3, 3, 3, Connectivity::TwentySix).unwrap();
        let mut ranks: Vec<_> = t.neighbours(&[1, 1, 1]).into_iter().map(|n| n.rank).collect();
        ranks.sort_unstable();
        ranks.dedup();
        assert_eq!(ranks.len(), 26);
        assert!(!ranks.contains(&t.rank_of(&[1, 1, 1]).unwrap()));
    }

    #[test]
    fn corner_wraps_on_all_axes() {
        let t = Torus3D::new(3, 3, 3, Connectivity::TwentySix).unwrap();
        let n = coords(&t, &[0, 0, 0]);
        assert!(n.contains(&c(2, 2, 2)));
        assert!(n.contains(&c(2, 0, 0)));
        assert!(n.contains(&c(0, 2, 2)));
    }

    #[test]
    fn neighbour_ranks_match_rank_of() {
        let t = Torus3D::new(2, 3, 4, Connectivity::TwentySix).unwrap();
        for nb in t.neighbours(&[1, 2, 3]) {
            assert_eq!(t.rank_of(&nb.coord), Some(nb.rank));
        }
    }

    #[test]
    fn extent_one_layer_axis_self_adjacent() {
        let t = Torus3D::new(1, 3, 3, Connectivity::Six).unwrap();
        let n = coords(&t, &[0, 1, 1]);
        assert_eq!(n[0], c(0, 1, 1)); // layer- wraps to self
        assert_eq!(n[1], c(0, 1, 1)); // layer+ wraps to self
        assert_eq!(n[2], c(0, 0, 1));
    }

    // ── Constructor tests ───────────────────────────────────────

    #[test]
    fn new_zero_extent_returns_error() {
        for (l, r, col) in [(0, 3, 3), (3, 0, 3), (3, 3, 0)] {
            assert_eq!(
                Torus3D::new(l, r, col, Connectivity::Six).unwrap_err(),
                LatticeError::EmptyLattice
            );
        }
    }

    #[test]
    fn new_rejects_extents_exceeding_i32_max() {
        let big = i32::MAX as u32 + 1;
        assert!(matches!(
            Torus3D::new(big, 3, 3, Connectivity::Six),
            Err(LatticeError::ExtentTooLarge { name: "layers", .. })
        ));
        assert!(matches!(
            Torus3D::new(3, big, 3, Connectivity::Six),
            Err(LatticeError::ExtentTooLarge { name: "rows", .. })
        ));
        assert!(matches!(
            Torus3D::new(3, 3, big, Connectivity::Six),
            Err(LatticeError::ExtentTooLarge { name: "cols", .. })
        ));
    }

    #[test]
    fn new_rejects_2d_connectivity() {
        assert_eq!(
            Torus3D::new(3, 3, 3, Connectivity::Eight).unwrap_err(),
            LatticeError::ConnectivityMismatch {
                connectivity: Connectivity::Eight,
                ndim: 3,
            }
        );
        assert!(Torus3D::new(3, 3, 3, Connectivity::Four).is_err());
    }

    #[test]
    fn new_rejects_overflowing_cell_count() {
        let max = Torus3D::MAX_EXTENT;
        assert_eq!(
            Torus3D::new(max, max, max, Connectivity::Six).unwrap_err(),
            LatticeError::TooManyCells
        );
    }

    // ── Compliance suites ───────────────────────────────────────

    #[test]
    fn compliance_six() {
        let t = Torus3D::new(3, 4, 2, Connectivity::Six).unwrap();
        compliance::run_full_compliance(&t);
    }

    #[test]
    fn compliance_twenty_six() {
        let t = Torus3D::new(3, 4, 2, Connectivity::TwentySix).unwrap();
        compliance::run_full_compliance(&t);
    }

    #[test]
    fn compliance_thin() {
        let t = Torus3D::new(1, 3, 3, Connectivity::TwentySix).unwrap();
        compliance::run_full_compliance(&t);
    }

    // ── Property tests ──────────────────────────────────────────

    fn arb_connectivity() -> impl Strategy<Value = Connectivity> {
        prop_oneof![Just(Connectivity::Six), Just(Connectivity::TwentySix)]
    }

    proptest! {
        #[test]
        fn degree_is_fixed_everywhere(
            layers in 1u32..5,
            rows in 1u32..5,
            cols in 1u32..5,
            conn in arb_connectivity(),
            l in -10i32..10,
            r in -10i32..10,
            col in -10i32..10,
        ) {
            let t = Torus3D::new(layers, rows, cols, conn).unwrap();
            prop_assert_eq!(t.neighbours(&[l, r, col]).len(), conn.degree());
        }

        #[test]
        fn neighbours_symmetric(
            layers in 1u32..5,
            rows in 1u32..5,
            cols in 1u32..5,
            conn in arb_connectivity(),
            l in 0i32..5,
            r in 0i32..5,
            col in 0i32..5,
        ) {
            let l = l % layers as i32;
            let r = r % rows as i32;
            let col = col % cols as i32;
            let t = Torus3D::new(layers, rows, cols, conn).unwrap();
            let coord: Coord = smallvec![l, r, col];
            for nb in t.neighbours(&coord) {
                let back: Vec<_> = t
                    .neighbours(&nb.coord)
                    .into_iter()
                    .map(|n| n.coord)
                    .collect();
                prop_assert!(
                    back.contains(&coord),
                    "neighbour symmetry violated: {:?} in N({:?}) but not vice versa",
                    nb.coord, coord,
                );
            }
        }
    }
}
