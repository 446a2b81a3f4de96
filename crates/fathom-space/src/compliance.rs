//! Lattice trait compliance test helpers.
//!
//! These functions verify that a Lattice implementation satisfies the
//! invariants required by the trait contract. Reused across both backend
//! test modules (Torus2D, Torus3D).

use crate::lattice::Lattice;
use indexmap::IndexSet;

/// Assert that every cell has exactly `connectivity().degree()` neighbours.
pub fn assert_degree_fixed(lattice: &dyn Lattice) {
    let degree = lattice.connectivity().degree();
    for coord in lattice.canonical_ordering() {
        let n = lattice.neighbours(&coord);
        assert_eq!(
            n.len(),
            degree,
            "cell {coord:?} has {} neighbours, expected {degree}",
            n.len()
        );
    }
}

/// Assert that `b in neighbours(a)` implies `a in neighbours(b)`.
pub fn assert_neighbours_symmetric(lattice: &dyn Lattice) {
    for coord in lattice.canonical_ordering() {
        for nb in lattice.neighbours(&coord) {
            let back = lattice.neighbours(&nb.coord);
            assert!(
                back.iter().any(|n| n.coord == coord),
                "neighbour symmetry violated: {:?} in N({coord:?}) but {coord:?} not in N({:?})",
                nb.coord,
                nb.coord
            );
        }
    }
}

/// Assert that every neighbour is canonical and its rank is consistent.
pub fn assert_neighbours_canonical(lattice: &dyn Lattice) {
    for coord in lattice.canonical_ordering() {
        for nb in lattice.neighbours(&coord) {
            for (axis, (&v, &extent)) in nb.coord.iter().zip(lattice.extents()).enumerate() {
                assert!(
                    v >= 0 && v < extent as i32,
                    "neighbour {:?} of {coord:?} not canonical on axis {axis}",
                    nb.coord
                );
            }
            assert_eq!(
                lattice.rank_of(&nb.coord),
                Some(nb.rank),
                "neighbour {:?} carries rank {} but rank_of disagrees",
                nb.coord,
                nb.rank
            );
        }
    }
}

/// Assert that every neighbour's shift class belongs to the connectivity.
pub fn assert_shift_classes_valid(lattice: &dyn Lattice) {
    let connectivity = lattice.connectivity();
    for coord in lattice.canonical_ordering() {
        for nb in lattice.neighbours(&coord) {
            assert!(
                connectivity.includes(nb.shift),
                "neighbour {:?} of {coord:?} has shift {:?} outside {connectivity}",
                nb.coord,
                nb.shift
            );
        }
    }
}

/// Assert that two enumerations of the same cell return the same sequence.
pub fn assert_enumeration_deterministic(lattice: &dyn Lattice) {
    for coord in lattice.canonical_ordering() {
        let a = lattice.neighbours(&coord);
        let b = lattice.neighbours(&coord);
        assert_eq!(a, b, "neighbour enumeration of {coord:?} is non-deterministic");
    }
}

/// Assert that `wrap` leaves canonical coordinates untouched.
pub fn assert_wrap_fixes_canonical(lattice: &dyn Lattice) {
    for coord in lattice.canonical_ordering() {
        let wrapped = lattice.wrap(&coord);
        assert_eq!(wrapped, coord, "wrap moved a canonical coordinate");
    }
}

/// Assert that two calls to `canonical_ordering` return the same result.
pub fn assert_canonical_ordering_deterministic(lattice: &dyn Lattice) {
    let a = lattice.canonical_ordering();
    let b = lattice.canonical_ordering();
    assert_eq!(a, b, "canonical_ordering is non-deterministic");
}

/// Assert that `canonical_ordering` returns exactly `cell_count` unique coords.
pub fn assert_canonical_ordering_complete(lattice: &dyn Lattice) {
    let ordering = lattice.canonical_ordering();
    assert_eq!(
        ordering.len(),
        lattice.cell_count(),
        "canonical_ordering length ({}) != cell_count ({})",
        ordering.len(),
        lattice.cell_count()
    );
    let unique: IndexSet<_> = ordering.iter().collect();
    assert_eq!(
        unique.len(),
        lattice.cell_count(),
        "canonical_ordering has duplicates"
    );
}

/// Run all 8 compliance checks on a lattice.
pub fn run_full_compliance(lattice: &dyn Lattice) {
    assert_degree_fixed(lattice);
    assert_neighbours_symmetric(lattice);
    assert_neighbours_canonical(lattice);
    assert_shift_classes_valid(lattice);
    assert_enumeration_deterministic(lattice);
    assert_wrap_fixes_canonical(lattice);
    assert_canonical_ordering_deterministic(lattice);
    assert_canonical_ordering_complete(lattice);
}
