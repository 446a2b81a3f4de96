//! Benchmark grid profiles for the Fathom distance transform.
//!
//! Provides deterministic seeded grids for benchmarking and examples:
//!
//! - [`reference_grid`]: 100x100 grid (10K cells) with ~10% background speckle
//! - [`stress_grid`]: 316x316 grid (~100K cells) at the same density
//! - [`volume_grid`]: 46x46x46 volume (~97K cells) for 3D runs
//!
//! Each profile returns the grid together with a foreground origin at the
//! grid's centre, ready to feed the transform.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use fathom_core::{BitGrid, Coord};

/// Build the reference benchmark grid: 100x100 (10K cells).
pub fn reference_grid(seed: u64) -> (BitGrid, Coord) {
    speckled_grid(&[100, 100], seed)
}

/// Build the stress benchmark grid: 316x316 (~100K cells).
pub fn stress_grid(seed: u64) -> (BitGrid, Coord) {
    speckled_grid(&[316, 316], seed)
}

/// Build the 3D benchmark grid: 46x46x46 (~97K cells).
pub fn volume_grid(seed: u64) -> (BitGrid, Coord) {
    speckled_grid(&[46, 46, 46], seed)
}

/// Mostly-foreground grid with deterministic speckle holes and a
/// foreground origin at the centre cell.
fn speckled_grid(extents: &[u32], seed: u64) -> (BitGrid, Coord) {
    let origin: Coord = extents.iter().map(|&e| (e / 2) as i32).collect();
    let grid = BitGrid::from_fn(extents, |coord| {
        coord == origin.as_slice() || keep_cell(coord, seed)
    })
    .expect("profile extents build a valid grid");
    (grid, origin)
}

/// Deterministic ~90% keep decision from the cell coordinate and seed.
fn keep_cell(coord: &[i32], seed: u64) -> bool {
    let mut h = seed;
    for &x in coord {
        h = h
            .wrapping_mul(6364136223846793005)
            .wrapping_add((x as u64).wrapping_mul(1442695040888963407));
    }
    // High bits; the low ones barely move between neighbouring cells.
    (h >> 32) % 10 != 0
}
