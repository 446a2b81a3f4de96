//! Independent toroidal breadth-first search.
//!
//! Deliberately written without the lattice crate: offsets come from
//! digit-unpacking `{-1, 0, 1}^D` and wrapping uses `rem_euclid`, so a
//! bug in the production neighbour tables cannot hide in the reference.

use fathom_core::BitGrid;
use std::collections::VecDeque;

fn offsets(ndim: usize, include_diagonals: bool) -> Vec<Vec<i32>> {
    let total = 3usize.pow(ndim as u32);
    let mut out = Vec::new();
    for code in 0..total {
        let mut rem = code;
        let mut offset = vec![0i32; ndim];
        for slot in offset.iter_mut() {
            *slot = (rem % 3) as i32 - 1;
            rem /= 3;
        }
        let moved = offset.iter().filter(|&&d| d != 0).count();
        if moved == 0 || (!include_diagonals && moved != 1) {
            continue;
        }
        out.push(offset);
    }
    out
}

/// Unit-cost shortest hop counts from `origin` over foreground cells,
/// with every axis wrapping.
///
/// `include_diagonals` selects 8/26-connectivity instead of 4/6. Returns
/// one value per cell in row-major order; background and unreached cells
/// carry `f64::INFINITY`. Panics if `origin` is out of bounds or not
/// foreground, since this is a test oracle, not a production path.
pub fn reference_bfs(grid: &BitGrid, origin: &[i32], include_diagonals: bool) -> Vec<f64> {
    let extents = grid.extents();
    let origin_rank = grid.rank_of(origin).expect("origin must be in bounds");
    assert!(grid.cells()[origin_rank], "origin must be foreground");

    let offsets = offsets(extents.len(), include_diagonals);
    let mut dist = vec![f64::INFINITY; grid.cell_count()];
    dist[origin_rank] = 0.0;
    let mut queue = VecDeque::from([origin_rank]);
    while let Some(rank) = queue.pop_front() {
        let coord = grid.coord_of(rank).expect("queued rank is valid");
        let next = dist[rank] + 1.0;
        for offset in &offsets {
            let neighbour: Vec<i32> = coord
                .iter()
                .zip(offset)
                .zip(extents)
                .map(|((&v, &d), &n)| (v + d).rem_euclid(n as i32))
                .collect();
            let nb_rank = grid
                .rank_of(&neighbour)
                .expect("wrapped coordinate is in bounds");
            if grid.cells()[nb_rank] && dist[nb_rank].is_infinite() {
                dist[nb_rank] = next;
                queue.push_back(nb_rank);
            }
        }
    }
    dist
}
