//! The wavefront propagation engine.
//!
//! Distances spread outward from a single origin in rounds. Each round
//! expands every frontier cell through the lattice's neighbour
//! enumeration, offers `settled distance + metric increment` to each
//! unsettled foreground neighbour, and commits the per-cell minimum offer
//! at the end of the round. Background cells never participate; settled
//! cells never change (settlement is one-time, so revisits through wrapped
//! or duplicate adjacencies are skipped and the loop always drains).
//!
//! For the chamfer metrics the frontier is sorted by distance before each
//! round. A round's frontier can mix several distance values there,
//! because the previous round settled cells through different increment
//! classes; ascending expansion keeps the wave close to
//! lowest-distance-first without a full priority queue.

use fathom_core::{BitGrid, Connectivity, DistanceField, Metric, TransformError};
use fathom_space::{Lattice, Torus2D, Torus3D};
use smallvec::SmallVec;

use crate::frontier::{CandidateSet, Frontier};
use crate::state::StateGrid;

/// Compute the distance field of `grid` from `origin` under `metric`.
///
/// Every axis wraps: the cell after the last index is the first index, so
/// distances flow across the grid edges. The result has the grid's shape;
/// background cells and foreground cells not connected to the origin
/// carry [`DistanceField::UNREACHED`].
///
/// All inputs are validated before any work happens:
///
/// - [`TransformError::UnsupportedDimension`] unless the grid has 2 or 3
///   axes.
/// - [`TransformError::InvalidOrigin`] unless `origin` names a foreground
///   cell in canonical coordinates (wrong arity and out-of-range both
///   fold into this case).
///
/// # Examples
///
/// ```
/// use fathom_core::{BitGrid, Metric};
/// use fathom_transform::distance_transform;
///
/// let grid = BitGrid::filled(&[3, 3], true)?;
/// let field = distance_transform(&grid, &[0, 0], Metric::Cityblock)?;
/// assert_eq!(field.get(&[0, 0]), Some(0.0));
/// // One wrapped hop instead of two forward hops.
/// assert_eq!(field.get(&[0, 2]), Some(1.0));
/// assert_eq!(field.get(&[2, 2]), Some(2.0));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn distance_transform(
    grid: &BitGrid,
    origin: &[i32],
    metric: Metric,
) -> Result<DistanceField, TransformError> {
    let ndim = grid.ndim();
    let connectivity = metric
        .connectivity(ndim)
        .ok_or(TransformError::UnsupportedDimension { ndim })?;

    let origin_rank = match grid.rank_of(origin) {
        Some(rank) if grid.cells()[rank] => rank,
        _ => {
            return Err(TransformError::InvalidOrigin {
                origin: SmallVec::from_slice(origin),
            })
        }
    };

    let lattice = build_lattice(grid, connectivity)?;
    let mut states = StateGrid::new(grid);
    states.settle(origin_rank, 0);
    let mut frontier = Frontier::seeded(origin_rank, SmallVec::from_slice(origin));

    let chamfer = metric.is_chamfer();
    while !frontier.is_empty() {
        if chamfer {
            frontier.sort_by_distance();
        }
        let candidates = expand_round(lattice.as_ref(), metric, &states, &frontier);
        frontier = commit_round(&mut states, candidates);
    }

    Ok(states.into_field())
}

/// [`distance_transform`] with the metric given by name.
///
/// Accepts `"city"`, `"chess"`, `"borges"`, and `"quasi"`; anything else
/// fails with [`TransformError::UnknownMetric`] before the grid or origin
/// are inspected.
pub fn distance_transform_named(
    grid: &BitGrid,
    origin: &[i32],
    metric: &str,
) -> Result<DistanceField, TransformError> {
    let metric: Metric = metric.parse()?;
    distance_transform(grid, origin, metric)
}

fn build_lattice(
    grid: &BitGrid,
    connectivity: Connectivity,
) -> Result<Box<dyn Lattice>, TransformError> {
    match *grid.extents() {
        [rows, cols] => Ok(Box::new(
            Torus2D::new(rows, cols, connectivity).expect("validated extents build a 2D torus"),
        )),
        [layers, rows, cols] => Ok(Box::new(
            Torus3D::new(layers, rows, cols, connectivity)
                .expect("validated extents build a 3D torus"),
        )),
        _ => Err(TransformError::UnsupportedDimension { ndim: grid.ndim() }),
    }
}

/// One round of expansion: read-only over settled state, minimum-merged
/// offers to unsettled cells.
fn expand_round(
    lattice: &dyn Lattice,
    metric: Metric,
    states: &StateGrid,
    frontier: &Frontier,
) -> CandidateSet {
    let ndim = lattice.ndim();
    let mut candidates = CandidateSet::new();
    for entry in frontier.iter() {
        for nb in lattice.neighbours(&entry.coord) {
            if !states.is_unsettled(nb.rank) {
                continue;
            }
            let distance = entry.distance + u64::from(metric.increment(ndim, nb.shift));
            candidates.offer(nb.rank, nb.coord, distance);
        }
    }
    candidates
}

/// Commit a round's winning offers and build the next frontier in
/// first-offer order.
fn commit_round(states: &mut StateGrid, candidates: CandidateSet) -> Frontier {
    let mut next = Frontier::with_capacity(candidates.len());
    for entry in candidates.into_entries() {
        states.settle(entry.rank, entry.distance);
        next.push(entry);
    }
    next
}
