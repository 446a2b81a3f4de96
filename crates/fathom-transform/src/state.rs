//! Per-cell propagation state and result finalization.
//!
//! [`StateGrid`] is the single mutable structure of a transform run. It is
//! created once from the input [`BitGrid`], mutated only through
//! [`settle`](StateGrid::settle) (write-once per cell), and consumed by
//! [`into_field`](StateGrid::into_field) when the wavefront has drained.

use fathom_core::{BitGrid, DistanceField};
use smallvec::SmallVec;

/// Propagation status of one cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellState {
    /// Not part of the propagation domain; always finalizes as unreached.
    Background,
    /// Foreground, no distance assigned yet.
    Unsettled,
    /// Foreground with its final distance. Once assigned, never changes.
    Settled(u64),
}

/// Grid-shaped container of [`CellState`] for one transform run.
#[derive(Clone, Debug)]
pub struct StateGrid {
    extents: SmallVec<[u32; 4]>,
    states: Vec<CellState>,
}

impl StateGrid {
    /// Classify every cell of `grid`: foreground becomes
    /// [`CellState::Unsettled`], background stays out of the domain.
    pub fn new(grid: &BitGrid) -> Self {
        let states = grid
            .cells()
            .iter()
            .map(|&foreground| {
                if foreground {
                    CellState::Unsettled
                } else {
                    CellState::Background
                }
            })
            .collect();
        Self {
            extents: SmallVec::from_slice(grid.extents()),
            states,
        }
    }

    /// State of the cell at `rank`.
    pub fn state(&self, rank: usize) -> CellState {
        self.states[rank]
    }

    /// Whether the cell at `rank` is foreground and still unassigned.
    pub fn is_unsettled(&self, rank: usize) -> bool {
        self.states[rank] == CellState::Unsettled
    }

    /// Assign the final distance of the cell at `rank`.
    ///
    /// The cell must be unsettled; settlement is one-time and permanent.
    pub fn settle(&mut self, rank: usize, distance: u64) {
        debug_assert!(
            self.is_unsettled(rank),
            "cell {rank} is not unsettled; settlement is one-time"
        );
        self.states[rank] = CellState::Settled(distance);
    }

    /// Number of cells holding a settled distance.
    pub fn settled_count(&self) -> usize {
        self.states
            .iter()
            .filter(|s| matches!(s, CellState::Settled(_)))
            .count()
    }

    /// Finalize into the public distance field.
    ///
    /// Settled cells report their distance; background and leftover
    /// unsettled cells report [`DistanceField::UNREACHED`].
    pub fn into_field(self) -> DistanceField {
        let values = self
            .states
            .iter()
            .map(|s| match s {
                CellState::Settled(d) => *d as f64,
                CellState::Background | CellState::Unsettled => DistanceField::UNREACHED,
            })
            .collect();
        DistanceField::new(&self.extents, values).expect("state grid keeps the source grid's shape")
    }
}
