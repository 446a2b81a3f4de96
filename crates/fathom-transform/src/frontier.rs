//! Frontier bookkeeping for round-by-round expansion.
//!
//! A [`Frontier`] holds the cells settled in the previous round; a
//! [`CandidateSet`] collects the distances offered to unsettled cells
//! during the current round. Two cells of one frontier can reach the same
//! neighbour with different candidate distances (mixed increments under
//! the chamfer metrics), so the set keeps the minimum offer per cell and
//! the commit happens only once the round's expansion is complete. That
//! makes the settled value independent of the order frontier entries are
//! processed in.

use fathom_core::Coord;
use indexmap::map::Entry;
use indexmap::IndexMap;

/// One frontier cell awaiting expansion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrontierEntry {
    /// Row-major rank of the cell.
    pub rank: usize,
    /// Canonical coordinate of the cell.
    pub coord: Coord,
    /// The cell's settled distance.
    pub distance: u64,
}

/// Ordered sequence of cells settled in the previous round.
#[derive(Clone, Debug, Default)]
pub struct Frontier {
    entries: Vec<FrontierEntry>,
}

impl Frontier {
    /// Frontier holding only the origin at distance 0.
    pub fn seeded(rank: usize, coord: Coord) -> Self {
        Self {
            entries: vec![FrontierEntry {
                rank,
                coord,
                distance: 0,
            }],
        }
    }

    /// Empty frontier with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Append an entry.
    pub fn push(&mut self, entry: FrontierEntry) {
        self.entries.push(entry);
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the frontier has drained.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Stable sort by distance, ascending.
    ///
    /// Entries with equal distances keep their insertion order, so the
    /// expansion sequence stays deterministic.
    pub fn sort_by_distance(&mut self) {
        self.entries.sort_by_key(|e| e.distance);
    }

    /// Iterate entries in order.
    pub fn iter(&self) -> impl Iterator<Item = &FrontierEntry> {
        self.entries.iter()
    }
}

/// Minimum-merge accumulator for one round of expansion.
///
/// Keyed by cell rank; iteration order is the order cells were first
/// offered, which keeps the next frontier deterministic.
#[derive(Debug, Default)]
pub struct CandidateSet {
    slots: IndexMap<usize, (Coord, u64)>,
}

impl CandidateSet {
    /// Empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Offer `distance` to the cell at `rank`, keeping the smaller value
    /// if the cell already has an offer this round.
    pub fn offer(&mut self, rank: usize, coord: Coord, distance: u64) {
        match self.slots.entry(rank) {
            Entry::Occupied(mut slot) => {
                let best = &mut slot.get_mut().1;
                if distance < *best {
                    *best = distance;
                }
            }
            Entry::Vacant(slot) => {
                slot.insert((coord, distance));
            }
        }
    }

    /// Number of distinct cells offered to.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether no cell received an offer.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Consume the set in first-offer order.
    pub fn into_entries(self) -> impl Iterator<Item = FrontierEntry> {
        self.slots
            .into_iter()
            .map(|(rank, (coord, distance))| FrontierEntry {
                rank,
                coord,
                distance,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    fn entry(rank: usize, distance: u64) -> FrontierEntry {
        FrontierEntry {
            rank,
            coord: smallvec![rank as i32, 0],
            distance,
        }
    }

    // ── Frontier ────────────────────────────────────────────────

    #[test]
    fn seeded_frontier_holds_origin_at_zero() {
        let f = Frontier::seeded(5, smallvec![1, 1]);
        assert_eq!(f.len(), 1);
        let first = f.iter().next().unwrap();
        assert_eq!(first.rank, 5);
        assert_eq!(first.distance, 0);
    }

    #[test]
    fn sort_by_distance_is_stable() {
        let mut f = Frontier::with_capacity(4);
        f.push(entry(0, 7));
        f.push(entry(1, 3));
        f.push(entry(2, 7));
        f.push(entry(3, 3));
        f.sort_by_distance();
        let order: Vec<_> = f.iter().map(|e| (e.rank, e.distance)).collect();
        // Equal distances keep insertion order: 1 before 3, 0 before 2.
        assert_eq!(order, vec![(1, 3), (3, 3), (0, 7), (2, 7)]);
    }

    // ── CandidateSet ────────────────────────────────────────────

    #[test]
    fn offer_keeps_minimum_per_cell() {
        let mut set = CandidateSet::new();
        set.offer(4, smallvec![1, 0], 7);
        set.offer(4, smallvec![1, 0], 6);
        set.offer(4, smallvec![1, 0], 9);
        assert_eq!(set.len(), 1);
        let committed: Vec<_> = set.into_entries().collect();
        assert_eq!(committed[0].distance, 6);
    }

    #[test]
    fn into_entries_preserves_first_offer_order() {
        let mut set = CandidateSet::new();
        set.offer(9, smallvec![2, 1], 4);
        set.offer(2, smallvec![0, 2], 3);
        set.offer(9, smallvec![2, 1], 3); // improves rank 9, order unchanged
        let ranks: Vec<_> = set.into_entries().map(|e| e.rank).collect();
        assert_eq!(ranks, vec![9, 2]);
    }

    #[test]
    fn empty_set_commits_nothing() {
        let set = CandidateSet::new();
        assert!(set.is_empty());
        assert_eq!(set.into_entries().count(), 0);
    }
}
