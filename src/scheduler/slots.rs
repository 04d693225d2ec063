//! Slot table used during assignment.
//!
//! Owns the occupancy state for one sequencing call. `claim(latest)` takes
//! the latest free slot in `1..=latest`, which is the placement rule the
//! greedy exchange argument depends on.
//!
//! State is sparse: at most one slot per job is ever taken, so memory is
//! bounded by the number of jobs, never by deadlines or the horizon.
//!
//! # Strategies
//!
//! | Strategy | Claim cost | Notes |
//! |----------|-----------|-------|
//! | `LinearScan` | O(k log k) | Walk taken slots down from `latest` to the first gap |
//! | `DisjointSet` | ~O(α(k)) | Union-find over "latest free slot ≤ s" |
//!
//! `k` = slots taken so far. Both strategies claim exactly the same slots.
//!
//! # Reference
//! Cormen et al. (2009), "Introduction to Algorithms", Problem 16-4, Ch. 21

use std::collections::{BTreeMap, BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

/// How the latest free slot is located.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotStrategy {
    /// Scan backward from the job's latest eligible slot.
    #[default]
    LinearScan,
    /// Disjoint-set forest with path compression.
    DisjointSet,
}

#[derive(Debug, Clone)]
enum Finder {
    /// Taken slots, for the backward gap search.
    Linear(BTreeSet<usize>),
    /// `parent[s]` chains toward the latest free slot ≤ `s`. A slot with no
    /// entry is free and is its own root; slot `0` is the "none" sentinel.
    Forest(HashMap<usize, usize>),
}

/// Sparse occupancy table over slots `1..`.
///
/// `occupants[s]` holds the index (into the caller's job slice) of the job
/// in slot `s`.
#[derive(Debug, Clone)]
pub(crate) struct SlotTable {
    occupants: BTreeMap<usize, usize>,
    finder: Finder,
}

impl SlotTable {
    pub(crate) fn new(strategy: SlotStrategy) -> Self {
        let finder = match strategy {
            SlotStrategy::LinearScan => Finder::Linear(BTreeSet::new()),
            SlotStrategy::DisjointSet => Finder::Forest(HashMap::new()),
        };
        Self {
            occupants: BTreeMap::new(),
            finder,
        }
    }

    /// Claims the latest free slot in `1..=latest` for `job`.
    ///
    /// Returns the claimed 1-based slot, or `None` when every eligible slot
    /// is taken.
    pub(crate) fn claim(&mut self, latest: usize, job: usize) -> Option<usize> {
        let slot = match &mut self.finder {
            Finder::Linear(taken) => {
                let slot = scan_back(taken, latest)?;
                taken.insert(slot);
                slot
            }
            Finder::Forest(parent) => {
                let slot = find_free(parent, latest)?;
                parent.insert(slot, slot - 1);
                slot
            }
        };

        self.occupants.insert(slot, job);
        Some(slot)
    }

    /// Consumes the table, returning `slot -> job index` in slot order.
    pub(crate) fn into_occupants(self) -> BTreeMap<usize, usize> {
        self.occupants
    }
}

fn scan_back(taken: &BTreeSet<usize>, latest: usize) -> Option<usize> {
    let mut candidate = latest;
    for &slot in taken.range(..=latest).rev() {
        if slot < candidate {
            break;
        }
        candidate = slot - 1;
    }
    (candidate > 0).then_some(candidate)
}

fn find_free(parent: &mut HashMap<usize, usize>, latest: usize) -> Option<usize> {
    let mut root = latest;
    while let Some(&next) = parent.get(&root) {
        root = next;
    }

    // Path compression
    let mut cur = latest;
    while let Some(next) = parent.get(&cur).copied() {
        if next == root {
            break;
        }
        parent.insert(cur, root);
        cur = next;
    }

    (root > 0).then_some(root)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn both() -> [SlotStrategy; 2] {
        [SlotStrategy::LinearScan, SlotStrategy::DisjointSet]
    }

    fn occupants(table: SlotTable) -> Vec<(usize, usize)> {
        table.into_occupants().into_iter().collect()
    }

    #[test]
    fn test_claim_latest_free() {
        for strategy in both() {
            let mut table = SlotTable::new(strategy);
            assert_eq!(table.claim(2, 0), Some(2));
            assert_eq!(table.claim(2, 1), Some(1));
            assert_eq!(table.claim(2, 2), None);
            assert_eq!(table.claim(3, 3), Some(3));
            assert_eq!(table.claim(3, 4), None);
        }
    }

    #[test]
    fn test_claim_skips_taken_run() {
        for strategy in both() {
            let mut table = SlotTable::new(strategy);
            assert_eq!(table.claim(5, 0), Some(5));
            assert_eq!(table.claim(4, 1), Some(4));
            assert_eq!(table.claim(2, 2), Some(2));
            assert_eq!(table.claim(5, 3), Some(3));
            assert_eq!(table.claim(5, 4), Some(1));
            assert_eq!(table.claim(5, 5), None);
        }
    }

    #[test]
    fn test_claim_zero_latest() {
        for strategy in both() {
            let mut table = SlotTable::new(strategy);
            assert_eq!(table.claim(0, 0), None);
            assert!(table.into_occupants().is_empty());
        }
    }

    #[test]
    fn test_claim_huge_slot_is_sparse() {
        for strategy in both() {
            let mut table = SlotTable::new(strategy);
            assert_eq!(table.claim(usize::MAX, 0), Some(usize::MAX));
            assert_eq!(table.claim(usize::MAX, 1), Some(usize::MAX - 1));
            assert_eq!(
                occupants(table),
                vec![(usize::MAX - 1, 1), (usize::MAX, 0)]
            );
        }
    }

    #[test]
    fn test_occupants_in_slot_order() {
        for strategy in both() {
            let mut table = SlotTable::new(strategy);
            table.claim(4, 7);
            table.claim(2, 3);
            assert_eq!(occupants(table), vec![(2, 3), (4, 7)]);
        }
    }

    #[test]
    fn test_strategies_agree_on_sequence() {
        let requests = [5, 3, 5, 1, 4, 2, 5, 3, 1, 5, 9, 9];
        let mut linear = SlotTable::new(SlotStrategy::LinearScan);
        let mut dsu = SlotTable::new(SlotStrategy::DisjointSet);
        for (job, &latest) in requests.iter().enumerate() {
            assert_eq!(linear.claim(latest, job), dsu.claim(latest, job));
        }
        assert_eq!(occupants(linear), occupants(dsu));
    }
}
