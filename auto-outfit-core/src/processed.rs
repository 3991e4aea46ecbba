//! The processed set: pawns whose slave outfit has already been handled.
//!
//! Keyed by [`PawnId`], so a pawn appears at most once. Entries are only
//! ever added during a session; the set is emptied at session start and
//! rebuilt from save data on load.

use std::collections::HashSet;

use crate::types::PawnId;

/// Identity set of pawns already auto-assigned.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessedSet {
    pawns: HashSet<PawnId>,
}

impl ProcessedSet {
    /// Create an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `pawn` has already been processed.
    #[must_use]
    pub fn contains(&self, pawn: PawnId) -> bool {
        self.pawns.contains(&pawn)
    }

    /// Mark `pawn` as processed. Returns `true` if it was not present.
    pub fn insert(&mut self, pawn: PawnId) -> bool {
        self.pawns.insert(pawn)
    }

    /// Forget every entry.
    pub fn clear(&mut self) {
        self.pawns.clear();
    }

    /// Number of processed pawns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pawns.len()
    }

    /// Whether no pawn has been processed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pawns.is_empty()
    }

    /// Iterate over processed pawns in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = PawnId> + '_ {
        self.pawns.iter().copied()
    }

    /// Materialize the set as an ordered list for serialization.
    ///
    /// Sorted by id so identical sets always produce identical save data.
    #[must_use]
    pub fn snapshot(&self) -> Vec<PawnId> {
        let mut pawns: Vec<_> = self.pawns.iter().copied().collect();
        pawns.sort_unstable();
        pawns
    }

    /// Replace the contents with the given references.
    ///
    /// Null entries and references for which `is_live` returns `false` are
    /// skipped; duplicates collapse. Returns the number of entries dropped.
    pub fn repopulate<I, F>(&mut self, refs: I, mut is_live: F) -> usize
    where
        I: IntoIterator<Item = Option<PawnId>>,
        F: FnMut(PawnId) -> bool,
    {
        self.pawns.clear();
        let mut dropped = 0;
        for pawn in refs {
            match pawn {
                Some(id) if is_live(id) => {
                    self.pawns.insert(id);
                }
                _ => dropped += 1,
            }
        }
        dropped
    }
}

impl FromIterator<PawnId> for ProcessedSet {
    fn from_iter<T: IntoIterator<Item = PawnId>>(iter: T) -> Self {
        Self {
            pawns: iter.into_iter().collect(),
        }
    }
}
