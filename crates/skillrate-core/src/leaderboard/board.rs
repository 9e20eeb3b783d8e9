use serde::{Deserialize, Serialize};

use crate::chart::RateBucket;
use crate::score::RecordRef;

/// One leaderboard slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub record: RecordRef,
    /// The record's contribution for the board's skillset at build time
    pub value: f32,
    pub bucket: RateBucket,
}

/// Best records for one skillset, ordered by value (highest first).
///
/// Holds at most `depth` entries and never two from the same chart and
/// rate bucket.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Leaderboard {
    entries: Vec<LeaderboardEntry>,
    depth: usize,
}

impl Leaderboard {
    pub(crate) fn from_entries(entries: Vec<LeaderboardEntry>, depth: usize) -> Self {
        debug_assert!(entries.len() <= depth);
        Self { entries, depth }
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn entries(&self) -> &[LeaderboardEntry] {
        &self.entries
    }

    /// Entry at a 1-based rank.
    pub fn get(&self, rank: usize) -> Option<&LeaderboardEntry> {
        rank.checked_sub(1).and_then(|i| self.entries.get(i))
    }

    pub fn weakest(&self) -> Option<f32> {
        self.entries.last().map(|e| e.value)
    }

    pub fn is_full(&self) -> bool {
        self.entries.len() >= self.depth
    }

    /// Whether a record with this value would earn a place.
    pub fn accepts(&self, value: f32) -> bool {
        if self.depth == 0 || !(value > 0.0) {
            return false;
        }
        match self.weakest() {
            Some(weakest) if self.is_full() => value > weakest,
            _ => true,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
