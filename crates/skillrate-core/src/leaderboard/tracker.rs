use strum::IntoEnumIterator;
use tracing::{debug, info};

use crate::chart::{ChartLibrary, NUM_SKILLSETS, Skillset};
use crate::leaderboard::{Leaderboard, LeaderboardEntry, rebuild_top};
use crate::score::{RecordRef, ScoreStore};

/// Per-skillset leaderboards kept alongside a score store.
///
/// Boards start empty with depth 0 and are built on demand. Entries refer to
/// records by position, so callers must `clear` after changing the store in
/// any way other than appending records.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Leaderboards {
    boards: [Leaderboard; NUM_SKILLSETS],
}

impl Leaderboards {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn board(&self, skillset: Skillset) -> &Leaderboard {
        &self.boards[skillset.index()]
    }

    /// Rebuild one skillset's board. Returns whether it reached `depth`.
    pub fn rebuild<L: ChartLibrary + ?Sized>(
        &mut self,
        store: &ScoreStore,
        library: &L,
        skillset: Skillset,
        depth: usize,
    ) -> bool {
        let rebuild = rebuild_top(store, library, depth, skillset);
        self.boards[skillset.index()] = rebuild.board;
        rebuild.complete
    }

    /// Rebuild every board. Returns whether all of them reached `depth`.
    pub fn rebuild_all<L: ChartLibrary + ?Sized>(
        &mut self,
        store: &ScoreStore,
        library: &L,
        depth: usize,
    ) -> bool {
        let mut complete = true;
        for skillset in Skillset::iter() {
            complete &= self.rebuild(store, library, skillset, depth);
        }
        info!("Rebuilt all leaderboards at depth {} (complete: {})", depth, complete);
        complete
    }

    /// Update boards after `reference` was added to `store`.
    ///
    /// Each built board the new record would break into is rebuilt at its
    /// current depth. Returns the skillsets that were rebuilt.
    pub fn on_new_score<L: ChartLibrary + ?Sized>(
        &mut self,
        store: &ScoreStore,
        library: &L,
        reference: &RecordRef,
    ) -> Vec<Skillset> {
        let mut rebuilt = Vec::new();
        let Some(record) = store.record(reference) else {
            return rebuilt;
        };
        if !library.is_rating_eligible(&reference.chart) {
            return rebuilt;
        }

        for skillset in Skillset::iter() {
            let value = record.rated_value(skillset);
            let board = &self.boards[skillset.index()];
            if !board.accepts(value) {
                continue;
            }
            let depth = board.depth();
            self.rebuild(store, library, skillset, depth);
            rebuilt.push(skillset);
        }

        if !rebuilt.is_empty() {
            debug!("New score {} entered {} leaderboards", reference.chart, rebuilt.len());
        }
        rebuilt
    }

    /// Entry at a 1-based rank, rebuilding deeper if the board is too short.
    ///
    /// Rank 0 is treated as 1. Returns `None` if the store holds fewer
    /// qualifying records than `rank`; the rebuild depth never exceeds the
    /// number of stored records.
    pub fn rank<L: ChartLibrary + ?Sized>(
        &mut self,
        store: &ScoreStore,
        library: &L,
        skillset: Skillset,
        rank: usize,
    ) -> Option<&LeaderboardEntry> {
        let rank = rank.max(1);
        let available = store.total_records();
        if rank > available {
            return None;
        }
        let board = &self.boards[skillset.index()];
        if rank > board.len() {
            let depth = rank.max(board.depth()).min(available);
            self.rebuild(store, library, skillset, depth);
        }
        self.boards[skillset.index()].get(rank)
    }

    pub fn clear(&mut self) {
        self.boards = Default::default();
    }
}
