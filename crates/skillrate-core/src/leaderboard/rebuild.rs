use tracing::debug;

use crate::chart::{ChartLibrary, Skillset};
use crate::config::rate::NUM_BUCKETS;
use crate::leaderboard::{Leaderboard, LeaderboardEntry};
use crate::score::{RecordRef, ScoreStore};

/// Result of a full leaderboard rebuild.
#[derive(Debug, Clone, PartialEq)]
pub struct TopRebuild {
    pub board: Leaderboard,
    /// True if the board reached the requested depth
    pub complete: bool,
}

/// Best value inserted so far for one rate bucket of the chart being scanned.
#[derive(Debug, Clone, Copy, Default)]
struct BucketBest {
    value: f32,
    index: Option<usize>,
}

/// Build the top `depth` records for `skillset` from scratch.
///
/// Only valid records with a positive, finite contribution on eligible
/// charts are considered. Per chart, a table of rate buckets remembers the
/// record inserted for each bucket; a better record in the same bucket
/// evicts it before being inserted, so each (chart, bucket) appears at most
/// once. The new board is assembled locally and returned whole.
pub fn rebuild_top<L: ChartLibrary + ?Sized>(
    store: &ScoreStore,
    library: &L,
    depth: usize,
    skillset: Skillset,
) -> TopRebuild {
    if depth == 0 {
        return TopRebuild {
            board: Leaderboard::from_entries(Vec::new(), 0),
            complete: true,
        };
    }

    let capacity = depth.min(store.total_records()).saturating_add(1);
    let mut entries: Vec<LeaderboardEntry> = Vec::with_capacity(capacity);
    let mut scratch = [BucketBest::default(); NUM_BUCKETS];

    for (chart, scores) in store.iter() {
        if !library.is_rating_eligible(chart) {
            continue;
        }
        scratch.fill(BucketBest::default());

        for (index, record) in scores.records.iter().enumerate() {
            if !record.valid {
                continue;
            }
            let value = record.skillsets[skillset];
            if !value.is_finite() || value <= 0.0 {
                continue;
            }

            let bucket = record.rate_bucket();
            let best = &mut scratch[bucket.slot()];
            if best.value >= value {
                continue;
            }
            if entries.len() >= depth && entries[depth - 1].value >= value {
                continue;
            }

            if let Some(previous) = best.index {
                // The weaker record from this bucket may already have been pushed off
                if let Some(pos) = entries
                    .iter()
                    .position(|e| e.record.index == previous && e.record.chart == *chart)
                {
                    entries.remove(pos);
                }
            }

            let pos = entries
                .iter()
                .position(|e| e.value < value)
                .unwrap_or(entries.len());
            entries.insert(
                pos,
                LeaderboardEntry {
                    record: RecordRef {
                        chart: chart.clone(),
                        index,
                    },
                    value,
                    bucket,
                },
            );
            entries.truncate(depth);

            *best = BucketBest {
                value,
                index: Some(index),
            };
        }
    }

    let complete = entries.len() >= depth;
    if complete {
        debug!("Rebuilt {} leaderboard with {} entries", skillset, depth);
    } else {
        debug!(
            "Rebuilt {} leaderboard short: {}/{} entries",
            skillset,
            entries.len(),
            depth
        );
    }

    TopRebuild {
        board: Leaderboard::from_entries(entries, depth),
        complete,
    }
}
