use tracing::info;

use crate::profile::screenshot::normalize;
use crate::profile::{Profile, ProfileKind};
use crate::score::ScoreStore;

/// What a merge added to the target.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeSummary {
    pub charts_added: usize,
    pub records_added: usize,
    pub screenshots_added: usize,
}

/// Fold `source` into `target`.
///
/// Score histories merge as a set union keyed by attempt identity; charts
/// only in `source` are copied whole. Unless `skip_totals` is set, lifetime
/// counters and per-chart play counts are summed. Non-machine targets also
/// take the source's screenshots. `source` is never modified. Cached
/// leaderboards on the target are dropped; callers should recalculate.
pub fn merge(target: &mut Profile, source: &Profile, skip_totals: bool) -> MergeSummary {
    let mut summary = merge_scores(&mut target.scores, &source.scores, !skip_totals);

    if !skip_totals {
        target.totals.merge_from(&source.totals);
    }

    if target.kind != ProfileKind::Machine {
        let before = target.screenshots.len();
        target.screenshots.extend(source.screenshots.iter().cloned());
        normalize(&mut target.screenshots);
        summary.screenshots_added = target.screenshots.len().saturating_sub(before);
    }

    target.leaderboards.clear();

    info!(
        "Merged profile: {} charts, {} records, {} screenshots added (totals {})",
        summary.charts_added,
        summary.records_added,
        summary.screenshots_added,
        if skip_totals { "skipped" } else { "summed" }
    );
    summary
}

/// Set-union `source` into `target` chart by chart.
pub fn merge_scores(
    target: &mut ScoreStore,
    source: &ScoreStore,
    add_play_counts: bool,
) -> MergeSummary {
    let mut summary = MergeSummary::default();
    for (chart, scores) in source.iter() {
        match target.get_mut(chart) {
            Some(existing) => {
                summary.records_added += existing.merge_from(scores, add_play_counts);
            }
            None => {
                target.insert(chart.clone(), scores.clone());
                summary.charts_added += 1;
                summary.records_added += scores.records.len();
            }
        }
    }
    summary
}
