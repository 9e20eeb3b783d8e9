//! Bulk validation and recalculation of stored contributions.
//!
//! All three passes walk the whole store and consult the chart library per
//! chart. Records are mutated in place and never removed.

use tracing::{debug, info, warn};

use crate::chart::{ChartLibrary, ChartStatus};
use crate::score::ScoreStore;

/// Counts from one `recalculate` pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RecalcSummary {
    /// Records given fresh contributions
    pub recomputed: usize,
    /// Records whose contributions were zeroed
    pub zeroed: usize,
    /// Records left as they were (already current, or no contribution available)
    pub unchanged: usize,
    /// Charts skipped because their data is not loaded
    pub missing_charts: usize,
}

/// Mark every record on an eligible chart as valid. Returns the number of
/// records touched.
pub fn validate_all<L: ChartLibrary + ?Sized>(store: &mut ScoreStore, library: &L) -> usize {
    let mut touched = 0;
    for (chart, scores) in store.iter_mut() {
        if !library.is_rating_eligible(chart) {
            continue;
        }
        for record in &mut scores.records {
            record.valid = true;
            touched += 1;
        }
    }
    debug!("Validated {} records", touched);
    touched
}

/// Recompute contributions through the chart library.
///
/// Charts whose data is missing are skipped. Unsuitable charts keep their
/// records but every contribution is zeroed. On eligible charts, records
/// already stamped with `calc_version` are skipped when `only_stale` is
/// set; invalid or failing records are zeroed; the rest are recomputed and
/// stamped.
pub fn recalculate<L: ChartLibrary + ?Sized>(
    store: &mut ScoreStore,
    library: &L,
    only_stale: bool,
    calc_version: u32,
) -> RecalcSummary {
    let mut summary = RecalcSummary::default();

    for (chart, scores) in store.iter_mut() {
        match library.status(chart) {
            ChartStatus::Missing => {
                summary.missing_charts += 1;
            }
            ChartStatus::Unsuitable => {
                for record in &mut scores.records {
                    record.clear_skillsets();
                    summary.zeroed += 1;
                }
            }
            ChartStatus::Eligible => {
                for record in &mut scores.records {
                    if only_stale && record.is_current(calc_version) {
                        summary.unchanged += 1;
                        continue;
                    }
                    if !record.valid || record.is_failing() {
                        record.clear_skillsets();
                        summary.zeroed += 1;
                        continue;
                    }
                    match library.compute_contribution(chart, record) {
                        Some(ratings) => {
                            record.stamp(ratings.sanitized(), calc_version);
                            summary.recomputed += 1;
                        }
                        None => {
                            warn!("No contribution available for {} ({})", chart, record.score_key);
                            summary.unchanged += 1;
                        }
                    }
                }
            }
        }
    }

    info!(
        "Recalculated ratings: {} recomputed, {} zeroed, {} unchanged, {} charts missing",
        summary.recomputed, summary.zeroed, summary.unchanged, summary.missing_charts
    );
    summary
}

/// Zero contributions on loaded charts without recomputing them.
///
/// With `only_old`, records already stamped with `calc_version` are kept.
/// Returns the number of records reset.
pub fn reset_ratings<L: ChartLibrary + ?Sized>(
    store: &mut ScoreStore,
    library: &L,
    only_old: bool,
    calc_version: u32,
) -> usize {
    let mut reset = 0;
    for (chart, scores) in store.iter_mut() {
        if !library.status(chart).is_loaded() {
            continue;
        }
        for record in &mut scores.records {
            if only_old && record.is_current(calc_version) {
                continue;
            }
            record.clear_skillsets();
            reset += 1;
        }
    }
    debug!("Reset ratings on {} records", reset);
    reset
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::{ChartEntry, ChartKey, ChartTable, Skillset, SkillsetRatings};
    use crate::score::{Grade, ScoreRecord};
    use chrono::Utc;

    fn table(charts: &[(&ChartKey, ChartStatus)]) -> ChartTable {
        charts
            .iter()
            .map(|(key, status)| {
                let mut entry = ChartEntry::new((*key).clone(), SkillsetRatings::splat(20.0));
                entry.status = *status;
                entry
            })
            .collect()
    }

    fn record(key: &str) -> ScoreRecord {
        ScoreRecord::new(key, Utc::now(), 0.93, 1.0)
    }

    #[test]
    fn test_recalculate_stamps_eligible_records() {
        let chart = ChartKey::steps("s", "a");
        let lib = table(&[(&chart, ChartStatus::Eligible)]);
        let mut store = ScoreStore::new();
        let reference = store.add_record(chart, record("k1"));

        let summary = recalculate(&mut store, &lib, false, 3);
        assert_eq!(summary.recomputed, 1);

        let record = store.record(&reference).unwrap();
        assert_eq!(record.calc_version, 3);
        assert!((record.skillsets[Skillset::Stream] - 20.0).abs() < 1e-4);
    }

    #[test]
    fn test_recalculate_zeroes_failing_and_invalid() {
        let chart = ChartKey::steps("s", "a");
        let lib = table(&[(&chart, ChartStatus::Eligible)]);
        let mut store = ScoreStore::new();

        let failed = record("failed")
            .with_grade(Grade::Failed)
            .with_skillsets(SkillsetRatings::splat(9.0), 0);
        let mut invalid = record("invalid").with_skillsets(SkillsetRatings::splat(9.0), 0);
        invalid.valid = false;
        let failed = store.add_record(chart.clone(), failed);
        let invalid = store.add_record(chart, invalid);

        let summary = recalculate(&mut store, &lib, false, 1);
        assert_eq!(summary.zeroed, 2);
        assert!(store.record(&failed).unwrap().skillsets.is_zero());
        assert!(store.record(&invalid).unwrap().skillsets.is_zero());
    }

    #[test]
    fn test_recalculate_unsuitable_and_missing() {
        let broken = ChartKey::steps("s", "broken");
        let gone = ChartKey::steps("s", "gone");
        let lib = table(&[(&broken, ChartStatus::Unsuitable)]);
        let mut store = ScoreStore::new();
        let on_broken = store.add_record(
            broken,
            record("b").with_skillsets(SkillsetRatings::splat(5.0), 1),
        );
        let on_gone = store.add_record(gone, record("g").with_skillsets(SkillsetRatings::splat(5.0), 1));

        let summary = recalculate(&mut store, &lib, true, 1);
        assert_eq!(summary.missing_charts, 1);
        assert!(store.record(&on_broken).unwrap().skillsets.is_zero());
        assert_eq!(store.record(&on_gone).unwrap().skillsets, SkillsetRatings::splat(5.0));
        assert_eq!(store.total_records(), 2);
    }

    #[test]
    fn test_only_stale_is_idempotent() {
        let chart = ChartKey::steps("s", "a");
        let lib = table(&[(&chart, ChartStatus::Eligible)]);
        let mut store = ScoreStore::new();
        store.add_record(chart.clone(), record("k1"));
        store.add_record(chart, record("k2").with_grade(Grade::Failed));

        recalculate(&mut store, &lib, true, 2);
        let after_first = store.clone();
        let summary = recalculate(&mut store, &lib, true, 2);

        assert_eq!(summary.recomputed, 0);
        assert_eq!(store, after_first);
    }

    #[test]
    fn test_validate_only_eligible() {
        let good = ChartKey::steps("s", "good");
        let broken = ChartKey::steps("s", "broken");
        let lib = table(&[(&good, ChartStatus::Eligible), (&broken, ChartStatus::Unsuitable)]);
        let mut store = ScoreStore::new();
        let mut a = record("a");
        a.valid = false;
        let mut b = record("b");
        b.valid = false;
        let a = store.add_record(good, a);
        let b = store.add_record(broken, b);

        assert_eq!(validate_all(&mut store, &lib), 1);
        assert!(store.record(&a).unwrap().valid);
        assert!(!store.record(&b).unwrap().valid);
    }

    #[test]
    fn test_reset_respects_only_old() {
        let chart = ChartKey::steps("s", "a");
        let lib = table(&[(&chart, ChartStatus::Unsuitable)]);
        let mut store = ScoreStore::new();
        let old = store.add_record(chart.clone(), record("old").with_skillsets(SkillsetRatings::splat(4.0), 1));
        let current = store.add_record(chart, record("new").with_skillsets(SkillsetRatings::splat(4.0), 2));

        assert_eq!(reset_ratings(&mut store, &lib, true, 2), 1);
        assert!(store.record(&old).unwrap().skillsets.is_zero());
        assert!(!store.record(&current).unwrap().skillsets.is_zero());
    }
}
