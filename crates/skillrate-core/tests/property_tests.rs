//! Property-based tests for aggregation, leaderboards and merging.

use std::collections::{BTreeMap, BTreeSet};

use chrono::Utc;
use proptest::collection::{btree_set, vec};
use proptest::prelude::*;
use skillrate_core::{
    ChartEntry, ChartKey, ChartTable, Profile, ProfileKind, RateBucket, ScoreRecord, ScoreStore,
    Skillset, SkillsetRatings, aggregate, rebuild_top,
};

const RATES: [f32; 7] = [0.5, 0.7, 1.0, 1.02, 1.05, 1.5, 2.0];

fn chart(index: u8) -> ChartKey {
    ChartKey::steps("song", format!("chart{index}"))
}

fn library(count: u8) -> ChartTable {
    (0..count)
        .map(|i| ChartEntry::new(chart(i), SkillsetRatings::splat(1.0)))
        .collect()
}

fn profile_from(attempts: &BTreeSet<(u8, u8)>) -> Profile {
    let lib = ChartTable::new();
    let mut profile = Profile::new(ProfileKind::Local);
    for (c, k) in attempts {
        let record = ScoreRecord::new(format!("attempt{k}"), Utc::now(), 0.9, 1.0);
        profile.add_score(&lib, chart(*c), record);
    }
    profile
}

proptest! {
    /// Raising any one sample never lowers the aggregate.
    #[test]
    fn aggregate_is_monotonic(
        samples in vec(0.0f32..80.0, 1..40),
        pick in any::<prop::sample::Index>(),
        raise in 0.0f32..25.0,
    ) {
        let mut raised = samples.clone();
        let i = pick.index(raised.len());
        raised[i] += raise;
        prop_assert!(aggregate(&raised) >= aggregate(&samples));
    }

    /// The board is the top `depth` of the best value per (chart, bucket).
    #[test]
    fn leaderboard_matches_best_per_bucket(
        records in vec((0u8..5, 0usize..RATES.len(), 0u32..100), 0..60),
        depth in 0usize..12,
    ) {
        let lib = library(5);
        let mut store = ScoreStore::new();
        let mut best: BTreeMap<(u8, RateBucket), f32> = BTreeMap::new();

        for (n, (c, r, v)) in records.iter().enumerate() {
            let value = *v as f32;
            let record = ScoreRecord::new(format!("k{n}"), Utc::now(), 0.9, RATES[*r])
                .with_skillsets(SkillsetRatings::splat(value), 1);
            if value > 0.0 {
                let slot = best.entry((*c, record.rate_bucket())).or_insert(0.0);
                *slot = slot.max(value);
            }
            store.add_record(chart(*c), record);
        }

        let rebuild = rebuild_top(&store, &lib, depth, Skillset::Stream);
        let entries = rebuild.board.entries();

        prop_assert!(entries.len() <= depth);
        prop_assert_eq!(entries.len(), depth.min(best.len()));
        prop_assert_eq!(rebuild.complete, entries.len() == depth);

        for pair in entries.windows(2) {
            prop_assert!(pair[0].value >= pair[1].value);
        }

        let distinct: BTreeSet<(ChartKey, RateBucket)> = entries
            .iter()
            .map(|e| (e.record.chart.clone(), e.bucket))
            .collect();
        prop_assert_eq!(distinct.len(), entries.len());

        let mut expected: Vec<f32> = best.values().copied().collect();
        expected.sort_by(|a, b| b.total_cmp(a));
        expected.truncate(depth);
        let actual: Vec<f32> = entries.iter().map(|e| e.value).collect();
        prop_assert_eq!(actual, expected);
    }

    /// Merging keeps every target record, adds every source attempt and
    /// leaves the source alone.
    #[test]
    fn merge_is_a_non_destructive_union(
        target_attempts in btree_set((0u8..4, 0u8..20), 0..30),
        source_attempts in btree_set((0u8..4, 0u8..20), 0..30),
        skip_totals in any::<bool>(),
    ) {
        let mut target = profile_from(&target_attempts);
        let source = profile_from(&source_attempts);
        let source_before = source.clone();
        let target_before = target.scores().clone();

        target.merge_from(&source, skip_totals);

        prop_assert_eq!(&source, &source_before);

        for (chart_key, scores) in target_before.iter() {
            let merged = target.scores().get(chart_key).unwrap();
            prop_assert_eq!(&merged.records[..scores.records.len()], &scores.records[..]);
        }

        let union: BTreeSet<(u8, u8)> = target_attempts.union(&source_attempts).copied().collect();
        prop_assert_eq!(target.scores().total_records(), union.len());
        for (c, k) in &union {
            let scores = target.scores().get(&chart(*c)).unwrap();
            let attempt = format!("attempt{}", k);
            prop_assert!(scores.contains_attempt(&attempt), "missing {}", attempt);
        }
    }
}
