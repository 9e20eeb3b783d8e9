use std::collections::{BTreeMap, HashSet};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::chart::{ChartKey, RateBucket};
use crate::score::ScoreRecord;

/// Reference to one record: chart key + index into that chart's records.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecordRef {
    pub chart: ChartKey,
    pub index: usize,
}

/// All attempts on a single chart
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartScores {
    pub records: Vec<ScoreRecord>,
    pub play_count: u32,
    pub last_played: Option<DateTime<Utc>>,
}

impl ChartScores {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an attempt and bump the play counters. Returns its index.
    pub fn push(&mut self, record: ScoreRecord) -> usize {
        self.touch(record.played_at);
        self.play_count += 1;
        self.records.push(record);
        self.records.len() - 1
    }

    pub fn contains_attempt(&self, attempt_id: &str) -> bool {
        self.records.iter().any(|r| r.attempt_id() == attempt_id)
    }

    /// Add every attempt from `other` missing here, keyed by attempt identity.
    /// Existing records are never removed or reordered. Returns the number
    /// of records added.
    pub fn merge_from(&mut self, other: &ChartScores, add_play_count: bool) -> usize {
        let mut known: HashSet<String> = self
            .records
            .iter()
            .map(|r| r.attempt_id().to_string())
            .collect();

        let mut added = 0;
        for record in &other.records {
            if known.insert(record.attempt_id().to_string()) {
                self.records.push(record.clone());
                added += 1;
            }
        }

        if add_play_count {
            self.play_count += other.play_count;
        }
        if let Some(at) = other.last_played {
            self.touch(at);
        }
        added
    }

    fn touch(&mut self, at: DateTime<Utc>) {
        self.last_played = Some(match self.last_played {
            Some(current) if current >= at => current,
            _ => at,
        });
    }
}

/// Serialized form of one store entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartHistory {
    pub chart: ChartKey,
    #[serde(flatten)]
    pub scores: ChartScores,
}

/// A player's score history: chart identity -> attempts on that chart.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<ChartHistory>", into = "Vec<ChartHistory>")]
pub struct ScoreStore {
    charts: BTreeMap<ChartKey, ChartScores>,
}

impl From<Vec<ChartHistory>> for ScoreStore {
    fn from(entries: Vec<ChartHistory>) -> Self {
        let mut store = Self::new();
        for entry in entries {
            // Duplicate keys in a snapshot are folded together
            store
                .charts
                .entry(entry.chart)
                .or_default()
                .merge_from(&entry.scores, true);
        }
        store
    }
}

impl From<ScoreStore> for Vec<ChartHistory> {
    fn from(store: ScoreStore) -> Self {
        store
            .charts
            .into_iter()
            .map(|(chart, scores)| ChartHistory { chart, scores })
            .collect()
    }
}

impl ScoreStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a new attempt on `chart`.
    pub fn add_record(&mut self, chart: ChartKey, record: ScoreRecord) -> RecordRef {
        let scores = self.charts.entry(chart.clone()).or_default();
        let index = scores.push(record);
        RecordRef { chart, index }
    }

    pub fn get(&self, chart: &ChartKey) -> Option<&ChartScores> {
        self.charts.get(chart)
    }

    pub fn get_mut(&mut self, chart: &ChartKey) -> Option<&mut ChartScores> {
        self.charts.get_mut(chart)
    }

    pub fn get_or_insert(&mut self, chart: ChartKey) -> &mut ChartScores {
        self.charts.entry(chart).or_default()
    }

    pub fn insert(&mut self, chart: ChartKey, scores: ChartScores) {
        self.charts.insert(chart, scores);
    }

    pub fn contains(&self, chart: &ChartKey) -> bool {
        self.charts.contains_key(chart)
    }

    pub fn record(&self, reference: &RecordRef) -> Option<&ScoreRecord> {
        self.charts
            .get(&reference.chart)
            .and_then(|scores| scores.records.get(reference.index))
    }

    /// Like `record`, also returning the stored chart key.
    pub fn record_with_key(&self, reference: &RecordRef) -> Option<(&ChartKey, &ScoreRecord)> {
        let (chart, scores) = self.charts.get_key_value(&reference.chart)?;
        scores.records.get(reference.index).map(|record| (chart, record))
    }

    pub fn record_mut(&mut self, reference: &RecordRef) -> Option<&mut ScoreRecord> {
        self.charts
            .get_mut(&reference.chart)
            .and_then(|scores| scores.records.get_mut(reference.index))
    }

    pub fn times_played(&self, chart: &ChartKey) -> u32 {
        self.charts.get(chart).map(|s| s.play_count).unwrap_or(0)
    }

    /// Best accuracy on `chart` among attempts in the same rate bucket as `rate`.
    pub fn best_accuracy_at_rate(&self, chart: &ChartKey, rate: f32) -> f32 {
        let bucket = RateBucket::from_rate(rate);
        self.charts
            .get(chart)
            .into_iter()
            .flat_map(|scores| scores.records.iter())
            .filter(|r| r.rate_bucket() == bucket)
            .map(|r| r.accuracy)
            .fold(0.0, f32::max)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ChartKey, &ChartScores)> {
        self.charts.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&ChartKey, &mut ChartScores)> {
        self.charts.iter_mut()
    }

    pub fn records(&self) -> impl Iterator<Item = (&ChartKey, &ScoreRecord)> {
        self.charts
            .iter()
            .flat_map(|(chart, scores)| scores.records.iter().map(move |r| (chart, r)))
    }

    pub fn total_records(&self) -> usize {
        self.charts.values().map(|s| s.records.len()).sum()
    }

    pub fn len(&self) -> usize {
        self.charts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.charts.is_empty()
    }
}
