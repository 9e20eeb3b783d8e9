use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::chart::{ChartKey, ChartLibrary, ChartStatus, SkillsetRatings};
use crate::error::Result;
use crate::score::ScoreRecord;

/// Accuracy at which a chart's listed difficulty is reached.
pub const REFERENCE_ACCURACY: f32 = 0.93;

/// One chart known to a `ChartTable`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartEntry {
    pub chart: ChartKey,
    #[serde(default = "default_status")]
    pub status: ChartStatus,
    /// Per-skillset difficulty at 1.0x rate and reference accuracy
    pub difficulty: SkillsetRatings,
}

fn default_status() -> ChartStatus {
    ChartStatus::Eligible
}

impl ChartEntry {
    pub fn new(chart: ChartKey, difficulty: SkillsetRatings) -> Self {
        Self {
            chart,
            status: ChartStatus::Eligible,
            difficulty,
        }
    }

    /// Difficulty scaled linearly by playback rate and by accuracy relative
    /// to `REFERENCE_ACCURACY`.
    pub fn contribution(&self, accuracy: f32, rate: f32) -> SkillsetRatings {
        if accuracy <= 0.0 || rate <= 0.0 {
            return SkillsetRatings::ZERO;
        }
        let scale = rate * accuracy / REFERENCE_ACCURACY;
        SkillsetRatings::new(self.difficulty.as_array().map(|d| d * scale))
    }
}

/// In-memory chart library keyed by `ChartKey`.
#[derive(Debug, Clone, Default)]
pub struct ChartTable {
    charts: BTreeMap<ChartKey, ChartEntry>,
}

impl ChartTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load from a JSON array of `ChartEntry`.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)?;
        let table = Self::from_json(&content)?;
        debug!("Loaded {} charts from {:?}", table.len(), path.as_ref());
        Ok(table)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        let entries: Vec<ChartEntry> = serde_json::from_str(content)?;
        Ok(entries.into_iter().collect())
    }

    pub fn to_json(&self) -> Result<String> {
        let entries: Vec<&ChartEntry> = self.charts.values().collect();
        Ok(serde_json::to_string_pretty(&entries)?)
    }

    pub fn insert(&mut self, entry: ChartEntry) {
        self.charts.insert(entry.chart.clone(), entry);
    }

    pub fn get(&self, chart: &ChartKey) -> Option<&ChartEntry> {
        self.charts.get(chart)
    }

    /// Change a chart's status, e.g. after a reload flags its timing.
    /// Returns false if the chart is unknown.
    pub fn set_status(&mut self, chart: &ChartKey, status: ChartStatus) -> bool {
        match self.charts.get_mut(chart) {
            Some(entry) => {
                entry.status = status;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, chart: &ChartKey) -> Option<ChartEntry> {
        self.charts.remove(chart)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ChartKey, &ChartEntry)> {
        self.charts.iter()
    }

    pub fn len(&self) -> usize {
        self.charts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.charts.is_empty()
    }
}

impl FromIterator<ChartEntry> for ChartTable {
    fn from_iter<I: IntoIterator<Item = ChartEntry>>(iter: I) -> Self {
        let mut table = Self::new();
        for entry in iter {
            table.insert(entry);
        }
        table
    }
}

impl ChartLibrary for ChartTable {
    fn status(&self, chart: &ChartKey) -> ChartStatus {
        self.charts
            .get(chart)
            .map(|entry| entry.status)
            .unwrap_or(ChartStatus::Missing)
    }

    fn compute_contribution(
        &self,
        chart: &ChartKey,
        record: &ScoreRecord,
    ) -> Option<SkillsetRatings> {
        let entry = self.charts.get(chart)?;
        if !entry.status.is_loaded() {
            return None;
        }
        Some(entry.contribution(record.accuracy, record.rate))
    }
}
