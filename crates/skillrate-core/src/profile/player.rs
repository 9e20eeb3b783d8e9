use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use strum::IntoStaticStr;
use tracing::{debug, info};

use crate::chart::{ChartKey, ChartLibrary, Skillset};
use crate::config::EngineConfig;
use crate::error::Result;
use crate::leaderboard::Leaderboards;
use crate::profile::{MergeSummary, ProfileTotals, Screenshot, merge};
use crate::rating::{PlayerRating, compute_ratings};
use crate::recalc::{self, RecalcSummary};
use crate::score::{RecordRef, ScoreRecord, ScoreStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, IntoStaticStr)]
#[serde(rename_all = "lowercase")]
pub enum ProfileKind {
    /// A player's own profile
    #[default]
    Local,
    /// Shared machine profile recording every player's attempts
    Machine,
}

/// A player's score history, totals and derived ratings.
///
/// The profile owns its score store; all mutation goes through it so the
/// cached leaderboards and rating stay consistent with the store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub kind: ProfileKind,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub(crate) scores: ScoreStore,
    #[serde(default)]
    pub totals: ProfileTotals,
    #[serde(default)]
    pub screenshots: Vec<Screenshot>,
    #[serde(default)]
    rating: PlayerRating,
    #[serde(skip)]
    config: EngineConfig,
    #[serde(skip)]
    pub(crate) leaderboards: Leaderboards,
}

impl Profile {
    pub fn new(kind: ProfileKind) -> Self {
        Self {
            kind,
            ..Default::default()
        }
    }

    pub fn with_config(kind: ProfileKind, config: EngineConfig) -> Self {
        Self {
            kind,
            config,
            ..Default::default()
        }
    }

    /// Load a JSON profile snapshot.
    pub fn load<P: AsRef<Path>>(path: P, config: EngineConfig) -> Result<Self> {
        let content = fs::read_to_string(&path)?;
        let mut profile: Profile = serde_json::from_str(&content)?;
        profile.config = config;
        debug!(
            "Loaded profile from {:?}: {} charts, {} records",
            path.as_ref(),
            profile.scores.len(),
            profile.scores.total_records()
        );
        Ok(profile)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(&path, json)?;
        debug!("Saved profile to {:?}", path.as_ref());
        Ok(())
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: EngineConfig) {
        if config.calc_version != self.config.calc_version {
            self.leaderboards.clear();
        }
        self.config = config;
    }

    pub fn scores(&self) -> &ScoreStore {
        &self.scores
    }

    pub fn is_machine(&self) -> bool {
        self.kind == ProfileKind::Machine
    }

    /// Append a finished attempt and update the leaderboards it qualifies for.
    pub fn add_score<L: ChartLibrary + ?Sized>(
        &mut self,
        library: &L,
        chart: ChartKey,
        record: ScoreRecord,
    ) -> RecordRef {
        let reference = self.scores.add_record(chart, record);
        self.leaderboards.on_new_score(&self.scores, library, &reference);
        reference
    }

    pub fn times_played(&self, chart: &ChartKey) -> u32 {
        self.scores.times_played(chart)
    }

    pub fn best_accuracy_at_rate(&self, chart: &ChartKey, rate: f32) -> f32 {
        self.scores.best_accuracy_at_rate(chart, rate)
    }

    /// Recompute and cache the player rating from the current store.
    pub fn calc_player_rating<L: ChartLibrary + ?Sized>(&mut self, library: &L) -> PlayerRating {
        self.rating = compute_ratings(&self.scores, library);
        self.rating
    }

    pub fn rating(&self) -> &PlayerRating {
        &self.rating
    }

    pub fn overall_rating(&self) -> f32 {
        self.rating.overall
    }

    pub fn skillset_rating(&self, skillset: Skillset) -> f32 {
        self.rating.skillsets[skillset]
    }

    /// Rating by raw skillset index; 0 for indices out of range.
    pub fn skillset_rating_at(&self, index: usize) -> f32 {
        Skillset::from_index(index)
            .map(|skillset| self.skillset_rating(skillset))
            .unwrap_or(0.0)
    }

    /// Record holding `rank` (1-based) on the skillset's leaderboard.
    pub fn top_record<L: ChartLibrary + ?Sized>(
        &mut self,
        library: &L,
        skillset: Skillset,
        rank: usize,
    ) -> Option<(&ChartKey, &ScoreRecord)> {
        let reference = self
            .leaderboards
            .rank(&self.scores, library, skillset, rank)?
            .record
            .clone();
        self.scores.record_with_key(&reference)
    }

    /// Contribution of the record at `rank`, or 0 if there is none.
    pub fn top_value<L: ChartLibrary + ?Sized>(
        &mut self,
        library: &L,
        skillset: Skillset,
        rank: usize,
    ) -> f32 {
        self.top_record(library, skillset, rank)
            .map(|(_, record)| record.rated_value(skillset))
            .unwrap_or(0.0)
    }

    pub fn leaderboards(&self) -> &Leaderboards {
        &self.leaderboards
    }

    /// Rebuild every leaderboard at the configured depth.
    pub fn rebuild_leaderboards<L: ChartLibrary + ?Sized>(&mut self, library: &L) -> bool {
        self.leaderboards
            .rebuild_all(&self.scores, library, self.config.top_depth)
    }

    /// Rebuild one skillset's leaderboard at `depth`, capped at the number
    /// of stored records. Returns whether it reached that depth.
    pub fn rebuild_leaderboard<L: ChartLibrary + ?Sized>(
        &mut self,
        library: &L,
        skillset: Skillset,
        depth: usize,
    ) -> bool {
        let depth = depth.min(self.scores.total_records());
        self.leaderboards
            .rebuild(&self.scores, library, skillset, depth)
    }

    pub fn validate_all<L: ChartLibrary + ?Sized>(&mut self, library: &L) -> usize {
        self.leaderboards.clear();
        recalc::validate_all(&mut self.scores, library)
    }

    /// Recalculate contributions against the configured calc version, then
    /// refresh the rating and leaderboards.
    pub fn request_recalculation<L: ChartLibrary + ?Sized>(
        &mut self,
        library: &L,
        only_stale: bool,
    ) -> RecalcSummary {
        let summary = recalc::recalculate(
            &mut self.scores,
            library,
            only_stale,
            self.config.calc_version,
        );
        self.calc_player_rating(library);
        self.rebuild_leaderboards(library);
        info!("Player rating now {:.2}", self.rating.overall);
        summary
    }

    /// Zero stored contributions without recomputing them.
    pub fn reset_ratings<L: ChartLibrary + ?Sized>(&mut self, library: &L, only_old: bool) -> usize {
        let reset = recalc::reset_ratings(
            &mut self.scores,
            library,
            only_old,
            self.config.calc_version,
        );
        self.rating = PlayerRating::default();
        self.leaderboards.clear();
        reset
    }

    /// Merge another profile into this one without touching `other`.
    pub fn merge_from(&mut self, other: &Profile, skip_totals: bool) -> MergeSummary {
        merge(self, other, skip_totals)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::{ChartEntry, ChartTable, SkillsetRatings};
    use chrono::Utc;

    fn library(charts: &[(&ChartKey, f32)]) -> ChartTable {
        charts
            .iter()
            .map(|(key, difficulty)| ChartEntry::new((*key).clone(), SkillsetRatings::splat(*difficulty)))
            .collect()
    }

    #[test]
    fn test_index_variant_out_of_range() {
        let profile = Profile::new(ProfileKind::Local);
        assert_eq!(profile.skillset_rating_at(0), 0.0);
        assert_eq!(profile.skillset_rating_at(99), 0.0);
    }

    #[test]
    fn test_recalculation_updates_rating_and_top() {
        let easy = ChartKey::steps("s", "easy");
        let hard = ChartKey::steps("s", "hard");
        let lib = library(&[(&easy, 10.0), (&hard, 30.0)]);
        let mut profile = Profile::new(ProfileKind::Local);
        profile.add_score(&lib, easy, ScoreRecord::new("e", Utc::now(), 0.93, 1.0));
        profile.add_score(&lib, hard.clone(), ScoreRecord::new("h", Utc::now(), 0.93, 1.0));

        let summary = profile.request_recalculation(&lib, false);
        assert_eq!(summary.recomputed, 2);
        assert!(profile.overall_rating() > 0.0);
        assert_eq!(profile.skillset_rating_at(1), profile.skillset_rating(Skillset::Stream));

        let (chart, record) = profile.top_record(&lib, Skillset::Stream, 1).unwrap();
        assert_eq!(chart, &hard);
        assert_eq!(record.score_key, "h");
        assert!((profile.top_value(&lib, Skillset::Stream, 2) - 10.0).abs() < 1e-4);
        assert_eq!(profile.top_value(&lib, Skillset::Stream, 3), 0.0);
    }

    #[test]
    fn test_top_value_for_unreachable_rank_is_zero() {
        let chart = ChartKey::steps("s", "c");
        let lib = library(&[(&chart, 10.0)]);
        let mut profile = Profile::new(ProfileKind::Local);
        profile.add_score(&lib, chart, ScoreRecord::new("a", Utc::now(), 0.93, 1.0));
        profile.request_recalculation(&lib, false);

        assert_eq!(profile.top_value(&lib, Skillset::Stream, usize::MAX), 0.0);
        assert!(profile.top_record(&lib, Skillset::Stream, 1 << 40).is_none());
        assert!(profile.top_value(&lib, Skillset::Stream, 1) > 0.0);
    }

    #[test]
    fn test_rebuild_leaderboard_caps_depth() {
        let easy = ChartKey::steps("s", "easy");
        let hard = ChartKey::steps("s", "hard");
        let lib = library(&[(&easy, 10.0), (&hard, 30.0)]);
        let mut profile = Profile::new(ProfileKind::Local);
        profile.add_score(&lib, easy, ScoreRecord::new("e", Utc::now(), 0.93, 1.0));
        profile.add_score(&lib, hard, ScoreRecord::new("h", Utc::now(), 0.93, 1.0));
        profile.request_recalculation(&lib, false);

        assert!(profile.rebuild_leaderboard(&lib, Skillset::Stamina, 1000));
        let board = profile.leaderboards().board(Skillset::Stamina);
        assert_eq!(board.depth(), 2);
        assert_eq!(board.len(), 2);
        assert!((profile.top_value(&lib, Skillset::Stamina, 2) - 10.0).abs() < 1e-4);
    }

    #[test]
    fn test_add_score_counts_play() {
        let chart = ChartKey::steps("s", "c");
        let lib = library(&[(&chart, 10.0)]);
        let mut profile = Profile::new(ProfileKind::Local);
        profile.add_score(&lib, chart.clone(), ScoreRecord::new("a", Utc::now(), 0.8, 1.0));
        profile.add_score(&lib, chart.clone(), ScoreRecord::new("b", Utc::now(), 0.9, 1.0));
        profile.add_score(&lib, chart.clone(), ScoreRecord::new("c", Utc::now(), 0.95, 1.5));

        assert_eq!(profile.times_played(&chart), 3);
        assert_eq!(profile.best_accuracy_at_rate(&chart, 1.0), 0.9);
        assert_eq!(profile.best_accuracy_at_rate(&chart, 2.0), 0.0);
    }

    #[test]
    fn test_reset_zeroes_rating() {
        let chart = ChartKey::steps("s", "c");
        let lib = library(&[(&chart, 10.0)]);
        let mut profile = Profile::new(ProfileKind::Local);
        profile.add_score(&lib, chart, ScoreRecord::new("a", Utc::now(), 0.93, 1.0));
        profile.request_recalculation(&lib, false);
        assert!(profile.overall_rating() > 0.0);

        assert_eq!(profile.reset_ratings(&lib, false), 1);
        assert_eq!(profile.overall_rating(), 0.0);
        assert!(profile.leaderboards().board(Skillset::Stream).is_empty());
    }

    #[test]
    fn test_snapshot_file_roundtrip() {
        let chart = ChartKey::steps("s", "c");
        let lib = library(&[(&chart, 10.0)]);
        let mut profile = Profile::new(ProfileKind::Machine);
        profile.display_name = "cab".to_string();
        profile.add_score(&lib, chart, ScoreRecord::new("a", Utc::now(), 0.93, 1.0));
        profile.request_recalculation(&lib, false);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profile.json");
        profile.save(&path).unwrap();

        let loaded = Profile::load(&path, EngineConfig::default()).unwrap();
        assert_eq!(loaded.kind, ProfileKind::Machine);
        assert_eq!(loaded.display_name, "cab");
        assert_eq!(loaded.scores(), profile.scores());
        assert_eq!(loaded.overall_rating(), profile.overall_rating());
        assert!(loaded.leaderboards().board(Skillset::Stream).is_empty());
    }
}
