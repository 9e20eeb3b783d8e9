use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::chart::{RateBucket, Skillset, SkillsetRatings};
use crate::score::Grade;

/// One completed attempt on a chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreRecord {
    /// Attempt identity; unique across a player's history
    pub score_key: String,
    pub played_at: DateTime<Utc>,
    pub grade: Grade,
    /// Normalized accuracy (0.0..=1.0)
    pub accuracy: f32,
    /// Playback rate multiplier
    pub rate: f32,
    /// Rating contribution per skillset
    #[serde(default)]
    pub skillsets: SkillsetRatings,
    /// Counts toward ratings
    #[serde(default)]
    pub valid: bool,
    /// Formula revision that produced `skillsets`
    #[serde(default)]
    pub calc_version: u32,
}

impl ScoreRecord {
    /// A passed, valid attempt with no contributions computed yet.
    pub fn new(
        score_key: impl Into<String>,
        played_at: DateTime<Utc>,
        accuracy: f32,
        rate: f32,
    ) -> Self {
        Self {
            score_key: score_key.into(),
            played_at,
            grade: Grade::from_accuracy(accuracy),
            accuracy,
            rate,
            skillsets: SkillsetRatings::ZERO,
            valid: true,
            calc_version: 0,
        }
    }

    pub fn with_skillsets(mut self, skillsets: SkillsetRatings, calc_version: u32) -> Self {
        self.stamp(skillsets, calc_version);
        self
    }

    pub fn with_grade(mut self, grade: Grade) -> Self {
        self.grade = grade;
        self
    }

    pub fn attempt_id(&self) -> &str {
        &self.score_key
    }

    pub fn rate_bucket(&self) -> RateBucket {
        RateBucket::from_rate(self.rate)
    }

    /// Stored contribution, zero unless the record is valid.
    pub fn rated_value(&self, skillset: Skillset) -> f32 {
        if self.valid {
            self.skillsets[skillset]
        } else {
            0.0
        }
    }

    /// Failed grade or no accuracy recorded
    pub fn is_failing(&self) -> bool {
        self.grade.is_failing() || self.accuracy <= 0.0
    }

    pub fn is_current(&self, calc_version: u32) -> bool {
        self.calc_version == calc_version
    }

    pub fn clear_skillsets(&mut self) {
        self.skillsets.clear();
    }

    pub fn stamp(&mut self, skillsets: SkillsetRatings, calc_version: u32) {
        self.skillsets = skillsets;
        self.calc_version = calc_version;
    }
}
