use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum::{EnumCount, EnumIter, FromRepr, IntoStaticStr};

use crate::score::Grade;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumCount, EnumIter, FromRepr,
    IntoStaticStr,
)]
#[repr(u8)]
pub enum PlayMode {
    Regular = 0,
    Nonstop = 1,
    Oni = 2,
    Endless = 3,
    Battle = 4,
    Rave = 5,
}

impl PlayMode {
    pub fn from_u8(value: u8) -> Option<Self> {
        Self::from_repr(value)
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    EnumCount,
    EnumIter,
    FromRepr,
    IntoStaticStr,
)]
#[repr(u8)]
pub enum Difficulty {
    Beginner = 0,
    Easy = 1,
    Medium = 2,
    Hard = 3,
    Challenge = 4,
    Edit = 5,
}

impl Difficulty {
    pub fn from_u8(value: u8) -> Option<Self> {
        Self::from_repr(value)
    }

    pub fn short_name(&self) -> &'static str {
        self.into()
    }
}

pub const NUM_PLAY_MODES: usize = PlayMode::COUNT;
pub const NUM_DIFFICULTIES: usize = Difficulty::COUNT;
pub const NUM_GRADES: usize = Grade::COUNT;

/// Step counts from one finished stage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct StepTotals {
    pub taps_and_holds: u32,
    pub jumps: u32,
    pub holds: u32,
    pub rolls: u32,
    pub mines: u32,
    pub hands: u32,
    pub lifts: u32,
    pub calories: f32,
}

/// Lifetime counters kept on a profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileTotals {
    pub sessions: u32,
    pub session_seconds: u64,
    pub gameplay_seconds: u64,
    pub calories_burned: f32,
    pub dance_points: u64,
    pub extra_stages_passed: u32,
    pub extra_stages_failed: u32,
    pub toasties: u32,
    pub taps_and_holds: u64,
    pub jumps: u64,
    pub holds: u64,
    pub rolls: u64,
    pub mines: u64,
    pub hands: u64,
    pub lifts: u64,
    pub songs_played_by_play_mode: [u32; NUM_PLAY_MODES],
    pub stages_passed_by_play_mode: [u32; NUM_PLAY_MODES],
    pub songs_played_by_difficulty: [u32; NUM_DIFFICULTIES],
    /// Songs played keyed by chart meter
    pub songs_played_by_meter: BTreeMap<u32, u32>,
    pub total_songs_played: u32,
    pub stages_passed_by_grade: [u32; NUM_GRADES],
    /// Calories burned per calendar day
    pub day_calories: BTreeMap<NaiveDate, f32>,
    /// Calories come from a heart-rate entry instead of step counts
    pub ignore_step_count_calories: bool,
}

impl ProfileTotals {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one stage's step counts. Calories are credited to `day` unless
    /// step-count calories are ignored for this profile.
    pub fn add_step_totals(&mut self, steps: &StepTotals, day: NaiveDate) {
        self.taps_and_holds += u64::from(steps.taps_and_holds);
        self.jumps += u64::from(steps.jumps);
        self.holds += u64::from(steps.holds);
        self.rolls += u64::from(steps.rolls);
        self.mines += u64::from(steps.mines);
        self.hands += u64::from(steps.hands);
        self.lifts += u64::from(steps.lifts);

        if !self.ignore_step_count_calories {
            self.add_calories_to_daily_total(day, steps.calories);
        }
    }

    pub fn add_calories_to_daily_total(&mut self, day: NaiveDate, calories: f32) {
        self.calories_burned += calories;
        *self.day_calories.entry(day).or_default() += calories;
    }

    pub fn calories_on(&self, day: NaiveDate) -> f32 {
        self.day_calories.get(&day).copied().unwrap_or(0.0)
    }

    /// Record a played song.
    pub fn add_song_played(&mut self, mode: PlayMode, difficulty: Difficulty, meter: u32) {
        self.songs_played_by_play_mode[mode as usize] += 1;
        self.songs_played_by_difficulty[difficulty as usize] += 1;
        *self.songs_played_by_meter.entry(meter).or_default() += 1;
        self.total_songs_played += 1;
    }

    pub fn add_stage_passed(&mut self, mode: PlayMode, grade: Grade) {
        self.stages_passed_by_play_mode[mode as usize] += 1;
        self.stages_passed_by_grade[grade as usize] += 1;
    }

    pub fn songs_played(&self, mode: PlayMode) -> u32 {
        self.songs_played_by_play_mode
            .get(mode as usize)
            .copied()
            .unwrap_or(0)
    }

    pub fn stages_passed_with(&self, grade: Grade) -> u32 {
        self.stages_passed_by_grade
            .get(grade as usize)
            .copied()
            .unwrap_or(0)
    }

    /// Sum every counter from `other` into this one. Per-day calories are
    /// added on shared days and inserted otherwise.
    pub fn merge_from(&mut self, other: &ProfileTotals) {
        self.sessions = self.sessions.saturating_add(other.sessions);
        self.session_seconds = self.session_seconds.saturating_add(other.session_seconds);
        self.gameplay_seconds = self.gameplay_seconds.saturating_add(other.gameplay_seconds);
        self.calories_burned += other.calories_burned;
        self.dance_points = self.dance_points.saturating_add(other.dance_points);
        self.extra_stages_passed = self.extra_stages_passed.saturating_add(other.extra_stages_passed);
        self.extra_stages_failed = self.extra_stages_failed.saturating_add(other.extra_stages_failed);
        self.toasties = self.toasties.saturating_add(other.toasties);
        self.taps_and_holds = self.taps_and_holds.saturating_add(other.taps_and_holds);
        self.jumps = self.jumps.saturating_add(other.jumps);
        self.holds = self.holds.saturating_add(other.holds);
        self.rolls = self.rolls.saturating_add(other.rolls);
        self.mines = self.mines.saturating_add(other.mines);
        self.hands = self.hands.saturating_add(other.hands);
        self.lifts = self.lifts.saturating_add(other.lifts);

        add_counts(&mut self.songs_played_by_play_mode, &other.songs_played_by_play_mode);
        add_counts(&mut self.stages_passed_by_play_mode, &other.stages_passed_by_play_mode);
        add_counts(&mut self.songs_played_by_difficulty, &other.songs_played_by_difficulty);
        for (meter, count) in &other.songs_played_by_meter {
            let slot = self.songs_played_by_meter.entry(*meter).or_default();
            *slot = slot.saturating_add(*count);
        }
        self.total_songs_played = self
            .total_songs_played
            .saturating_add(other.total_songs_played);
        add_counts(&mut self.stages_passed_by_grade, &other.stages_passed_by_grade);

        for (day, calories) in &other.day_calories {
            *self.day_calories.entry(*day).or_default() += calories;
        }
    }
}

fn add_counts<const N: usize>(into: &mut [u32; N], from: &[u32; N]) {
    for (slot, value) in into.iter_mut().zip(from) {
        *slot = slot.saturating_add(*value);
    }
}
