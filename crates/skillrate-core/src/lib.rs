pub mod chart;
pub mod config;
pub mod error;
pub mod leaderboard;
pub mod profile;
pub mod rating;
pub mod recalc;
pub mod score;

pub use chart::{
    ChartEntry, ChartKey, ChartKind, ChartLibrary, ChartStatus, ChartTable, NUM_SKILLSETS,
    RateBucket, Skillset, SkillsetRatings,
};
pub use config::EngineConfig;
pub use error::{Error, Result};
pub use leaderboard::{Leaderboard, LeaderboardEntry, Leaderboards, TopRebuild, rebuild_top};
pub use profile::{
    Difficulty, MergeSummary, PlayMode, Profile, ProfileKind, ProfileTotals, Screenshot, StepTotals,
};
pub use rating::{PlayerRating, aggregate, compute_ratings};
pub use recalc::{RecalcSummary, recalculate, reset_ratings, validate_all};
pub use score::{ChartScores, Grade, RecordRef, ScoreRecord, ScoreStore};
