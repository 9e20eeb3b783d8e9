//! Configuration and rating constants.
//!
//! This module contains:
//! - `EngineConfig` - runtime settings (calc version, leaderboard depth)
//! - Constants for the aggregate search, rating damping, rate buckets
//!   and leaderboard defaults

mod engine;

pub use engine::*;

/// Coarse-to-fine search parameters for skill rating aggregation.
pub mod aggregate {
    /// Step size of the first search round.
    pub const INITIAL_STEP: f64 = 10.24;

    /// Number of bracket-and-refine rounds. This is the termination contract.
    pub const ROUNDS: u32 = 11;

    /// Contribution offset subtracted from each sample's power term.
    pub const LOAD_OFFSET: f64 = 1.5;

    /// Samples beyond this magnitude are clamped before searching.
    pub const SAMPLE_LIMIT: f32 = 10_000.0;
}

/// Player rating post-processing.
pub mod rating {
    /// Multiplier applied to every aggregated skillset rating.
    pub const DAMPING: f32 = 0.95;

    /// Lower bound of a skillset rating.
    pub const MIN: f32 = 0.0;

    /// Upper bound of a skillset rating.
    pub const MAX: f32 = 100.0;
}

/// Playback rate discretization.
///
/// Rates 0.05x..=3.00x map to buckets 1..=60 (0.05x resolution).
pub mod rate {
    /// Number of buckets per 1.0x of playback rate.
    pub const BUCKETS_PER_RATE: f32 = 20.0;

    /// Total number of buckets.
    pub const NUM_BUCKETS: usize = 60;
}

/// Leaderboard defaults.
pub mod leaderboard {
    /// Depth used when the config does not specify one.
    pub const DEFAULT_DEPTH: usize = 25;
}
