//! Per-skillset top-K leaderboards.
//!
//! - `Leaderboard` - ordered best records for one skillset
//! - `rebuild_top` - full rebuild with per-chart rate-bucket dedup
//! - `Leaderboards` - one board per skillset with incremental updates

mod board;
mod rebuild;
mod tracker;

pub use board::*;
pub use rebuild::*;
pub use tracker::*;
