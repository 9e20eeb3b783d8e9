//! Score-related types and data structures.
//!
//! This module contains types for representing a player's score history:
//! - `Grade` - letter grades (F, D, C, B, A, AA, AAA, AAAA)
//! - `ScoreRecord` - one completed attempt with its skillset contributions
//! - `ScoreStore`, `ChartScores`, `RecordRef` - per-chart attempt storage

mod grade;
mod record;
mod store;

pub use grade::*;
pub use record::*;
pub use store::*;
