//! Chart-related types and the chart library seam.
//!
//! This module contains types for identifying charts and describing their skill axes:
//! - `ChartKey`, `ChartKind` - stable chart identity (song/steps or course/trail)
//! - `Skillset`, `SkillsetRatings` - skill axes and per-axis values
//! - `RateBucket` - playback rate discretized to 0.05x steps
//! - `ChartLibrary` - eligibility and contribution lookups supplied by the host
//! - `ChartTable` - in-memory `ChartLibrary`

mod key;
mod library;
mod rate;
mod skillset;
mod table;

pub use key::*;
pub use library::*;
pub use rate::*;
pub use skillset::*;
pub use table::*;
