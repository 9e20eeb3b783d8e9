//! Player rating computation.
//!
//! - `aggregate` - saturating coarse-to-fine aggregation of skill samples
//! - `compute_ratings` - per-skillset and overall player ratings from a score store

mod aggregate;
mod calculator;

pub use aggregate::*;
pub use calculator::*;
