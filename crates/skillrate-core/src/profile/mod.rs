//! Player profiles.
//!
//! - `Profile` - score store, totals and ratings behind one facade
//! - `ProfileTotals`, `StepTotals` - lifetime counters and per-day calories
//! - `Screenshot` - saved evaluation screenshots
//! - `merge` - fold one profile into another

mod merge;
mod player;
mod screenshot;
mod totals;

pub use merge::*;
pub use player::*;
pub use screenshot::Screenshot;
pub use totals::*;
