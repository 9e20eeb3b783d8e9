//! Chart library abstraction.
//!
//! The rating engine never owns chart data. Hosts implement `ChartLibrary`
//! over whatever holds their loaded songs and pass it into each operation
//! that needs eligibility or contribution data.

use serde::{Deserialize, Serialize};

use crate::chart::{ChartKey, SkillsetRatings};
use crate::score::ScoreRecord;

/// Availability of a chart's authoritative note/timing data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ChartStatus {
    /// Chart data is not loaded.
    #[default]
    Missing,
    /// Loaded but flagged unsuitable for rating (e.g. corrupt timing).
    Unsuitable,
    /// Loaded and trusted for rating.
    Eligible,
}

impl ChartStatus {
    pub fn is_loaded(&self) -> bool {
        !matches!(self, Self::Missing)
    }

    pub fn is_eligible(&self) -> bool {
        matches!(self, Self::Eligible)
    }
}

/// Lookups into the host's chart collection.
pub trait ChartLibrary {
    /// Current status of the chart's data.
    fn status(&self, chart: &ChartKey) -> ChartStatus;

    /// Whether the chart's records count toward ratings and leaderboards.
    fn is_rating_eligible(&self, chart: &ChartKey) -> bool {
        self.status(chart).is_eligible()
    }

    /// Per-skillset contribution of one attempt, derived from the chart's
    /// note data and the record's accuracy and rate. `None` if the chart
    /// data is unavailable.
    fn compute_contribution(&self, chart: &ChartKey, record: &ScoreRecord)
    -> Option<SkillsetRatings>;
}

impl<L: ChartLibrary + ?Sized> ChartLibrary for &L {
    fn status(&self, chart: &ChartKey) -> ChartStatus {
        (**self).status(chart)
    }

    fn is_rating_eligible(&self, chart: &ChartKey) -> bool {
        (**self).is_rating_eligible(chart)
    }

    fn compute_contribution(
        &self,
        chart: &ChartKey,
        record: &ScoreRecord,
    ) -> Option<SkillsetRatings> {
        (**self).compute_contribution(chart, record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Library where every chart is present but unsuitable.
    struct Unsuitable;

    impl ChartLibrary for Unsuitable {
        fn status(&self, _chart: &ChartKey) -> ChartStatus {
            ChartStatus::Unsuitable
        }

        fn compute_contribution(
            &self,
            _chart: &ChartKey,
            _record: &ScoreRecord,
        ) -> Option<SkillsetRatings> {
            None
        }
    }

    #[test]
    fn test_status_predicates() {
        assert!(!ChartStatus::Missing.is_loaded());
        assert!(ChartStatus::Unsuitable.is_loaded());
        assert!(!ChartStatus::Unsuitable.is_eligible());
        assert!(ChartStatus::Eligible.is_eligible());
    }

    #[test]
    fn test_default_eligibility_follows_status() {
        let chart = ChartKey::steps("song", "chart");
        assert!(!Unsuitable.is_rating_eligible(&chart));
        assert!(!(&Unsuitable).is_rating_eligible(&chart));
    }
}
