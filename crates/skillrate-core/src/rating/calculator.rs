use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::{debug, warn};

use crate::chart::{ChartLibrary, NUM_SKILLSETS, Skillset, SkillsetRatings};
use crate::config::rating::{DAMPING, MAX, MIN};
use crate::rating::aggregate;
use crate::score::ScoreStore;

/// A player's rating: one value per skillset plus their mean.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PlayerRating {
    pub overall: f32,
    pub skillsets: SkillsetRatings,
}

impl PlayerRating {
    pub fn from_skillsets(skillsets: SkillsetRatings) -> Self {
        Self {
            overall: skillsets.mean(),
            skillsets,
        }
    }
}

/// Compute per-skillset ratings from every valid record on an eligible chart.
///
/// Records failing either check are skipped silently, and non-finite
/// contributions are dropped before pooling.
pub fn compute_ratings<L: ChartLibrary + ?Sized>(store: &ScoreStore, library: &L) -> PlayerRating {
    let mut pools: [Vec<f32>; NUM_SKILLSETS] = std::array::from_fn(|_| Vec::new());
    let mut dropped = 0usize;
    let mut skipped_charts = 0usize;

    for (chart, scores) in store.iter() {
        if !library.is_rating_eligible(chart) {
            skipped_charts += 1;
            continue;
        }
        for record in scores.records.iter().filter(|r| r.valid) {
            for (skillset, value) in record.skillsets.iter() {
                if value.is_finite() {
                    pools[skillset.index()].push(value);
                } else {
                    dropped += 1;
                }
            }
        }
    }

    if dropped > 0 {
        warn!("Ignored {} non-finite skillset contributions", dropped);
    }

    let mut skillsets = SkillsetRatings::ZERO;
    for skillset in Skillset::iter() {
        let rating = aggregate(&pools[skillset.index()]) * DAMPING;
        skillsets[skillset] = rating.clamp(MIN, MAX);
    }

    let rating = PlayerRating::from_skillsets(skillsets);
    debug!(
        "Computed player rating {:.2} from {} samples per skillset ({} charts skipped)",
        rating.overall,
        pools[0].len(),
        skipped_charts
    );
    rating
}
