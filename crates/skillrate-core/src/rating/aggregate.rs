//! Saturating aggregation of skill samples into a single rating.
//!
//! Each sample contributes `max(0, 2 / erfc(0.1 * (sample - R)) - 1.5)` to the
//! load at candidate rating `R`. A rating is supported while the load exceeds
//! `2^(0.1 * R)`, so raising the result takes many samples near or above it
//! rather than one outlier.

use tracing::warn;

use crate::config::aggregate::{INITIAL_STEP, LOAD_OFFSET, ROUNDS, SAMPLE_LIMIT};

/// Outcome of the coarse-to-fine search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AggregateSearch {
    pub rating: f32,
    /// Refinement rounds performed; `ROUNDS` for any non-empty input
    pub rounds: u32,
    /// Samples dropped for being non-finite
    pub rejected: usize,
}

/// Aggregate rating of `samples`. Empty input yields 0.
pub fn aggregate(samples: &[f32]) -> f32 {
    aggregate_search(samples).rating
}

/// Run the bracket-and-refine search and report how it went.
///
/// Each round steps the rating up until the load no longer exceeds the
/// threshold, then backs up by the current step and halves it. The last
/// round's rating is returned as is.
pub fn aggregate_search(samples: &[f32]) -> AggregateSearch {
    let mut rejected = 0;
    let pool: Vec<f64> = samples
        .iter()
        .filter(|v| {
            let finite = v.is_finite();
            if !finite {
                rejected += 1;
            }
            finite
        })
        .map(|&v| v.clamp(-SAMPLE_LIMIT, SAMPLE_LIMIT) as f64)
        .collect();

    if rejected > 0 {
        warn!("Dropped {} non-finite skill samples", rejected);
    }

    if pool.is_empty() {
        return AggregateSearch {
            rating: 0.0,
            rounds: 0,
            rejected,
        };
    }

    let mut rating = 0.0_f64;
    let mut step = INITIAL_STEP;
    let mut rounds = 0;

    loop {
        rounds += 1;
        loop {
            rating += step;
            if 2f64.powf(0.1 * rating) >= load(&pool, rating) {
                break;
            }
        }
        if rounds == ROUNDS {
            break;
        }
        rating -= step;
        step /= 2.0;
    }

    AggregateSearch {
        rating: rating as f32,
        rounds,
        rejected,
    }
}

fn load(pool: &[f64], rating: f64) -> f64 {
    pool.iter()
        .map(|&x| (2.0 / libm::erfc(0.1 * (x - rating)) - LOAD_OFFSET).max(0.0))
        .sum()
}
