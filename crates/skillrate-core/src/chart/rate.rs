use serde::{Deserialize, Serialize};

use crate::config::rate::{BUCKETS_PER_RATE, NUM_BUCKETS};
use crate::error::{Error, Result};

/// Playback rate discretized to 0.05x steps.
///
/// Bucket `n` covers rate `n * 0.05`; valid buckets are `1..=60`. Two attempts
/// on one chart in the same bucket count as the same kind of attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RateBucket(u8);

impl RateBucket {
    pub const MIN: Self = Self(1);
    pub const MAX: Self = Self(NUM_BUCKETS as u8);

    /// Round to the nearest bucket, clamping rates outside 0.05x..=3.00x
    /// into the outermost buckets.
    pub fn from_rate(rate: f32) -> Self {
        let scaled = (rate * BUCKETS_PER_RATE).round();
        // NaN casts to 0 and lands in the lowest bucket
        let bucket = (scaled as i64).clamp(Self::MIN.0 as i64, Self::MAX.0 as i64);
        Self(bucket as u8)
    }

    /// Strict conversion for user-supplied rates.
    pub fn try_from_rate(rate: f32) -> Result<Self> {
        if !rate.is_finite() {
            return Err(Error::InvalidRate(rate));
        }
        let scaled = (rate * BUCKETS_PER_RATE).round();
        if scaled < Self::MIN.0 as f32 || scaled > Self::MAX.0 as f32 {
            return Err(Error::InvalidRate(rate));
        }
        Ok(Self(scaled as u8))
    }

    pub fn number(self) -> u8 {
        self.0
    }

    /// Zero-based slot in a table sized `NUM_BUCKETS`.
    pub fn slot(self) -> usize {
        (self.0 - 1) as usize
    }

    pub fn rate(self) -> f32 {
        self.0 as f32 / BUCKETS_PER_RATE
    }
}

impl std::fmt::Display for RateBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}x", self.rate())
    }
}
