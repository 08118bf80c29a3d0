//! Elo rating model: initial ratings from an external ranking and post-match updates

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{Result, SimError};

/// Rating assigned to the best ranked team
pub const MAX_RATING: f64 = 1800.0;

/// Rating assigned to the worst ranked team
pub const MIN_RATING: f64 = 1200.0;

/// Worst position in the external ranking
pub const WORST_RANK: u32 = 160;

/// K-factor for Elo updates (higher = more volatile)
pub const K_FACTOR: f64 = 32.0;

/// Maps external ranking positions onto the rating scale
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatingModel {
    pub min_rating: f64,
    pub max_rating: f64,
    pub worst_rank: u32,
}

impl Default for RatingModel {
    fn default() -> Self {
        Self {
            min_rating: MIN_RATING,
            max_rating: MAX_RATING,
            worst_rank: WORST_RANK,
        }
    }
}

impl RatingModel {
    pub fn new(min_rating: f64, max_rating: f64, worst_rank: u32) -> Self {
        Self {
            min_rating,
            max_rating,
            worst_rank,
        }
    }

    /// Initial rating for a team at `external_rank` (1 = best)
    pub fn initial_rating(&self, external_rank: u32) -> Result<f64> {
        initial_rating(
            external_rank,
            self.min_rating,
            self.max_rating,
            self.worst_rank,
        )
    }
}

/// Linear interpolation from `worst_rank -> min_rating` up to `1 -> max_rating`.
///
/// Ranks outside `1..=worst_rank` are rejected rather than clamped.
pub fn initial_rating(
    external_rank: u32,
    min_rating: f64,
    max_rating: f64,
    worst_rank: u32,
) -> Result<f64> {
    if external_rank == 0 || external_rank > worst_rank {
        return Err(SimError::InvalidRank {
            rank: external_rank,
            worst_rank,
        });
    }
    if worst_rank == 1 {
        return Ok(max_rating);
    }

    let normalized = f64::from(worst_rank - external_rank) / f64::from(worst_rank - 1);
    Ok(min_rating + normalized * (max_rating - min_rating))
}

/// Expected score (win probability) for a player rated `rating_a` against `rating_b`
pub fn expected_score(rating_a: f64, rating_b: f64) -> f64 {
    1.0 / (1.0 + 10.0_f64.powf((rating_b - rating_a) / 400.0))
}

/// Standard Elo update. `actual` is 1.0 for a win and 0.0 for a loss.
///
/// A non-finite result leaves the rating unchanged.
pub fn update_rating(rating: f64, expected: f64, actual: f64, k: f64) -> f64 {
    let updated = rating + k * (actual - expected);
    if updated.is_finite() {
        updated
    } else {
        warn!(rating, expected, actual, k, "non-finite rating update ignored");
        rating
    }
}

#[cfg(test)]
#[path = "rating_tests.rs"]
mod rating_tests;
