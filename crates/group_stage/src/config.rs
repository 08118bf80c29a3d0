//! Simulation configuration loaded from TOML

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Result, SimError};
use crate::match_sim::{MatchConfig, FORFEIT_PROBABILITY, FORFEIT_SCORE};
use crate::ranking::{CrossGroupRanker, ADVANCING_COUNT, BUCKET_DEPTH};
use crate::rating::{RatingModel, K_FACTOR, MAX_RATING, MIN_RATING, WORST_RANK};

/// Every tunable of a group phase simulation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Rating of the worst ranked team
    pub min_rating: f64,
    /// Rating of the best ranked team
    pub max_rating: f64,
    /// Worst position in the external ranking
    pub worst_rank: u32,
    pub k_factor: f64,
    pub forfeit_probability: f64,
    pub forfeit_score: u32,
    /// Teams that advance from the cross-group ranking
    pub advancing_count: usize,
    /// Group positions pooled into the cross-group ranking
    pub bucket_depth: usize,
    /// RNG seed (None = seed from entropy)
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            min_rating: MIN_RATING,
            max_rating: MAX_RATING,
            worst_rank: WORST_RANK,
            k_factor: K_FACTOR,
            forfeit_probability: FORFEIT_PROBABILITY,
            forfeit_score: FORFEIT_SCORE,
            advancing_count: ADVANCING_COUNT,
            bucket_depth: BUCKET_DEPTH,
            seed: None,
        }
    }
}

impl SimulationConfig {
    /// Load and validate a config from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| SimError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: Self = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.min_rating.is_finite() || !self.max_rating.is_finite() {
            return Err(SimError::InvalidConfig(
                "rating bounds must be finite".to_string(),
            ));
        }
        if self.min_rating > self.max_rating {
            return Err(SimError::InvalidConfig(format!(
                "min_rating {} exceeds max_rating {}",
                self.min_rating, self.max_rating
            )));
        }
        if self.worst_rank == 0 {
            return Err(SimError::InvalidConfig(
                "worst_rank must be at least 1".to_string(),
            ));
        }
        if !self.k_factor.is_finite() || self.k_factor < 0.0 {
            return Err(SimError::InvalidConfig(format!(
                "k_factor must be a non-negative number, got {}",
                self.k_factor
            )));
        }
        if !(0.0..=1.0).contains(&self.forfeit_probability) {
            return Err(SimError::InvalidConfig(format!(
                "forfeit_probability must be within [0, 1], got {}",
                self.forfeit_probability
            )));
        }
        if self.forfeit_score == 0 {
            return Err(SimError::InvalidConfig(
                "forfeit_score must be at least 1".to_string(),
            ));
        }
        if self.bucket_depth == 0 {
            return Err(SimError::InvalidConfig(
                "bucket_depth must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn rating_model(&self) -> RatingModel {
        RatingModel::new(self.min_rating, self.max_rating, self.worst_rank)
    }

    pub fn match_config(&self) -> MatchConfig {
        MatchConfig {
            k_factor: self.k_factor,
            forfeit_probability: self.forfeit_probability,
            forfeit_score: self.forfeit_score,
        }
    }

    pub fn ranker(&self) -> CrossGroupRanker {
        CrossGroupRanker::new(self.advancing_count, self.bucket_depth)
    }
}
