//! Error type shared by every fallible operation in the crate

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    /// External ranking outside `1..=worst_rank`
    #[error("external rank {rank} is outside the valid range 1..={worst_rank}")]
    InvalidRank { rank: u32, worst_rank: u32 },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Team names are the unique key across all groups
    #[error("team '{0}' is listed more than once")]
    DuplicateTeam(String),

    /// Short codes key head-to-head lookups within a group
    #[error("code '{code}' is used by more than one team in group {group}")]
    DuplicateCode { group: String, code: String },

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse group definitions: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to parse config: {0}")]
    Toml(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, SimError>;
