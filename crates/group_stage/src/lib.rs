//! Group stage simulator
//!
//! This crate provides infrastructure for:
//! - Deriving Elo-style skill ratings from an external ranking
//! - Simulating round-robin group matches with a rating-driven scoring model
//! - Resolving group standings with head-to-head tie-breaks
//! - Ranking group finishers across groups to pick the advancing teams
//!
//! # Usage
//!
//! ```bash
//! # Simulate the bundled groups with a fixed seed
//! cargo run -p group_stage -- --groups data/groups.json --seed 42
//!
//! # Same run, emitted as JSON
//! cargo run -p group_stage -- --groups data/groups.json --seed 42 --json
//! ```

mod config;
mod context;
mod data;
mod error;
mod group;
mod match_sim;
mod ranking;
mod rating;
mod report;
mod rng;
mod standings;
mod team;

pub use config::*;
pub use context::*;
pub use data::*;
pub use error::*;
pub use group::*;
pub use match_sim::*;
pub use ranking::*;
pub use rating::*;
pub use report::*;
pub use rng::*;
pub use standings::*;
pub use team::*;
