//! Owner of all teams for the lifetime of one simulation

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::info;

use crate::config::SimulationConfig;
use crate::data::GroupDefinitions;
use crate::error::{Result, SimError};
use crate::group::{Group, GroupResults, GroupSimulator};
use crate::match_sim::MatchSimulator;
use crate::ranking::{CrossGroupRanker, Qualification};
use crate::rng::RandomSource;
use crate::standings::GroupStandings;
use crate::team::Team;

/// A team's rating after the group phase
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RatingEntry {
    pub name: String,
    pub code: String,
    pub rating: f64,
    pub games: usize,
}

/// Holds every group and its teams, and runs the phase over them
#[derive(Debug, Clone)]
pub struct SimulationContext {
    groups: Vec<Group>,
    simulator: GroupSimulator,
    ranker: CrossGroupRanker,
}

impl SimulationContext {
    /// Build teams with their initial ratings from the group definitions
    pub fn from_definitions(defs: &GroupDefinitions, config: &SimulationConfig) -> Result<Self> {
        config.validate()?;
        let model = config.rating_model();

        let mut seen = HashSet::new();
        let mut groups = Vec::with_capacity(defs.groups.len());
        for (name, descriptors) in &defs.groups {
            let mut codes = HashSet::new();
            let mut teams = Vec::with_capacity(descriptors.len());
            for desc in descriptors {
                if !seen.insert(desc.name.as_str()) {
                    return Err(SimError::DuplicateTeam(desc.name.clone()));
                }
                if !codes.insert(desc.code.as_str()) {
                    return Err(SimError::DuplicateCode {
                        group: name.clone(),
                        code: desc.code.clone(),
                    });
                }
                let rating = model.initial_rating(desc.ranking)?;
                teams.push(Team::new(&desc.name, &desc.code, desc.ranking, rating));
            }
            groups.push(Group::new(name, teams));
        }

        Ok(Self::new(groups, config))
    }

    pub fn new(groups: Vec<Group>, config: &SimulationConfig) -> Self {
        Self {
            groups,
            simulator: GroupSimulator::new(MatchSimulator::new(config.match_config())),
            ranker: config.ranker(),
        }
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// Look up a team by name in any group
    pub fn team(&self, name: &str) -> Option<&Team> {
        self.groups
            .iter()
            .flat_map(|g| g.teams.iter())
            .find(|t| t.name == name)
    }

    /// Play every group's round robin, in group order
    pub fn simulate_group_phase<R>(&mut self, rng: &mut R) -> Vec<GroupResults>
    where
        R: RandomSource + ?Sized,
    {
        let mut results = Vec::with_capacity(self.groups.len());
        for group in &mut self.groups {
            results.push(self.simulator.simulate(group, rng));
        }

        let played: usize = results.iter().map(|r| r.matches.len()).sum();
        info!(groups = results.len(), matches = played, "group phase complete");
        results
    }

    /// Current table of every group
    pub fn standings(&self) -> Vec<GroupStandings> {
        self.groups.iter().map(GroupStandings::resolve).collect()
    }

    /// Advancing and eliminated teams from the current tables
    pub fn qualification(&self) -> Qualification {
        self.ranker.rank_top_teams(&self.standings())
    }

    /// All teams sorted by current rating, highest first
    pub fn leaderboard(&self) -> Vec<RatingEntry> {
        let mut entries: Vec<RatingEntry> = self
            .groups
            .iter()
            .flat_map(|g| g.teams.iter())
            .map(|t| RatingEntry {
                name: t.name.clone(),
                code: t.code.clone(),
                rating: t.rating,
                games: t.games_played(),
            })
            .collect();
        entries.sort_by(|a, b| {
            b.rating
                .partial_cmp(&a.rating)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        entries
    }
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod context_tests;
