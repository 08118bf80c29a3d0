//! Round-robin scheduling within a group

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::match_sim::{MatchScore, MatchSimulator, Side};
use crate::rng::RandomSource;
use crate::team::Team;

/// A named group of teams. Team order is the fixed pairing order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Group {
    pub name: String,
    pub teams: Vec<Team>,
}

impl Group {
    pub fn new(name: &str, teams: Vec<Team>) -> Self {
        Self {
            name: name.to_string(),
            teams,
        }
    }
}

/// A single played fixture, identified by team codes
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchResult {
    pub team_a: String,
    pub team_b: String,
    pub score_a: u32,
    pub score_b: u32,
    /// Code of the team that forfeited, if any
    pub forfeited_by: Option<String>,
}

/// All fixtures of one group in the order they were played
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupResults {
    pub group: String,
    pub matches: Vec<MatchResult>,
}

/// Plays every pairing of a group exactly once
#[derive(Debug, Clone, Default)]
pub struct GroupSimulator {
    simulator: MatchSimulator,
}

impl GroupSimulator {
    pub fn new(simulator: MatchSimulator) -> Self {
        Self { simulator }
    }

    /// Simulate the full round robin over `teams`.
    ///
    /// Pairs `(i, j)` with `i < j` are played in lexicographic index order.
    /// Fewer than two teams means no matches.
    pub fn simulate_group<R>(&self, teams: &mut [Team], rng: &mut R) -> Vec<MatchResult>
    where
        R: RandomSource + ?Sized,
    {
        let n = teams.len();
        if n < 2 {
            debug!(teams = n, "group too small, no matches to play");
            return Vec::new();
        }

        let mut results = Vec::with_capacity(n * (n - 1) / 2);
        for i in 0..n {
            for j in (i + 1)..n {
                let (team_a, team_b) = pair_mut(teams, i, j);
                let score = self.simulator.simulate(team_a, team_b, rng);
                results.push(match_result(team_a, team_b, score));
            }
        }
        results
    }

    /// Simulate a named group and label the results with its name
    pub fn simulate<R>(&self, group: &mut Group, rng: &mut R) -> GroupResults
    where
        R: RandomSource + ?Sized,
    {
        let matches = self.simulate_group(&mut group.teams, rng);
        info!(group = %group.name, matches = matches.len(), "group simulated");
        GroupResults {
            group: group.name.clone(),
            matches,
        }
    }
}

/// Mutable references to two distinct teams, `i < j`
fn pair_mut(teams: &mut [Team], i: usize, j: usize) -> (&mut Team, &mut Team) {
    debug_assert!(i < j);
    let (left, right) = teams.split_at_mut(j);
    (&mut left[i], &mut right[0])
}

fn match_result(team_a: &Team, team_b: &Team, score: MatchScore) -> MatchResult {
    MatchResult {
        team_a: team_a.code.clone(),
        team_b: team_b.code.clone(),
        score_a: score.score_a,
        score_b: score.score_b,
        forfeited_by: score.forfeit.map(|side| match side {
            Side::A => team_a.code.clone(),
            Side::B => team_b.code.clone(),
        }),
    }
}

#[cfg(test)]
#[path = "group_tests.rs"]
mod group_tests;
