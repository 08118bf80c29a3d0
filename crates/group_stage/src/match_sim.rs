//! Rating-driven match simulator

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::rating::{expected_score, update_rating, K_FACTOR};
use crate::rng::RandomSource;
use crate::team::{MatchRecord, Outcome, Team};

/// Default probability that a team forfeits a given match
pub const FORFEIT_PROBABILITY: f64 = 1e-4;

/// Score awarded to the non-forfeiting side
pub const FORFEIT_SCORE: u32 = 50;

/// No simulated team scores less than this in a played match
pub const SCORE_FLOOR: f64 = 50.0;

/// Expectation above which a favourite receives a scoring boost
pub const BOOST_THRESHOLD: f64 = 0.6;

/// Overtime adds between 1 and this many points to one side
pub const MAX_OVERTIME_POINTS: u32 = 10;

/// Points for a win, a loss, and a forfeit loss
pub const WIN_POINTS: u32 = 2;
pub const LOSS_POINTS: u32 = 1;
pub const FORFEIT_POINTS: u32 = 0;

/// Configuration for simulated matches
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Elo K-factor
    pub k_factor: f64,
    /// Chance for each side to forfeit, checked independently
    pub forfeit_probability: f64,
    /// Winner's score when the match is forfeited
    pub forfeit_score: u32,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            k_factor: K_FACTOR,
            forfeit_probability: FORFEIT_PROBABILITY,
            forfeit_score: FORFEIT_SCORE,
        }
    }
}

/// Which team of a pairing
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Side {
    A,
    B,
}

/// Final score of a simulated match
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchScore {
    pub score_a: u32,
    pub score_b: u32,
    /// Side that forfeited, if the match was not played
    pub forfeit: Option<Side>,
}

impl MatchScore {
    pub fn winner(&self) -> Side {
        match self.forfeit {
            Some(Side::A) => return Side::B,
            Some(Side::B) => return Side::A,
            None => {}
        }
        if self.score_a > self.score_b {
            Side::A
        } else {
            Side::B
        }
    }
}

/// Simulates matches between two teams, updating both in place
#[derive(Debug, Clone, Default)]
pub struct MatchSimulator {
    config: MatchConfig,
}

impl MatchSimulator {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Simulate one match between `team_a` and `team_b`.
    ///
    /// Both teams get their counters updated and one new match record each.
    /// Ratings change only when the match is actually played.
    pub fn simulate<R>(&self, team_a: &mut Team, team_b: &mut Team, rng: &mut R) -> MatchScore
    where
        R: RandomSource + ?Sized,
    {
        let forfeit_roll_a = rng.next_f64();
        let forfeit_roll_b = rng.next_f64();

        // Side A is checked first when both triggers fire
        let forfeit = if forfeit_roll_a < self.config.forfeit_probability {
            Some(Side::A)
        } else if forfeit_roll_b < self.config.forfeit_probability {
            Some(Side::B)
        } else {
            None
        };

        let score = match forfeit {
            Some(side) => self.forfeit(team_a, team_b, side),
            None => self.play(team_a, team_b, rng),
        };

        debug!(
            team_a = %team_a.code,
            team_b = %team_b.code,
            score_a = score.score_a,
            score_b = score.score_b,
            forfeit = ?score.forfeit,
            "match simulated"
        );

        score
    }

    fn forfeit(&self, team_a: &mut Team, team_b: &mut Team, side: Side) -> MatchScore {
        let awarded = self.config.forfeit_score;
        let (score_a, score_b) = match side {
            Side::A => (0, awarded),
            Side::B => (awarded, 0),
        };
        let outcome_a = match side {
            Side::A => Outcome::Loss,
            Side::B => Outcome::Win,
        };

        let forfeiting = match side {
            Side::A => &team_a.name,
            Side::B => &team_b.name,
        };
        warn!(team = %forfeiting, "team forfeited its match");

        let points = |outcome: Outcome| match outcome {
            Outcome::Win => WIN_POINTS,
            Outcome::Loss => FORFEIT_POINTS,
        };
        let record_a = MatchRecord::new(&team_b.code, score_a, score_b, outcome_a, true);
        let record_b = MatchRecord::new(&team_a.code, score_b, score_a, outcome_a.flip(), true);
        team_a.record(record_a, points(outcome_a));
        team_b.record(record_b, points(outcome_a.flip()));

        MatchScore {
            score_a,
            score_b,
            forfeit: Some(side),
        }
    }

    fn play<R>(&self, team_a: &mut Team, team_b: &mut Team, rng: &mut R) -> MatchScore
    where
        R: RandomSource + ?Sized,
    {
        let prob_a = expected_score(team_a.rating, team_b.rating);
        let prob_b = 1.0 - prob_a;

        let boost_a = favourite_boost(prob_a, rng);
        let boost_b = favourite_boost(prob_b, rng);

        let mut score_a = points_scored(prob_a, boost_a, rng);
        let mut score_b = points_scored(prob_b, boost_b, rng);

        if score_a == score_b {
            let to_a = rng.next_f64() > 0.5;
            let overtime = rng.next_int(1, MAX_OVERTIME_POINTS);
            if to_a {
                score_a += overtime;
            } else {
                score_b += overtime;
            }
        }

        let outcome_a = if score_a > score_b {
            Outcome::Win
        } else {
            Outcome::Loss
        };
        let points = |outcome: Outcome| match outcome {
            Outcome::Win => WIN_POINTS,
            Outcome::Loss => LOSS_POINTS,
        };

        let record_a = MatchRecord::new(&team_b.code, score_a, score_b, outcome_a, false);
        let record_b = MatchRecord::new(&team_a.code, score_b, score_a, outcome_a.flip(), false);
        team_a.record(record_a, points(outcome_a));
        team_b.record(record_b, points(outcome_a.flip()));

        let k = self.config.k_factor;
        team_a.rating = update_rating(team_a.rating, prob_a, outcome_a.score(), k);
        team_b.rating = update_rating(team_b.rating, prob_b, outcome_a.flip().score(), k);

        MatchScore {
            score_a,
            score_b,
            forfeit: None,
        }
    }
}

/// Extra scoring for a clear favourite, proportional to its expectation
fn favourite_boost<R>(prob: f64, rng: &mut R) -> f64
where
    R: RandomSource + ?Sized,
{
    if prob > BOOST_THRESHOLD {
        rng.next_f64() * 20.0 * prob
    } else {
        0.0
    }
}

fn points_scored<R>(prob: f64, boost: f64, rng: &mut R) -> u32
where
    R: RandomSource + ?Sized,
{
    let base = 50.0 + 30.0 * (prob - 0.5);
    let raw = rng.next_f64() * 60.0 + boost + base;
    raw.max(SCORE_FLOOR).round() as u32
}

#[cfg(test)]
#[path = "match_sim_tests.rs"]
mod match_sim_tests;
