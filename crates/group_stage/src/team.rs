//! Team state accumulated over the group phase

use serde::{Deserialize, Serialize};

/// Result of a single match from one side's perspective
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Outcome {
    Win,
    Loss,
}

impl Outcome {
    /// Actual score for Elo purposes (1 for a win, 0 for a loss)
    pub fn score(self) -> f64 {
        match self {
            Outcome::Win => 1.0,
            Outcome::Loss => 0.0,
        }
    }

    pub fn flip(self) -> Outcome {
        match self {
            Outcome::Win => Outcome::Loss,
            Outcome::Loss => Outcome::Win,
        }
    }
}

/// One team's record of a played match
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchRecord {
    /// Short code of the opponent
    pub opponent: String,
    pub scored: u32,
    pub conceded: u32,
    /// `scored - conceded`
    pub difference: i32,
    pub outcome: Outcome,
    /// Match was decided by forfeit
    pub forfeit: bool,
}

impl MatchRecord {
    pub fn new(opponent: &str, scored: u32, conceded: u32, outcome: Outcome, forfeit: bool) -> Self {
        Self {
            opponent: opponent.to_string(),
            scored,
            conceded,
            difference: scored as i32 - conceded as i32,
            outcome,
            forfeit,
        }
    }
}

/// A tournament team with its rating and cumulative group statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    pub name: String,
    /// Three-letter code used in match logs
    pub code: String,
    /// Position in the external ranking
    pub ranking: u32,
    /// Current skill rating
    pub rating: f64,
    pub points: u32,
    pub wins: u32,
    pub losses: u32,
    pub scored: u32,
    pub conceded: u32,
    pub difference: i32,
    /// Match history in the order the matches were played
    pub matches: Vec<MatchRecord>,
}

impl Team {
    pub fn new(name: &str, code: &str, ranking: u32, rating: f64) -> Self {
        Self {
            name: name.to_string(),
            code: code.to_string(),
            ranking,
            rating,
            points: 0,
            wins: 0,
            losses: 0,
            scored: 0,
            conceded: 0,
            difference: 0,
            matches: Vec::new(),
        }
    }

    pub fn games_played(&self) -> usize {
        self.matches.len()
    }

    /// First recorded match against the team with code `opponent`
    pub fn head_to_head(&self, opponent: &str) -> Option<&MatchRecord> {
        self.matches.iter().find(|m| m.opponent == opponent)
    }

    /// Apply a finished match to the cumulative counters and the history.
    ///
    /// `points` is what the match awards this side (2, 1 or 0).
    pub fn record(&mut self, record: MatchRecord, points: u32) {
        self.scored += record.scored;
        self.conceded += record.conceded;
        self.difference += record.difference;
        self.points += points;
        match record.outcome {
            Outcome::Win => self.wins += 1,
            Outcome::Loss => self.losses += 1,
        }
        self.matches.push(record);
    }
}
