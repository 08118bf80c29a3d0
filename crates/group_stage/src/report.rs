//! Group phase report: text rendering and JSON export

use serde::{Deserialize, Serialize};

use crate::context::{RatingEntry, SimulationContext};
use crate::group::{GroupResults, MatchResult};
use crate::ranking::{Qualification, RankedTeam};
use crate::standings::{GroupStandingEntry, GroupStandings};

/// Everything produced by one simulated group phase
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TournamentReport {
    /// Seed the run was made with, if any
    pub seed: Option<u64>,
    pub results: Vec<GroupResults>,
    pub standings: Vec<GroupStandings>,
    pub qualification: Qualification,
    pub ratings: Vec<RatingEntry>,
}

impl TournamentReport {
    /// Collect the report from a context whose group phase has been played
    pub fn new(seed: Option<u64>, results: Vec<GroupResults>, context: &SimulationContext) -> Self {
        Self {
            seed,
            results,
            standings: context.standings(),
            qualification: context.qualification(),
            ratings: context.leaderboard(),
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Generate a text report
    pub fn generate_report(&self) -> String {
        let mut report = String::new();

        report.push_str("=== Group Phase Results ===\n\n");
        for group in &self.results {
            report.push_str(&format!("Group {}:\n", group.group));
            for m in &group.matches {
                report.push_str(&format!("    {}\n", format_match(m)));
            }
            report.push('\n');
        }

        report.push_str("=== Final Group Standings ===\n\n");
        for table in &self.standings {
            report.push_str(&format!(
                "Group {} (Name - wins/losses/points/scored/conceded/difference):\n",
                table.group
            ));
            for entry in &table.entries {
                report.push_str(&format!(
                    "    {}. {:<14} {}\n",
                    entry.rank,
                    entry.name,
                    format_line(entry)
                ));
            }
            report.push('\n');
        }

        report.push_str("=== Advancing to the Knockout Stage ===\n");
        for team in &self.qualification.advancing {
            report.push_str(&format_ranked(team));
        }

        report.push_str("\n=== Not Advancing ===\n");
        if self.qualification.eliminated.is_empty() {
            report.push_str("(none)\n");
        }
        for team in &self.qualification.eliminated {
            report.push_str(&format_ranked(team));
        }

        report.push_str("\n=== Final Ratings ===\n");
        report.push_str(&format!("{:<20} {:>8} {:>6}\n", "Team", "Elo", "Games"));
        report.push_str(&"-".repeat(36));
        report.push('\n');
        for entry in &self.ratings {
            report.push_str(&format!(
                "{:<20} {:>8.1} {:>6}\n",
                entry.name, entry.rating, entry.games
            ));
        }

        report
    }

    /// Print report to stdout
    pub fn print_report(&self) {
        println!("{}", self.generate_report());
    }
}

fn format_match(m: &MatchResult) -> String {
    let line = format!("{} - {} ({}:{})", m.team_a, m.team_b, m.score_a, m.score_b);
    match &m.forfeited_by {
        Some(code) => format!("{line} [forfeit by {code}]"),
        None => line,
    }
}

fn format_line(entry: &GroupStandingEntry) -> String {
    format!(
        "{} / {} / {} / {} / {} / {:+}",
        entry.wins, entry.losses, entry.points, entry.scored, entry.conceded, entry.difference
    )
}

fn format_ranked(team: &RankedTeam) -> String {
    format!(
        "{}. {:<20} {}\n",
        team.rank,
        team.standing.name,
        format_line(&team.standing)
    )
}
