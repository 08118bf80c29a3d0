//! Group standings derived from match records, with head-to-head tie-breaks

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use tracing::warn;

use crate::group::Group;
use crate::team::{MatchRecord, Outcome, Team};

/// One row of a group table
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GroupStandingEntry {
    /// 1-based position in the group
    pub rank: usize,
    pub name: String,
    pub code: String,
    pub wins: u32,
    pub losses: u32,
    pub points: u32,
    pub scored: u32,
    pub conceded: u32,
    pub difference: i32,
}

/// Final table of one group
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GroupStandings {
    pub group: String,
    pub entries: Vec<GroupStandingEntry>,
}

impl GroupStandings {
    pub fn resolve(group: &Group) -> Self {
        Self {
            group: group.name.clone(),
            entries: resolve_standings(&group.teams),
        }
    }

    /// Entry finishing at `position` (1-based), if the group is that large
    pub fn at(&self, position: usize) -> Option<&GroupStandingEntry> {
        position.checked_sub(1).and_then(|idx| self.entries.get(idx))
    }
}

/// Ordering by points, then point difference, then points scored, all descending
pub fn compare_entries(a: &GroupStandingEntry, b: &GroupStandingEntry) -> Ordering {
    b.points
        .cmp(&a.points)
        .then_with(|| b.difference.cmp(&a.difference))
        .then_with(|| b.scored.cmp(&a.scored))
}

struct Row<'a> {
    entry: GroupStandingEntry,
    matches: &'a [MatchRecord],
}

impl<'a> Row<'a> {
    fn from_team(team: &'a Team) -> Self {
        let scored = team.matches.iter().map(|m| m.scored).sum();
        let conceded = team.matches.iter().map(|m| m.conceded).sum();
        let difference = team.matches.iter().map(|m| m.difference).sum();
        Self {
            entry: GroupStandingEntry {
                rank: 0,
                name: team.name.clone(),
                code: team.code.clone(),
                wins: team.wins,
                losses: team.losses,
                points: team.points,
                scored,
                conceded,
                difference,
            },
            matches: &team.matches,
        }
    }

    fn head_to_head(&self, opponent: &str) -> Option<&MatchRecord> {
        self.matches.iter().find(|m| m.opponent == opponent)
    }

    fn wins_against(&self, opponents: &[&str]) -> usize {
        self.matches
            .iter()
            .filter(|m| m.outcome == Outcome::Win && opponents.contains(&m.opponent.as_str()))
            .count()
    }
}

/// Rank the teams of one group.
///
/// Scored, conceded and difference are summed from the match records; points,
/// wins and losses come from the team counters. The input is not modified, so
/// calling this twice on the same teams gives the same table.
///
/// Ties on points are broken by a single forward pass over adjacent pairs:
/// the higher team drops below the lower one if it lost their head-to-head
/// match. Without a head-to-head record the pair is ordered by wins against
/// the other teams on the same points. One pass is enough for two-way ties
/// but a three-way cycle (A beat B, B beat C, C beat A) is not guaranteed to
/// come out in a stable order.
pub fn resolve_standings(teams: &[Team]) -> Vec<GroupStandingEntry> {
    let mut rows: Vec<Row<'_>> = teams.iter().map(Row::from_team).collect();
    rows.sort_by(|a, b| compare_entries(&a.entry, &b.entry));
    break_ties(&mut rows);

    rows.into_iter()
        .enumerate()
        .map(|(idx, row)| GroupStandingEntry {
            rank: idx + 1,
            ..row.entry
        })
        .collect()
}

fn break_ties(rows: &mut [Row<'_>]) {
    for i in 0..rows.len().saturating_sub(1) {
        let (upper, lower) = (&rows[i], &rows[i + 1]);
        if upper.entry.points != lower.entry.points {
            continue;
        }

        let swap = match upper.head_to_head(&lower.entry.code) {
            Some(record) => record.outcome == Outcome::Loss,
            None => {
                warn!(
                    upper = %upper.entry.name,
                    lower = %lower.entry.name,
                    "no head-to-head record, comparing wins within the tied teams"
                );
                let tied: Vec<&str> = rows
                    .iter()
                    .filter(|r| r.entry.points == upper.entry.points)
                    .map(|r| r.entry.code.as_str())
                    .collect();
                lower.wins_against(&tied) > upper.wins_against(&tied)
            }
        };

        if swap {
            rows.swap(i, i + 1);
        }
    }
}

#[cfg(test)]
#[path = "standings_tests.rs"]
mod standings_tests;
