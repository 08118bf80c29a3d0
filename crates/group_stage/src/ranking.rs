//! Cross-group ranking of group finishers

use serde::{Deserialize, Serialize};

use crate::standings::{compare_entries, GroupStandingEntry, GroupStandings};

/// Number of teams that advance past the group phase
pub const ADVANCING_COUNT: usize = 8;

/// Group positions pooled into the cross-group ranking (1st, 2nd, 3rd)
pub const BUCKET_DEPTH: usize = 3;

/// A group finisher placed in the overall ranking
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RankedTeam {
    /// Overall position, 1-based
    pub rank: usize,
    pub group: String,
    /// Group table row; its `rank` is the group position
    pub standing: GroupStandingEntry,
}

/// Outcome of the group phase across all groups
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Qualification {
    pub advancing: Vec<RankedTeam>,
    /// Ranked finishers beyond the cutoff, empty when there are none
    pub eliminated: Vec<RankedTeam>,
}

/// Ranks group finishers position by position and applies the cutoff
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrossGroupRanker {
    pub advancing_count: usize,
    pub bucket_depth: usize,
}

impl Default for CrossGroupRanker {
    fn default() -> Self {
        Self {
            advancing_count: ADVANCING_COUNT,
            bucket_depth: BUCKET_DEPTH,
        }
    }
}

impl CrossGroupRanker {
    pub fn new(advancing_count: usize, bucket_depth: usize) -> Self {
        Self {
            advancing_count,
            bucket_depth,
        }
    }

    /// Pool the k-th placed team of every group into bucket k, sort each
    /// bucket by points, difference and scored, then rank the buckets in
    /// order. Groups too small for a position simply skip that bucket.
    pub fn rank_top_teams(&self, standings: &[GroupStandings]) -> Qualification {
        let mut overall: Vec<RankedTeam> = Vec::new();

        for position in 1..=self.bucket_depth {
            let mut bucket: Vec<(&str, &GroupStandingEntry)> = standings
                .iter()
                .filter_map(|g| g.at(position).map(|entry| (g.group.as_str(), entry)))
                .collect();
            bucket.sort_by(|a, b| compare_entries(a.1, b.1));

            overall.extend(bucket.into_iter().map(|(group, entry)| RankedTeam {
                rank: 0,
                group: group.to_string(),
                standing: entry.clone(),
            }));
        }

        for (idx, team) in overall.iter_mut().enumerate() {
            team.rank = idx + 1;
        }

        let cutoff = self.advancing_count.min(overall.len());
        let eliminated = overall.split_off(cutoff);
        Qualification {
            advancing: overall,
            eliminated,
        }
    }
}

/// Rank with the default cutoff of eight advancing teams
pub fn rank_top_teams(standings: &[GroupStandings]) -> Qualification {
    CrossGroupRanker::default().rank_top_teams(standings)
}

#[cfg(test)]
#[path = "ranking_tests.rs"]
mod ranking_tests;
