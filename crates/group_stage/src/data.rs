//! Group definitions as supplied by the tournament data file

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::{Result, SimError};

/// A team as listed in the input data
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamDescriptor {
    #[serde(rename = "Team")]
    pub name: String,
    #[serde(rename = "ISOCode")]
    pub code: String,
    #[serde(rename = "FIBARanking")]
    pub ranking: u32,
}

/// Group identifier to ordered team list. Groups iterate in key order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroupDefinitions {
    pub groups: BTreeMap<String, Vec<TeamDescriptor>>,
}

impl GroupDefinitions {
    pub fn from_json_str(contents: &str) -> Result<Self> {
        Ok(serde_json::from_str(contents)?)
    }

    /// Load definitions from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| SimError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&contents)
    }

    pub fn team_count(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }
}
