use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Distance cutoff above which clusters are never merged
pub const DEFAULT_DISTANCE_THRESHOLD: f64 = 0.6;

/// How the distance between two clusters is derived from member distances
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Linkage {
    /// Mean over all cross-cluster pairs
    #[default]
    Average,
    /// Farthest cross-cluster pair
    Complete,
    /// Nearest cross-cluster pair
    Single,
}

impl Linkage {
    /// Lance-Williams update: distance from cluster `k` to the union of `i`
    /// and `j`, given `d(k, i)`, `d(k, j)` and the sizes of `i` and `j`.
    pub fn merged_distance(self, d_ki: f64, d_kj: f64, size_i: usize, size_j: usize) -> f64 {
        match self {
            Linkage::Average => {
                (size_i as f64 * d_ki + size_j as f64 * d_kj) / (size_i + size_j) as f64
            }
            Linkage::Complete => d_ki.max(d_kj),
            Linkage::Single => d_ki.min(d_kj),
        }
    }
}

impl fmt::Display for Linkage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Linkage::Average => "average",
            Linkage::Complete => "complete",
            Linkage::Single => "single",
        };
        f.write_str(name)
    }
}

impl FromStr for Linkage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "average" => Ok(Linkage::Average),
            "complete" => Ok(Linkage::Complete),
            "single" => Ok(Linkage::Single),
            other => Err(format!("unknown linkage: {}", other)),
        }
    }
}

impl TryFrom<String> for Linkage {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Flat clustering of a batch
#[derive(Debug, Clone, PartialEq)]
pub struct ClusterResult {
    /// Cluster label per input index. Labels are numbered by the first
    /// input index that carries them.
    pub labels: Vec<usize>,
    /// Number of distinct labels
    pub cluster_count: usize,
    /// Merges performed before the cutoff stopped the procedure
    pub merges: usize,
}
