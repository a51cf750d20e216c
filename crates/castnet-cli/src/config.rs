//! Analysis configuration loaded from an optional TOML file.
//!
//! Every field has a default so partial files work:
//!
//! ```toml
//! [centrality]
//! seed = 7
//!
//! [ranking]
//! top_n = 5
//! ```

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use castnet_metrics::metrics::{CentralityConfig, ClosenessSampling};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    #[serde(default)]
    pub centrality: CentralitySection,
    #[serde(default)]
    pub ranking: RankingSection,
    #[serde(default)]
    pub mst: MstSection,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CentralitySection {
    #[serde(default = "default_sample_threshold")]
    pub sample_threshold: usize,
    #[serde(default = "default_sample_size")]
    pub sample_size: usize,
    /// RNG seed for sampling. Absent means entropy-seeded.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for CentralitySection {
    fn default() -> Self {
        Self {
            sample_threshold: default_sample_threshold(),
            sample_size: default_sample_size(),
            seed: None,
        }
    }
}

impl CentralitySection {
    #[must_use]
    pub const fn betweenness(&self) -> CentralityConfig {
        CentralityConfig {
            sample_threshold: self.sample_threshold,
            sample_size: self.sample_size,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankingSection {
    #[serde(default = "default_top_n")]
    pub top_n: usize,
    #[serde(default = "default_closeness_max_nodes")]
    pub closeness_max_nodes: usize,
}

impl Default for RankingSection {
    fn default() -> Self {
        Self {
            top_n: default_top_n(),
            closeness_max_nodes: default_closeness_max_nodes(),
        }
    }
}

impl RankingSection {
    #[must_use]
    pub const fn closeness(&self) -> ClosenessSampling {
        ClosenessSampling {
            max_nodes: self.closeness_max_nodes,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MstSection {
    /// Start vertex. Absent means the first vertex of the largest weak
    /// component of the actor graph.
    #[serde(default)]
    pub start: Option<String>,
}

/// Command-line values that take precedence over the file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub seed: Option<u64>,
    pub top: Option<usize>,
    pub mst_start: Option<String>,
}

impl AnalysisConfig {
    /// Apply command-line overrides on top of file values.
    #[must_use]
    pub fn with_overrides(mut self, overrides: Overrides) -> Self {
        if let Some(seed) = overrides.seed {
            self.centrality.seed = Some(seed);
        }
        if let Some(top) = overrides.top {
            self.ranking.top_n = top;
        }
        if let Some(start) = overrides.mst_start {
            self.mst.start = Some(start);
        }
        self
    }
}

/// Load the configuration at `path`, or defaults when no path is given.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not valid TOML.
pub fn load_config(path: Option<&Path>) -> Result<AnalysisConfig> {
    let Some(path) = path else {
        return Ok(AnalysisConfig::default());
    };

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    toml::from_str::<AnalysisConfig>(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))
}

const fn default_sample_threshold() -> usize {
    500
}

const fn default_sample_size() -> usize {
    500
}

const fn default_top_n() -> usize {
    10
}

const fn default_closeness_max_nodes() -> usize {
    200
}
