//! Tuning presets for the iterative algorithms.
//!
//! Both structs deserialize with missing fields filled from `Default`, so a
//! partial JSON/TOML document is enough to override a single knob.

use serde::{Deserialize, Serialize};

/// Stopping rules for greedy modularity clustering.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClusteringConfig {
    /// A pass must raise modularity by more than this to trigger another pass.
    pub min_modularity_gain: f64,
    /// Hard cap on local-move passes.
    pub max_passes: usize,
}

impl Default for ClusteringConfig {
    fn default() -> Self {
        Self {
            min_modularity_gain: 0.03,
            max_passes: 100,
        }
    }
}

impl ClusteringConfig {
    /// Keep moving vertices until the gain is numerically negligible.
    pub fn precise() -> Self {
        Self {
            min_modularity_gain: 1e-9,
            max_passes: 1_000,
        }
    }
}

/// Convergence rules for LeaderRank score diffusion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LeaderRankConfig {
    /// Stop once the mean absolute per-vertex change drops below this.
    pub error_threshold: f64,
    pub max_iterations: usize,
}

impl Default for LeaderRankConfig {
    fn default() -> Self {
        Self {
            error_threshold: 2e-5,
            max_iterations: 10_000,
        }
    }
}

impl LeaderRankConfig {
    pub fn precise() -> Self {
        Self {
            error_threshold: 1e-10,
            max_iterations: 100_000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        assert_eq!(ClusteringConfig::default().min_modularity_gain, 0.03);
        assert_eq!(LeaderRankConfig::default().error_threshold, 2e-5);
        assert!(ClusteringConfig::precise().min_modularity_gain < 1e-6);
        assert!(LeaderRankConfig::precise().error_threshold < 1e-6);
    }

    #[test]
    fn test_partial_deserialization() {
        let config: ClusteringConfig = serde_json::from_str(r#"{"max_passes": 3}"#).unwrap();
        assert_eq!(config.max_passes, 3);
        assert_eq!(config.min_modularity_gain, 0.03);

        let config: LeaderRankConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, LeaderRankConfig::default());
    }
}
