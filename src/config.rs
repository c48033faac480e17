use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::analyzers::types::ConditionTable;
use crate::analyzers::weights::{
    DEFAULT_PRECIPITATION_THRESHOLDS, DEFAULT_WEIGHTS, DEFAULT_WIND_THRESHOLDS, table_from,
};

/// Weight and threshold tables owned by one aggregator.
///
/// Stored on disk as JSON; any table may be omitted:
/// ```json
/// {
///   "weights": { "晴": 0.4 },
///   "precipitation_thresholds": { "暴雨": 60.0 },
///   "wind_thresholds": { "扬沙": 15.0 }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    #[serde(default)]
    pub weights: ConditionTable,
    #[serde(default)]
    pub precipitation_thresholds: ConditionTable,
    #[serde(default)]
    pub wind_thresholds: ConditionTable,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            weights: table_from(DEFAULT_WEIGHTS),
            precipitation_thresholds: table_from(DEFAULT_PRECIPITATION_THRESHOLDS),
            wind_thresholds: table_from(DEFAULT_WIND_THRESHOLDS),
        }
    }
}

impl AnalyzerConfig {
    /// Config with all three tables empty.
    pub fn empty() -> Self {
        Self {
            weights: ConditionTable::new(),
            precipitation_thresholds: ConditionTable::new(),
            wind_thresholds: ConditionTable::new(),
        }
    }

    /// Loads a config from a JSON file at `path`. Missing tables are empty.
    pub fn from_json_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {path}"))?;
        Self::from_json_str(&content).with_context(|| format!("failed to parse config file {path}"))
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }
}
