//! Data types used by the condition aggregation pipeline.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Label-keyed table of weights or thresholds.
pub type ConditionTable = BTreeMap<String, f64>;

/// A single hourly weather observation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Observation time, kept as the provider supplied it.
    pub time: String,
    /// Temperature in °C.
    pub temperature: f64,
    /// Condition label, e.g. "晴" or "暴雨".
    pub condition: String,
    /// Relative humidity in percent.
    pub humidity: f64,
    /// Wind speed in m/s.
    pub wind_speed: f64,
    /// Hourly precipitation in mm.
    pub precipitation: f64,
}

impl Observation {
    pub fn new(
        time: impl Into<String>,
        temperature: f64,
        condition: impl Into<String>,
        humidity: f64,
        wind_speed: f64,
        precipitation: f64,
    ) -> Self {
        Self {
            time: time.into(),
            temperature,
            condition: condition.into(),
            humidity,
            wind_speed,
            precipitation,
        }
    }
}

/// Batch-wide statistics computed in a single pass over the observations.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BatchStats {
    pub average_temperature: f64,
    pub total_precipitation: f64,
    pub max_precipitation: f64,
    pub precipitation_hours: usize,
    pub average_wind_speed: f64,
    pub max_wind_speed: f64,
}

/// Aggregated day summary for one batch of observations.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    pub dominant_condition: String,
    /// Non-dominant labels reaching 20% of the total weighted score,
    /// by descending score then label.
    pub other_conditions: Vec<String>,
    pub average_temperature: f64,
    pub total_precipitation: f64,
    pub max_precipitation: f64,
    pub precipitation_hours: usize,
    pub average_wind_speed: f64,
    pub max_wind_speed: f64,
    /// Weighted score of every label that occurred in the batch.
    pub condition_weights: ConditionTable,
    pub description: String,
}
