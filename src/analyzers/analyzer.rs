use std::collections::BTreeMap;

use tracing::{debug, info, warn};

use crate::analyzers::aggregate::{batch_stats, resolve_dominance, weighted_scores};
use crate::analyzers::describe::describe;
use crate::analyzers::types::{AnalysisResult, ConditionTable, Observation};
use crate::analyzers::validate::validate_batch;
use crate::analyzers::weights::adjusted_weights;
use crate::config::AnalyzerConfig;
use crate::error::AnalyzerError;

/// Aggregates a validated batch of hourly observations into a day summary.
///
/// The aggregator owns its batch and its tables. Tables change only through
/// the `set_*` methods, which take `&mut self`, so no analysis can observe a
/// half-applied update. Share one instance across threads behind a `Mutex`.
#[derive(Debug, Clone)]
pub struct ConditionAggregator {
    observations: Vec<Observation>,
    config: AnalyzerConfig,
}

impl ConditionAggregator {
    /// Builds an aggregator with the built-in tables.
    pub fn new(observations: Vec<Observation>) -> Result<Self, AnalyzerError> {
        Self::with_config(observations, AnalyzerConfig::default())
    }

    /// Builds an aggregator that starts from `config` instead of the defaults.
    pub fn with_config(
        observations: Vec<Observation>,
        config: AnalyzerConfig,
    ) -> Result<Self, AnalyzerError> {
        validate_batch(&observations)?;
        debug!(observations = observations.len(), "Observation batch validated");
        Ok(Self {
            observations,
            config,
        })
    }

    /// Like [`Self::with_config`], but also rejects an absent batch.
    pub fn from_batch(
        batch: Option<Vec<Observation>>,
        config: AnalyzerConfig,
    ) -> Result<Self, AnalyzerError> {
        let observations = batch.ok_or_else(|| {
            AnalyzerError::InvalidInput("weather observation batch is missing".to_string())
        })?;
        Self::with_config(observations, config)
    }

    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Merges custom base weights into the weight table.
    pub fn set_weights(&mut self, weights: &BTreeMap<String, f64>) {
        merge_table(&mut self.config.weights, weights, "weight");
    }

    /// Merges custom precipitation thresholds (mm, batch total).
    pub fn set_precipitation_thresholds(&mut self, thresholds: &BTreeMap<String, f64>) {
        merge_table(
            &mut self.config.precipitation_thresholds,
            thresholds,
            "precipitation threshold",
        );
    }

    /// Merges custom wind speed thresholds (m/s, batch maximum).
    pub fn set_wind_thresholds(&mut self, thresholds: &BTreeMap<String, f64>) {
        merge_table(&mut self.config.wind_thresholds, thresholds, "wind threshold");
    }

    /// Merges every table of `overrides` into this aggregator's tables.
    pub fn apply_config(&mut self, overrides: &AnalyzerConfig) {
        self.set_weights(&overrides.weights);
        self.set_precipitation_thresholds(&overrides.precipitation_thresholds);
        self.set_wind_thresholds(&overrides.wind_thresholds);
    }

    /// Computes the day summary for the held batch.
    #[tracing::instrument(skip(self), fields(observations = self.observations.len()))]
    pub fn analyze(&self) -> Result<AnalysisResult, AnalyzerError> {
        if self.observations.is_empty() {
            return Err(AnalyzerError::EmptyData);
        }

        let stats = batch_stats(&self.observations);
        debug!(?stats, "Batch statistics computed");

        let adjusted = adjusted_weights(
            &self.config.weights,
            &self.config.precipitation_thresholds,
            &self.config.wind_thresholds,
            &stats,
        );

        let scores = weighted_scores(&self.observations, &adjusted);
        let (dominant, others) = resolve_dominance(&scores).ok_or(AnalyzerError::EmptyData)?;
        debug!(
            dominant = %dominant,
            others = others.len(),
            labels = scores.len(),
            "Dominant condition resolved"
        );

        let description = describe(&dominant, &others, &stats);

        Ok(AnalysisResult {
            dominant_condition: dominant,
            other_conditions: others,
            average_temperature: stats.average_temperature,
            total_precipitation: stats.total_precipitation,
            max_precipitation: stats.max_precipitation,
            precipitation_hours: stats.precipitation_hours,
            average_wind_speed: stats.average_wind_speed,
            max_wind_speed: stats.max_wind_speed,
            condition_weights: scores,
            description,
        })
    }
}

fn merge_table(table: &mut ConditionTable, updates: &BTreeMap<String, f64>, kind: &str) {
    for (label, value) in updates {
        match table.insert(label.clone(), *value) {
            Some(previous) => warn!(
                label = %label,
                previous,
                value,
                "Overriding existing condition {kind}"
            ),
            None => info!(label = %label, value, "Adding condition {kind}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzers::weights::{PRECIPITATION_BOOST, WIND_BOOST};
    use crate::error::ValidationError;

    fn obs(condition: &str, temperature: f64, wind_speed: f64, precipitation: f64) -> Observation {
        Observation::new(
            "2024-01-01 00:00",
            temperature,
            condition,
            60.0,
            wind_speed,
            precipitation,
        )
    }

    fn map(entries: &[(&str, f64)]) -> BTreeMap<String, f64> {
        entries.iter().map(|(l, v)| (l.to_string(), *v)).collect()
    }

    fn rainstorm_batch() -> Vec<Observation> {
        vec![
            obs("晴", 20.0, 5.0, 0.0),
            obs("暴雨", 18.0, 10.0, 60.0),
            obs("暴雨", 17.0, 12.0, 10.0),
        ]
    }

    #[test]
    fn test_rainstorm_day() {
        let config = AnalyzerConfig {
            weights: map(&[("晴", 0.35), ("暴雨", 0.955)]),
            precipitation_thresholds: map(&[("暴雨", 50.0)]),
            wind_thresholds: BTreeMap::new(),
        };
        let aggregator = ConditionAggregator::with_config(rainstorm_batch(), config).unwrap();
        let result = aggregator.analyze().unwrap();

        assert_eq!(result.dominant_condition, "暴雨");
        assert!(result.other_conditions.is_empty());
        assert!((result.condition_weights["暴雨"] - 2.292).abs() < 1e-9);
        assert!((result.condition_weights["晴"] - 0.35).abs() < 1e-12);
        assert!((result.average_temperature - 18.333_333).abs() < 1e-5);
        assert_eq!(result.total_precipitation, 70.0);
        assert_eq!(result.max_precipitation, 60.0);
        assert_eq!(result.precipitation_hours, 2);
        assert_eq!(result.average_wind_speed, 9.0);
        assert_eq!(result.max_wind_speed, 12.0);
        assert_eq!(
            result.description,
            "Today's weather is dominated by 暴雨, average temperature 18.3°C, \
             total precipitation 70.0 mm, precipitation lasted 2 hours, \
             max hourly precipitation 60.0 mm, average wind speed 9.0 m/s, \
             max wind speed 12.0 m/s."
        );
    }

    #[test]
    fn test_single_observation() {
        let aggregator = ConditionAggregator::new(vec![obs("多云", 12.5, 3.0, 0.4)]).unwrap();
        let result = aggregator.analyze().unwrap();

        assert_eq!(result.dominant_condition, "多云");
        assert!(result.other_conditions.is_empty());
        assert_eq!(result.average_temperature, 12.5);
        assert_eq!(result.average_wind_speed, 3.0);
        assert_eq!(result.max_wind_speed, 3.0);
        assert_eq!(result.total_precipitation, 0.4);
        assert_eq!(result.precipitation_hours, 1);
    }

    #[test]
    fn test_secondary_conditions_reported() {
        let batch = vec![
            obs("阴", 10.0, 0.0, 0.0),
            obs("阴", 10.0, 0.0, 0.0),
            obs("多云", 10.0, 0.0, 0.0),
        ];
        // 阴 1.3, 多云 0.55, total 1.85, threshold 0.37
        let result = ConditionAggregator::new(batch).unwrap().analyze().unwrap();
        assert_eq!(result.dominant_condition, "阴");
        assert_eq!(result.other_conditions, vec!["多云"]);
        assert!(result.description.ends_with(" Also occurred: 多云."));
    }

    #[test]
    fn test_set_weights_new_label() {
        let mut aggregator =
            ConditionAggregator::with_config(vec![obs("A", 0.0, 0.0, 0.0)], AnalyzerConfig::empty())
                .unwrap();
        aggregator.set_weights(&map(&[("A", 0.9)]));

        let result = aggregator.analyze().unwrap();
        assert_eq!(result.condition_weights["A"], 0.9);
    }

    #[test]
    fn test_set_weights_overrides_and_is_idempotent() {
        let mut aggregator = ConditionAggregator::new(rainstorm_batch()).unwrap();
        let custom = map(&[("晴", 0.4), ("新天气", 0.1)]);
        aggregator.set_weights(&custom);
        let once = aggregator.config().clone();
        aggregator.set_weights(&custom);

        assert_eq!(aggregator.config(), &once);
        assert_eq!(once.weights["晴"], 0.4);
        assert_eq!(once.weights["新天气"], 0.1);
        assert_eq!(once.weights["暴雨"], 0.955);
    }

    #[test]
    fn test_threshold_setters_merge() {
        let mut aggregator = ConditionAggregator::new(rainstorm_batch()).unwrap();
        aggregator.set_precipitation_thresholds(&map(&[("暴雨", 60.0), ("冻雨", 5.0)]));
        aggregator.set_wind_thresholds(&map(&[("扬沙", 15.0)]));

        let config = aggregator.config();
        assert_eq!(config.precipitation_thresholds["暴雨"], 60.0);
        assert_eq!(config.precipitation_thresholds["冻雨"], 5.0);
        assert_eq!(config.precipitation_thresholds["大雨"], 25.0);
        assert_eq!(config.wind_thresholds["扬沙"], 15.0);
        assert_eq!(config.wind_thresholds["浮尘"], 5.5);
    }

    #[test]
    fn test_compounded_boost() {
        let config = AnalyzerConfig {
            weights: map(&[("L", 0.5)]),
            precipitation_thresholds: map(&[("L", 5.0)]),
            wind_thresholds: map(&[("L", 8.0)]),
        };
        let batch = vec![obs("L", 10.0, 8.0, 5.0)];
        let result = ConditionAggregator::with_config(batch, config)
            .unwrap()
            .analyze()
            .unwrap();

        let expected = 0.5 * PRECIPITATION_BOOST * WIND_BOOST;
        assert!((result.condition_weights["L"] - expected).abs() < 1e-12);
    }

    #[test]
    fn test_analyze_is_idempotent() {
        let aggregator = ConditionAggregator::new(rainstorm_batch()).unwrap();
        assert_eq!(aggregator.analyze().unwrap(), aggregator.analyze().unwrap());
    }

    #[test]
    fn test_all_unknown_labels_still_resolve() {
        let batch = vec![obs("甲", 0.0, 0.0, 0.0), obs("乙", 0.0, 0.0, 0.0)];
        let result = ConditionAggregator::with_config(batch, AnalyzerConfig::empty())
            .unwrap()
            .analyze()
            .unwrap();
        assert_eq!(result.dominant_condition, "乙");
        assert_eq!(result.other_conditions, vec!["甲"]);
    }

    #[test]
    fn test_construction_errors() {
        assert_eq!(
            ConditionAggregator::from_batch(None, AnalyzerConfig::default()).unwrap_err(),
            AnalyzerError::InvalidInput("weather observation batch is missing".to_string())
        );
        assert_eq!(
            ConditionAggregator::from_batch(Some(vec![]), AnalyzerConfig::default()).unwrap_err(),
            AnalyzerError::EmptyData
        );

        let mut batch = rainstorm_batch();
        batch[1].temperature = 150.0;
        assert_eq!(
            ConditionAggregator::new(batch).unwrap_err(),
            AnalyzerError::InvalidObservation {
                index: 2,
                source: ValidationError::Temperature(150.0),
            }
        );
    }

    #[test]
    fn test_analyze_empty_batch() {
        let aggregator = ConditionAggregator {
            observations: vec![],
            config: AnalyzerConfig::default(),
        };
        assert_eq!(aggregator.analyze(), Err(AnalyzerError::EmptyData));
    }
}
