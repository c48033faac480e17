use crate::analyzers::types::{BatchStats, ConditionTable, Observation};
use std::cmp::Ordering;

/// Share of the total weighted score a non-dominant label needs to be reported.
pub const SECONDARY_SHARE: f64 = 0.20;

/// Computes batch-wide statistics in one pass. Returns defaults for an empty batch.
pub fn batch_stats(observations: &[Observation]) -> BatchStats {
    if observations.is_empty() {
        return BatchStats::default();
    }

    let mut stats = BatchStats::default();
    let mut total_temperature = 0.0;
    let mut total_wind_speed = 0.0;

    for obs in observations {
        total_temperature += obs.temperature;

        stats.total_precipitation += obs.precipitation;
        if obs.precipitation > stats.max_precipitation {
            stats.max_precipitation = obs.precipitation;
        }
        if obs.precipitation > 0.0 {
            stats.precipitation_hours += 1;
        }

        total_wind_speed += obs.wind_speed;
        if obs.wind_speed > stats.max_wind_speed {
            stats.max_wind_speed = obs.wind_speed;
        }
    }

    let count = observations.len() as f64;
    stats.average_temperature = total_temperature / count;
    stats.average_wind_speed = total_wind_speed / count;

    stats
}

/// Sums the adjusted weight of every observation under its own label.
/// Only labels that occur in the batch get an entry; unknown labels score 0.
pub fn weighted_scores(observations: &[Observation], adjusted: &ConditionTable) -> ConditionTable {
    let mut scores = ConditionTable::new();
    for obs in observations {
        let weight = adjusted.get(&obs.condition).copied().unwrap_or(0.0);
        *scores.entry(obs.condition.clone()).or_insert(0.0) += weight;
    }
    scores
}

/// Orders labels by descending score, ties broken by ascending label.
pub fn rank(scores: &ConditionTable) -> Vec<(&str, f64)> {
    let mut ranked: Vec<(&str, f64)> = scores.iter().map(|(l, s)| (l.as_str(), *s)).collect();
    ranked.sort_by(|a, b| match b.1.total_cmp(&a.1) {
        Ordering::Equal => a.0.cmp(b.0),
        other => other,
    });
    ranked
}

/// Picks the dominant label and the secondary labels from a score table.
///
/// Returns `None` only for an empty table.
pub fn resolve_dominance(scores: &ConditionTable) -> Option<(String, Vec<String>)> {
    let ranked = rank(scores);
    let (dominant, _) = *ranked.first()?;

    let total: f64 = scores.values().sum();
    let threshold = total * SECONDARY_SHARE;

    let others = ranked
        .iter()
        .skip(1)
        .filter(|(_, score)| *score >= threshold)
        .map(|(label, _)| label.to_string())
        .collect();

    Some((dominant.to_string(), others))
}
