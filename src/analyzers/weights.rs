//! Built-in condition vocabulary and the threshold boosts applied to it.

use crate::analyzers::types::{BatchStats, ConditionTable};

/// Multiplier applied when the batch's total precipitation meets a label's threshold.
pub const PRECIPITATION_BOOST: f64 = 1.20;

/// Multiplier applied when the batch's maximum wind speed meets a label's threshold.
pub const WIND_BOOST: f64 = 1.15;

/// Base weight per condition label. Extreme and hazardous weather ranks
/// highest, then strong precipitation, transitional forecasts, ordinary
/// precipitation and haze, and finally dry conditions.
pub static DEFAULT_WEIGHTS: &[(&str, f64)] = &[
    // extreme
    ("特大暴雨", 1.00),
    ("大暴雨", 0.995),
    ("极端降雨", 0.99),
    ("雷阵雨伴有冰雹", 0.98),
    ("强雷阵雨", 0.97),
    ("强阵雨", 0.96),
    ("暴雨", 0.955),
    ("暴雪", 0.95),
    ("强沙尘暴", 0.93),
    ("特强浓雾", 0.92),
    // strong
    ("雷阵雨", 0.92),
    ("大雨", 0.90),
    ("中雨", 0.88),
    ("冻雨", 0.87),
    ("大雪", 0.86),
    ("沙尘暴", 0.85),
    ("强浓雾", 0.83),
    ("严重霾", 0.81),
    // transitional
    ("大暴雨到特大暴雨", 0.89),
    ("暴雨到大暴雨", 0.87),
    ("大到暴雨", 0.85),
    ("中到大雨", 0.83),
    ("小到中雨", 0.81),
    ("大到暴雪", 0.84),
    ("中到大雪", 0.82),
    ("小到中雪", 0.80),
    // ordinary
    ("阵雨", 0.82),
    ("雨", 0.80),
    ("小雨", 0.78),
    ("毛毛雨/细雨", 0.75),
    ("中雪", 0.77),
    ("小雪", 0.76),
    ("雪", 0.75),
    ("雨夹雪", 0.74),
    ("雨雪天气", 0.73),
    ("阵雨夹雪", 0.72),
    ("阵雪", 0.71),
    ("重度霾", 0.79),
    ("中度霾", 0.78),
    ("大雾", 0.77),
    ("浓雾", 0.76),
    ("雾", 0.75),
    ("薄雾", 0.74),
    ("扬沙", 0.73),
    ("浮尘", 0.72),
    ("霾", 0.71),
    // dry
    ("阴", 0.65),
    ("多云", 0.55),
    ("晴间多云", 0.45),
    ("少云", 0.40),
    ("晴", 0.35),
    ("热", 0.50),
    ("冷", 0.45),
];

/// Daily precipitation totals (mm) at which a label is boosted.
pub static DEFAULT_PRECIPITATION_THRESHOLDS: &[(&str, f64)] = &[
    ("特大暴雨", 100.0),
    ("大暴雨", 70.0),
    ("暴雨", 50.0),
    ("大雨", 25.0),
    ("中雨", 10.0),
    ("小雨", 0.1),
    ("毛毛雨", 0.0),
];

/// Peak wind speeds (m/s) at which a label is boosted.
pub static DEFAULT_WIND_THRESHOLDS: &[(&str, f64)] = &[
    ("强沙尘暴", 20.8), // Beaufort 9
    ("沙尘暴", 17.2),   // Beaufort 8
    ("扬沙", 10.8),     // Beaufort 6
    ("浮尘", 5.5),      // Beaufort 4
];

/// Builds an owned table from one of the static defaults.
pub fn table_from(entries: &[(&str, f64)]) -> ConditionTable {
    entries
        .iter()
        .map(|(label, value)| (label.to_string(), *value))
        .collect()
}

/// Copies the base weights and boosts every label whose threshold the batch
/// meets. Thresholds compare against batch-wide totals and maxima, and a label
/// is boosted whether or not it was observed. Labels with a threshold but no
/// base weight are inserted with weight 0.
pub fn adjusted_weights(
    weights: &ConditionTable,
    precipitation_thresholds: &ConditionTable,
    wind_thresholds: &ConditionTable,
    stats: &BatchStats,
) -> ConditionTable {
    let mut adjusted = weights.clone();

    for (label, threshold) in precipitation_thresholds {
        if stats.total_precipitation >= *threshold {
            *adjusted.entry(label.clone()).or_insert(0.0) *= PRECIPITATION_BOOST;
        }
    }

    for (label, threshold) in wind_thresholds {
        if stats.max_wind_speed >= *threshold {
            *adjusted.entry(label.clone()).or_insert(0.0) *= WIND_BOOST;
        }
    }

    adjusted
}
