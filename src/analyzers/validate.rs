use std::ops::RangeInclusive;

use crate::analyzers::types::Observation;
use crate::error::{AnalyzerError, ValidationError};

pub const TEMPERATURE_RANGE: RangeInclusive<f64> = -100.0..=100.0;
pub const HUMIDITY_RANGE: RangeInclusive<f64> = 0.0..=100.0;
pub const WIND_SPEED_RANGE: RangeInclusive<f64> = 0.0..=100.0;
pub const PRECIPITATION_RANGE: RangeInclusive<f64> = 0.0..=1000.0;

/// Checks every field of an observation against its physical range.
///
/// Fields are checked in the order temperature, humidity, wind speed,
/// precipitation and the first failure is returned. NaN is out of range.
pub fn validate_observation(obs: &Observation) -> Result<(), ValidationError> {
    if !TEMPERATURE_RANGE.contains(&obs.temperature) {
        return Err(ValidationError::Temperature(obs.temperature));
    }
    if !HUMIDITY_RANGE.contains(&obs.humidity) {
        return Err(ValidationError::Humidity(obs.humidity));
    }
    if !WIND_SPEED_RANGE.contains(&obs.wind_speed) {
        return Err(ValidationError::WindSpeed(obs.wind_speed));
    }
    if !PRECIPITATION_RANGE.contains(&obs.precipitation) {
        return Err(ValidationError::Precipitation(obs.precipitation));
    }
    Ok(())
}

/// Validates a whole batch, reporting the first bad observation by 1-based index.
pub fn validate_batch(observations: &[Observation]) -> Result<(), AnalyzerError> {
    if observations.is_empty() {
        return Err(AnalyzerError::EmptyData);
    }

    for (i, obs) in observations.iter().enumerate() {
        validate_observation(obs).map_err(|source| AnalyzerError::InvalidObservation {
            index: i + 1,
            source,
        })?;
    }

    Ok(())
}
