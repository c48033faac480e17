//! Error taxonomy for observation validation and analysis.

use thiserror::Error;

/// An observation field outside its physical range.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ValidationError {
    #[error("temperature out of range: {0:.1}°C")]
    Temperature(f64),

    #[error("humidity out of range: {0:.1}%")]
    Humidity(f64),

    #[error("wind speed out of range: {0:.1} m/s")]
    WindSpeed(f64),

    #[error("precipitation out of range: {0:.1} mm")]
    Precipitation(f64),
}

impl ValidationError {
    /// Stable machine-readable code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Temperature(_) => "INVALID_TEMPERATURE",
            Self::Humidity(_) => "INVALID_HUMIDITY",
            Self::WindSpeed(_) => "INVALID_WIND_SPEED",
            Self::Precipitation(_) => "INVALID_PRECIPITATION",
        }
    }
}

/// Errors raised while building an aggregator or running an analysis.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalyzerError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("no weather observations to analyze")]
    EmptyData,

    /// `index` is 1-based within the batch.
    #[error("observation #{index} is invalid: {source}")]
    InvalidObservation {
        index: usize,
        #[source]
        source: ValidationError,
    },
}

impl AnalyzerError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidInput(_) => "INVALID_INPUT",
            Self::EmptyData => "EMPTY_DATA",
            Self::InvalidObservation { source, .. } => source.code(),
        }
    }
}
