//! Output formatting and persistence for day summaries.
//!
//! Supports pretty-printing, JSON serialization, and CSV append.

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info};

use crate::analyzers::types::AnalysisResult;
use csv::WriterBuilder;
use std::fs::OpenOptions;
use std::path::Path;

/// Separator for label lists inside a single CSV cell.
const LIST_SEPARATOR: &str = "|";

/// Flat CSV row describing one analyzed day.
#[derive(Debug, Serialize)]
pub struct SummaryRecord {
    pub generated_at: DateTime<Utc>,
    pub source: String,
    pub observations: usize,
    pub dominant_condition: String,
    pub other_conditions: String,
    pub average_temperature: f64,
    pub total_precipitation: f64,
    pub max_precipitation: f64,
    pub precipitation_hours: usize,
    pub average_wind_speed: f64,
    pub max_wind_speed: f64,
    pub description: String,
}

impl SummaryRecord {
    pub fn from_result(source: &str, observations: usize, result: &AnalysisResult) -> Self {
        SummaryRecord {
            generated_at: Utc::now(),
            source: source.to_string(),
            observations,
            dominant_condition: result.dominant_condition.clone(),
            other_conditions: result.other_conditions.join(LIST_SEPARATOR),
            average_temperature: result.average_temperature,
            total_precipitation: result.total_precipitation,
            max_precipitation: result.max_precipitation,
            precipitation_hours: result.precipitation_hours,
            average_wind_speed: result.average_wind_speed,
            max_wind_speed: result.max_wind_speed,
            description: result.description.clone(),
        }
    }
}

/// Logs an analysis result using Rust's debug pretty-print format.
pub fn print_pretty(result: &AnalysisResult) {
    debug!("{:#?}", result);
}

/// Logs an analysis result as pretty-printed JSON.
pub fn print_json(result: &AnalysisResult) -> Result<()> {
    info!("{}", to_json(result)?);
    Ok(())
}

pub fn to_json(result: &AnalysisResult) -> Result<String> {
    Ok(serde_json::to_string_pretty(result)?)
}

/// Appends a [`SummaryRecord`] as a row to a CSV file.
///
/// Creates the file with headers if it does not already exist.
pub fn append_record(path: &str, record: &SummaryRecord) -> Result<()> {
    let file_exists = Path::new(path).exists();
    debug!(path, file_exists, "Appending CSV record");

    let file = OpenOptions::new().append(true).create(true).open(path)?;

    let mut writer = WriterBuilder::new()
        .has_headers(!file_exists)
        .from_writer(file);

    writer.serialize(record)?;
    writer.flush()?;

    Ok(())
}
