//! Loaders for observation batches stored on disk.

use anyhow::{Context, Result, bail};
use std::io::Read;
use std::path::Path;

use crate::analyzers::types::Observation;

/// Reads observations from a `.csv` or `.json` file.
///
/// A JSON `null` yields `None`; the caller decides how to treat an absent batch.
pub fn load_observations(path: &str) -> Result<Option<Vec<Observation>>> {
    let extension = Path::new(path)
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    let is_csv = match extension.as_deref() {
        Some("csv") => true,
        Some("json") => false,
        _ => bail!("unsupported observation file {path}: expected .csv or .json"),
    };

    let file = std::fs::File::open(path).with_context(|| format!("failed to open {path}"))?;

    if is_csv {
        parse_csv(file)
            .map(Some)
            .with_context(|| format!("failed to parse CSV observations in {path}"))
    } else {
        parse_json(file).with_context(|| format!("failed to parse JSON observations in {path}"))
    }
}

/// Decodes CSV rows with a header naming the observation fields.
pub fn parse_csv(reader: impl Read) -> Result<Vec<Observation>> {
    let mut rdr = csv::Reader::from_reader(reader);
    let mut rows = Vec::new();

    for result in rdr.deserialize() {
        let record: Observation = result?;
        rows.push(record);
    }

    Ok(rows)
}

/// Decodes a JSON array of observations, or `null`.
pub fn parse_json(reader: impl Read) -> Result<Option<Vec<Observation>>> {
    Ok(serde_json::from_reader(reader)?)
}
