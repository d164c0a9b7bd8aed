//! JSON loading.
//!
//! Supported inputs:
//! - A single series object: `{"key":"Sales","values":[{"key":"Q1","value":4}]}`
//! - An array of series objects: `[{"key":"A","values":[...]}, {"key":"B","values":[...]}]`
//! - Newline-delimited JSON (NDJSON), one series object per line, loaded as a multi series

use std::fs;
use std::path::Path;

use crate::error::{SeriesError, SeriesResult};
use crate::types::{Dataset, Series};

/// Load a JSON file into a [`Dataset`].
pub fn load_json_from_path(path: impl AsRef<Path>) -> SeriesResult<Dataset> {
    let text = fs::read_to_string(path)?;
    load_json_from_str(&text)
}

/// Load JSON from an in-memory string into a [`Dataset`].
pub fn load_json_from_str(input: &str) -> SeriesResult<Dataset> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(SeriesError::MalformedDataset {
            message: "json input is empty".to_string(),
        });
    }

    // First try parsing as a single JSON value (object or array).
    if let Ok(v) = serde_json::from_str::<serde_json::Value>(trimmed) {
        return Dataset::from_json_value(&v);
    }

    // Fall back to NDJSON.
    let mut series: Vec<Series> = Vec::new();
    for (i, line) in trimmed.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let v = serde_json::from_str::<serde_json::Value>(line).map_err(|e| {
            SeriesError::MalformedDataset {
                message: format!("invalid ndjson at line {}: {}", i + 1, e),
            }
        })?;
        match Dataset::from_json_value(&v) {
            Ok(Dataset::Single(s)) => series.push(s),
            Ok(Dataset::Multi(_)) => {
                return Err(SeriesError::MalformedDataset {
                    message: format!("ndjson line {} must hold one series object", i + 1),
                });
            }
            Err(e) => return Err(e),
        }
    }
    Ok(Dataset::Multi(series))
}
