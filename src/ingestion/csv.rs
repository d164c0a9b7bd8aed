//! CSV loading.

use std::path::Path;

use crate::error::{SeriesError, SeriesResult};
use crate::types::{DataPoint, Dataset, Series};

/// Load a wide CSV table into a multi-series [`Dataset`].
///
/// Rules:
///
/// - CSV must have headers. The first header cell labels the series column and is otherwise
///   ignored; the remaining header cells are the category keys.
/// - Each record becomes one series: the first cell is the series key, every further cell the
///   value for the category in that column.
/// - Empty cells are skipped, so a series may hold fewer points than there are categories.
pub fn load_csv_from_path(path: impl AsRef<Path>) -> SeriesResult<Dataset> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)?;
    load_csv_from_reader(&mut rdr)
}

/// Load CSV data from an existing CSV reader.
pub fn load_csv_from_reader<R: std::io::Read>(rdr: &mut csv::Reader<R>) -> SeriesResult<Dataset> {
    let headers = rdr.headers()?.clone();
    if headers.len() < 2 {
        return Err(SeriesError::MalformedDataset {
            message: format!(
                "csv needs a series column and at least one category column. headers={:?}",
                headers.iter().collect::<Vec<_>>()
            ),
        });
    }

    let mut series: Vec<Series> = Vec::new();
    for (row_idx0, result) in rdr.records().enumerate() {
        // Report 1-based row number for users; +1 again because header is row 1.
        let user_row = row_idx0 + 2;
        let record = result?;

        let key = record.get(0).unwrap_or("").trim();
        if key.is_empty() {
            return Err(SeriesError::MalformedDataset {
                message: format!("row {user_row} has no series key"),
            });
        }

        let mut points = Vec::with_capacity(headers.len() - 1);
        for (category, raw) in headers.iter().zip(record.iter()).skip(1) {
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                continue;
            }
            let value = trimmed
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| SeriesError::NonNumeric {
                    series: key.to_string(),
                    index: points.len(),
                    field: format!("value (row {user_row}, column '{category}')"),
                    raw: raw.to_string(),
                })?;
            points.push(DataPoint::new(category.trim(), value));
        }
        series.push(Series::new(key, points));
    }

    Ok(Dataset::Multi(series))
}
