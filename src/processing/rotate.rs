//! Transposition of multi-series datasets.

use crate::error::{SeriesError, SeriesResult};
use crate::types::{DataPoint, Dataset, Series};

/// Swap series keys and category keys.
///
/// Every series must hold the same number of points with the same keys at each position. The
/// result has one series per category; its points carry every field of the original point,
/// with `key` replaced by the original series key.
pub(crate) fn rotate(dataset: &Dataset) -> SeriesResult<Dataset> {
    let series = match dataset {
        Dataset::Multi(series) => series,
        Dataset::Single(series) => {
            return Err(SeriesError::MisalignedRotate {
                message: format!(
                    "'{}' is a single series; only multi-series data can be rotated",
                    series.key
                ),
            });
        }
    };

    let Some(first) = series.first() else {
        return Ok(Dataset::Multi(Vec::new()));
    };
    let categories: Vec<&str> = first.values.iter().map(|p| p.key.as_str()).collect();

    for s in &series[1..] {
        if s.values.len() != categories.len() {
            return Err(SeriesError::MisalignedRotate {
                message: format!(
                    "series '{}' has {} points but series '{}' has {}",
                    s.key,
                    s.values.len(),
                    first.key,
                    categories.len()
                ),
            });
        }
        if let Some((pos, point)) = s
            .values
            .iter()
            .enumerate()
            .find(|(pos, p)| p.key != categories[*pos])
        {
            return Err(SeriesError::MisalignedRotate {
                message: format!(
                    "series '{}' has key '{}' at position {pos} where '{}' was expected",
                    s.key, point.key, categories[pos]
                ),
            });
        }
    }

    let rotated = categories
        .iter()
        .enumerate()
        .map(|(pos, category)| {
            let values = series
                .iter()
                .map(|s| DataPoint {
                    key: s.key.clone(),
                    ..s.values[pos].clone()
                })
                .collect();
            Series::new(*category, values)
        })
        .collect::<Vec<_>>();

    tracing::debug!(
        series = series.len(),
        categories = rotated.len(),
        "dataset rotated"
    );

    Ok(Dataset::Multi(rotated))
}
