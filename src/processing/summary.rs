//! Aggregate summary of a [`Dataset`].

use indexmap::{IndexMap, IndexSet};
use serde::Serialize;

use crate::error::{SeriesError, SeriesResult};
use crate::types::{Axis, DataType, Dataset};

use super::precision::{decimal_places, thresholds};
use super::SummaryOptions;

/// One value per coordinate axis.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Coordinates<T> {
    pub x: T,
    pub y: T,
    pub z: T,
}

impl<T: Copy> Coordinates<T> {
    /// The value stored for `axis`.
    pub fn get(&self, axis: Axis) -> T {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    fn from_fn(mut f: impl FnMut(Axis) -> T) -> Self {
        Self {
            x: f(Axis::X),
            y: f(Axis::Y),
            z: f(Axis::Z),
        }
    }
}

/// Read-only aggregate snapshot of a dataset.
///
/// Fields that only apply to one shape are `None` for the other:
///
/// - single series: `row_key`, `row_total`
/// - multi series: `row_keys`, `row_totals`, `row_totals_max`, `column_totals`,
///   `column_totals_max`, `max_decimal_place`
///
/// Serializes with camelCase names and omits undefined fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub data_type: DataType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub row_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub row_total: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub row_keys: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub row_totals: Option<IndexMap<String, f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub row_totals_max: Option<f64>,
    /// Field names of the first data point.
    pub row_values_keys: Vec<String>,
    /// Every distinct point key once, in first-seen order across all series.
    pub column_keys: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column_totals: Option<IndexMap<String, f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column_totals_max: Option<f64>,
    pub value_min: f64,
    pub value_max: f64,
    pub value_extent: [f64; 2],
    /// Per-axis minimum; `None` when no point defines the axis.
    pub coordinates_min: Coordinates<Option<f64>>,
    pub coordinates_max: Coordinates<Option<f64>>,
    pub coordinates_extent: Coordinates<Option<[f64; 2]>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_decimal_place: Option<u32>,
    pub thresholds: [f64; 4],
}

impl Summary {
    /// Serialize to a JSON string.
    pub fn to_json_string(&self) -> SeriesResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

pub(crate) fn summarize(dataset: &Dataset, options: &SummaryOptions) -> SeriesResult<Summary> {
    ensure_finite(dataset)?;

    let first = dataset.points().next().ok_or(SeriesError::EmptyDataset)?;
    let (value_min, value_max) = dataset
        .points()
        .fold((first.value, first.value), |(lo, hi), p| {
            (lo.min(p.value), hi.max(p.value))
        });

    let coordinates_min = Coordinates::from_fn(|axis| {
        dataset
            .points()
            .filter_map(|p| p.coordinate(axis))
            .reduce(f64::min)
    });
    let coordinates_max = Coordinates::from_fn(|axis| {
        dataset
            .points()
            .filter_map(|p| p.coordinate(axis))
            .reduce(f64::max)
    });
    let coordinates_extent = Coordinates::from_fn(|axis| {
        Some([coordinates_min.get(axis)?, coordinates_max.get(axis)?])
    });

    let column_keys = dataset
        .points()
        .map(|p| p.key.as_str())
        .collect::<IndexSet<&str>>()
        .into_iter()
        .map(str::to_string)
        .collect();

    let mut summary = Summary {
        data_type: dataset.data_type(),
        row_key: None,
        row_total: None,
        row_keys: None,
        row_totals: None,
        row_totals_max: None,
        row_values_keys: first.field_names(),
        column_keys,
        column_totals: None,
        column_totals_max: None,
        value_min,
        value_max,
        value_extent: [value_min, value_max],
        coordinates_min,
        coordinates_max,
        coordinates_extent,
        max_decimal_place: None,
        thresholds: [0.0; 4],
    };

    match dataset {
        Dataset::Single(series) => {
            summary.row_key = Some(series.key.clone());
            summary.row_total = Some(series.values.iter().map(|p| p.value).sum::<f64>());
        }
        Dataset::Multi(series) => {
            let row_totals = accumulate(
                series
                    .iter()
                    .map(|s| (s.key.as_str(), s.values.iter().map(|p| p.value).sum::<f64>())),
            );
            let column_totals = accumulate(dataset.points().map(|p| (p.key.as_str(), p.value)));
            let places = dataset
                .points()
                .map(|p| decimal_places(p.value))
                .max()
                .unwrap_or(0)
                .min(options.decimal_place_cap);

            summary.row_keys = Some(series.iter().map(|s| s.key.clone()).collect());
            summary.row_totals_max = max_value(&row_totals);
            summary.row_totals = Some(row_totals);
            summary.column_totals_max = max_value(&column_totals);
            summary.column_totals = Some(column_totals);
            summary.max_decimal_place = Some(places);
        }
    }

    summary.thresholds = thresholds(
        value_min,
        value_max,
        &options.threshold_bands,
        summary.max_decimal_place.unwrap_or(0),
    );

    tracing::debug!(
        data_type = ?summary.data_type,
        series = dataset.series().len(),
        points = dataset.point_count(),
        columns = summary.column_keys.len(),
        "dataset summarized"
    );

    Ok(summary)
}

/// Sum values per key, keeping keys in first-seen order.
fn accumulate<'a>(pairs: impl Iterator<Item = (&'a str, f64)>) -> IndexMap<String, f64> {
    pairs.fold(IndexMap::new(), |mut acc, (key, value)| {
        *acc.entry(key.to_string()).or_insert(0.0) += value;
        acc
    })
}

fn max_value(totals: &IndexMap<String, f64>) -> Option<f64> {
    totals.values().copied().reduce(f64::max)
}

/// Values built in code bypass the JSON coercion step, so reject NaN and infinities here.
fn ensure_finite(dataset: &Dataset) -> SeriesResult<()> {
    for series in dataset.series() {
        for (index, point) in series.values.iter().enumerate() {
            let fields = std::iter::once(("value", Some(point.value))).chain(
                Axis::ALL
                    .iter()
                    .map(|axis| (axis.field_name(), point.coordinate(*axis))),
            );
            for (field, value) in fields {
                if let Some(v) = value.filter(|v| !v.is_finite()) {
                    return Err(SeriesError::NonNumeric {
                        series: series.key.clone(),
                        index,
                        field: field.to_string(),
                        raw: v.to_string(),
                    });
                }
            }
        }
    }
    Ok(())
}
