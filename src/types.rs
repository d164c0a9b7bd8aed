//! Core data model types for series datasets.
//!
//! A [`Dataset`] is either a single named [`Series`] or an ordered list of them. Raw JSON input is
//! classified exactly once, in [`Dataset::from_json_value`]: an object with a top-level `key` is a
//! single series, an array is a multi series, and anything else is rejected.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{SeriesError, SeriesResult};

/// Coordinate axes a [`DataPoint`] may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// All axes, in `x`, `y`, `z` order.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Field name used for this axis in JSON input.
    pub fn field_name(self) -> &'static str {
        match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        }
    }
}

/// A single labeled point within a [`Series`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DataPoint {
    /// Category key (column key) of the point.
    pub key: String,
    /// Numeric value of the point.
    pub value: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub z: Option<f64>,
    /// Any further fields, carried verbatim (in input order) through rotation.
    #[serde(flatten)]
    pub extra: IndexMap<String, serde_json::Value>,
}

impl DataPoint {
    /// Create a point with only a key and a value.
    pub fn new(key: impl Into<String>, value: f64) -> Self {
        Self {
            key: key.into(),
            value,
            x: None,
            y: None,
            z: None,
            extra: IndexMap::new(),
        }
    }

    /// Set the coordinates of this point.
    pub fn with_coordinates(mut self, x: Option<f64>, y: Option<f64>, z: Option<f64>) -> Self {
        self.x = x;
        self.y = y;
        self.z = z;
        self
    }

    /// Attach an extra field that is carried through unchanged.
    pub fn with_extra(mut self, name: impl Into<String>, value: serde_json::Value) -> Self {
        self.extra.insert(name.into(), value);
        self
    }

    /// Returns the coordinate on `axis`, if the point defines it.
    pub fn coordinate(&self, axis: Axis) -> Option<f64> {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    /// Names of the fields present on this point: `key`, `value`, any defined axes, then extras.
    pub fn field_names(&self) -> Vec<String> {
        let mut names = vec!["key".to_string(), "value".to_string()];
        names.extend(
            Axis::ALL
                .iter()
                .filter(|axis| self.coordinate(**axis).is_some())
                .map(|axis| axis.field_name().to_string()),
        );
        names.extend(self.extra.keys().cloned());
        names
    }
}

/// A named, ordered collection of [`DataPoint`]s.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    /// Series key (row key).
    pub key: String,
    /// Points in their original order.
    pub values: Vec<DataPoint>,
}

impl Series {
    /// Create a series from a key and its points.
    pub fn new(key: impl Into<String>, values: Vec<DataPoint>) -> Self {
        Self {
            key: key.into(),
            values,
        }
    }
}

/// Discriminant reported in a summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DataType {
    /// One named series.
    SingleSeries,
    /// An ordered list of named series.
    MultiSeries,
}

/// A series dataset in one of its two shapes.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Dataset {
    /// `{ "key": ..., "values": [...] }`
    Single(Series),
    /// `[{ "key": ..., "values": [...] }, ...]`
    Multi(Vec<Series>),
}

impl Dataset {
    /// The shape of this dataset.
    pub fn data_type(&self) -> DataType {
        match self {
            Dataset::Single(_) => DataType::SingleSeries,
            Dataset::Multi(_) => DataType::MultiSeries,
        }
    }

    /// All series in order (a single series yields exactly one).
    pub fn series(&self) -> &[Series] {
        match self {
            Dataset::Single(series) => std::slice::from_ref(series),
            Dataset::Multi(series) => series,
        }
    }

    /// Iterate every point of every series, in order.
    pub fn points(&self) -> impl Iterator<Item = &DataPoint> {
        self.series().iter().flat_map(|s| s.values.iter())
    }

    /// Total number of points across all series.
    pub fn point_count(&self) -> usize {
        self.series().iter().map(|s| s.values.len()).sum()
    }

    /// Serialize back to the JSON shape this dataset was parsed from.
    pub fn to_json_string(&self) -> SeriesResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Classify and parse a raw JSON value.
    ///
    /// - An object with a `key` field is a single series.
    /// - An array is a multi series; every entry must be a series object.
    /// - Anything else is [`SeriesError::MalformedDataset`].
    ///
    /// `value` and `x`/`y`/`z` are coerced to numbers here; a field that cannot be coerced fails
    /// with [`SeriesError::NonNumeric`] naming the series and point index.
    pub fn from_json_value(value: &serde_json::Value) -> SeriesResult<Self> {
        match value {
            serde_json::Value::Object(obj) if obj.contains_key("key") => {
                parse_series(obj, None).map(Dataset::Single)
            }
            serde_json::Value::Array(items) => items
                .iter()
                .enumerate()
                .map(|(idx, item)| {
                    let obj = item.as_object().ok_or_else(|| SeriesError::MalformedDataset {
                        message: format!("series {idx} is not a json object"),
                    })?;
                    parse_series(obj, Some(idx))
                })
                .collect::<SeriesResult<Vec<_>>>()
                .map(Dataset::Multi),
            serde_json::Value::Object(_) => Err(SeriesError::MalformedDataset {
                message: "object without a 'key' field is neither a single nor a multi series"
                    .to_string(),
            }),
            other => Err(SeriesError::MalformedDataset {
                message: format!("expected a series object or an array of series, got {other}"),
            }),
        }
    }
}

impl From<Series> for Dataset {
    fn from(series: Series) -> Self {
        Dataset::Single(series)
    }
}

impl From<Vec<Series>> for Dataset {
    fn from(series: Vec<Series>) -> Self {
        Dataset::Multi(series)
    }
}

impl TryFrom<&serde_json::Value> for Dataset {
    type Error = SeriesError;

    fn try_from(value: &serde_json::Value) -> SeriesResult<Self> {
        Dataset::from_json_value(value)
    }
}

impl<'de> Deserialize<'de> for Dataset {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = serde_json::Value::deserialize(deserializer)?;
        Dataset::from_json_value(&raw).map_err(serde::de::Error::custom)
    }
}

fn parse_series(
    obj: &serde_json::Map<String, serde_json::Value>,
    position: Option<usize>,
) -> SeriesResult<Series> {
    let describe = || match position {
        Some(idx) => format!("series {idx}"),
        None => "series".to_string(),
    };

    let key = match obj.get("key") {
        Some(raw) => key_to_string(raw).ok_or_else(|| SeriesError::MalformedDataset {
            message: format!("{} has a non-scalar key {raw}", describe()),
        })?,
        None => {
            return Err(SeriesError::MalformedDataset {
                message: format!("{} is missing 'key'", describe()),
            });
        }
    };

    let values = obj
        .get("values")
        .and_then(|v| v.as_array())
        .ok_or_else(|| SeriesError::MalformedDataset {
            message: format!("series '{key}' is missing a 'values' list"),
        })?;

    let points = values
        .iter()
        .enumerate()
        .map(|(index, raw)| parse_point(&key, index, raw))
        .collect::<SeriesResult<Vec<_>>>()?;

    Ok(Series::new(key, points))
}

fn parse_point(series: &str, index: usize, raw: &serde_json::Value) -> SeriesResult<DataPoint> {
    let obj = raw.as_object().ok_or_else(|| SeriesError::MalformedDataset {
        message: format!("point {index} of series '{series}' is not a json object"),
    })?;

    let key = obj
        .get("key")
        .and_then(key_to_string)
        .ok_or_else(|| SeriesError::MalformedDataset {
            message: format!("point {index} of series '{series}' has no scalar 'key'"),
        })?;

    let value = match obj.get("value") {
        Some(v) => coerce_number(v).ok_or_else(|| non_numeric(series, index, "value", v))?,
        None => {
            return Err(SeriesError::NonNumeric {
                series: series.to_string(),
                index,
                field: "value".to_string(),
                raw: "<missing>".to_string(),
            });
        }
    };

    let mut coordinates = [None; 3];
    for (slot, axis) in coordinates.iter_mut().zip(Axis::ALL) {
        *slot = match obj.get(axis.field_name()) {
            None | Some(serde_json::Value::Null) => None,
            Some(v) => Some(
                coerce_number(v).ok_or_else(|| non_numeric(series, index, axis.field_name(), v))?,
            ),
        };
    }
    let [x, y, z] = coordinates;

    let extra = obj
        .iter()
        .filter(|(name, _)| !matches!(name.as_str(), "key" | "value" | "x" | "y" | "z"))
        .map(|(name, v)| (name.clone(), v.clone()))
        .collect();

    Ok(DataPoint {
        key,
        value,
        x,
        y,
        z,
        extra,
    })
}

fn key_to_string(raw: &serde_json::Value) -> Option<String> {
    match raw {
        serde_json::Value::String(s) => Some(s.clone()),
        serde_json::Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Explicit numeric coercion: JSON numbers and numeric strings only.
pub(crate) fn coerce_number(raw: &serde_json::Value) -> Option<f64> {
    let n = match raw {
        serde_json::Value::Number(n) => n.as_f64()?,
        serde_json::Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    n.is_finite().then_some(n)
}

fn non_numeric(series: &str, index: usize, field: &str, raw: &serde_json::Value) -> SeriesError {
    SeriesError::NonNumeric {
        series: series.to_string(),
        index,
        field: field.to_string(),
        raw: raw.to_string(),
    }
}
