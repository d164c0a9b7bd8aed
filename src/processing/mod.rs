//! Summary and transpose engine.
//!
//! The processing layer operates on [`crate::types::Dataset`] values produced by
//! [`crate::ingestion`] or built in code. Every operation is a pure function of its input.
//!
//! Currently implemented:
//!
//! - [`analyze()`] / [`analyze_with()`]: classify a dataset into a [`DataTransform`]
//! - [`DataTransform::summary`]: totals, extents, column keys, precision, thresholds
//! - [`DataTransform::rotate`]: swap series keys and category keys
//! - [`precision`]: decimal-place counting and threshold rounding helpers
//! - [`batch`]: summarize or rotate many independent datasets in parallel
//!
//! ## Example: summarize then rotate
//!
//! ```rust
//! use series_summary::processing::analyze;
//! use series_summary::types::{DataPoint, Dataset, Series};
//!
//! let ds = Dataset::Multi(vec![
//!     Series::new("A", vec![DataPoint::new("x", 1.0), DataPoint::new("y", 2.0)]),
//!     Series::new("B", vec![DataPoint::new("x", 3.0), DataPoint::new("y", 4.0)]),
//! ]);
//!
//! let transform = analyze(&ds);
//! let summary = transform.summary().unwrap();
//! assert_eq!(summary.row_totals_max, Some(7.0));
//! assert_eq!(summary.column_keys, vec!["x", "y"]);
//! assert_eq!(summary.value_extent, [1.0, 4.0]);
//!
//! // Rotation swaps series keys and category keys.
//! let rotated = transform.rotate().unwrap();
//! assert_eq!(rotated.series()[0].key, "x");
//! assert_eq!(rotated.series()[0].values[1].key, "B");
//! ```
//!
//! Column keys are ordered by first appearance across all series, scanning series in order and
//! points within a series in order. Coordinate extents ignore points that do not define an axis;
//! an axis no point defines is reported as `None`.

pub mod batch;
pub mod precision;
mod rotate;
mod summary;
mod transform;

pub use summary::{Coordinates, Summary};
pub use transform::{analyze, analyze_with, DataTransform, SummaryOptions};
