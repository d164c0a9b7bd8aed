//! `series-summary` summarizes keyed series data for charting: totals, extents, column keys,
//! numeric precision and threshold bands, plus a transpose ("rotate") of multi-series tables and
//! a small colour-palette toolkit.
//!
//! The primary entrypoint is [`processing::analyze`], which classifies a [`types::Dataset`] and
//! returns a [`processing::DataTransform`] exposing `summary()` and `rotate()`.
//!
//! ## Data shapes
//!
//! - **Single series**: `{"key": "Sales", "values": [{"key": "Q1", "value": 4}, ...]}`
//! - **Multi series**: `[{"key": "A", "values": [...]}, {"key": "B", "values": [...]}]`
//!
//! Each point carries a `key` and a numeric `value`, optional `x`/`y`/`z` coordinates, and any
//! further fields, which are kept in order and carried through rotation unchanged.
//!
//! ## Quick example: summarize
//!
//! ```rust
//! use series_summary::processing::analyze;
//! use series_summary::types::Dataset;
//!
//! # fn main() -> Result<(), series_summary::SeriesError> {
//! let ds: Dataset = serde_json::from_str(
//!     r#"[
//!         {"key": "A", "values": [{"key": "x", "value": 1}, {"key": "y", "value": 2}]},
//!         {"key": "B", "values": [{"key": "x", "value": 3}, {"key": "y", "value": 4}]}
//!     ]"#,
//! )?;
//!
//! let summary = analyze(&ds).summary()?;
//! assert_eq!(summary.row_totals.as_ref().unwrap()["B"], 7.0);
//! assert_eq!(summary.column_totals.as_ref().unwrap()["y"], 6.0);
//! assert_eq!(summary.value_extent, [1.0, 4.0]);
//! # Ok(())
//! # }
//! ```
//!
//! ## Loading from files
//!
//! ```no_run
//! use series_summary::ingestion::{load_from_path, LoadOptions};
//! use series_summary::processing::analyze;
//!
//! # fn main() -> Result<(), series_summary::SeriesError> {
//! // Auto-detects by extension (.json/.ndjson/.csv).
//! let ds = load_from_path("regions.csv", &LoadOptions::default())?;
//! let rotated = analyze(&ds).rotate()?;
//! println!("{}", rotated.to_json_string()?);
//! # Ok(())
//! # }
//! ```
//!
//! ## Palettes
//!
//! ```rust
//! use series_summary::palette::{categorical, sequential};
//!
//! let colors = categorical(1).unwrap();
//! assert_eq!(colors.len(), 9);
//!
//! let ramp = sequential("#ff0000", 3).unwrap();
//! assert_eq!(ramp.len(), 3);
//! ```
//!
//! ## Modules
//!
//! - [`types`]: series, points and the two dataset shapes
//! - [`processing`]: summary, rotation, precision helpers and parallel batch helpers
//! - [`palette`]: categorical, diverging and sequential colour palettes
//! - [`ingestion`]: JSON/NDJSON/CSV loaders with observer hooks
//! - [`error`]: the error type shared across the crate

pub mod error;
pub mod ingestion;
pub mod palette;
pub mod processing;
pub mod types;

pub use error::{SeriesError, SeriesResult};
pub use processing::{analyze, analyze_with, DataTransform, Summary, SummaryOptions};
pub use types::{DataPoint, DataType, Dataset, Series};
