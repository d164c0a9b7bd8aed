//! Unified loading entrypoint.
//!
//! Most callers should use [`load_from_path`], which loads a file into a
//! [`crate::types::Dataset`].
//!
//! - If [`LoadOptions::format`] is `None`, the format is inferred from the file extension.
//! - If a [`super::observability::LoadObserver`] is provided, success/failure/alerts are
//!   reported to it.

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use crate::error::{SeriesError, SeriesResult};
use crate::types::Dataset;

use super::observability::{LoadContext, LoadObserver, LoadSeverity, LoadStats};
use super::{csv, json};

/// Supported input formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadFormat {
    /// Wide comma-separated table, one series per row.
    Csv,
    /// JSON series object, array of series, or NDJSON.
    Json,
}

impl LoadFormat {
    /// Parse a format from a file extension (case-insensitive).
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "csv" => Some(Self::Csv),
            "json" | "ndjson" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Options controlling unified loading.
///
/// Use [`Default`] for common cases.
#[derive(Clone)]
pub struct LoadOptions {
    /// If `None`, auto-detect format from file extension.
    pub format: Option<LoadFormat>,
    /// Optional observer for logging/alerts.
    pub observer: Option<Arc<dyn LoadObserver>>,
    /// Severity threshold at which `on_alert` is invoked.
    pub alert_at_or_above: LoadSeverity,
}

impl fmt::Debug for LoadOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadOptions")
            .field("format", &self.format)
            .field("observer_set", &self.observer.is_some())
            .field("alert_at_or_above", &self.alert_at_or_above)
            .finish()
    }
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            format: None,
            observer: None,
            alert_at_or_above: LoadSeverity::Critical,
        }
    }
}

/// Load a dataset from `path`.
///
/// When an observer is configured, this function reports:
///
/// - `on_success` on success, with series/point counts
/// - `on_failure` on failure, with a computed severity
/// - `on_alert` on failure when the computed severity is >= `options.alert_at_or_above`
///
/// # Examples
///
/// ```no_run
/// use std::sync::Arc;
///
/// use series_summary::ingestion::{load_from_path, LoadOptions, LoadSeverity, StdErrObserver};
/// use series_summary::processing::analyze;
///
/// # fn main() -> Result<(), series_summary::SeriesError> {
/// let opts = LoadOptions {
///     observer: Some(Arc::new(StdErrObserver)),
///     alert_at_or_above: LoadSeverity::Error,
///     ..Default::default()
/// };
///
/// let ds = load_from_path("sales.json", &opts)?;
/// let summary = analyze(&ds).summary()?;
/// println!("columns={:?}", summary.column_keys);
/// # Ok(())
/// # }
/// ```
pub fn load_from_path(path: impl AsRef<Path>, options: &LoadOptions) -> SeriesResult<Dataset> {
    let path = path.as_ref();
    let format = match options.format {
        Some(f) => f,
        None => infer_format(path)?,
    };
    let ctx = LoadContext {
        path: path.to_path_buf(),
        format,
    };

    let result = match format {
        LoadFormat::Csv => csv::load_csv_from_path(path),
        LoadFormat::Json => json::load_json_from_path(path),
    };

    if let Some(observer) = &options.observer {
        match &result {
            Ok(ds) => observer.on_success(
                &ctx,
                LoadStats {
                    series: ds.series().len(),
                    points: ds.point_count(),
                },
            ),
            Err(e) => {
                let severity = LoadSeverity::of(e);
                observer.on_failure(&ctx, severity, e);
                if severity >= options.alert_at_or_above {
                    observer.on_alert(&ctx, severity, e);
                }
            }
        }
    }

    result
}

fn infer_format(path: &Path) -> SeriesResult<LoadFormat> {
    path.extension()
        .and_then(|e| e.to_str())
        .and_then(LoadFormat::from_extension)
        .ok_or_else(|| SeriesError::MalformedDataset {
            message: format!(
                "cannot infer input format from '{}'; set LoadOptions::format",
                path.display()
            ),
        })
}

#[cfg(test)]
mod tests {
    use super::LoadFormat;

    #[test]
    fn format_from_extension_is_case_insensitive() {
        assert_eq!(LoadFormat::from_extension("CSV"), Some(LoadFormat::Csv));
        assert_eq!(LoadFormat::from_extension("ndjson"), Some(LoadFormat::Json));
        assert_eq!(LoadFormat::from_extension("parquet"), None);
    }
}
