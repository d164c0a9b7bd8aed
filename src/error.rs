use thiserror::Error;

/// Convenience result type used across the crate.
pub type SeriesResult<T> = Result<T, SeriesError>;

/// Error type returned by parsing, summarizing, rotating, loading, and palette functions.
///
/// A single enum shared by every layer, so callers can match on the failure kind without
/// caring which layer raised it.
#[derive(Debug, Error)]
pub enum SeriesError {
    /// Underlying I/O error (e.g. file not found, permission denied).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON syntax error.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV reader error.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// The input matches neither the single-series nor the multi-series shape.
    #[error("malformed dataset: {message}")]
    MalformedDataset { message: String },

    /// The dataset contains no data points, so extents are undefined.
    #[error("empty dataset: no data points to summarize")]
    EmptyDataset,

    /// A `value` or coordinate field could not be coerced to a finite number.
    #[error("non-numeric {field} at point {index} of series '{series}' (raw={raw})")]
    NonNumeric {
        series: String,
        index: usize,
        field: String,
        raw: String,
    },

    /// The dataset cannot be transposed.
    #[error("cannot rotate dataset: {message}")]
    MisalignedRotate { message: String },

    /// A colour string holds too few hex digits to parse.
    #[error("invalid hex colour '{raw}'")]
    InvalidColor { raw: String },
}
