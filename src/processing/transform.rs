//! Entry point tying a dataset to its summary and rotation.

use crate::error::SeriesResult;
use crate::types::{DataType, Dataset};

use super::precision::{DEFAULT_THRESHOLD_BANDS, MAX_DECIMAL_PLACES};
use super::rotate::rotate;
use super::summary::{summarize, Summary};

/// Options controlling summary computation.
///
/// Use [`Default`] for the standard bands.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryOptions {
    /// Fractions of `[valueMin, valueMax]` at which thresholds are placed. Keep ascending.
    pub threshold_bands: [f64; 4],
    /// Upper bound for `max_decimal_place`.
    pub decimal_place_cap: u32,
}

impl Default for SummaryOptions {
    fn default() -> Self {
        Self {
            threshold_bands: DEFAULT_THRESHOLD_BANDS,
            decimal_place_cap: MAX_DECIMAL_PLACES,
        }
    }
}

/// A classified view over a borrowed [`Dataset`].
///
/// The shape is fixed when the view is created; [`DataTransform::summary`] and
/// [`DataTransform::rotate`] compute fresh values on every call.
#[derive(Debug, Clone)]
pub struct DataTransform<'a> {
    dataset: &'a Dataset,
    data_type: DataType,
    options: SummaryOptions,
}

/// Classify `dataset` using default [`SummaryOptions`].
pub fn analyze(dataset: &Dataset) -> DataTransform<'_> {
    analyze_with(dataset, SummaryOptions::default())
}

/// Classify `dataset` with explicit options.
pub fn analyze_with(dataset: &Dataset, options: SummaryOptions) -> DataTransform<'_> {
    DataTransform {
        dataset,
        data_type: dataset.data_type(),
        options,
    }
}

impl<'a> DataTransform<'a> {
    /// The dataset shape.
    pub fn data_type(&self) -> DataType {
        self.data_type
    }

    /// The underlying dataset.
    pub fn dataset(&self) -> &'a Dataset {
        self.dataset
    }

    /// Compute the aggregate [`Summary`].
    pub fn summary(&self) -> SeriesResult<Summary> {
        summarize(self.dataset, &self.options)
    }

    /// Transpose a multi-series dataset.
    pub fn rotate(&self) -> SeriesResult<Dataset> {
        rotate(self.dataset)
    }
}
