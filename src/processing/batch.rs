//! Parallel helpers for many independent datasets.
//!
//! Each dataset is processed on rayon's global pool; `results[i]` always belongs to
//! `datasets[i]`, and one failing dataset does not affect the others.

use rayon::prelude::*;

use crate::error::SeriesResult;
use crate::types::Dataset;

use super::rotate::rotate;
use super::summary::{summarize, Summary};
use super::SummaryOptions;

/// Summarize every dataset in parallel.
pub fn summarize_all(
    datasets: &[Dataset],
    options: &SummaryOptions,
) -> Vec<SeriesResult<Summary>> {
    datasets.par_iter().map(|ds| summarize(ds, options)).collect()
}

/// Rotate every dataset in parallel.
pub fn rotate_all(datasets: &[Dataset]) -> Vec<SeriesResult<Dataset>> {
    datasets.par_iter().map(rotate).collect()
}
