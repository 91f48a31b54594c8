//! Pipeline orchestration: one forecast run from raw rows to merged series.
//!
//! A run is a single sequential unit of work — normalize, encode, train,
//! project, merge — executed per file-selection event. Its entire state
//! lives in the returned [`ForecastRun`]; nothing is cached or shared
//! across runs.

use crate::encode;
use crate::error::Result;
use crate::forecast;
use crate::ingest::RawRow;
use crate::normalize::{self, CoercionPolicy, FeatureRow};
use crate::series::{self, Series};
use crate::train::{self, SalesModel, TrainConfig};

/// Options for one pipeline run.
#[derive(Debug, Clone, Default)]
pub struct PipelineOptions {
    /// How malformed cell text is coerced during normalization.
    pub coercion: CoercionPolicy,
    /// Trainer hyperparameters.
    pub train: TrainConfig,
}

/// The complete state of one forecast run.
///
/// Owned by the caller and rebuilt wholesale on every new run.
#[derive(Debug, Clone)]
pub struct ForecastRun {
    /// Normalized training rows, one per input row.
    pub training_set: Vec<FeatureRow>,
    /// The fitted model that produced the forecast.
    pub model: SalesModel,
    /// Merged actual-vs-predicted series for display.
    pub series: Series,
}

/// Execute one forecast run.
///
/// All-or-nothing: either a full run context is produced or the run aborts
/// with the first stage error and no forecast is attempted.
pub fn run_pipeline(rows: &[RawRow], options: &PipelineOptions) -> Result<ForecastRun> {
    tracing::info!(rows = rows.len(), "starting forecast run");

    let training_set = normalize::normalize_rows(rows, options.coercion)?;
    let data = encode::encode(&training_set);
    let model = train::fit(&data, &options.train)?;
    let points = forecast::project_horizon(&model);
    let series = series::merge_series(&training_set, &points);

    tracing::info!(
        actual = series.actual.len(),
        predicted = series.predicted.len(),
        "forecast run complete"
    );

    Ok(ForecastRun {
        training_set,
        model,
        series,
    })
}
