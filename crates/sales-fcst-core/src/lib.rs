//! Sales forecasting pipeline.
//!
//! Fits a small feed-forward regression model on a tabular sales history
//! and projects quantities over a fixed future horizon, producing a
//! combined actual-vs-predicted series for display. The outer boundary is
//! file-in / chart-data-out: file selection and chart rendering belong to
//! the hosting collaborator.

pub mod chart;
pub mod encode;
pub mod error;
pub mod forecast;
pub mod ingest;
pub mod normalize;
pub mod pipeline;
pub mod series;
pub mod session;
pub mod train;

// Re-exports for convenience
pub use chart::{chart_data, ChartData, ChartDataset};
pub use encode::{encode, TrainingData, N_FEATURES};
pub use error::{PipelineError, Result};
pub use forecast::{project_horizon, ForecastPoint, HORIZON_PERIODS};
pub use ingest::{read_rows, read_rows_from_path, RawRow};
pub use normalize::{
    normalize_rows, parse_month, parse_quantity, Category, CoercionPolicy, FeatureRow,
};
pub use pipeline::{run_pipeline, ForecastRun, PipelineOptions};
pub use series::{merge_series, Series};
pub use session::{spawn_run, RunHandle};
pub use train::{fit, SalesModel, TrainConfig};
