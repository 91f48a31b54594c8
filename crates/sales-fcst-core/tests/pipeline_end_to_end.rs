//! End-to-end pipeline integration tests.
//!
//! Each test drives the full path a file-selection event takes: delimited
//! text → raw rows → normalized training set → fitted model → projected
//! horizon → merged series → chart payload.

use sales_fcst_core::{
    chart_data, read_rows, run_pipeline, Category, CoercionPolicy, PipelineOptions,
};

// ── Fixtures ───────────────────────────────────────────────────────────

const CLEAN_CSV: &str = "sales_date,product_description,quantity_sold\n\
                         2023-01-15,Product A,10\n\
                         2023-02-10,Product B,20\n";

const DIRTY_CSV: &str = "sales_date,product_description,quantity_sold\n\
                         2023-01-15,Product A,10\n\
                         2023-02-10,Product B,N/A\n";

// ── Tests ──────────────────────────────────────────────────────────────

#[test]
fn test_two_row_history_produces_the_full_display_series() {
    let rows = read_rows(CLEAN_CSV.as_bytes()).unwrap();
    let run = run_pipeline(&rows, &PipelineOptions::default()).unwrap();

    // Normalized training set.
    assert_eq!(run.training_set.len(), 2);
    assert_eq!(run.training_set[0].period, 1.0);
    assert_eq!(run.training_set[0].category, Category::ProductA);
    assert_eq!(run.training_set[0].quantity, 10.0);
    assert_eq!(run.training_set[1].period, 2.0);
    assert_eq!(run.training_set[1].category, Category::ProductB);
    assert_eq!(run.training_set[1].quantity, 20.0);

    // Merged series: actual labels followed by 12 predicted labels.
    assert_eq!(run.series.labels.len(), 2 + 12);
    assert_eq!(run.series.actual.len(), 2);
    assert_eq!(run.series.predicted.len(), 12);
    assert!(run
        .series
        .predicted
        .iter()
        .all(|value| value.unwrap().is_finite()));
}

#[test]
fn test_unparseable_quantity_is_kept_and_poisons_the_forecast() {
    let rows = read_rows(DIRTY_CSV.as_bytes()).unwrap();
    let run = run_pipeline(&rows, &PipelineOptions::default()).unwrap();

    // The N/A row is not dropped; it contributes a NaN target.
    assert_eq!(run.training_set.len(), 2);
    assert!(run.training_set[1].quantity.is_nan());
    assert!(run.series.actual[1].unwrap().is_nan());

    // All 12 combinations are still projected, degraded silently.
    assert_eq!(run.series.predicted.len(), 12);
    assert!(run
        .series
        .predicted
        .iter()
        .all(|value| !value.unwrap().is_finite()));
}

#[test]
fn test_reject_policy_fails_the_whole_run() {
    let rows = read_rows(DIRTY_CSV.as_bytes()).unwrap();
    let options = PipelineOptions {
        coercion: CoercionPolicy::Reject,
        ..PipelineOptions::default()
    };

    assert!(run_pipeline(&rows, &options).is_err());
}

#[test]
fn test_repeated_runs_are_reproducible() {
    let rows = read_rows(CLEAN_CSV.as_bytes()).unwrap();
    let options = PipelineOptions::default();

    let first = run_pipeline(&rows, &options).unwrap();
    let second = run_pipeline(&rows, &options).unwrap();

    assert_eq!(first.series, second.series);
}

#[test]
fn test_chart_payload_mirrors_the_series() {
    let rows = read_rows(CLEAN_CSV.as_bytes()).unwrap();
    let run = run_pipeline(&rows, &PipelineOptions::default()).unwrap();
    let chart = chart_data(&run.series);

    assert_eq!(chart.labels, run.series.labels);
    assert_eq!(chart.datasets.len(), 2);
    assert_eq!(chart.datasets[0].label, "Actual Sales");
    assert_eq!(chart.datasets[1].label, "Predicted Sales");
    assert_eq!(chart.datasets[0].data, run.series.actual);
    assert_eq!(chart.datasets[1].data, run.series.predicted);
    assert_eq!(chart.x_title, "Months");
    assert_eq!(chart.y_title, "Quantity Sold");
}
