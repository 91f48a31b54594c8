//! Series merging: align historical actuals and horizon predictions into
//! parallel labeled sequences for presentation.

use crate::forecast::{ForecastPoint, HORIZON_PERIODS};
use crate::normalize::{Category, FeatureRow};

/// Merged presentation series.
///
/// `labels` is the actual labels followed by the predicted labels, so its
/// length is always `actual.len() + predicted.len()`. The two value
/// sequences are not padded against each other; the charting collaborator
/// plots both on the shared label axis as-is, a known display artifact
/// that is left uncorrected.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    /// Combined label axis.
    pub labels: Vec<String>,
    /// One value per training row, in original row order.
    pub actual: Vec<Option<f64>>,
    /// One value per horizon combination, period-major order.
    pub predicted: Vec<Option<f64>>,
}

/// Merge the training set and the projected horizon into a [`Series`].
///
/// Actual labels use each row's own period and are not globally unique;
/// repeated periods render the same text. Predicted labels are generated
/// independently of the data for all horizon combinations. The predicted
/// lookup is total for points produced by `project_horizon`; `None` is the
/// defensive sentinel for any other caller.
pub fn merge_series(rows: &[FeatureRow], points: &[ForecastPoint]) -> Series {
    let mut labels: Vec<String> = rows
        .iter()
        .map(|row| format!("Month {}", row.period))
        .collect();
    let actual: Vec<Option<f64>> = rows.iter().map(|row| Some(row.quantity)).collect();

    let n_combinations = HORIZON_PERIODS as usize * Category::ALL.len();
    let mut predicted = Vec::with_capacity(n_combinations);
    for period in 1..=HORIZON_PERIODS {
        for category in Category::ALL {
            let value = points
                .iter()
                .find(|p| p.period == period && p.category == category)
                .map(|p| p.predicted);
            predicted.push(value);
            labels.push(format!("Month {period} {}", category.label()));
        }
    }

    Series {
        labels,
        actual,
        predicted,
    }
}
