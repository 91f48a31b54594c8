//! Chart payload for the external charting collaborator.
//!
//! One combined label axis, two line datasets with fixed names and colors,
//! fixed axis titles. Rendering itself is out of scope; this module only
//! shapes and serializes the data the collaborator plots.

use serde::Serialize;

use crate::error::Result;
use crate::series::Series;

/// Dataset name for the historical line.
pub const ACTUAL_LABEL: &str = "Actual Sales";
/// Dataset name for the forecast line.
pub const PREDICTED_LABEL: &str = "Predicted Sales";
/// Title of the shared label axis.
pub const X_AXIS_TITLE: &str = "Months";
/// Title of the value axis.
pub const Y_AXIS_TITLE: &str = "Quantity Sold";

/// One plotted line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartDataset {
    pub label: String,
    /// Values on the shared label axis; `None` serializes as `null`.
    pub data: Vec<Option<f64>>,
    #[serde(rename = "borderColor")]
    pub border_color: String,
    pub fill: bool,
}

/// Complete chart payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<ChartDataset>,
    #[serde(rename = "xTitle")]
    pub x_title: String,
    #[serde(rename = "yTitle")]
    pub y_title: String,
}

impl ChartData {
    /// Serialize the payload to JSON for the collaborator boundary.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Build the chart payload from a merged series.
pub fn chart_data(series: &Series) -> ChartData {
    ChartData {
        labels: series.labels.clone(),
        datasets: vec![
            ChartDataset {
                label: ACTUAL_LABEL.to_string(),
                data: series.actual.clone(),
                border_color: "blue".to_string(),
                fill: false,
            },
            ChartDataset {
                label: PREDICTED_LABEL.to_string(),
                data: series.predicted.clone(),
                border_color: "red".to_string(),
                fill: false,
            },
        ],
        x_title: X_AXIS_TITLE.to_string(),
        y_title: Y_AXIS_TITLE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_series() -> Series {
        Series {
            labels: vec!["Month 1".into(), "Month 1 Product A".into()],
            actual: vec![Some(10.0)],
            predicted: vec![Some(12.5), None],
        }
    }

    #[test]
    fn test_payload_carries_both_lines_and_axis_titles() {
        let chart = chart_data(&sample_series());

        assert_eq!(chart.datasets.len(), 2);
        assert_eq!(chart.datasets[0].label, ACTUAL_LABEL);
        assert_eq!(chart.datasets[0].border_color, "blue");
        assert_eq!(chart.datasets[1].label, PREDICTED_LABEL);
        assert_eq!(chart.datasets[1].border_color, "red");
        assert!(!chart.datasets[0].fill);
        assert_eq!(chart.x_title, X_AXIS_TITLE);
        assert_eq!(chart.y_title, Y_AXIS_TITLE);
    }

    #[test]
    fn test_absent_values_serialize_as_null() {
        let json = chart_data(&sample_series()).to_json().unwrap();

        assert!(json.contains("\"data\":[12.5,null]"));
        assert!(json.contains("\"borderColor\":\"red\""));
        assert!(json.contains("\"xTitle\":\"Months\""));
    }
}
