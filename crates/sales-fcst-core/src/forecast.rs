//! Horizon projection: enumerate future (period, category) pairs and query
//! the fitted model for each.

use crate::normalize::Category;
use crate::train::SalesModel;

/// Number of future periods projected.
pub const HORIZON_PERIODS: u32 = 6;

/// One projected point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForecastPoint {
    /// Future period, `1..=HORIZON_PERIODS`.
    pub period: u32,
    /// Product class the prediction is for.
    pub category: Category,
    /// Model output for this (period, category) pair.
    pub predicted: f64,
}

/// Project the full horizon: every (period, category) combination over
/// `1..=HORIZON_PERIODS`, period-major then category-minor.
///
/// Always yields exactly `HORIZON_PERIODS * 2` points, no duplicates and no
/// omissions. Inference is deterministic for a fixed model.
pub fn project_horizon(model: &SalesModel) -> Vec<ForecastPoint> {
    let mut points = Vec::with_capacity(HORIZON_PERIODS as usize * Category::ALL.len());
    for period in 1..=HORIZON_PERIODS {
        for category in Category::ALL {
            let predicted = model.predict(f64::from(period), category.code());
            points.push(ForecastPoint {
                period,
                category,
                predicted,
            });
        }
    }

    tracing::debug!(points = points.len(), "projected forecast horizon");
    points
}
