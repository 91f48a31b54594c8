//! Feature encoding: training set to design matrix and target vector.

use faer::{Col, Mat};

use crate::normalize::FeatureRow;

/// Number of input features per row: `[period, category]`.
pub const N_FEATURES: usize = 2;

/// Encoded training data: inputs of shape `[N, 2]`, targets of length N.
#[derive(Debug, Clone)]
pub struct TrainingData {
    pub inputs: Mat<f64>,
    pub targets: Col<f64>,
}

impl TrainingData {
    /// Number of observations.
    pub fn n_rows(&self) -> usize {
        self.inputs.nrows()
    }
}

/// Assemble the design matrix and target vector from normalized rows.
///
/// Pure transformation: nothing is filtered, NaN features and targets pass
/// through unchanged and can poison the subsequent fit.
pub fn encode(rows: &[FeatureRow]) -> TrainingData {
    let n = rows.len();
    let inputs = Mat::from_fn(n, N_FEATURES, |i, j| match j {
        0 => rows[i].period,
        _ => rows[i].category.code(),
    });
    let targets = Col::from_fn(n, |i| rows[i].quantity);

    TrainingData { inputs, targets }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::Category;

    #[test]
    fn test_matrix_shape_and_layout() {
        let rows = vec![
            FeatureRow {
                period: 1.0,
                category: Category::ProductA,
                quantity: 10.0,
            },
            FeatureRow {
                period: 2.0,
                category: Category::ProductB,
                quantity: 20.0,
            },
        ];
        let data = encode(&rows);

        assert_eq!(data.inputs.nrows(), 2);
        assert_eq!(data.inputs.ncols(), N_FEATURES);
        assert_eq!(data.n_rows(), 2);
        assert_eq!(data.inputs[(0, 0)], 1.0);
        assert_eq!(data.inputs[(0, 1)], 0.0);
        assert_eq!(data.inputs[(1, 0)], 2.0);
        assert_eq!(data.inputs[(1, 1)], 1.0);
        assert_eq!(data.targets[0], 10.0);
        assert_eq!(data.targets[1], 20.0);
    }

    #[test]
    fn test_nan_passes_through_unfiltered() {
        let rows = vec![FeatureRow {
            period: f64::NAN,
            category: Category::ProductB,
            quantity: f64::NAN,
        }];
        let data = encode(&rows);

        assert_eq!(data.n_rows(), 1);
        assert!(data.inputs[(0, 0)].is_nan());
        assert!(data.targets[0].is_nan());
    }

    #[test]
    fn test_empty_training_set_encodes_empty() {
        let data = encode(&[]);
        assert_eq!(data.n_rows(), 0);
    }
}
