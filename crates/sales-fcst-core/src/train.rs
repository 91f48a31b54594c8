//! Regression trainer: a small feed-forward network fit with Adam.
//!
//! The architecture is fixed: one dense hidden layer of ReLU units on the
//! two input features, one linear output unit. The fit is full-batch
//! gradient descent on mean squared error for a fixed number of passes; no
//! validation split, no early stopping, no regularization, and no way to
//! interrupt a fit once started.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::encode::{TrainingData, N_FEATURES};
use crate::error::{PipelineError, Result};

/// Training hyperparameters.
#[derive(Debug, Clone)]
pub struct TrainConfig {
    /// Hidden layer width.
    pub hidden_units: usize,
    /// Full-batch passes over the data.
    pub epochs: usize,
    /// Adam step size.
    pub learning_rate: f64,
    /// Adam first-moment decay.
    pub beta1: f64,
    /// Adam second-moment decay.
    pub beta2: f64,
    /// Adam numerical-stability constant.
    pub epsilon: f64,
    /// Seed for weight initialization.
    pub seed: u64,
}

impl Default for TrainConfig {
    fn default() -> Self {
        Self {
            hidden_units: 10,
            epochs: 100,
            learning_rate: 1e-3,
            beta1: 0.9,
            beta2: 0.999,
            epsilon: 1e-8,
            seed: 42,
        }
    }
}

/// Fitted regression model mapping (period, category) to quantity.
///
/// Immutable once the fit completes; a retrain produces a fresh model.
#[derive(Debug, Clone)]
pub struct SalesModel {
    /// Hidden weights, flat layout: `w1[j * N_FEATURES + i]` for hidden
    /// unit j and input feature i.
    w1: Vec<f64>,
    /// Hidden biases, one per unit.
    b1: Vec<f64>,
    /// Output weights, one per hidden unit.
    w2: Vec<f64>,
    /// Output bias.
    b2: f64,
}

impl SalesModel {
    /// Predict the quantity for one (period, category) input.
    ///
    /// Pure forward inference: repeated calls with the same inputs return
    /// identical values.
    pub fn predict(&self, period: f64, category: f64) -> f64 {
        let mut output = self.b2;
        for j in 0..self.b1.len() {
            let pre =
                self.w1[j * N_FEATURES] * period + self.w1[j * N_FEATURES + 1] * category
                    + self.b1[j];
            output += self.w2[j] * relu(pre);
        }
        output
    }

    /// Hidden layer width of the fitted network.
    pub fn hidden_units(&self) -> usize {
        self.b1.len()
    }
}

// f64::max would swallow a NaN activation; keep it flowing.
fn relu(x: f64) -> f64 {
    if x.is_nan() {
        x
    } else {
        x.max(0.0)
    }
}

/// Fit the network on encoded training data.
///
/// Runs exactly `config.epochs` full-batch Adam steps regardless of
/// convergence. Fails when the matrix is empty or the target vector has no
/// finite entry; a partially NaN target is accepted and degrades the fit
/// silently.
pub fn fit(data: &TrainingData, config: &TrainConfig) -> Result<SalesModel> {
    let n = data.n_rows();
    if n == 0 {
        return Err(PipelineError::InsufficientData { needed: 1, got: 0 });
    }
    if config.hidden_units == 0 {
        return Err(PipelineError::InvalidInput(
            "hidden_units must be at least 1".into(),
        ));
    }
    let n_finite = (0..n).filter(|&i| data.targets[i].is_finite()).count();
    if n_finite == 0 {
        return Err(PipelineError::ComputationError(
            "target vector has no finite entries".into(),
        ));
    }

    let h = config.hidden_units;
    let mut rng = StdRng::seed_from_u64(config.seed);

    // Glorot-uniform weights, zero biases.
    let limit1 = (6.0 / (N_FEATURES + h) as f64).sqrt();
    let mut w1: Vec<f64> = (0..h * N_FEATURES)
        .map(|_| rng.gen_range(-limit1..limit1))
        .collect();
    let mut b1 = vec![0.0; h];
    let limit2 = (6.0 / (h + 1) as f64).sqrt();
    let mut w2: Vec<f64> = (0..h).map(|_| rng.gen_range(-limit2..limit2)).collect();
    let mut b2 = 0.0;

    let mut opt_w1 = Adam::new(h * N_FEATURES, config);
    let mut opt_b1 = Adam::new(h, config);
    let mut opt_w2 = Adam::new(h, config);
    let mut opt_b2 = Adam::new(1, config);

    let mut grad_w1 = vec![0.0; h * N_FEATURES];
    let mut grad_b1 = vec![0.0; h];
    let mut grad_w2 = vec![0.0; h];
    let mut hidden = vec![0.0; h];
    let mut active = vec![false; h];

    let inv_n = 1.0 / n as f64;
    let mut loss = 0.0;

    for epoch in 0..config.epochs {
        grad_w1.iter_mut().for_each(|g| *g = 0.0);
        grad_b1.iter_mut().for_each(|g| *g = 0.0);
        grad_w2.iter_mut().for_each(|g| *g = 0.0);
        let mut grad_b2 = 0.0;
        loss = 0.0;

        for row in 0..n {
            let x0 = data.inputs[(row, 0)];
            let x1 = data.inputs[(row, 1)];
            let y = data.targets[row];

            let mut output = b2;
            for j in 0..h {
                let pre = w1[j * N_FEATURES] * x0 + w1[j * N_FEATURES + 1] * x1 + b1[j];
                active[j] = pre > 0.0;
                hidden[j] = relu(pre);
                output += w2[j] * hidden[j];
            }

            let err = output - y;
            loss += err * err * inv_n;

            let d_out = 2.0 * err * inv_n;
            grad_b2 += d_out;
            for j in 0..h {
                grad_w2[j] += d_out * hidden[j];
                if active[j] {
                    let d_pre = d_out * w2[j];
                    grad_w1[j * N_FEATURES] += d_pre * x0;
                    grad_w1[j * N_FEATURES + 1] += d_pre * x1;
                    grad_b1[j] += d_pre;
                }
            }
        }

        opt_w1.step(&mut w1, &grad_w1);
        opt_b1.step(&mut b1, &grad_b1);
        opt_w2.step(&mut w2, &grad_w2);
        opt_b2.step(std::slice::from_mut(&mut b2), &[grad_b2]);

        if epoch % 10 == 0 {
            tracing::debug!(epoch, loss, "training pass complete");
        }
    }

    tracing::info!(epochs = config.epochs, loss, "model trained");

    Ok(SalesModel { w1, b1, w2, b2 })
}

/// Adam state for one parameter tensor.
struct Adam {
    m: Vec<f64>,
    v: Vec<f64>,
    t: i32,
    lr: f64,
    beta1: f64,
    beta2: f64,
    epsilon: f64,
}

impl Adam {
    fn new(len: usize, config: &TrainConfig) -> Self {
        Self {
            m: vec![0.0; len],
            v: vec![0.0; len],
            t: 0,
            lr: config.learning_rate,
            beta1: config.beta1,
            beta2: config.beta2,
            epsilon: config.epsilon,
        }
    }

    /// One bias-corrected update: `p -= lr * m_hat / (sqrt(v_hat) + eps)`.
    fn step(&mut self, params: &mut [f64], grads: &[f64]) {
        self.t += 1;
        let correction1 = 1.0 - self.beta1.powi(self.t);
        let correction2 = 1.0 - self.beta2.powi(self.t);

        for (i, (p, g)) in params.iter_mut().zip(grads).enumerate() {
            self.m[i] = self.beta1 * self.m[i] + (1.0 - self.beta1) * g;
            self.v[i] = self.beta2 * self.v[i] + (1.0 - self.beta2) * g * g;
            let m_hat = self.m[i] / correction1;
            let v_hat = self.v[i] / correction2;
            *p -= self.lr * m_hat / (v_hat.sqrt() + self.epsilon);
        }
    }
}
