//! Logistic scorer: maximum-likelihood fit over standardized features.
//!
//! Given a labeled training set we:
//!
//! - standardize each feature with the training set's own mean/stddev
//! - fit `P(label=1) = sigmoid(w . x_std + b)` by Newton/IRLS with a small
//!   L2 ridge on the weights (bias unpenalized)
//!
//! The fitted model is immutable after `fit_model` and safe to share
//! read-only across concurrent scoring calls.

use nalgebra::{DMatrix, DVector};

use crate::domain::{TrainingExample, VitalField, VitalSample};
use crate::error::{AppError, ErrorKind};
use crate::math::{StandardScaler, solve_linear_system};

/// Conventional ridge strength (matches common library defaults).
pub const DEFAULT_RIDGE: f64 = 1.0;

const MAX_NEWTON_ITERS: usize = 50;
const CONVERGENCE_TOL: f64 = 1e-8;

/// Clamp for the linear predictor so the sigmoid never saturates to exactly
/// 0.0 or 1.0 in f64.
const LOGIT_CLAMP: f64 = 36.0;

/// A fitted logistic risk model over the four standardized vital channels.
#[derive(Debug, Clone, PartialEq)]
pub struct LogisticModel {
    pub(crate) scalers: [StandardScaler; 4],
    pub(crate) weights: [f64; 4],
    pub(crate) bias: f64,
    pub n_train: usize,
    pub ridge: f64,
}

/// One entry of the descending feature-importance ranking.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureImportance {
    pub field: VitalField,
    pub weight_abs: f64,
}

fn sigmoid(z: f64) -> f64 {
    let z = z.clamp(-LOGIT_CLAMP, LOGIT_CLAMP);
    1.0 / (1.0 + (-z).exp())
}

/// Fit a logistic model on a labeled training set.
///
/// Deterministic for a fixed training set: the Newton iteration has no
/// random component.
pub fn fit_model(examples: &[TrainingExample], ridge: f64) -> Result<LogisticModel, AppError> {
    if examples.is_empty() {
        return Err(AppError::new(
            ErrorKind::InvalidArgument,
            "Cannot fit a logistic model on an empty training set.",
        ));
    }
    if !(ridge.is_finite() && ridge >= 0.0) {
        return Err(AppError::new(
            ErrorKind::InvalidArgument,
            format!("Invalid ridge strength {ridge} (need a finite value >= 0)."),
        ));
    }

    // Standardize each feature column with the training set's own stats.
    let mut scalers = [StandardScaler { mean: 0.0, std: 0.0 }; 4];
    for (k, scaler) in scalers.iter_mut().enumerate() {
        let column: Vec<f64> = examples.iter().map(|e| e.features()[k]).collect();
        *scaler = StandardScaler::fit(&column);
    }

    let n = examples.len();
    let p = 5; // intercept + 4 features

    let mut x = DMatrix::zeros(n, p);
    let mut y = DVector::zeros(n);
    for (i, ex) in examples.iter().enumerate() {
        x[(i, 0)] = 1.0;
        for (k, value) in ex.features().iter().enumerate() {
            x[(i, k + 1)] = scalers[k].transform(*value);
        }
        y[i] = if ex.label { 1.0 } else { 0.0 };
    }

    // Newton/IRLS: solve (X^T W X + ridge R) delta = X^T (y - p) - ridge R beta
    // where R is the identity with a zero in the intercept slot.
    let mut beta = DVector::zeros(p);
    let mut converged = false;

    for _ in 0..MAX_NEWTON_ITERS {
        let eta = &x * &beta;
        let probs = DVector::from_iterator(n, eta.iter().map(|&z| sigmoid(z)));

        let mut hessian = DMatrix::zeros(p, p);
        for i in 0..n {
            let w = (probs[i] * (1.0 - probs[i])).max(1e-10);
            let row = x.row(i);
            for a in 0..p {
                for b in 0..p {
                    hessian[(a, b)] += w * row[a] * row[b];
                }
            }
        }
        let mut gradient = x.transpose() * (&y - &probs);
        for k in 1..p {
            hessian[(k, k)] += ridge;
            gradient[k] -= ridge * beta[k];
        }

        let delta = solve_linear_system(&hessian, &gradient).ok_or_else(|| {
            AppError::new(
                ErrorKind::Numeric,
                "Singular Newton system while fitting the logistic model.",
            )
        })?;
        beta += &delta;

        if delta.norm() < CONVERGENCE_TOL {
            converged = true;
            break;
        }
    }

    if !converged {
        // With the ridge term the iteration is strongly convex; hitting the
        // cap means something upstream produced pathological data.
        return Err(AppError::new(
            ErrorKind::Numeric,
            format!("Logistic fit did not converge within {MAX_NEWTON_ITERS} iterations."),
        ));
    }
    if beta.iter().any(|v| !v.is_finite()) {
        return Err(AppError::new(
            ErrorKind::Numeric,
            "Non-finite coefficients after logistic fit.",
        ));
    }

    Ok(LogisticModel {
        scalers,
        weights: [beta[1], beta[2], beta[3], beta[4]],
        bias: beta[0],
        n_train: n,
        ridge,
    })
}

impl LogisticModel {
    /// Reassemble a model from exported parameters (see `io::model`).
    pub fn from_parts(
        scalers: [StandardScaler; 4],
        weights: [f64; 4],
        bias: f64,
        n_train: usize,
        ridge: f64,
    ) -> Self {
        Self { scalers, weights, bias, n_train, ridge }
    }

    /// Probability of deterioration for one sample, always in (0,1).
    pub fn predict(&self, sample: &VitalSample) -> f64 {
        let mut z = self.bias;
        for ((weight, scaler), value) in self
            .weights
            .iter()
            .zip(self.scalers.iter())
            .zip(sample.features())
        {
            z += weight * scaler.transform(value);
        }
        sigmoid(z)
    }

    /// Scores for an ordered batch, parallel to the input order.
    pub fn predict_batch(&self, samples: &[VitalSample]) -> Vec<f64> {
        samples.iter().map(|s| self.predict(s)).collect()
    }

    /// `|w_i|` per field, sorted descending. Ties break on fixed field order
    /// so the ranking is identical on every call for a fixed model.
    pub fn feature_importance(&self) -> Vec<FeatureImportance> {
        let mut ranking: Vec<FeatureImportance> = VitalField::ALL
            .iter()
            .zip(self.weights.iter())
            .map(|(field, w)| FeatureImportance { field: *field, weight_abs: w.abs() })
            .collect();
        ranking.sort_by(|a, b| {
            b.weight_abs
                .partial_cmp(&a.weight_abs)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        ranking
    }

    pub fn weights(&self) -> [f64; 4] {
        self.weights
    }

    pub fn bias(&self) -> f64 {
        self.bias
    }

    pub fn scalers(&self) -> [StandardScaler; 4] {
        self.scalers
    }
}
