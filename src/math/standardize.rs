//! Per-feature standardization (zero mean, unit variance).
//!
//! The logistic scorer fits the scaler on its training set and applies the
//! same parameters at prediction time. A degenerate feature (zero variance)
//! maps to 0 instead of dividing by zero.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StandardScaler {
    pub mean: f64,
    pub std: f64,
}

impl StandardScaler {
    pub fn fit(xs: &[f64]) -> Self {
        if xs.is_empty() {
            return Self { mean: 0.0, std: 0.0 };
        }
        let mean = xs.iter().sum::<f64>() / xs.len() as f64;
        let mut var = 0.0;
        for &x in xs {
            let d = x - mean;
            var += d * d;
        }
        var /= xs.len() as f64;
        Self { mean, std: var.sqrt() }
    }

    pub fn transform(&self, x: f64) -> f64 {
        if self.std == 0.0 {
            0.0
        } else {
            (x - self.mean) / self.std
        }
    }
}
