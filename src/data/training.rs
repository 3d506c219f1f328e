//! Synthetic training-set generation for the logistic strategy.
//!
//! Features are drawn iid from fixed normal distributions; the label is a
//! deterministic OR of per-channel rules over the drawn values. Note that
//! this labeling rule is deliberately distinct from the weighted-threshold
//! rule scorer: the two strategies are independent by design.

use rand::prelude::*;
use rand::rngs::StdRng;
use rand_distr::Normal;

use crate::domain::TrainingExample;
use crate::error::{AppError, ErrorKind};

/// Training feature distributions, in fixed field order
/// {heart_rate, systolic_bp, spo2, temperature}.
const TRAIN_MEANS: [f64; 4] = [85.0, 120.0, 96.0, 37.0];
const TRAIN_SDS: [f64; 4] = [15.0, 20.0, 3.0, 0.6];

/// Labeling rule applied at generation time.
fn deteriorating(heart_rate: f64, systolic_bp: f64, spo2: f64) -> bool {
    heart_rate > 100.0 || systolic_bp < 95.0 || spo2 < 92.0
}

/// Synthesize `n` labeled training examples.
///
/// Seeded generation is bit-reproducible; `None` draws from entropy.
pub fn synthesize_training_set(
    n: usize,
    seed: Option<u64>,
) -> Result<Vec<TrainingExample>, AppError> {
    if n == 0 {
        return Err(AppError::new(
            ErrorKind::InvalidArgument,
            "Training set size must be > 0.",
        ));
    }

    let mut rng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    };
    let normal = Normal::new(0.0, 1.0)
        .map_err(|e| AppError::new(ErrorKind::Numeric, format!("Noise distribution error: {e}")))?;

    let mut examples = Vec::with_capacity(n);
    for _ in 0..n {
        let mut values = [0.0f64; 4];
        for (value, (mean, sd)) in values
            .iter_mut()
            .zip(TRAIN_MEANS.iter().zip(TRAIN_SDS.iter()))
        {
            let z: f64 = normal.sample(&mut rng);
            *value = mean + sd * z;
        }
        examples.push(TrainingExample {
            heart_rate: values[0],
            systolic_bp: values[1],
            spo2: values[2],
            temperature: values[3],
            label: deteriorating(values[0], values[1], values[2]),
        });
    }

    Ok(examples)
}
