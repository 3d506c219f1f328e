//! Read/write model JSON files.
//!
//! Model JSON is the "portable" representation of a fitted logistic scorer:
//! - standardization parameters per feature
//! - weight vector + bias
//! - fit metadata (training size, ridge, creation timestamp)
//!
//! `ews train` writes it; `ews simulate --strategy logistic --model f.json`
//! reloads it, so the fit-once/inject-everywhere lifecycle works across
//! processes.

use std::fs::File;
use std::path::Path;

use chrono::Local;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, ErrorKind};
use crate::math::StandardScaler;
use crate::score::logistic::LogisticModel;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelFile {
    pub tool: String,
    pub created: String,
    pub n_train: usize,
    pub ridge: f64,
    pub scalers: Vec<StandardScaler>,
    pub weights: Vec<f64>,
    pub bias: f64,
}

impl ModelFile {
    pub fn from_model(model: &LogisticModel) -> Self {
        Self {
            tool: "ews".to_string(),
            created: Local::now().to_rfc3339(),
            n_train: model.n_train,
            ridge: model.ridge,
            scalers: model.scalers().to_vec(),
            weights: model.weights().to_vec(),
            bias: model.bias(),
        }
    }

    pub fn into_model(self) -> Result<LogisticModel, AppError> {
        let scalers: [StandardScaler; 4] = self.scalers.as_slice().try_into().map_err(|_| {
            AppError::new(
                ErrorKind::InvalidArgument,
                format!("Model file has {} scalers, expected 4.", self.scalers.len()),
            )
        })?;
        let weights: [f64; 4] = self.weights.as_slice().try_into().map_err(|_| {
            AppError::new(
                ErrorKind::InvalidArgument,
                format!("Model file has {} weights, expected 4.", self.weights.len()),
            )
        })?;

        let finite = weights.iter().all(|w| w.is_finite())
            && self.bias.is_finite()
            && scalers.iter().all(|s| s.mean.is_finite() && s.std.is_finite());
        if !finite {
            return Err(AppError::new(
                ErrorKind::InvalidArgument,
                "Model file contains non-finite parameters.",
            ));
        }

        Ok(LogisticModel::from_parts(
            scalers, weights, self.bias, self.n_train, self.ridge,
        ))
    }
}

/// Write a model JSON file.
pub fn write_model_json(path: &Path, model: &LogisticModel) -> Result<(), AppError> {
    let file = File::create(path).map_err(|e| {
        AppError::new(
            ErrorKind::Io,
            format!("Failed to create model JSON '{}': {e}", path.display()),
        )
    })?;

    serde_json::to_writer_pretty(file, &ModelFile::from_model(model))
        .map_err(|e| AppError::new(ErrorKind::Io, format!("Failed to write model JSON: {e}")))?;

    Ok(())
}

/// Read a model JSON file.
pub fn read_model_json(path: &Path) -> Result<LogisticModel, AppError> {
    let file = File::open(path).map_err(|e| {
        AppError::new(
            ErrorKind::Io,
            format!("Failed to open model JSON '{}': {e}", path.display()),
        )
    })?;
    let parsed: ModelFile = serde_json::from_reader(file)
        .map_err(|e| AppError::new(ErrorKind::InvalidArgument, format!("Invalid model JSON: {e}")))?;
    parsed.into_model()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::synthesize_training_set;
    use crate::domain::VitalSample;
    use crate::score::logistic::{DEFAULT_RIDGE, fit_model};

    #[test]
    fn model_survives_a_serde_round_trip() {
        let examples = synthesize_training_set(200, Some(3)).unwrap();
        let model = fit_model(&examples, DEFAULT_RIDGE).unwrap();

        let json = serde_json::to_string(&ModelFile::from_model(&model)).unwrap();
        let reloaded: ModelFile = serde_json::from_str(&json).unwrap();
        let reloaded = reloaded.into_model().unwrap();

        let sample = VitalSample {
            hour: 0,
            heart_rate: 110.0,
            systolic_bp: 90.0,
            spo2: 91.0,
            temperature: 38.5,
        };
        assert_eq!(model.predict(&sample), reloaded.predict(&sample));
        assert_eq!(model.weights(), reloaded.weights());
    }

    #[test]
    fn malformed_parameter_counts_are_rejected() {
        let bad = ModelFile {
            tool: "ews".to_string(),
            created: String::new(),
            n_train: 10,
            ridge: 1.0,
            scalers: vec![StandardScaler { mean: 0.0, std: 1.0 }; 3],
            weights: vec![0.1; 4],
            bias: 0.0,
        };
        assert!(bad.into_model().is_err());

        let non_finite = ModelFile {
            tool: "ews".to_string(),
            created: String::new(),
            n_train: 10,
            ridge: 1.0,
            scalers: vec![StandardScaler { mean: 0.0, std: 1.0 }; 4],
            weights: vec![0.1, f64::NAN, 0.1, 0.1],
            bias: 0.0,
        };
        assert!(non_finite.into_model().is_err());
    }
}
