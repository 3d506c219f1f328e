//! Shared simulation pipeline used by the CLI front-end.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! generate -> (fit or load model) -> score -> summarize
//!
//! The CLI can then focus on presentation (printing vs exports). The model
//! lifecycle is deliberately explicit: the logistic model is fit (or loaded)
//! once per run and injected into scoring, never refit per sample.

use crate::data::{generate_trajectory, synthesize_training_set};
use crate::domain::{RiskAssessment, SimConfig, Strategy, Trajectory, TrainConfig};
use crate::error::{AppError, ErrorKind};
use crate::io::model::read_model_json;
use crate::report::{RiskSummary, summarize};
use crate::score::assess::score_trajectory;
use crate::score::logistic::{DEFAULT_RIDGE, LogisticModel, fit_model};

/// All computed outputs of a single simulation run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub trajectory: Trajectory,
    pub assessments: Vec<RiskAssessment>,
    pub summary: RiskSummary,
    /// Present only for the logistic strategy.
    pub model: Option<LogisticModel>,
}

/// Execute the full simulation pipeline and return the computed outputs.
pub fn run_simulation(config: &SimConfig) -> Result<RunOutput, AppError> {
    config.thresholds.validate()?;

    let trajectory = generate_trajectory(config.hours, config.mode, config.seed)?;

    let model = match config.strategy {
        Strategy::Rule => None,
        Strategy::Logistic => Some(resolve_model(config)?),
    };

    let assessments =
        score_trajectory(&trajectory, config.strategy, model.as_ref(), &config.thresholds)?;
    let summary = summarize(&assessments).ok_or_else(|| {
        AppError::new(ErrorKind::Numeric, "Scored run produced no assessments.")
    })?;

    Ok(RunOutput { trajectory, assessments, summary, model })
}

/// Fit a logistic model per the training configuration.
pub fn run_training(config: &TrainConfig) -> Result<LogisticModel, AppError> {
    let examples = synthesize_training_set(config.examples, config.seed)?;
    fit_model(&examples, config.ridge)
}

/// Load the model from disk when a path was given, otherwise fit a fresh one
/// on a synthetic training set (seeded alongside the trajectory).
fn resolve_model(config: &SimConfig) -> Result<LogisticModel, AppError> {
    match &config.model_path {
        Some(path) => read_model_json(path),
        None => {
            let examples = synthesize_training_set(config.train_examples, config.seed)?;
            fit_model(&examples, DEFAULT_RIDGE)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{RiskLevel, ScenarioMode, Thresholds};

    fn config(mode: ScenarioMode, strategy: Strategy, seed: Option<u64>) -> SimConfig {
        SimConfig {
            hours: 48,
            mode,
            seed,
            strategy,
            thresholds: Thresholds::default(),
            model_path: None,
            train_examples: 500,
            plot: false,
            plot_width: 72,
            plot_height: 18,
            export_results: None,
            debug_bundle: false,
        }
    }

    #[test]
    fn severe_rule_run_ends_critical() {
        let run =
            run_simulation(&config(ScenarioMode::Severe, Strategy::Rule, Some(42))).unwrap();
        assert_eq!(run.assessments.len(), 48);
        assert_eq!(run.summary.final_level, RiskLevel::Critical);
        assert!(run.summary.first_critical.is_some());
        assert!(run.model.is_none());
    }

    #[test]
    fn logistic_run_fits_a_fresh_model_when_none_is_given() {
        let run =
            run_simulation(&config(ScenarioMode::Early, Strategy::Logistic, Some(7))).unwrap();
        assert!(run.model.is_some());
        for a in &run.assessments {
            assert!(a.risk_score > 0.0 && a.risk_score < 1.0);
        }
    }

    #[test]
    fn seeded_runs_are_reproducible_end_to_end() {
        let cfg = config(ScenarioMode::Severe, Strategy::Logistic, Some(11));
        let a = run_simulation(&cfg).unwrap();
        let b = run_simulation(&cfg).unwrap();
        assert_eq!(a.assessments, b.assessments);
        assert_eq!(a.summary, b.summary);
    }

    #[test]
    fn training_pipeline_produces_a_usable_model() {
        let cfg = TrainConfig {
            examples: 300,
            seed: Some(5),
            ridge: DEFAULT_RIDGE,
            out: "unused.json".into(),
        };
        let model = run_training(&cfg).unwrap();
        assert_eq!(model.n_train, 300);
        assert_eq!(model.feature_importance().len(), 4);
    }
}
