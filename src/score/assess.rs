//! Per-trajectory risk assessment.
//!
//! This is the seam between the pure scorers and whatever presentation layer
//! consumes them: one assessment per sample, in hour order, each classified
//! against the configured thresholds.

use crate::domain::{RiskAssessment, Strategy, Thresholds, Trajectory};
use crate::error::{AppError, ErrorKind};
use crate::score::logistic::LogisticModel;
use crate::score::rule::score_rule;

/// Score every sample of a trajectory with the chosen strategy.
///
/// The logistic strategy requires a fitted model; passing `None` fails with
/// `NotFitted` rather than silently falling back to the rule scorer.
pub fn score_trajectory(
    trajectory: &Trajectory,
    strategy: Strategy,
    model: Option<&LogisticModel>,
    thresholds: &Thresholds,
) -> Result<Vec<RiskAssessment>, AppError> {
    thresholds.validate()?;

    let scores: Vec<f64> = match strategy {
        Strategy::Rule => trajectory.samples.iter().map(score_rule).collect(),
        Strategy::Logistic => {
            let model = model.ok_or_else(|| {
                AppError::new(
                    ErrorKind::NotFitted,
                    "Logistic strategy selected but no fitted model was provided.",
                )
            })?;
            model.predict_batch(&trajectory.samples)
        }
    };

    Ok(scores
        .into_iter()
        .map(|risk_score| RiskAssessment {
            risk_score,
            level: thresholds.classify(risk_score),
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{generate_trajectory, synthesize_training_set};
    use crate::domain::{RiskLevel, ScenarioMode};
    use crate::score::logistic::{DEFAULT_RIDGE, fit_model};

    #[test]
    fn rule_assessments_are_parallel_to_samples() {
        let traj = generate_trajectory(48, ScenarioMode::Severe, Some(42)).unwrap();
        let assessments =
            score_trajectory(&traj, Strategy::Rule, None, &Thresholds::default()).unwrap();

        assert_eq!(assessments.len(), traj.samples.len());
        for (sample, assessment) in traj.samples.iter().zip(&assessments) {
            assert_eq!(assessment.risk_score, score_rule(sample));
            assert_eq!(
                assessment.level,
                Thresholds::default().classify(assessment.risk_score)
            );
        }
    }

    #[test]
    fn logistic_without_model_is_not_fitted() {
        let traj = generate_trajectory(48, ScenarioMode::Stable, Some(1)).unwrap();
        let err = score_trajectory(&traj, Strategy::Logistic, None, &Thresholds::default())
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFitted);
    }

    #[test]
    fn logistic_assessments_stay_in_open_interval() {
        let examples = synthesize_training_set(500, Some(42)).unwrap();
        let model = fit_model(&examples, DEFAULT_RIDGE).unwrap();
        let traj = generate_trajectory(48, ScenarioMode::Severe, Some(42)).unwrap();

        let assessments =
            score_trajectory(&traj, Strategy::Logistic, Some(&model), &Thresholds::default())
                .unwrap();
        assert_eq!(assessments.len(), 48);
        for a in &assessments {
            assert!(a.risk_score > 0.0 && a.risk_score < 1.0);
        }
    }

    #[test]
    fn bad_thresholds_are_rejected_before_scoring() {
        let traj = generate_trajectory(10, ScenarioMode::Stable, Some(1)).unwrap();
        let thr = Thresholds { low: 0.9, high: 0.1 };
        let err = score_trajectory(&traj, Strategy::Rule, None, &thr).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn severe_course_ends_critical_under_the_rule() {
        let traj = generate_trajectory(48, ScenarioMode::Severe, Some(42)).unwrap();
        let assessments =
            score_trajectory(&traj, Strategy::Rule, None, &Thresholds::default()).unwrap();
        assert_eq!(assessments.last().unwrap().level, RiskLevel::Critical);
    }
}
