//! Weighted-threshold rule scorer.
//!
//! Additive scheme: each fired threshold contributes a fixed weight and the
//! sum is clamped at 1.0. The weights sum to exactly 1.0 today, so the clamp
//! is a no-op in the all-fired case, but it stays load-bearing if the weights
//! are ever retuned.

use crate::domain::{VitalField, VitalSample};

/// Per-channel trigger weights, in fixed field order.
pub const WEIGHT_HEART_RATE: f64 = 0.30;
pub const WEIGHT_SYSTOLIC_BP: f64 = 0.30;
pub const WEIGHT_SPO2: f64 = 0.25;
pub const WEIGHT_TEMPERATURE: f64 = 0.15;

/// Per-channel trigger thresholds.
pub const THRESHOLD_HEART_RATE: f64 = 100.0;
pub const THRESHOLD_SYSTOLIC_BP: f64 = 100.0;
pub const THRESHOLD_SPO2: f64 = 94.0;
pub const THRESHOLD_TEMPERATURE: f64 = 38.0;

fn triggers(sample: &VitalSample) -> [bool; 4] {
    [
        sample.heart_rate > THRESHOLD_HEART_RATE,
        sample.systolic_bp < THRESHOLD_SYSTOLIC_BP,
        sample.spo2 < THRESHOLD_SPO2,
        sample.temperature > THRESHOLD_TEMPERATURE,
    ]
}

/// Score one sample in [0,1]. Pure function of the four fields.
pub fn score_rule(sample: &VitalSample) -> f64 {
    let fired = triggers(sample);
    let weights = [
        WEIGHT_HEART_RATE,
        WEIGHT_SYSTOLIC_BP,
        WEIGHT_SPO2,
        WEIGHT_TEMPERATURE,
    ];

    let mut risk = 0.0;
    for (fired, weight) in fired.iter().zip(weights) {
        if *fired {
            risk += weight;
        }
    }
    risk.min(1.0)
}

/// Names of every threshold that fired, in fixed field order.
///
/// Display-only companion to [`score_rule`]; never fed back into scoring.
pub fn explain(sample: &VitalSample) -> Vec<VitalField> {
    triggers(sample)
        .iter()
        .zip(VitalField::ALL)
        .filter(|(fired, _)| **fired)
        .map(|(_, field)| field)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(heart_rate: f64, systolic_bp: f64, spo2: f64, temperature: f64) -> VitalSample {
        VitalSample { hour: 0, heart_rate, systolic_bp, spo2, temperature }
    }

    #[test]
    fn all_triggers_score_exactly_one() {
        assert_eq!(score_rule(&sample(150.0, 80.0, 85.0, 39.0)), 1.0);
    }

    #[test]
    fn no_triggers_score_exactly_zero() {
        assert_eq!(score_rule(&sample(80.0, 120.0, 98.0, 37.0)), 0.0);
    }

    #[test]
    fn score_stays_in_unit_interval() {
        let extremes = [
            sample(300.0, 20.0, 50.0, 43.0),
            sample(0.0, 300.0, 100.0, 30.0),
            sample(101.0, 99.0, 93.9, 38.1),
        ];
        for s in &extremes {
            let risk = score_rule(s);
            assert!((0.0..=1.0).contains(&risk), "score {risk} out of range");
        }
    }

    #[test]
    fn each_trigger_is_monotonic() {
        let base = sample(80.0, 120.0, 98.0, 37.0);
        assert!(score_rule(&sample(150.0, 120.0, 98.0, 37.0)) > score_rule(&base));
        assert!(score_rule(&sample(80.0, 80.0, 98.0, 37.0)) > score_rule(&base));
        assert!(score_rule(&sample(80.0, 120.0, 85.0, 37.0)) > score_rule(&base));
        assert!(score_rule(&sample(80.0, 120.0, 98.0, 39.0)) > score_rule(&base));
    }

    #[test]
    fn thresholds_are_strict_comparisons() {
        // Values exactly at a threshold do not fire.
        assert_eq!(score_rule(&sample(100.0, 100.0, 94.0, 38.0)), 0.0);
    }

    #[test]
    fn explain_lists_fired_thresholds_in_field_order() {
        let reasons = explain(&sample(150.0, 120.0, 85.0, 39.0));
        assert_eq!(
            reasons,
            vec![VitalField::HeartRate, VitalField::Spo2, VitalField::Temperature]
        );
        assert!(explain(&sample(80.0, 120.0, 98.0, 37.0)).is_empty());
    }

    #[test]
    fn partial_trigger_weights_add_up() {
        let risk = score_rule(&sample(150.0, 120.0, 85.0, 37.0));
        assert!((risk - 0.55).abs() < 1e-12);
    }
}
