//! Formatted terminal output for simulation runs.

use crate::domain::{RiskAssessment, SimConfig, Strategy, Trajectory, VitalField};
use crate::report::RiskSummary;
use crate::score::logistic::LogisticModel;
use crate::score::rule::explain;

/// Format the full run summary (config + channel stats + risk summary).
pub fn format_run_summary(
    trajectory: &Trajectory,
    summary: &RiskSummary,
    config: &SimConfig,
    model: Option<&LogisticModel>,
) -> String {
    let mut out = String::new();

    out.push_str("=== ews - Early-Warning Simulation ===\n");
    out.push_str(&format!("Scenario: {}\n", trajectory.mode.display_name()));
    out.push_str(&format!(
        "Duration: {}h | seed: {}\n",
        trajectory.hours(),
        config
            .seed
            .map(|s| s.to_string())
            .unwrap_or_else(|| "entropy".to_string()),
    ));
    out.push_str(&format!(
        "Strategy: {} | thresholds: low={:.2} high={:.2}\n",
        config.strategy.display_name(),
        config.thresholds.low,
        config.thresholds.high,
    ));

    out.push_str("\nChannel stats:\n");
    for field in VitalField::ALL {
        let stats = trajectory.stats.channel(field);
        out.push_str(&format!(
            "  {:<12} min={:>7.2} mean={:>7.2} max={:>7.2}\n",
            field.display_name(),
            stats.min,
            stats.mean,
            stats.max
        ));
    }

    out.push_str("\nRisk summary:\n");
    out.push_str(&format!(
        "  final: {:.3} ({}) | peak: {:.3} at hour {}\n",
        summary.final_score,
        summary.final_level.display_name(),
        summary.peak_score,
        summary.peak_hour
    ));
    out.push_str(&format!(
        "  hours by level: Stable={} Moderate={} Critical={}\n",
        summary.level_counts[0], summary.level_counts[1], summary.level_counts[2]
    ));
    out.push_str(&format!(
        "  first Moderate: {} | first Critical: {}\n",
        fmt_hour(summary.first_moderate),
        fmt_hour(summary.first_critical)
    ));

    match config.strategy {
        Strategy::Rule => {
            if let Some(last) = trajectory.samples.last() {
                let reasons = explain(last);
                if reasons.is_empty() {
                    out.push_str("  final-hour triggers: none\n");
                } else {
                    let labels: Vec<&str> = reasons.iter().map(|f| f.reason_label()).collect();
                    out.push_str(&format!("  final-hour triggers: {}\n", labels.join(", ")));
                }
            }
        }
        Strategy::Logistic => {
            if let Some(model) = model {
                out.push_str(&format_importance(model));
            }
        }
    }

    out
}

/// Format the descending feature-importance ranking of a fitted model.
pub fn format_importance(model: &LogisticModel) -> String {
    let mut out = String::new();
    out.push_str("  feature importance (|weight|, descending):\n");
    for entry in model.feature_importance() {
        out.push_str(&format!(
            "    {:<12} {:.4}\n",
            entry.field.display_name(),
            entry.weight_abs
        ));
    }
    out
}

/// Format the per-hour table (for `ews table` and debug bundles).
pub fn format_hourly_table(trajectory: &Trajectory, assessments: &[RiskAssessment]) -> String {
    let mut out = String::new();
    out.push_str("hour |     hr |    sbp |  spo2 |  temp |  risk | level\n");
    out.push_str("-----+--------+--------+-------+-------+-------+---------\n");
    for (sample, assessment) in trajectory.samples.iter().zip(assessments) {
        out.push_str(&format!(
            "{:>4} | {:>6.1} | {:>6.1} | {:>5.1} | {:>5.1} | {:>5.3} | {}\n",
            sample.hour,
            sample.heart_rate,
            sample.systolic_bp,
            sample.spo2,
            sample.temperature,
            assessment.risk_score,
            assessment.level.display_name(),
        ));
    }
    out
}

fn fmt_hour(hour: Option<u32>) -> String {
    match hour {
        Some(h) => format!("hour {h}"),
        None => "never".to_string(),
    }
}
