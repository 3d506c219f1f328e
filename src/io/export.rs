//! Export per-hour results to CSV.
//!
//! The export is meant to be easy to consume in spreadsheets or downstream
//! scripts.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::domain::{RiskAssessment, Strategy, Trajectory};
use crate::error::{AppError, ErrorKind};
use crate::score::rule::explain;

/// Write per-hour results to a CSV file.
///
/// The `reasons` column lists fired thresholds (pipe-separated) and is only
/// populated for the rule strategy; the logistic model has no per-row
/// trigger set.
pub fn write_results_csv(
    path: &Path,
    trajectory: &Trajectory,
    assessments: &[RiskAssessment],
    strategy: Strategy,
) -> Result<(), AppError> {
    let mut file = File::create(path).map_err(|e| {
        AppError::new(
            ErrorKind::Io,
            format!("Failed to create export CSV '{}': {e}", path.display()),
        )
    })?;

    // Header
    writeln!(
        file,
        "hour,heart_rate,systolic_bp,spo2,temperature,risk_score,level,reasons"
    )
    .map_err(|e| AppError::new(ErrorKind::Io, format!("Failed to write export CSV header: {e}")))?;

    for (sample, assessment) in trajectory.samples.iter().zip(assessments) {
        let reasons = match strategy {
            Strategy::Rule => explain(sample)
                .iter()
                .map(|f| f.reason_label())
                .collect::<Vec<_>>()
                .join("|"),
            Strategy::Logistic => String::new(),
        };
        writeln!(
            file,
            "{},{:.2},{:.2},{:.2},{:.2},{:.4},{},{}",
            sample.hour,
            sample.heart_rate,
            sample.systolic_bp,
            sample.spo2,
            sample.temperature,
            assessment.risk_score,
            assessment.level.display_name(),
            reasons,
        )
        .map_err(|e| AppError::new(ErrorKind::Io, format!("Failed to write export CSV row: {e}")))?;
    }

    Ok(())
}
