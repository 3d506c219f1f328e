//! Reporting utilities: run summaries and formatted terminal output.
//!
//! We keep formatting code in one place so:
//! - the generator/scorer code stays clean and testable
//! - output changes are localized

use crate::domain::{RiskAssessment, RiskLevel};

pub mod format;

pub use format::*;

/// Derived summary of a scored run (all values computed from the
/// assessments, never injected).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiskSummary {
    pub final_score: f64,
    pub final_level: RiskLevel,
    pub peak_score: f64,
    pub peak_hour: u32,
    /// Hours spent at each level, indexed Stable/Moderate/Critical.
    pub level_counts: [usize; 3],
    /// First hour at or above the Moderate threshold.
    pub first_moderate: Option<u32>,
    /// First hour at or above the Critical threshold.
    pub first_critical: Option<u32>,
}

/// Summarize a scored trajectory. Returns `None` for an empty run.
pub fn summarize(assessments: &[RiskAssessment]) -> Option<RiskSummary> {
    let last = assessments.last()?;

    let mut level_counts = [0usize; 3];
    let mut first_moderate = None;
    let mut first_critical = None;
    let mut peak_score = f64::NEG_INFINITY;
    let mut peak_hour = 0u32;

    for (hour, a) in assessments.iter().enumerate() {
        let hour = hour as u32;
        level_counts[a.level as usize] += 1;
        if a.level >= RiskLevel::Moderate && first_moderate.is_none() {
            first_moderate = Some(hour);
        }
        if a.level == RiskLevel::Critical && first_critical.is_none() {
            first_critical = Some(hour);
        }
        if a.risk_score > peak_score {
            peak_score = a.risk_score;
            peak_hour = hour;
        }
    }

    Some(RiskSummary {
        final_score: last.risk_score,
        final_level: last.level,
        peak_score,
        peak_hour,
        level_counts,
        first_moderate,
        first_critical,
    })
}
