//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - used in-memory during generation and scoring
//! - exported to JSON/CSV
//! - rendered by whatever presentation layer sits on top

use std::path::PathBuf;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, ErrorKind};

/// Which simulated patient course to synthesize.
///
/// `Stable` draws pure baseline noise; the other two add a linear
/// deterioration ramp to a suffix of the series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ScenarioMode {
    Stable,
    Early,
    Severe,
}

impl ScenarioMode {
    /// Human-readable label for terminal output.
    pub fn display_name(self) -> &'static str {
        match self {
            ScenarioMode::Stable => "stable",
            ScenarioMode::Early => "early deterioration",
            ScenarioMode::Severe => "severe deterioration",
        }
    }

    /// Hour index at which the deterioration ramp starts.
    ///
    /// `None` means no ramp is applied for this mode.
    pub fn ramp_offset(self) -> Option<u32> {
        match self {
            ScenarioMode::Stable => None,
            ScenarioMode::Early => Some(28),
            ScenarioMode::Severe => Some(20),
        }
    }
}

/// Which scoring strategy to apply.
///
/// The two strategies are intentionally independent: the rule strategy sums
/// fixed weights for fired thresholds, while the logistic strategy's training
/// labels come from a different OR-of-thresholds rule. They are selectable,
/// never unified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    Rule,
    Logistic,
}

impl Strategy {
    pub fn display_name(self) -> &'static str {
        match self {
            Strategy::Rule => "weighted-threshold rule",
            Strategy::Logistic => "logistic model",
        }
    }
}

/// The four simulated vital-sign channels, in the fixed field order used for
/// explanation output and feature importance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VitalField {
    HeartRate,
    SystolicBp,
    Spo2,
    Temperature,
}

impl VitalField {
    pub const ALL: [VitalField; 4] = [
        VitalField::HeartRate,
        VitalField::SystolicBp,
        VitalField::Spo2,
        VitalField::Temperature,
    ];

    /// Column-style name (exports, importance tables).
    pub fn display_name(self) -> &'static str {
        match self {
            VitalField::HeartRate => "heart_rate",
            VitalField::SystolicBp => "systolic_bp",
            VitalField::Spo2 => "spo2",
            VitalField::Temperature => "temperature",
        }
    }

    /// Human-readable reason label for a fired threshold.
    pub fn reason_label(self) -> &'static str {
        match self {
            VitalField::HeartRate => "Elevated heart rate",
            VitalField::SystolicBp => "Low systolic pressure",
            VitalField::Spo2 => "Low oxygen saturation",
            VitalField::Temperature => "Fever",
        }
    }
}

/// One simulated time point for one synthetic patient.
///
/// Immutable once generated; `hour` is the index into the trajectory.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VitalSample {
    pub hour: u32,
    pub heart_rate: f64,
    pub systolic_bp: f64,
    pub spo2: f64,
    pub temperature: f64,
}

impl VitalSample {
    /// Channel values in fixed field order.
    pub fn features(&self) -> [f64; 4] {
        [self.heart_rate, self.systolic_bp, self.spo2, self.temperature]
    }
}

/// Per-channel summary over a trajectory (for reports and debug bundles).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ChannelStats {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrajectoryStats {
    pub n_samples: usize,
    pub heart_rate: ChannelStats,
    pub systolic_bp: ChannelStats,
    pub spo2: ChannelStats,
    pub temperature: ChannelStats,
}

impl TrajectoryStats {
    pub fn channel(&self, field: VitalField) -> ChannelStats {
        match field {
            VitalField::HeartRate => self.heart_rate,
            VitalField::SystolicBp => self.systolic_bp,
            VitalField::Spo2 => self.spo2,
            VitalField::Temperature => self.temperature,
        }
    }
}

/// An ordered synthetic vital-sign time series for one simulated patient.
///
/// Invariant: `samples[i].hour == i` for all indices.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trajectory {
    pub mode: ScenarioMode,
    pub samples: Vec<VitalSample>,
    pub stats: TrajectoryStats,
}

impl Trajectory {
    pub fn hours(&self) -> u32 {
        self.samples.len() as u32
    }
}

/// One synthetic training observation for the logistic strategy.
///
/// The label is derived at generation time from the fixed OR rule
/// (`heart_rate > 100 OR systolic_bp < 95 OR spo2 < 92`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrainingExample {
    pub heart_rate: f64,
    pub systolic_bp: f64,
    pub spo2: f64,
    pub temperature: f64,
    pub label: bool,
}

impl TrainingExample {
    pub fn features(&self) -> [f64; 4] {
        [self.heart_rate, self.systolic_bp, self.spo2, self.temperature]
    }
}

/// Coarse severity bucket derived from a risk score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Stable,
    Moderate,
    Critical,
}

impl RiskLevel {
    pub const ALL: [RiskLevel; 3] = [RiskLevel::Stable, RiskLevel::Moderate, RiskLevel::Critical];

    pub fn display_name(self) -> &'static str {
        match self {
            RiskLevel::Stable => "Stable",
            RiskLevel::Moderate => "Moderate",
            RiskLevel::Critical => "Critical",
        }
    }
}

/// Risk-level cut points over the score range.
///
/// Ties resolve to the higher-severity bucket: exactly `low` maps to
/// Moderate and exactly `high` maps to Critical.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    pub low: f64,
    pub high: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self { low: 0.4, high: 0.7 }
    }
}

impl Thresholds {
    pub fn validate(&self) -> Result<(), AppError> {
        let ok = self.low.is_finite()
            && self.high.is_finite()
            && self.low >= 0.0
            && self.high <= 1.0
            && self.low < self.high;
        if !ok {
            return Err(AppError::new(
                ErrorKind::InvalidArgument,
                format!(
                    "Invalid risk thresholds: low={} high={} (need 0 <= low < high <= 1).",
                    self.low, self.high
                ),
            ));
        }
        Ok(())
    }

    /// Map a risk score to its severity bucket.
    pub fn classify(&self, risk_score: f64) -> RiskLevel {
        if risk_score < self.low {
            RiskLevel::Stable
        } else if risk_score < self.high {
            RiskLevel::Moderate
        } else {
            RiskLevel::Critical
        }
    }
}

/// Risk output for a single sample. Ephemeral: recomputed per call, never
/// persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub risk_score: f64,
    pub level: RiskLevel,
}

/// A full simulation run's configuration as understood by the pipeline.
///
/// This is derived from CLI flags (plus defaults).
#[derive(Debug, Clone)]
pub struct SimConfig {
    pub hours: u32,
    pub mode: ScenarioMode,
    /// Explicit seed for bit-reproducible runs; `None` draws from entropy.
    pub seed: Option<u64>,
    pub strategy: Strategy,
    pub thresholds: Thresholds,

    /// Previously exported model JSON to reuse for the logistic strategy.
    /// When absent, the pipeline fits a fresh model on a synthetic set.
    pub model_path: Option<PathBuf>,
    /// Training-set size used when fitting a fresh logistic model.
    pub train_examples: usize,

    pub plot: bool,
    pub plot_width: usize,
    pub plot_height: usize,

    pub export_results: Option<PathBuf>,
    pub debug_bundle: bool,
}

/// Configuration for `ews train`.
#[derive(Debug, Clone)]
pub struct TrainConfig {
    pub examples: usize,
    pub seed: Option<u64>,
    pub ridge: f64,
    pub out: PathBuf,
}
