//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - input configuration enums (`ScenarioMode`, `Strategy`)
//! - synthetic observations (`VitalSample`, `Trajectory`, `TrainingExample`)
//! - scoring outputs (`RiskAssessment`, `RiskLevel`, `Thresholds`)

pub mod types;

pub use types::*;
