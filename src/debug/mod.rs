//! Debug bundle writer for inspecting a full simulation run.
//!
//! Bundles are plain markdown: config, channel stats, risk summary, the
//! hourly table, and (for the logistic strategy) the fitted parameters.

use std::fs::{File, create_dir_all};
use std::io::Write;
use std::path::PathBuf;

use chrono::Local;

use crate::domain::{RiskAssessment, SimConfig, Trajectory, VitalField};
use crate::error::{AppError, ErrorKind};
use crate::report::{RiskSummary, format_hourly_table};
use crate::score::logistic::LogisticModel;

fn io_err(e: std::io::Error) -> AppError {
    AppError::new(ErrorKind::Io, format!("Failed to write debug bundle: {e}"))
}

pub fn write_debug_bundle(
    trajectory: &Trajectory,
    assessments: &[RiskAssessment],
    summary: &RiskSummary,
    config: &SimConfig,
    model: Option<&LogisticModel>,
) -> Result<PathBuf, AppError> {
    let dir = PathBuf::from("debug");
    create_dir_all(&dir)
        .map_err(|e| AppError::new(ErrorKind::Io, format!("Failed to create debug dir: {e}")))?;

    let ts = Local::now().format("%Y%m%d_%H%M%S");
    let seed = config
        .seed
        .map(|s| s.to_string())
        .unwrap_or_else(|| "entropy".to_string());
    let path = dir.join(format!("ews_debug_{:?}_seed{seed}_{ts}.md", config.mode).to_lowercase());

    let mut file = File::create(&path)
        .map_err(|e| AppError::new(ErrorKind::Io, format!("Failed to create debug file: {e}")))?;

    writeln!(file, "# ews debug bundle").map_err(io_err)?;
    writeln!(file, "- generated: {}", Local::now().to_rfc3339()).map_err(io_err)?;
    writeln!(file, "- scenario: {}", trajectory.mode.display_name()).map_err(io_err)?;
    writeln!(file, "- hours: {}", trajectory.hours()).map_err(io_err)?;
    writeln!(file, "- seed: {seed}").map_err(io_err)?;
    writeln!(file, "- strategy: {}", config.strategy.display_name()).map_err(io_err)?;
    writeln!(
        file,
        "- thresholds: low={:.2} high={:.2}",
        config.thresholds.low, config.thresholds.high
    )
    .map_err(io_err)?;

    writeln!(file, "\n## Channel stats").map_err(io_err)?;
    writeln!(file, "| channel | min | mean | max |").map_err(io_err)?;
    writeln!(file, "| - | - | - | - |").map_err(io_err)?;
    for field in VitalField::ALL {
        let stats = trajectory.stats.channel(field);
        writeln!(
            file,
            "| {} | {:.2} | {:.2} | {:.2} |",
            field.display_name(),
            stats.min,
            stats.mean,
            stats.max
        )
        .map_err(io_err)?;
    }

    writeln!(file, "\n## Risk summary").map_err(io_err)?;
    writeln!(
        file,
        "- final: {:.3} ({})",
        summary.final_score,
        summary.final_level.display_name()
    )
    .map_err(io_err)?;
    writeln!(
        file,
        "- peak: {:.3} at hour {}",
        summary.peak_score, summary.peak_hour
    )
    .map_err(io_err)?;
    writeln!(
        file,
        "- hours by level: stable={} moderate={} critical={}",
        summary.level_counts[0], summary.level_counts[1], summary.level_counts[2]
    )
    .map_err(io_err)?;

    if let Some(model) = model {
        writeln!(file, "\n## Logistic model").map_err(io_err)?;
        writeln!(
            file,
            "- n_train: {} | ridge: {}",
            model.n_train, model.ridge
        )
        .map_err(io_err)?;
        writeln!(file, "- bias: {:.6}", model.bias()).map_err(io_err)?;
        for (field, (weight, scaler)) in VitalField::ALL
            .iter()
            .zip(model.weights().iter().zip(model.scalers().iter()))
        {
            writeln!(
                file,
                "- {}: w={:.6} (scaler mean={:.3} std={:.3})",
                field.display_name(),
                weight,
                scaler.mean,
                scaler.std
            )
            .map_err(io_err)?;
        }
    }

    writeln!(file, "\n## Hourly table\n```").map_err(io_err)?;
    write!(file, "{}", format_hourly_table(trajectory, assessments)).map_err(io_err)?;
    writeln!(file, "```").map_err(io_err)?;

    Ok(path)
}
