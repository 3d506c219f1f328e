//! Command-line parsing for the early-warning simulator.
//!
//! The goal of this module is to keep **argument parsing** and **command
//! dispatch** separate from the generator/scorer code.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::{ScenarioMode, Strategy};
use crate::score::logistic::DEFAULT_RIDGE;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(
    name = "ews",
    version,
    about = "Synthetic early-warning vitals simulator and risk scorer"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a trajectory, score it, and print the summary/plot.
    Simulate(SimulateArgs),
    /// Print the per-hour table only (useful for scripting).
    Table(SimulateArgs),
    /// Fit a logistic model on a synthetic training set and export it to JSON.
    Train(TrainArgs),
}

/// Common options for simulation and table output.
#[derive(Debug, Parser, Clone)]
pub struct SimulateArgs {
    /// Trajectory duration in hours.
    #[arg(long, default_value_t = 48)]
    pub hours: u32,

    /// Simulated patient course.
    #[arg(short = 's', long, value_enum, default_value_t = ScenarioMode::Early)]
    pub scenario: ScenarioMode,

    /// Random seed for reproducible runs (omit for a fresh random course).
    #[arg(long)]
    pub seed: Option<u64>,

    /// Scoring strategy.
    #[arg(long, value_enum, default_value_t = Strategy::Rule)]
    pub strategy: Strategy,

    /// Previously exported model JSON (logistic strategy only). When omitted,
    /// a fresh model is fit on a synthetic training set.
    #[arg(long)]
    pub model: Option<PathBuf>,

    /// Risk threshold below which a score is Stable.
    #[arg(long, default_value_t = 0.4)]
    pub low: f64,

    /// Risk threshold at or above which a score is Critical.
    #[arg(long, default_value_t = 0.7)]
    pub high: f64,

    /// Training-set size when fitting a fresh logistic model.
    #[arg(long, default_value_t = 500)]
    pub train_examples: usize,

    /// Render an ASCII risk plot in the terminal (enabled by default).
    #[arg(long, default_value_t = true)]
    pub plot: bool,

    /// Disable the terminal plot.
    #[arg(long)]
    pub no_plot: bool,

    /// Plot width (columns).
    #[arg(long, default_value_t = 72)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 18)]
    pub height: usize,

    /// Export per-hour results to CSV.
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Write a markdown debug bundle of the full run.
    #[arg(long)]
    pub debug_bundle: bool,
}

/// Options for fitting and exporting a model.
#[derive(Debug, Parser)]
pub struct TrainArgs {
    /// Number of synthetic training examples.
    #[arg(short = 'n', long, default_value_t = 500)]
    pub examples: usize,

    /// Random seed for reproducible training sets.
    #[arg(long)]
    pub seed: Option<u64>,

    /// L2 ridge strength on the weights.
    #[arg(long, default_value_t = DEFAULT_RIDGE)]
    pub ridge: f64,

    /// Output path for the model JSON.
    #[arg(long, default_value = "ews_model.json")]
    pub out: PathBuf,
}
