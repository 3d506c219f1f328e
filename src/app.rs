//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - runs the simulation/training pipelines
//! - prints reports/plots
//! - writes optional exports

use clap::Parser;

use crate::cli::{Command, SimulateArgs, TrainArgs};
use crate::domain::{SimConfig, Thresholds, TrainConfig};
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `ews` binary.
pub fn run() -> Result<(), AppError> {
    // We want `ews` and `ews -s severe` to behave like `ews simulate ...`.
    //
    // Clap requires a subcommand name, so we do a small, explicit rewrite of
    // the argv list before parsing. This preserves a clean clap structure
    // while retaining the requested UX.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    match cli.command {
        Command::Simulate(args) => handle_simulate(args, OutputMode::Full),
        Command::Table(args) => handle_simulate(args, OutputMode::TableOnly),
        Command::Train(args) => handle_train(args),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputMode {
    Full,
    TableOnly,
}

fn handle_simulate(args: SimulateArgs, mode: OutputMode) -> Result<(), AppError> {
    let config = sim_config_from_args(&args);
    let run = pipeline::run_simulation(&config)?;

    match mode {
        OutputMode::Full => {
            println!(
                "{}",
                crate::report::format_run_summary(
                    &run.trajectory,
                    &run.summary,
                    &config,
                    run.model.as_ref()
                )
            );
            if config.plot {
                let plot = crate::plot::render_risk_plot(
                    &run.assessments,
                    &config.thresholds,
                    config.plot_width,
                    config.plot_height,
                );
                println!("{plot}");
            }
        }
        OutputMode::TableOnly => {
            print!(
                "{}",
                crate::report::format_hourly_table(&run.trajectory, &run.assessments)
            );
        }
    }

    if let Some(path) = &config.export_results {
        crate::io::export::write_results_csv(
            path,
            &run.trajectory,
            &run.assessments,
            config.strategy,
        )?;
    }
    if config.debug_bundle {
        let path = crate::debug::write_debug_bundle(
            &run.trajectory,
            &run.assessments,
            &run.summary,
            &config,
            run.model.as_ref(),
        )?;
        eprintln!("debug bundle: {}", path.display());
    }

    Ok(())
}

fn handle_train(args: TrainArgs) -> Result<(), AppError> {
    let config = TrainConfig {
        examples: args.examples,
        seed: args.seed,
        ridge: args.ridge,
        out: args.out,
    };
    let model = pipeline::run_training(&config)?;

    println!(
        "Fitted logistic model on {} synthetic examples (ridge {}).",
        model.n_train, model.ridge
    );
    print!("{}", crate::report::format_importance(&model));
    crate::io::model::write_model_json(&config.out, &model)?;
    println!("Model written to {}", config.out.display());

    Ok(())
}

pub fn sim_config_from_args(args: &SimulateArgs) -> SimConfig {
    SimConfig {
        hours: args.hours,
        mode: args.scenario,
        seed: args.seed,
        strategy: args.strategy,
        thresholds: Thresholds { low: args.low, high: args.high },
        model_path: args.model.clone(),
        train_examples: args.train_examples,
        plot: args.plot && !args.no_plot,
        plot_width: args.width,
        plot_height: args.height,
        export_results: args.export.clone(),
        debug_bundle: args.debug_bundle,
    }
}

/// Rewrite argv so `ews` defaults to `ews simulate`.
///
/// Rules:
/// - `ews`                     -> `ews simulate`
/// - `ews -s severe ...`       -> `ews simulate -s severe ...`
/// - `ews --help/--version/-h` -> unchanged (show top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("simulate".to_string());
        return argv;
    };

    let is_top_level_help_or_version =
        matches!(arg1.as_str(), "-h" | "--help" | "-V" | "--version" | "help");
    if is_top_level_help_or_version {
        return argv;
    }

    let is_subcommand = matches!(arg1.as_str(), "simulate" | "table" | "train");
    if is_subcommand {
        return argv;
    }

    // If the first token is a flag, treat it as "simulate flags".
    if arg1.starts_with('-') {
        argv.insert(1, "simulate".to_string());
        return argv;
    }

    // Otherwise, leave as-is.
    argv
}
