//! `seqr` CLI entry-point.
//!
//! Available sub-commands:
//! - `run`      — execute a workflow YAML file.
//! - `validate` — load and validate a workflow file without running it.

mod loader;

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use runner::ShellRunner;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "seqr",
    about = "Sequential workflow runner for shell-defined jobs",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Execute a workflow file, job by job, in declared order.
    Run {
        /// Path to the workflow YAML file.
        #[arg(long, short = 'w', default_value = "workflow.yaml")]
        workflow: PathBuf,
    },
    /// Validate a workflow file without executing anything.
    Validate {
        /// Path to the workflow YAML file.
        path: PathBuf,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Run { workflow } => {
            let workflow = match loader::load(&workflow) {
                Ok(w) => w,
                Err(e) => {
                    eprintln!("error: {e:#}");
                    return ExitCode::FAILURE;
                }
            };

            let executor = engine::WorkflowExecutor::new(Arc::new(ShellRunner::new()));
            match executor.run(&workflow) {
                Ok(report) => {
                    info!(
                        executed = report.outcomes.len(),
                        "workflow run completed"
                    );
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("error: {e}");
                    ExitCode::FAILURE
                }
            }
        }
        Command::Validate { path } => match loader::load(&path) {
            Ok(workflow) => {
                println!(
                    "workflow is valid: {} job(s) declared",
                    workflow.jobs().len()
                );
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("validation failed: {e:#}");
                ExitCode::FAILURE
            }
        },
    }
}
