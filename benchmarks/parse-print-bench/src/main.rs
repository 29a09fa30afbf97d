//! Parse/Print Benchmark CLI
//!
//! Builds a model of a Rust source tree, pretty-prints every file, and writes
//! the phase timings to stdout as one JSON line.
//!
//! Usage:
//!   parse-print-bench <folder to benchmark>
//!
//! The command takes exactly one argument and no flags. Repetition count and
//! unparsable-file policy are library settings (`RunnerConfig`,
//! `RustSourceBackend::with_policy`); the CLI runs one build and one print
//! phase and fails on the first unparsable file.

use anyhow::{Context, Result};
use clap::Parser;
use parse_print_bench::{BenchmarkRunner, Reporter, RunnerConfig, RustSourceBackend};
use std::ffi::OsString;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "parse-print-bench")]
#[command(disable_help_flag = true, disable_version_flag = true)]
struct Cli {
    /// Folder (or single file) to benchmark
    folder: PathBuf,
}

fn main() -> ExitCode {
    let cli = match parse_args(std::env::args_os()) {
        Some(cli) => cli,
        None => {
            eprintln!("Usage: {} <folder to benchmark>", env!("CARGO_BIN_NAME"));
            return ExitCode::FAILURE;
        }
    };

    if let Err(err) = bench_common::init_tracing("parse_print_bench") {
        eprintln!("Warning: failed to initialize logging: {:#}", err);
    }

    match run_bench(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

/// Accept exactly one argument after the program name, flags included
fn parse_args(args: impl IntoIterator<Item = OsString>) -> Option<Cli> {
    let args: Vec<OsString> = args.into_iter().collect();
    if args.len() != 2 {
        return None;
    }
    Cli::try_parse_from(args).ok()
}

fn run_bench(cli: Cli) -> Result<()> {
    let runner = BenchmarkRunner::new(RustSourceBackend::new(), RunnerConfig::default())?;

    let report = runner
        .run(&cli.folder)
        .with_context(|| format!("benchmark of {} failed", cli.folder.display()))?;

    let stdout = std::io::stdout();
    Reporter::new().write_to(&mut stdout.lock(), &report)?;

    Ok(())
}
