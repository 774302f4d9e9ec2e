//! Algotrace - step-by-step traces of classic algorithms
//!
//! Runs minimum spanning tree, shortest path, and sorting algorithms and
//! prints every comparison, move, and accepted edge as a replayable trace.

mod cli;
mod commands;

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use algotrace_core::config::EngineConfig;
use algotrace_core::error::{AlgoError, ExitCode as AlgoExitCode};
use algotrace_core::logging;
use cli::{Cli, OutputFormat};

fn main() -> ExitCode {
    let start = Instant::now();

    let argv_format_json = argv_requests_json();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // `--format` is a global flag, but clap may fail parsing before we can
            // inspect `Cli.format`. If the user requested JSON output, emit a
            // structured error envelope.
            if argv_format_json {
                let algo_error = match err.kind() {
                    clap::error::ErrorKind::DisplayHelp
                    | clap::error::ErrorKind::DisplayVersion => err.exit(),
                    clap::error::ErrorKind::ValueValidation
                    | clap::error::ErrorKind::InvalidValue
                    | clap::error::ErrorKind::InvalidSubcommand
                    | clap::error::ErrorKind::UnknownArgument
                    | clap::error::ErrorKind::MissingRequiredArgument => {
                        AlgoError::UsageError(err.to_string())
                    }
                    clap::error::ErrorKind::ArgumentConflict => {
                        if argv_format_count() > 1 {
                            AlgoError::DuplicateFormat
                        } else {
                            AlgoError::UsageError(err.to_string())
                        }
                    }
                    _ => AlgoError::Other(err.to_string()),
                };

                eprintln!("{}", algo_error.to_json());
                return ExitCode::from(algo_error.exit_code() as u8);
            }

            err.exit();
        }
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    let cwd = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let (config, config_source) = match EngineConfig::discover(cli.config.as_deref(), &cwd) {
        Ok(found) => found,
        Err(e) => return report_error(&e, cli.format.unwrap_or_default(), cli.quiet),
    };
    let format = cli.format.unwrap_or(config.output.format);

    match commands::dispatch::run(&cli, config, config_source, start) {
        Ok(()) => ExitCode::from(AlgoExitCode::Success as u8),
        Err(e) => report_error(&e, format, cli.quiet),
    }
}

fn report_error(e: &AlgoError, format: OutputFormat, quiet: bool) -> ExitCode {
    if format == OutputFormat::Json {
        eprintln!("{}", e.to_json());
    } else if !quiet {
        eprintln!("error: {}", e);
    }
    ExitCode::from(e.exit_code() as u8)
}

fn argv_requests_json() -> bool {
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--format" {
            if args.next().is_some_and(|v| v == "json") {
                return true;
            }
        } else if arg == "--format=json" {
            return true;
        }
    }
    false
}

fn argv_format_count() -> usize {
    env::args()
        .skip(1)
        .filter(|arg| arg == "--format" || arg.starts_with("--format="))
        .count()
}
