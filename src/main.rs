//! Wayfind - shortest paths over weighted undirected graphs
//!
//! A thin command-line driver around `wayfind-core`: builds a graph from
//! arguments (or the built-in sample), runs the search and prints the path.

mod cli;
mod commands;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use cli::Cli;
use wayfind_core::error::{ExitCode as WayfindExitCode, WayfindError};
use wayfind_core::format::OutputFormat;
use wayfind_core::logging;

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
                let error = match err.kind() {
                    clap::error::ErrorKind::DisplayHelp
                    | clap::error::ErrorKind::DisplayVersion => err.exit(),
                    _ => WayfindError::usage(err.to_string().trim_end()),
                };

                eprintln!("{}", error.to_json());
                return ExitCode::from(error.exit_code() as u8);
            }

            err.exit();
        }
    };

    let config = match commands::load_config(&cli) {
        Ok(config) => config,
        Err(e) => return report(&cli, e),
    };

    // Initialize structured logging; CLI flags win over the config file
    let log_level = cli
        .log_level
        .as_deref()
        .or(config.logging.level.as_deref());
    let log_json = cli.log_json || config.logging.json;
    if let Err(e) = logging::init_tracing(cli.verbose, log_level, log_json) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");
    tracing::debug!(
        path = ?cli.config,
        frontier = %config.frontier,
        "loaded config"
    );

    match commands::dispatch::run(&cli, &config, start) {
        Ok(()) => ExitCode::from(WayfindExitCode::Success as u8),
        Err(e) => report(&cli, e),
    }
}

fn report(cli: &Cli, e: WayfindError) -> ExitCode {
    let exit_code = e.exit_code();

    if cli.format == OutputFormat::Json {
        eprintln!("{}", e.to_json());
    } else if !cli.quiet {
        eprintln!("error: {}", e);
    }

    ExitCode::from(exit_code as u8)
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
