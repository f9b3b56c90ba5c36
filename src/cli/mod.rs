//! CLI argument parsing for wayfind
//!
//! Supports global flags: --format, --quiet, --verbose, --config, --frontier

pub mod args;
pub mod parse;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use wayfind_core::format::OutputFormat;
use wayfind_core::graph::FrontierKind;

pub use args::{EdgeSpec, PathArgs};
use parse::{parse_frontier, parse_output_format};

/// Wayfind - shortest paths over weighted undirected graphs
#[derive(Parser, Debug)]
#[command(name = "wayfind")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (human, json, records)
    #[arg(long, global = true, default_value = "human", value_parser = parse_output_format)]
    pub format: OutputFormat,

    /// Suppress error messages
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. "trace", "wayfind_core=debug")
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Config file (defaults to ./wayfind.toml when present)
    #[arg(long, global = true, env = "WAYFIND_CONFIG")]
    pub config: Option<PathBuf>,

    /// Frontier strategy (linear, heap); overrides the config file
    #[arg(long, global = true, value_parser = parse_frontier)]
    pub frontier: Option<FrontierKind>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search the built-in four-node sample graph from 0 to 3
    Sample,

    /// Build a graph from --edge arguments and search it
    Path(PathArgs),
}
