//! Command implementations for wayfind

pub mod dispatch;
pub mod path;
pub mod sample;

use std::path::Path;

use wayfind_core::config::{SearchConfig, DEFAULT_CONFIG_FILE};
use wayfind_core::error::Result;
use wayfind_core::format::render_outcome;
use wayfind_core::graph::{Node, SearchOutcome};

use crate::cli::Cli;

/// Load the config named by `--config`, or `./wayfind.toml` if present
pub fn load_config(cli: &Cli) -> Result<SearchConfig> {
    match &cli.config {
        Some(path) => SearchConfig::load(path),
        None => SearchConfig::load_or_default(Path::new(DEFAULT_CONFIG_FILE)),
    }
}

/// Print a search outcome in the format requested on the command line
pub fn print_outcome(cli: &Cli, from: Node, to: Node, outcome: &SearchOutcome) -> Result<()> {
    println!("{}", render_outcome(cli.format, from, to, outcome)?);
    Ok(())
}
