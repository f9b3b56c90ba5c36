//! Command dispatch logic for wayfind

use std::time::Instant;

use tracing::debug;
use wayfind_core::config::SearchConfig;
use wayfind_core::error::Result;

use crate::cli::{Cli, Commands};

pub fn run(cli: &Cli, config: &SearchConfig, start: Instant) -> Result<()> {
    let mut opts = config.search_options();
    if let Some(frontier) = cli.frontier {
        opts.frontier = frontier;
    }

    debug!(elapsed = ?start.elapsed(), frontier = %opts.frontier, "resolve_options");

    match &cli.command {
        Commands::Sample => super::sample::execute(cli, &opts),
        Commands::Path(args) => super::path::execute(cli, &opts, args),
    }
}
