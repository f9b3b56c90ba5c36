use clap::Args;

use super::parse::{parse_edge_spec, parse_node_count};

/// Edge given on the command line as `A:B:WEIGHT`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeSpec {
    pub a: usize,
    pub b: usize,
    pub weight: f64,
}

#[derive(Args, Debug, Clone)]
pub struct PathArgs {
    /// Number of nodes in the graph (indices 0..N)
    #[arg(long, short = 'n', value_parser = parse_node_count)]
    pub nodes: usize,

    /// Weighted edge as A:B:WEIGHT (can be specified multiple times)
    #[arg(long = "edge", short = 'e', value_parser = parse_edge_spec, action = clap::ArgAction::Append)]
    pub edges: Vec<EdgeSpec>,

    /// Start node index
    pub from: usize,

    /// Target node index
    pub to: usize,
}
