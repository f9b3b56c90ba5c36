//! Path command: search a graph described on the command line

use std::time::Instant;

use wayfind_core::error::Result;
use wayfind_core::graph::{shortest_path_with, Graph, SearchOptions, WeightMap};
use wayfind_core::trace_time;

use crate::cli::{Cli, EdgeSpec, PathArgs};

/// Build the graph and weight map described by `--nodes` and `--edge`
pub fn build_graph(nodes: usize, edges: &[EdgeSpec]) -> Result<(Graph, WeightMap)> {
    let mut graph = Graph::new(nodes);
    let mut weights = WeightMap::with_capacity(edges.len());
    for spec in edges {
        let edge = graph.connect_indices(spec.a, spec.b)?;
        weights.insert(edge, spec.weight)?;
    }
    Ok((graph, weights))
}

/// Execute the path command
pub fn execute(cli: &Cli, opts: &SearchOptions, args: &PathArgs) -> Result<()> {
    let start = Instant::now();

    let (graph, weights) = build_graph(args.nodes, &args.edges)?;
    trace_time!(start, "build_graph", nodes = graph.len(), edges = weights.len());

    let from = graph.node(args.from)?.id();
    let to = graph.node(args.to)?.id();
    let outcome = shortest_path_with(&graph, &weights, from, to, opts)?;
    trace_time!(start, "path_search");

    super::print_outcome(cli, from, to, &outcome)
}
