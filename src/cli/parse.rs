use wayfind_core::format::OutputFormat;
use wayfind_core::graph::FrontierKind;

use super::args::EdgeSpec;

/// Parse output format from string
pub fn parse_output_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

/// Parse frontier strategy from string
pub fn parse_frontier(s: &str) -> std::result::Result<FrontierKind, String> {
    s.parse::<FrontierKind>().map_err(|e| e.to_string())
}

/// Largest graph the `path` command will allocate
pub const MAX_NODES: usize = 1 << 24;

/// Parse a `--nodes` count, capped at [`MAX_NODES`]
pub fn parse_node_count(s: &str) -> std::result::Result<usize, String> {
    let count = s
        .trim()
        .parse::<usize>()
        .map_err(|e| format!("invalid node count '{}': {}", s, e))?;
    if count > MAX_NODES {
        return Err(format!(
            "node count {} exceeds the limit of {}",
            count, MAX_NODES
        ));
    }
    Ok(count)
}

/// Parse an `A:B:WEIGHT` edge specification
pub fn parse_edge_spec(s: &str) -> std::result::Result<EdgeSpec, String> {
    let parts: Vec<&str> = s.split(':').collect();
    let [a, b, weight] = parts.as_slice() else {
        return Err(format!("invalid edge '{}' (expected A:B:WEIGHT)", s));
    };

    let a = a
        .trim()
        .parse::<usize>()
        .map_err(|e| format!("invalid node '{}' in edge '{}': {}", a, s, e))?;
    let b = b
        .trim()
        .parse::<usize>()
        .map_err(|e| format!("invalid node '{}' in edge '{}': {}", b, s, e))?;
    let weight = weight
        .trim()
        .parse::<f64>()
        .map_err(|e| format!("invalid weight '{}' in edge '{}': {}", weight, s, e))?;

    Ok(EdgeSpec { a, b, weight })
}
