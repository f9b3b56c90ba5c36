//! Output format handling for wayfind
//!
//! - human: Readable, concise output for terminal use
//! - json: Stable, machine-readable JSON
//! - records: Line-oriented format for scripts

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::WayfindError;
use crate::graph::{Node, SearchOutcome};

/// Output format for wayfind commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for machine consumption
    Json,
    /// Line-oriented records
    Records,
}

impl FromStr for OutputFormat {
    type Err = WayfindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" => Ok(OutputFormat::Human),
            "json" => Ok(OutputFormat::Json),
            "records" => Ok(OutputFormat::Records),
            other => Err(WayfindError::UnknownFormat(other.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Human => write!(f, "human"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Records => write!(f, "records"),
        }
    }
}

/// Render a search outcome between `from` and `to` in the given format
pub fn render_outcome(
    format: OutputFormat,
    from: Node,
    to: Node,
    outcome: &SearchOutcome,
) -> Result<String, WayfindError> {
    let rendered = match format {
        OutputFormat::Human => render_human(from, to, outcome),
        OutputFormat::Json => serde_json::to_string_pretty(&outcome_json(from, to, outcome))?,
        OutputFormat::Records => render_records(from, to, outcome),
    };
    Ok(rendered)
}

fn render_human(from: Node, to: Node, outcome: &SearchOutcome) -> String {
    match outcome {
        SearchOutcome::Found(path) => {
            let hops: Vec<String> = path.nodes.iter().map(|n| n.to_string()).collect();
            format!("{} (cost {})", hops.join(" -> "), path.cost)
        }
        SearchOutcome::Unreachable => format!("no path from {} to {}", from, to),
    }
}

/// JSON shape: `{"from", "to", "found", "nodes", "cost"}`
pub fn outcome_json(from: Node, to: Node, outcome: &SearchOutcome) -> serde_json::Value {
    match outcome {
        SearchOutcome::Found(path) => serde_json::json!({
            "from": from,
            "to": to,
            "found": true,
            "nodes": path.nodes,
            "cost": path.cost,
        }),
        SearchOutcome::Unreachable => serde_json::json!({
            "from": from,
            "to": to,
            "found": false,
            "nodes": [],
            "cost": null,
        }),
    }
}

fn render_records(from: Node, to: Node, outcome: &SearchOutcome) -> String {
    match outcome {
        SearchOutcome::Found(path) => {
            let mut lines = vec![format!(
                "P from={} to={} found=true cost={} hops={}",
                from,
                to,
                path.cost,
                path.hops()
            )];
            lines.extend(path.nodes.iter().map(|n| format!("N {}", n)));
            lines.join("\n")
        }
        SearchOutcome::Unreachable => format!("P from={} to={} found=false", from, to),
    }
}
