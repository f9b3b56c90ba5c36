use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

use crate::error::{Result, WayfindError};

static NEXT_GRAPH_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique identity of a [`Graph`](super::Graph)
///
/// Node and edge handles carry the id of the graph that created them so that
/// handles from one graph are rejected by another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GraphId(u64);

impl GraphId {
    pub(crate) fn next() -> Self {
        GraphId(NEXT_GRAPH_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// Handle to a graph vertex, identified by its stable index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Node {
    graph: GraphId,
    index: usize,
}

impl Node {
    pub(crate) fn new(graph: GraphId, index: usize) -> Self {
        Node { graph, index }
    }

    /// Position of this node in construction order
    pub fn index(&self) -> usize {
        self.index
    }

    pub(crate) fn graph(&self) -> GraphId {
        self.graph
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index)
    }
}

impl Serialize for Node {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_u64(self.index as u64)
    }
}

/// Identity of an edge, unique within its graph and never reused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct EdgeId(pub(crate) u64);

impl EdgeId {
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}", self.0)
    }
}

/// Undirected connection between two distinct nodes
///
/// `from` and `to` record the argument order of the `connect` call that
/// created the edge; traversal treats both sides alike. Equality and hashing
/// use the edge id only, so parallel edges stay distinct.
#[derive(Debug, Clone, Copy)]
pub struct Edge {
    id: EdgeId,
    from: Node,
    to: Node,
}

impl Edge {
    pub(crate) fn new(id: EdgeId, from: Node, to: Node) -> Self {
        Edge { id, from, to }
    }

    pub fn id(&self) -> EdgeId {
        self.id
    }

    /// Endpoints in the order they were passed to `connect`
    pub fn endpoints(&self) -> (Node, Node) {
        (self.from, self.to)
    }

    /// True if `node` is one of the two endpoints
    pub fn is_incident(&self, node: Node) -> bool {
        self.from == node || self.to == node
    }

    /// Given one endpoint, return the other
    pub fn other_node(&self, node: Node) -> Result<Node> {
        if self.from == node {
            Ok(self.to)
        } else if self.to == node {
            Ok(self.from)
        } else {
            Err(WayfindError::NotIncident {
                edge: self.id,
                node,
            })
        }
    }

    /// Opposite endpoint, for callers that already know `node` is incident
    pub(crate) fn opposite(&self, node: Node) -> Node {
        if self.from == node {
            self.to
        } else {
            self.from
        }
    }

    pub(crate) fn graph(&self) -> GraphId {
        self.from.graph()
    }

    /// The same edge re-stamped with another graph's identity
    pub(crate) fn rehome(&self, graph: GraphId) -> Self {
        Edge {
            id: self.id,
            from: Node::new(graph, self.from.index()),
            to: Node::new(graph, self.to.index()),
        }
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.graph() == other.graph()
    }
}

impl Eq for Edge {}

impl Hash for Edge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.graph().hash(state);
        self.id.hash(state);
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} - {})", self.id, self.from, self.to)
    }
}

/// Strategy used to pick the next node to finalize
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FrontierKind {
    /// Scan every node per step, O(V^2) overall
    #[default]
    #[serde(rename = "linear")]
    LinearScan,
    /// Min-heap with lazy deletion, O((V + E) log V)
    #[serde(rename = "heap")]
    BinaryHeap,
}

impl std::str::FromStr for FrontierKind {
    type Err = WayfindError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "linear" => Ok(FrontierKind::LinearScan),
            "heap" => Ok(FrontierKind::BinaryHeap),
            other => Err(WayfindError::usage(format!(
                "unknown frontier: {} (expected: linear or heap)",
                other
            ))),
        }
    }
}

impl fmt::Display for FrontierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrontierKind::LinearScan => write!(f, "linear"),
            FrontierKind::BinaryHeap => write!(f, "heap"),
        }
    }
}

/// Options for a shortest-path search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchOptions {
    pub frontier: FrontierKind,
}

/// Counters collected during one search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// Nodes selected from the frontier, including the target
    pub settled: usize,
    /// Times a node's best known price was installed or lowered
    pub relaxations: usize,
}

/// A least-cost path, start to end inclusive
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShortestPath {
    pub nodes: Vec<Node>,
    pub cost: f64,
    #[serde(skip)]
    pub stats: SearchStats,
}

impl ShortestPath {
    pub fn start(&self) -> Option<Node> {
        self.nodes.first().copied()
    }

    pub fn end(&self) -> Option<Node> {
        self.nodes.last().copied()
    }

    /// Node indices in path order
    pub fn indices(&self) -> Vec<usize> {
        self.nodes.iter().map(|n| n.index()).collect()
    }

    /// Number of edges traversed
    pub fn hops(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }
}

/// Result of a search: a path, or a definite statement that none exists
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    Found(ShortestPath),
    Unreachable,
}

impl SearchOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, SearchOutcome::Found(_))
    }

    pub fn path(&self) -> Option<&ShortestPath> {
        match self {
            SearchOutcome::Found(path) => Some(path),
            SearchOutcome::Unreachable => None,
        }
    }

    pub fn into_path(self) -> Option<ShortestPath> {
        match self {
            SearchOutcome::Found(path) => Some(path),
            SearchOutcome::Unreachable => None,
        }
    }
}
