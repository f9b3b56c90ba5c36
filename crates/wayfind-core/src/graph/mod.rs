//! Graph store and shortest-path search
//!
//! Provides the undirected multigraph and the algorithms that run over it:
//! - `Graph` owns nodes and the dynamic edge set
//! - `WeightMap` supplies edge costs at search time
//! - Dijkstra search with linear-scan or heap frontier

pub mod algos;
pub mod store;
pub mod types;
pub mod weights;

pub use algos::{path_cost, shortest_path, shortest_path_with};
pub use store::{Graph, NodeRef};
pub use types::{
    Edge, EdgeId, FrontierKind, GraphId, Node, SearchOptions, SearchOutcome, SearchStats,
    ShortestPath,
};
pub use weights::WeightMap;
