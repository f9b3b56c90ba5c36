//! Wayfind Core Library
//!
//! Undirected multigraph store and Dijkstra shortest-path search.
//!
//! ```
//! use wayfind_core::graph::{shortest_path, Graph, WeightMap};
//!
//! let mut graph = Graph::new(3);
//! let mut weights = WeightMap::new();
//! for (a, b, w) in [(0, 1, 5.0), (1, 2, 5.0), (0, 2, 3.0)] {
//!     let edge = graph.connect_indices(a, b)?;
//!     weights.insert(edge, w)?;
//! }
//!
//! let start = graph.node(0)?.id();
//! let end = graph.node(2)?.id();
//! let path = shortest_path(&graph, &weights, start, end)?.into_path();
//! assert_eq!(path.map(|p| p.indices()), Some(vec![0, 2]));
//! # Ok::<(), wayfind_core::error::WayfindError>(())
//! ```

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
