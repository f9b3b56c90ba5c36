//! Graph algorithm implementations
//!
//! - `dijkstra`: weighted shortest path between two nodes
//! - `frontier`: node selection strategies used by the search
//! - `path`: predecessor walk and path costing

pub mod dijkstra;
pub(crate) mod frontier;
pub mod path;

pub use dijkstra::{shortest_path, shortest_path_with};
pub use path::path_cost;
