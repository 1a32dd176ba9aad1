//! pathgraph - directed graphs with single-source shortest paths
//!
//! This library provides a mutable directed graph whose vertices carry an
//! arbitrary payload and whose edges carry an `i64` cost, together with
//! Dijkstra's algorithm for single-source shortest paths over non-negative
//! costs.
//!
//! Every edge is recorded twice, once in the source's outgoing map and once in
//! the destination's incoming map, and the two records always agree. Removing a
//! vertex removes every edge that touches it in both directions.
//!
//! ```
//! use pathgraph::{find_shortest_paths, DirectedGraph};
//!
//! let mut graph = DirectedGraph::new();
//! let a = graph.add_vertex("a");
//! let b = graph.add_vertex("b");
//! let c = graph.add_vertex("c");
//! graph.add_edge(a, b, 4).unwrap();
//! graph.add_edge(a, c, 1).unwrap();
//! graph.add_edge(c, b, 2).unwrap();
//!
//! let paths = find_shortest_paths(&graph, a).unwrap();
//! assert_eq!(paths.distance(b), Some(3));
//! assert_eq!(paths.path_to(b), Some(vec![a, c, b]));
//! ```

pub mod algorithm;
pub mod data_structures;
pub mod graph;
pub mod web;

pub use algorithm::{
    dijkstra::{find_shortest_paths, Dijkstra, SearchStats},
    PathInfo, ShortestPathAlgorithm, ShortestPathMap, INFINITE_DISTANCE,
};
/// Re-export main types for convenient use
pub use graph::{Cost, DirectedGraph, Edge, VertexId};

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid vertex handle: {0}")]
    InvalidVertex(VertexId),

    #[error("Source vertex not found in graph")]
    SourceNotFound,

    #[error("Negative edge cost {cost} on edge from {from} to {to}")]
    NegativeCost { from: VertexId, to: VertexId, cost: Cost },
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
