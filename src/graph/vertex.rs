use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU32, Ordering};

use crate::graph::Cost;

/// Source of graph identities, so that handles issued by one graph are
/// rejected by every other graph.
static NEXT_GRAPH_ID: AtomicU32 = AtomicU32::new(0);

pub(crate) fn next_graph_id() -> u32 {
    NEXT_GRAPH_ID.fetch_add(1, Ordering::Relaxed)
}

/// Handle to a vertex of a [`DirectedGraph`](crate::graph::DirectedGraph).
///
/// A vertex is identified by its handle, never by its value: two vertices that
/// store equal values are still two distinct vertices. The handle records the
/// arena slot, the generation of that slot, and the graph that issued it.
/// Once the vertex is removed its handle goes stale and every graph operation
/// treats it as unknown, even after the slot is reused by a new vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct VertexId {
    graph: u32,
    index: u32,
    generation: u32,
}

impl VertexId {
    pub(crate) fn new(graph: u32, index: u32, generation: u32) -> Self {
        VertexId {
            graph,
            index,
            generation,
        }
    }

    pub(crate) fn graph(&self) -> u32 {
        self.graph
    }

    /// Position of the vertex in its graph's arena
    pub fn index(&self) -> usize {
        self.index as usize
    }

    pub(crate) fn generation(&self) -> u32 {
        self.generation
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}.{}@g{}", self.index, self.generation, self.graph)
    }
}

/// A directed, costed connection between an ordered pair of vertices.
///
/// Edges are not stored as objects; this is a view assembled from the
/// adjacency maps when iterating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    pub source: VertexId,
    pub destination: VertexId,
    pub cost: Cost,
}
