use crate::graph::{Cost, Edge, VertexId};
use crate::Result;

/// Trait representing a directed graph with costed edges
pub trait Graph {
    /// Payload stored in each vertex
    type Value;

    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns an iterator over the handles of all vertices
    fn vertices(&self) -> Box<dyn Iterator<Item = VertexId> + '_>;

    /// Returns an iterator over the outgoing edges from a vertex
    fn outgoing_edges(&self, vertex: VertexId) -> Box<dyn Iterator<Item = Edge> + '_>;

    /// Returns an iterator over the incoming edges to a vertex
    fn incoming_edges(&self, vertex: VertexId) -> Box<dyn Iterator<Item = Edge> + '_>;

    /// Returns true if the vertex is live in this graph
    fn contains_vertex(&self, vertex: VertexId) -> bool;

    /// Gets the cost of an edge if it exists
    fn find_cost(&self, from: VertexId, to: VertexId) -> Option<Cost>;

    /// Returns true if there's an edge between the two vertices
    fn has_edge(&self, from: VertexId, to: VertexId) -> bool {
        self.find_cost(from, to).is_some()
    }
}

/// Trait for mutable graph operations
pub trait MutableGraph: Graph {
    /// Adds a vertex holding `value` and returns its handle
    fn add_vertex(&mut self, value: Self::Value) -> VertexId;

    /// Removes a vertex and every edge touching it, returning its value
    fn remove_vertex(&mut self, vertex: VertexId) -> Option<Self::Value>;

    /// Adds a directed edge, or updates its cost if it already exists.
    /// Returns the previous cost when an existing edge was updated.
    fn add_edge(&mut self, from: VertexId, to: VertexId, cost: Cost) -> Result<Option<Cost>>;

    /// Removes an edge from the graph, returning its former cost
    fn remove_edge(&mut self, from: VertexId, to: VertexId) -> Option<Cost>;
}
