pub mod traits;
pub mod directed;
pub mod generators;
pub mod vertex;

pub use traits::{Graph, MutableGraph};
pub use directed::DirectedGraph;
pub use vertex::{Edge, VertexId};

/// Cost of an edge. Shortest-path queries require costs to be non-negative.
pub type Cost = i64;
