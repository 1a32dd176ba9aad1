pub mod traits;
pub mod dijkstra;

pub use traits::{PathInfo, ShortestPathAlgorithm, ShortestPathMap, INFINITE_DISTANCE};
