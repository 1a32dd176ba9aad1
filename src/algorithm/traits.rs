use log::warn;
use std::collections::HashMap;

use crate::graph::{Cost, Graph, VertexId};
use crate::Result;

/// Distance recorded for vertices with no known path from the source
pub const INFINITE_DISTANCE: Cost = Cost::MAX;

/// Shortest-path record for one vertex.
///
/// The predecessor is the previous vertex on the shortest path from the
/// source; its own record is found in the same [`ShortestPathMap`]. Following
/// predecessors backwards ends at the source, whose record has none.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathInfo {
    pub(crate) vertex: VertexId,
    pub(crate) previous: Option<VertexId>,
    pub(crate) distance: Cost,
}

impl PathInfo {
    pub(crate) fn unreached(vertex: VertexId) -> Self {
        PathInfo {
            vertex,
            previous: None,
            distance: INFINITE_DISTANCE,
        }
    }

    /// Destination vertex of this record
    pub fn vertex(&self) -> VertexId {
        self.vertex
    }

    /// Previous vertex on the shortest path, `None` at the source and at
    /// unreachable vertices
    pub fn previous(&self) -> Option<VertexId> {
        self.previous
    }

    /// Distance from the source, [`INFINITE_DISTANCE`] when unreachable
    pub fn distance(&self) -> Cost {
        self.distance
    }

    pub fn is_reachable(&self) -> bool {
        self.distance != INFINITE_DISTANCE
    }
}

/// Result of a single-source shortest path query.
///
/// Holds one [`PathInfo`] for every vertex that was in the graph when the
/// query ran, including unreachable ones. The map is detached from the graph:
/// later mutations of the graph do not change it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPathMap {
    pub(crate) source: VertexId,
    pub(crate) paths: HashMap<VertexId, PathInfo>,
}

impl ShortestPathMap {
    /// Source vertex ID
    pub fn source(&self) -> VertexId {
        self.source
    }

    /// Returns the record of a vertex, `None` if it was not in the graph
    pub fn get(&self, vertex: VertexId) -> Option<&PathInfo> {
        self.paths.get(&vertex)
    }

    /// Shortest distance from the source, `None` if unreachable
    pub fn distance(&self, vertex: VertexId) -> Option<Cost> {
        self.get(vertex)
            .filter(|info| info.is_reachable())
            .map(|info| info.distance)
    }

    /// Previous vertex on the shortest path to `vertex`
    pub fn predecessor(&self, vertex: VertexId) -> Option<VertexId> {
        self.get(vertex).and_then(|info| info.previous)
    }

    pub fn is_reachable(&self, vertex: VertexId) -> bool {
        self.get(vertex).is_some_and(PathInfo::is_reachable)
    }

    /// Number of vertices covered by the map
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Number of vertices with a finite distance, the source included
    pub fn reachable_count(&self) -> usize {
        self.paths.values().filter(|info| info.is_reachable()).count()
    }

    /// Iterates over all records in unspecified order
    pub fn iter(&self) -> impl Iterator<Item = &PathInfo> {
        self.paths.values()
    }

    /// Get the shortest path from the source to `target` as a sequence of
    /// vertices, source first. `None` if `target` is unreachable.
    pub fn path_to(&self, target: VertexId) -> Option<Vec<VertexId>> {
        if !self.is_reachable(target) {
            return None;
        }

        let mut path = vec![target];
        let mut current = self.get(target)?;
        while let Some(previous) = current.previous {
            // Predecessor chains are acyclic; bail out rather than loop forever
            if path.len() > self.paths.len() {
                warn!("predecessor chain from {} does not reach the source", target);
                return None;
            }
            path.push(previous);
            current = self.get(previous)?;
        }

        if current.vertex != self.source {
            return None;
        }

        path.reverse();
        Some(path)
    }
}

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm<G>
where
    G: Graph,
{
    /// Compute shortest paths from a source vertex to all other vertices
    fn compute_shortest_paths(&self, graph: &G, source: VertexId) -> Result<ShortestPathMap>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Get the shortest path from source to target as a sequence of vertices
    fn get_path(&self, result: &ShortestPathMap, target: VertexId) -> Option<Vec<VertexId>> {
        result.path_to(target)
    }
}
