use log::debug;
use std::collections::HashMap;

use crate::algorithm::{PathInfo, ShortestPathAlgorithm, ShortestPathMap, INFINITE_DISTANCE};
use crate::data_structures::PriorityQueue;
use crate::graph::{Cost, Graph, VertexId};
use crate::{Error, Result};

/// Counters collected while running [`Dijkstra`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Number of times a vertex became the frontier and had its edges scanned
    pub vertices_expanded: usize,
    /// Number of outgoing edges examined
    pub edges_scanned: usize,
    /// Number of successful relaxations, each of which inserts into the queue
    pub queue_insertions: usize,
    /// Queue entries dropped because a shorter distance was found after they
    /// were inserted
    pub stale_entries_skipped: usize,
}

/// Classic Dijkstra's algorithm implementation
#[derive(Debug, Clone)]
pub struct Dijkstra {
    /// Whether to drop queue entries that no longer carry their vertex's
    /// current distance instead of expanding them again
    skip_stale_entries: bool,
}

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra {
            skip_stale_entries: true,
        }
    }

    /// Enable or disable skipping of outdated queue entries.
    ///
    /// Distances are the same either way; disabling only costs redundant
    /// re-scans of vertices that were queued more than once.
    pub fn with_stale_entry_skipping(mut self, enabled: bool) -> Self {
        self.skip_stale_entries = enabled;
        self
    }

    /// Computes shortest paths from `source` and reports search counters.
    ///
    /// Fails with [`Error::SourceNotFound`] if `source` is not a live vertex of
    /// `graph`, and with [`Error::NegativeCost`] as soon as an edge with a
    /// negative cost is reached.
    pub fn compute_with_stats<G>(
        &self,
        graph: &G,
        source: VertexId,
    ) -> Result<(ShortestPathMap, SearchStats)>
    where
        G: Graph,
    {
        if !graph.contains_vertex(source) {
            return Err(Error::SourceNotFound);
        }

        debug!(
            "dijkstra from {} over {} vertices and {} edges",
            source,
            graph.vertex_count(),
            graph.edge_count()
        );

        // Every vertex starts unreached
        let mut paths: HashMap<VertexId, PathInfo> = graph
            .vertices()
            .map(|vertex| (vertex, PathInfo::unreached(vertex)))
            .collect();
        if let Some(info) = paths.get_mut(&source) {
            info.distance = 0;
        }

        let mut queue = PriorityQueue::with_capacity(graph.vertex_count());
        let mut stats = SearchStats::default();
        let mut frontier = Some(source);

        while let Some(current) = frontier {
            stats.vertices_expanded += 1;
            let current_distance = paths
                .get(&current)
                .map_or(INFINITE_DISTANCE, |info| info.distance);

            for edge in graph.outgoing_edges(current) {
                stats.edges_scanned += 1;
                if edge.cost < 0 {
                    return Err(Error::NegativeCost {
                        from: edge.source,
                        to: edge.destination,
                        cost: edge.cost,
                    });
                }

                let candidate = current_distance.saturating_add(edge.cost);
                let Some(target) = paths.get_mut(&edge.destination) else {
                    continue;
                };
                if candidate < target.distance {
                    target.distance = candidate;
                    target.previous = Some(current);
                    queue.insert(edge.destination, candidate);
                    stats.queue_insertions += 1;
                }
            }

            frontier = self.next_frontier(&mut queue, &paths, &mut stats);
        }

        let result = ShortestPathMap { source, paths };
        debug!(
            "dijkstra from {} reached {} of {} vertices ({:?})",
            source,
            result.reachable_count(),
            result.len(),
            stats
        );
        Ok((result, stats))
    }

    /// Extracts the closest queued vertex, dropping outdated entries if
    /// configured to
    fn next_frontier(
        &self,
        queue: &mut PriorityQueue<VertexId, Cost>,
        paths: &HashMap<VertexId, PathInfo>,
        stats: &mut SearchStats,
    ) -> Option<VertexId> {
        while let Some((vertex, queued_distance)) = queue.extract_min() {
            let stale = paths
                .get(&vertex)
                .is_some_and(|info| queued_distance > info.distance);
            if self.skip_stale_entries && stale {
                stats.stale_entries_skipped += 1;
                continue;
            }
            return Some(vertex);
        }
        None
    }
}

impl Default for Dijkstra {
    fn default() -> Self {
        Self::new()
    }
}

impl<G> ShortestPathAlgorithm<G> for Dijkstra
where
    G: Graph,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(&self, graph: &G, source: VertexId) -> Result<ShortestPathMap> {
        self.compute_with_stats(graph, source).map(|(result, _)| result)
    }
}

/// Finds the shortest paths from `source` to every vertex of `graph` with a
/// default-configured [`Dijkstra`].
///
/// All costs reachable from `source` must be non-negative.
pub fn find_shortest_paths<G>(graph: &G, source: VertexId) -> Result<ShortestPathMap>
where
    G: Graph,
{
    Dijkstra::new().compute_shortest_paths(graph, source)
}
