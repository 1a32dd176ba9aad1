use crate::graph::traits::{Graph, MutableGraph};
use crate::graph::vertex::next_graph_id;
use crate::graph::{Cost, Edge, VertexId};
use crate::{Error, Result};
use log::{debug, trace};
use std::collections::HashMap;
use std::mem;

/// A vertex together with both of its adjacency maps
#[derive(Debug, Clone)]
struct Vertex<V> {
    value: V,

    /// Outgoing edges: destination -> cost
    outgoing: HashMap<VertexId, Cost>,

    /// Incoming edges: source -> cost
    incoming: HashMap<VertexId, Cost>,
}

#[derive(Debug, Clone)]
enum Slot<V> {
    Occupied(Vertex<V>),
    Vacant { next_free: Option<u32> },
}

/// Arena entry. The generation is bumped every time the slot is vacated; a
/// slot at `u32::MAX` is never reused.
#[derive(Debug, Clone)]
struct Entry<V> {
    generation: u32,
    slot: Slot<V>,
}

/// A directed graph implementation using a vertex arena and per-vertex
/// adjacency maps.
///
/// Every edge `u -> w` with cost `c` is stored as `w => c` in the outgoing map
/// of `u` and as `u => c` in the incoming map of `w`. All mutations keep the two
/// records in agreement, so edges can be found, updated and removed in O(1)
/// from either endpoint.
///
/// Cloning a graph keeps its identity: handles issued before the clone are
/// valid in both copies.
#[derive(Debug, Clone)]
pub struct DirectedGraph<V> {
    /// Identity stamped into every handle this graph issues
    id: u32,

    entries: Vec<Entry<V>>,

    /// Head of the free slot list
    free_head: Option<u32>,

    vertex_count: usize,

    edge_count: usize,
}

impl<V> DirectedGraph<V> {
    /// Creates a new empty directed graph
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates a new empty directed graph with room for `vertices` vertices
    pub fn with_capacity(vertices: usize) -> Self {
        DirectedGraph {
            id: next_graph_id(),
            entries: Vec::with_capacity(vertices),
            free_head: None,
            vertex_count: 0,
            edge_count: 0,
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn is_empty(&self) -> bool {
        self.vertex_count == 0
    }

    fn vertex(&self, id: VertexId) -> Option<&Vertex<V>> {
        if id.graph() != self.id {
            return None;
        }
        match self.entries.get(id.index()) {
            Some(Entry {
                generation,
                slot: Slot::Occupied(vertex),
            }) if *generation == id.generation() => Some(vertex),
            _ => None,
        }
    }

    fn vertex_mut(&mut self, id: VertexId) -> Option<&mut Vertex<V>> {
        if id.graph() != self.id {
            return None;
        }
        match self.entries.get_mut(id.index()) {
            Some(Entry {
                generation,
                slot: Slot::Occupied(vertex),
            }) if *generation == id.generation() => Some(vertex),
            _ => None,
        }
    }

    /// Returns true if the handle refers to a live vertex of this graph
    pub fn contains_vertex(&self, id: VertexId) -> bool {
        self.vertex(id).is_some()
    }

    /// Creates a new vertex holding `value` and registers it in the graph
    pub fn add_vertex(&mut self, value: V) -> VertexId {
        let vertex = Vertex {
            value,
            outgoing: HashMap::new(),
            incoming: HashMap::new(),
        };
        self.vertex_count += 1;

        let id = match self.free_head {
            Some(index) => {
                let entry = &mut self.entries[index as usize];
                if let Slot::Vacant { next_free } = entry.slot {
                    self.free_head = next_free;
                }
                entry.slot = Slot::Occupied(vertex);
                VertexId::new(self.id, index, entry.generation)
            }
            None => {
                let index = self.entries.len() as u32;
                self.entries.push(Entry {
                    generation: 0,
                    slot: Slot::Occupied(vertex),
                });
                VertexId::new(self.id, index, 0)
            }
        };

        trace!("added vertex {}", id);
        id
    }

    /// Returns the value stored in a vertex
    pub fn value(&self, id: VertexId) -> Option<&V> {
        self.vertex(id).map(|vertex| &vertex.value)
    }

    /// Returns a mutable reference to the value stored in a vertex
    pub fn value_mut(&mut self, id: VertexId) -> Option<&mut V> {
        self.vertex_mut(id).map(|vertex| &mut vertex.value)
    }

    /// Adds a directed edge from `from` to `to`.
    ///
    /// If the edge already exists its cost is overwritten in place and the
    /// previous cost is returned. Both endpoints must be live vertices of this
    /// graph; a stale or foreign handle is rejected with
    /// [`Error::InvalidVertex`] and the graph is left unchanged.
    pub fn add_edge(&mut self, from: VertexId, to: VertexId, cost: Cost) -> Result<Option<Cost>> {
        if !self.contains_vertex(from) {
            return Err(Error::InvalidVertex(from));
        }
        if !self.contains_vertex(to) {
            return Err(Error::InvalidVertex(to));
        }

        let previous = self
            .vertex_mut(from)
            .and_then(|source| source.outgoing.insert(to, cost));
        if let Some(destination) = self.vertex_mut(to) {
            destination.incoming.insert(from, cost);
        }

        match previous {
            Some(old) => trace!("updated edge {} -> {}: {} => {}", from, to, old, cost),
            None => {
                self.edge_count += 1;
                trace!("added edge {} -> {} ({})", from, to, cost);
            }
        }
        Ok(previous)
    }

    /// Gets the cost of the edge `from -> to`.
    ///
    /// `None` means there is no such edge; a zero-cost edge is `Some(0)`.
    pub fn find_cost(&self, from: VertexId, to: VertexId) -> Option<Cost> {
        self.vertex(from)?.outgoing.get(&to).copied()
    }

    pub fn has_edge(&self, from: VertexId, to: VertexId) -> bool {
        self.find_cost(from, to).is_some()
    }

    /// Removes the edge `from -> to` and returns its former cost.
    ///
    /// Removing an edge that does not exist is a no-op returning `None`.
    pub fn remove_edge(&mut self, from: VertexId, to: VertexId) -> Option<Cost> {
        let cost = self.vertex_mut(from)?.outgoing.remove(&to)?;
        if let Some(destination) = self.vertex_mut(to) {
            destination.incoming.remove(&from);
        }
        self.edge_count -= 1;

        trace!("removed edge {} -> {} ({})", from, to, cost);
        Some(cost)
    }

    /// Removes a vertex from the graph and returns its value.
    ///
    /// Every edge pointing into the vertex is removed from its source's
    /// outgoing map, and every edge leaving it is removed from its
    /// destination's incoming map. The handle goes stale. Returns `None` if
    /// the handle does not refer to a live vertex.
    pub fn remove_vertex(&mut self, id: VertexId) -> Option<V> {
        if !self.contains_vertex(id) {
            return None;
        }

        let entry = &mut self.entries[id.index()];
        // A slot whose generation is exhausted is retired, never reissued
        let reusable = match entry.generation.checked_add(1) {
            Some(next) => {
                entry.generation = next;
                true
            }
            None => false,
        };
        let slot = mem::replace(
            &mut entry.slot,
            Slot::Vacant {
                next_free: if reusable { self.free_head } else { None },
            },
        );
        if reusable {
            self.free_head = Some(id.index() as u32);
        } else {
            debug!("retired slot {} after exhausting its generations", id.index());
        }
        self.vertex_count -= 1;

        let vertex = match slot {
            Slot::Occupied(vertex) => vertex,
            Slot::Vacant { .. } => return None,
        };

        // A self-loop sits in both maps but is a single edge.
        let self_loop = vertex.outgoing.contains_key(&id);
        self.edge_count -= vertex.outgoing.len() + vertex.incoming.len() - usize::from(self_loop);

        for source in vertex.incoming.keys() {
            if let Some(neighbor) = self.vertex_mut(*source) {
                neighbor.outgoing.remove(&id);
            }
        }
        for destination in vertex.outgoing.keys() {
            if let Some(neighbor) = self.vertex_mut(*destination) {
                neighbor.incoming.remove(&id);
            }
        }

        debug!(
            "removed vertex {} with {} incoming and {} outgoing edges",
            id,
            vertex.incoming.len(),
            vertex.outgoing.len()
        );
        Some(vertex.value)
    }

    /// Returns an iterator over the handles of all live vertices
    pub fn vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.entries
            .iter()
            .enumerate()
            .filter_map(move |(index, entry)| match entry.slot {
                Slot::Occupied(_) => Some(VertexId::new(self.id, index as u32, entry.generation)),
                Slot::Vacant { .. } => None,
            })
    }

    /// Returns an iterator over the outgoing edges from a vertex.
    /// Stale handles yield nothing.
    pub fn outgoing_edges(&self, id: VertexId) -> impl Iterator<Item = Edge> + '_ {
        self.vertex(id).into_iter().flat_map(move |vertex| {
            vertex.outgoing.iter().map(move |(&destination, &cost)| Edge {
                source: id,
                destination,
                cost,
            })
        })
    }

    /// Returns an iterator over the incoming edges to a vertex.
    /// Stale handles yield nothing.
    pub fn incoming_edges(&self, id: VertexId) -> impl Iterator<Item = Edge> + '_ {
        self.vertex(id).into_iter().flat_map(move |vertex| {
            vertex.incoming.iter().map(move |(&source, &cost)| Edge {
                source,
                destination: id,
                cost,
            })
        })
    }

    /// Returns an iterator over every edge in the graph
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.vertices().flat_map(move |id| self.outgoing_edges(id))
    }

    /// Number of outgoing edges; 0 for handles that are not live
    pub fn out_degree(&self, id: VertexId) -> usize {
        self.vertex(id).map_or(0, |vertex| vertex.outgoing.len())
    }

    /// Number of incoming edges; 0 for handles that are not live
    pub fn in_degree(&self, id: VertexId) -> usize {
        self.vertex(id).map_or(0, |vertex| vertex.incoming.len())
    }

    /// Removes every vertex and edge.
    ///
    /// The graph takes a fresh identity, so all previously issued handles
    /// become stale.
    pub fn clear(&mut self) {
        self.id = next_graph_id();
        self.entries.clear();
        self.free_head = None;
        self.vertex_count = 0;
        self.edge_count = 0;
    }

    /// Validate that the graph doesn't have negative costs
    pub fn validate_non_negative(&self) -> bool {
        self.edges().all(|edge| edge.cost >= 0)
    }
}

impl<V> Default for DirectedGraph<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Graph for DirectedGraph<V> {
    type Value = V;

    fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn vertices(&self) -> Box<dyn Iterator<Item = VertexId> + '_> {
        Box::new(DirectedGraph::vertices(self))
    }

    fn outgoing_edges(&self, vertex: VertexId) -> Box<dyn Iterator<Item = Edge> + '_> {
        Box::new(DirectedGraph::outgoing_edges(self, vertex))
    }

    fn incoming_edges(&self, vertex: VertexId) -> Box<dyn Iterator<Item = Edge> + '_> {
        Box::new(DirectedGraph::incoming_edges(self, vertex))
    }

    fn contains_vertex(&self, vertex: VertexId) -> bool {
        DirectedGraph::contains_vertex(self, vertex)
    }

    fn find_cost(&self, from: VertexId, to: VertexId) -> Option<Cost> {
        DirectedGraph::find_cost(self, from, to)
    }
}

impl<V> MutableGraph for DirectedGraph<V> {
    fn add_vertex(&mut self, value: V) -> VertexId {
        DirectedGraph::add_vertex(self, value)
    }

    fn remove_vertex(&mut self, vertex: VertexId) -> Option<V> {
        DirectedGraph::remove_vertex(self, vertex)
    }

    fn add_edge(&mut self, from: VertexId, to: VertexId, cost: Cost) -> Result<Option<Cost>> {
        DirectedGraph::add_edge(self, from, to, cost)
    }

    fn remove_edge(&mut self, from: VertexId, to: VertexId) -> Option<Cost> {
        DirectedGraph::remove_edge(self, from, to)
    }
}
