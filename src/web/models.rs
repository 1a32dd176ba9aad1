use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::{Arc, RwLock};
use uuid::Uuid;

use crate::algorithm::dijkstra::SearchStats;
use crate::graph::{Cost, DirectedGraph, VertexId};

/// Graph hosted by a session; vertex payloads are labels
pub type LabeledGraph = DirectedGraph<String>;

/// A vertex as seen by API clients
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VertexView {
    pub id: VertexId,
    pub label: String,
    pub out_degree: usize,
    pub in_degree: usize,
}

/// Overview of a session's graph
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphSummary {
    pub session_id: Uuid,
    pub vertex_count: usize,
    pub edge_count: usize,
    pub vertices: Vec<VertexView>,
    pub created_at: DateTime<Utc>,
}

/// Parameters for graph generation
#[derive(Debug, Deserialize)]
pub struct GraphGenerationRequest {
    pub graph_type: String,
    pub node_count: usize,
    #[serde(default = "default_edges_per_node")]
    pub edges_per_node: usize,
    #[serde(default = "default_max_cost")]
    pub max_cost: Cost,
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_edges_per_node() -> usize {
    3
}

fn default_max_cost() -> Cost {
    10
}

#[derive(Debug, Deserialize)]
pub struct AddVertexRequest {
    pub label: String,
}

#[derive(Debug, Deserialize)]
pub struct RemoveVertexRequest {
    pub id: VertexId,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RemoveVertexResponse {
    pub id: VertexId,
    pub removed: bool,
    pub label: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AddEdgeRequest {
    pub source: VertexId,
    pub destination: VertexId,
    pub cost: Cost,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AddEdgeResponse {
    pub source: VertexId,
    pub destination: VertexId,
    pub cost: Cost,
    /// Cost before the update, `None` when the edge was created
    pub previous_cost: Option<Cost>,
}

/// Identifies the edge `source -> destination`
#[derive(Debug, Deserialize)]
pub struct EdgeRequest {
    pub source: VertexId,
    pub destination: VertexId,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct EdgeCostResponse {
    pub source: VertexId,
    pub destination: VertexId,
    /// `None` when there is no such edge
    pub cost: Option<Cost>,
}

/// Parameters for a shortest path query
#[derive(Debug, Deserialize)]
pub struct ShortestPathRequest {
    pub source: VertexId,
    #[serde(default = "default_skip_stale_entries")]
    pub skip_stale_entries: bool,
}

fn default_skip_stale_entries() -> bool {
    true
}

/// Shortest path record for one vertex
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathEntry {
    pub vertex: VertexId,
    pub label: String,
    /// `None` when the vertex is unreachable
    pub distance: Option<Cost>,
    pub predecessor: Option<VertexId>,
    pub path: Option<Vec<VertexId>>,
}

/// Response containing shortest path results
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShortestPathResponse {
    pub execution_id: Uuid,
    pub algorithm: String,
    pub source: VertexId,
    pub execution_time_ms: f64,
    pub reachable: usize,
    pub paths: Vec<PathEntry>,
    pub metrics: AlgorithmMetrics,
}

/// Metrics collected during algorithm execution
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlgorithmMetrics {
    pub vertices_expanded: usize,
    pub edges_scanned: usize,
    pub queue_insertions: usize,
    pub stale_entries_skipped: usize,
}

impl From<SearchStats> for AlgorithmMetrics {
    fn from(stats: SearchStats) -> Self {
        AlgorithmMetrics {
            vertices_expanded: stats.vertices_expanded,
            edges_scanned: stats.edges_scanned,
            queue_insertions: stats.queue_insertions,
            stale_entries_skipped: stats.stale_entries_skipped,
        }
    }
}

/// Error response for API
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub details: Option<serde_json::Value>,
}

/// Session owning one graph.
///
/// The graph sits behind its own lock: mutations take it exclusively and
/// shortest path queries hold it for reading for their whole run.
#[derive(Debug, Clone)]
pub struct Session {
    pub id: Uuid,
    pub graph: Arc<RwLock<LabeledGraph>>,
    pub created_at: DateTime<Utc>,
}

impl Session {
    pub fn new(graph: LabeledGraph) -> Self {
        Self {
            id: Uuid::new_v4(),
            graph: Arc::new(RwLock::new(graph)),
            created_at: Utc::now(),
        }
    }
}
