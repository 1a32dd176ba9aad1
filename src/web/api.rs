use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, post, put},
    Router,
};
use log::{info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use std::time::Instant;
use uuid::Uuid;

use crate::algorithm::dijkstra::Dijkstra;
use crate::graph::generators::{generate_barabasi_albert, generate_grid, generate_random};
use crate::graph::DirectedGraph;
use crate::web::models::*;
use crate::Error;

/// Largest graph the generate endpoint will build
pub const MAX_GENERATED_VERTICES: usize = 100_000;

/// Largest `edges_per_node` the generate endpoint accepts
pub const MAX_EDGES_PER_NODE: usize = 64;

pub type ApiError = (StatusCode, Json<ErrorResponse>);
pub type ApiResult<T> = Result<Json<T>, ApiError>;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<RwLock<HashMap<Uuid, Session>>>,
    pub max_sessions: usize,
}

impl AppState {
    pub fn new(max_sessions: usize) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            max_sessions,
        }
    }
}

/// Create the API router
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/api/graphs", post(create_graph))
        .route("/api/graphs/generate", post(generate_graph))
        .route("/api/graphs/:session_id", get(get_graph).delete(delete_graph))
        .route(
            "/api/graphs/:session_id/vertices",
            post(add_vertex).delete(remove_vertex),
        )
        .route(
            "/api/graphs/:session_id/edges",
            put(add_edge).delete(remove_edge),
        )
        .route("/api/graphs/:session_id/edges/cost", post(find_cost))
        .route("/api/graphs/:session_id/shortest-paths", post(find_shortest_paths))
        .route("/api/sessions", get(list_sessions))
        .route("/api/health", get(health_check))
}

/// Create a session holding an empty graph
pub async fn create_graph(State(state): State<AppState>) -> ApiResult<GraphSummary> {
    let session = register_session(&state, DirectedGraph::new())?;
    summarize(&session).map(Json)
}

/// Generate a new graph
pub async fn generate_graph(
    State(state): State<AppState>,
    Json(request): Json<GraphGenerationRequest>,
) -> ApiResult<GraphSummary> {
    if request.node_count == 0 || request.node_count > MAX_GENERATED_VERTICES {
        return Err(api_error(
            StatusCode::BAD_REQUEST,
            "invalid_node_count",
            format!("node_count must be between 1 and {}", MAX_GENERATED_VERTICES),
        ));
    }
    if request.max_cost < 1 {
        return Err(api_error(
            StatusCode::BAD_REQUEST,
            "invalid_max_cost",
            "max_cost must be positive",
        ));
    }
    if request.edges_per_node > MAX_EDGES_PER_NODE {
        return Err(api_error(
            StatusCode::BAD_REQUEST,
            "invalid_edges_per_node",
            format!("edges_per_node must be at most {}", MAX_EDGES_PER_NODE),
        ));
    }

    let mut rng = match request.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let label = |i: usize| format!("n{}", i);

    let graph = match request.graph_type.as_str() {
        "random" => {
            generate_random(
                &mut rng,
                request.node_count,
                request.edges_per_node as f64,
                request.max_cost,
                label,
            )
            .0
        }
        "grid" => {
            // The grid is square, so node_count is rounded up to the next square
            let side = (request.node_count as f64).sqrt().ceil() as usize;
            if side * side > MAX_GENERATED_VERTICES {
                return Err(api_error(
                    StatusCode::BAD_REQUEST,
                    "invalid_node_count",
                    format!(
                        "a {}x{} grid exceeds {} vertices",
                        side, side, MAX_GENERATED_VERTICES
                    ),
                ));
            }
            generate_grid(side, side, request.max_cost, label).0
        }
        "scale-free" => {
            if request.edges_per_node == 0 || request.node_count <= request.edges_per_node {
                return Err(api_error(
                    StatusCode::BAD_REQUEST,
                    "invalid_edges_per_node",
                    "scale-free graphs need 0 < edges_per_node < node_count",
                ));
            }
            generate_barabasi_albert(
                &mut rng,
                request.node_count,
                request.edges_per_node,
                request.max_cost,
                label,
            )
            .0
        }
        _ => {
            return Err(api_error(
                StatusCode::BAD_REQUEST,
                "invalid_graph_type",
                format!("Unknown graph type: {}", request.graph_type),
            ));
        }
    };

    let session = register_session(&state, graph)?;
    summarize(&session).map(Json)
}

/// Get graph data for a session
pub async fn get_graph(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> ApiResult<GraphSummary> {
    let session = find_session(&state, session_id)?;
    summarize(&session).map(Json)
}

/// Drop a session and its graph, returning its final summary
pub async fn delete_graph(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> ApiResult<GraphSummary> {
    let removed = state
        .sessions
        .write()
        .map_err(|_| lock_poisoned())?
        .remove(&session_id);
    let session = removed.ok_or_else(session_not_found)?;

    info!("deleted session {}", session_id);
    summarize(&session).map(Json)
}

pub async fn add_vertex(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<AddVertexRequest>,
) -> ApiResult<VertexView> {
    let session = find_session(&state, session_id)?;
    let mut graph = session.graph.write().map_err(|_| lock_poisoned())?;

    let id = graph.add_vertex(request.label.clone());
    Ok(Json(VertexView {
        id,
        label: request.label,
        out_degree: 0,
        in_degree: 0,
    }))
}

pub async fn remove_vertex(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<RemoveVertexRequest>,
) -> ApiResult<RemoveVertexResponse> {
    let session = find_session(&state, session_id)?;
    let mut graph = session.graph.write().map_err(|_| lock_poisoned())?;

    let label = graph.remove_vertex(request.id);
    Ok(Json(RemoveVertexResponse {
        id: request.id,
        removed: label.is_some(),
        label,
    }))
}

pub async fn add_edge(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<AddEdgeRequest>,
) -> ApiResult<AddEdgeResponse> {
    let session = find_session(&state, session_id)?;
    let mut graph = session.graph.write().map_err(|_| lock_poisoned())?;

    let previous_cost = graph
        .add_edge(request.source, request.destination, request.cost)
        .map_err(graph_error)?;
    Ok(Json(AddEdgeResponse {
        source: request.source,
        destination: request.destination,
        cost: request.cost,
        previous_cost,
    }))
}

pub async fn find_cost(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<EdgeRequest>,
) -> ApiResult<EdgeCostResponse> {
    let session = find_session(&state, session_id)?;
    let graph = session.graph.read().map_err(|_| lock_poisoned())?;

    Ok(Json(EdgeCostResponse {
        source: request.source,
        destination: request.destination,
        cost: graph.find_cost(request.source, request.destination),
    }))
}

pub async fn remove_edge(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<EdgeRequest>,
) -> ApiResult<EdgeCostResponse> {
    let session = find_session(&state, session_id)?;
    let mut graph = session.graph.write().map_err(|_| lock_poisoned())?;

    Ok(Json(EdgeCostResponse {
        source: request.source,
        destination: request.destination,
        cost: graph.remove_edge(request.source, request.destination),
    }))
}

/// Run Dijkstra on a session's graph
pub async fn find_shortest_paths(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<ShortestPathRequest>,
) -> ApiResult<ShortestPathResponse> {
    let session = find_session(&state, session_id)?;
    let graph = session.graph.read().map_err(|_| lock_poisoned())?;

    let dijkstra = Dijkstra::new().with_stale_entry_skipping(request.skip_stale_entries);
    let start_time = Instant::now();
    let (result, stats) = dijkstra
        .compute_with_stats(&*graph, request.source)
        .map_err(graph_error)?;
    let execution_time = start_time.elapsed();

    let mut paths: Vec<PathEntry> = result
        .iter()
        .map(|info| PathEntry {
            vertex: info.vertex(),
            label: graph.value(info.vertex()).cloned().unwrap_or_default(),
            distance: result.distance(info.vertex()),
            predecessor: info.previous(),
            path: result.path_to(info.vertex()),
        })
        .collect();
    paths.sort_by_key(|entry| entry.vertex);

    info!(
        "session {}: shortest paths from {} reached {} of {} vertices in {:?}",
        session_id,
        request.source,
        result.reachable_count(),
        result.len(),
        execution_time
    );

    Ok(Json(ShortestPathResponse {
        execution_id: Uuid::new_v4(),
        algorithm: "dijkstra".to_string(),
        source: request.source,
        execution_time_ms: execution_time.as_secs_f64() * 1000.0,
        reachable: result.reachable_count(),
        paths,
        metrics: stats.into(),
    }))
}

/// List all active sessions
pub async fn list_sessions(State(state): State<AppState>) -> ApiResult<Vec<Uuid>> {
    let sessions = state.sessions.read().map_err(|_| lock_poisoned())?;
    Ok(Json(sessions.keys().cloned().collect()))
}

/// Health check endpoint
pub async fn health_check() -> ApiResult<serde_json::Value> {
    Ok(Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION")
    })))
}

// Helper functions

fn api_error(status: StatusCode, error: &str, message: impl Into<String>) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: error.to_string(),
            message: message.into(),
            details: None,
        }),
    )
}

fn lock_poisoned() -> ApiError {
    api_error(
        StatusCode::INTERNAL_SERVER_ERROR,
        "lock_poisoned",
        "A previous request panicked while holding this lock",
    )
}

fn graph_error(err: Error) -> ApiError {
    warn!("rejected graph request: {}", err);
    let (status, code) = match &err {
        Error::InvalidVertex(_) => (StatusCode::BAD_REQUEST, "invalid_vertex"),
        Error::SourceNotFound => (StatusCode::NOT_FOUND, "source_not_found"),
        Error::NegativeCost { .. } => (StatusCode::UNPROCESSABLE_ENTITY, "negative_cost"),
    };
    let mut response = api_error(status, code, err.to_string());
    if let Error::NegativeCost { from, to, cost } = err {
        response.1.details = Some(serde_json::json!({
            "from": from,
            "to": to,
            "cost": cost,
        }));
    }
    response
}

fn register_session(state: &AppState, graph: LabeledGraph) -> Result<Session, ApiError> {
    let mut sessions = state.sessions.write().map_err(|_| lock_poisoned())?;
    if sessions.len() >= state.max_sessions {
        warn!("session limit of {} reached", state.max_sessions);
        return Err(api_error(
            StatusCode::SERVICE_UNAVAILABLE,
            "session_limit_reached",
            format!("At most {} sessions may be open", state.max_sessions),
        ));
    }

    let session = Session::new(graph);
    sessions.insert(session.id, session.clone());
    info!("created session {}", session.id);
    Ok(session)
}

fn find_session(state: &AppState, session_id: Uuid) -> Result<Session, ApiError> {
    let sessions = state.sessions.read().map_err(|_| lock_poisoned())?;
    sessions.get(&session_id).cloned().ok_or_else(session_not_found)
}

fn session_not_found() -> ApiError {
    api_error(StatusCode::NOT_FOUND, "session_not_found", "Session not found")
}

fn summarize(session: &Session) -> Result<GraphSummary, ApiError> {
    let graph = session.graph.read().map_err(|_| lock_poisoned())?;
    let mut vertices: Vec<VertexView> = graph
        .vertices()
        .map(|id| VertexView {
            id,
            label: graph.value(id).cloned().unwrap_or_default(),
            out_degree: graph.out_degree(id),
            in_degree: graph.in_degree(id),
        })
        .collect();
    vertices.sort_by_key(|vertex| vertex.id);

    Ok(GraphSummary {
        session_id: session.id,
        vertex_count: graph.vertex_count(),
        edge_count: graph.edge_count(),
        vertices,
        created_at: session.created_at,
    })
}
