use axum::{
    http::{header, Method},
    Router,
};
use log::{info, warn};
use std::env;
use std::net::SocketAddr;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};

use crate::web::api::{create_router, AppState};

/// Configuration for the web server
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub enable_cors: bool,
    pub max_sessions: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3005,
            enable_cors: true,
            max_sessions: 1000,
        }
    }
}

impl ServerConfig {
    /// Applies `PATHGRAPH_HOST`, `PATHGRAPH_PORT` and `PATHGRAPH_MAX_SESSIONS`
    /// on top of the defaults. Unparsable values are ignored with a warning.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(host) = env::var("PATHGRAPH_HOST") {
            config.host = host;
        }
        if let Ok(port) = env::var("PATHGRAPH_PORT") {
            match port.parse() {
                Ok(port) => config.port = port,
                Err(_) => warn!("ignoring invalid PATHGRAPH_PORT {:?}", port),
            }
        }
        if let Ok(max_sessions) = env::var("PATHGRAPH_MAX_SESSIONS") {
            match max_sessions.parse() {
                Ok(max_sessions) => config.max_sessions = max_sessions,
                Err(_) => warn!("ignoring invalid PATHGRAPH_MAX_SESSIONS {:?}", max_sessions),
            }
        }

        config
    }
}

/// Build the application router with its state and middleware
pub fn build_app(config: &ServerConfig) -> Router {
    let app_state = AppState::new(config.max_sessions);
    let app = create_router().with_state(app_state);

    if config.enable_cors {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
            .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

        app.layer(ServiceBuilder::new().layer(cors).into_inner())
    } else {
        app
    }
}

/// Start the web server on localhost with default settings
pub async fn start_server(port: u16) -> Result<(), Box<dyn std::error::Error>> {
    start_server_with_config(ServerConfig {
        port,
        ..Default::default()
    })
    .await
}

/// Start the web server with custom configuration
pub async fn start_server_with_config(
    config: ServerConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let app = build_app(&config);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    info!("pathgraph server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
