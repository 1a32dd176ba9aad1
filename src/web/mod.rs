//! HTTP service hosting graph sessions.
//!
//! Each session owns one labeled graph. Clients add and remove vertices and
//! edges and run shortest path queries over JSON.

pub mod api;
pub mod models;
pub mod server;

pub use api::{create_router, AppState};
pub use server::{build_app, start_server, start_server_with_config, ServerConfig};
