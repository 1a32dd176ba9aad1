use pathgraph::web::server::{start_server_with_config, ServerConfig};
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    // Environment first, then an optional port argument on top
    let mut config = ServerConfig::from_env();
    if let Some(port) = env::args().nth(1) {
        config.port = port.parse()?;
    }

    println!("Starting pathgraph web server...");
    println!("Configuration:");
    println!("   Address: {}:{}", config.host, config.port);
    println!("   CORS enabled: {}", config.enable_cors);
    println!("   Max sessions: {}", config.max_sessions);
    println!();

    start_server_with_config(config).await?;

    Ok(())
}
