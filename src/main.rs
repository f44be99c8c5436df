use std::net::SocketAddr;

use anyhow::anyhow;
use axum::http::{Method, header::{AUTHORIZATION, CONTENT_TYPE}};
use clap::Parser;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use podgen_gateway::{AppState, ServerConfig, routes};

/// Podgen Gateway - podcast audio generation service
#[derive(Parser, Debug)]
#[command(name = "podgen-gateway")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Override the listen port from the environment
    #[arg(short = 'p', long = "port")]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if it exists (must be done before config loading)
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let mut config = ServerConfig::from_env().map_err(|e| anyhow!(e.to_string()))?;
    if let Some(port) = cli.port {
        config.port = port;
    }

    let address = config.address();
    let cors_origins = config.cors_allowed_origins.clone();

    // Create application state
    let app_state = AppState::from_config(config)?;

    // Configure CORS
    let cors_layer = if let Some(ref origins) = cors_origins {
        if origins == "*" {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        } else {
            // Parse comma-separated origins
            let origins: Vec<_> = origins
                .split(',')
                .filter_map(|s| s.trim().parse().ok())
                .collect();
            CorsLayer::new()
                .allow_origin(origins)
                .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        }
    } else {
        // No CORS configured - same-origin only. Set CORS_ALLOWED_ORIGINS to
        // enable cross-origin access.
        info!("CORS not configured, defaulting to same-origin only");
        CorsLayer::new()
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers([CONTENT_TYPE])
    };

    let app = routes::api::create_api_router()
        .with_state(app_state)
        .layer(cors_layer);

    let socket_addr: SocketAddr = address
        .parse()
        .map_err(|e| anyhow!("Invalid server address '{}': {}", address, e))?;

    info!("Server listening on http://{}", socket_addr);

    let listener = TcpListener::bind(&socket_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
