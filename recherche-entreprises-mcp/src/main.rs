use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;

mod config;
mod error;
mod mcp;
mod recherche_entreprises;
mod service;
mod tools;

use crate::config::Transport;
use crate::mcp::McpState;
use crate::service::SearchService;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    init_logging();

    info!(
        "Starting recherche-entreprises MCP server v{}",
        env!("CARGO_PKG_VERSION")
    );

    let config = config::load_config()?;
    info!(
        transport = ?config.transport,
        base_url = %config.upstream.base_url,
        timeout_secs = config.upstream.timeout_secs,
        filter_presence = ?config.search.filter_presence,
        "Configuration loaded"
    );

    let service = Arc::new(SearchService::new(&config)?);
    let state = Arc::new(McpState::new(service));

    match config.transport {
        Transport::Stdio => mcp::stdio::serve(state).await?,
        Transport::Http => {
            let app = mcp::http::router(state, &config.mcp.path);
            let addr = format!("{}:{}", config.server.host, config.server.port);
            let listener = TcpListener::bind(&addr).await?;
            info!(path = %config.mcp.path, "Listening on {}", addr);

            axum::serve(listener, app).await?;
        }
    }

    Ok(())
}

fn init_logging() {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let format = fmt::format()
        .with_target(true)
        .with_thread_ids(true)
        .compact();

    // Use RUST_LOG if set, otherwise default to info level for our crate
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("recherche_entreprises_mcp=info"));

    // stdout belongs to the stdio transport
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .event_format(format)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}
