mod analysis;
mod config;
mod errors;
mod extract;
mod report;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::http::HeaderValue;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::analysis::engine::SimilarityAnalyzer;
use crate::analysis::remote::RemoteAnalyzer;
use crate::analysis::Analyzer;
use crate::config::Config;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!(
        "Starting resume analysis API v{}",
        env!("CARGO_PKG_VERSION")
    );

    // Select the analysis backend
    let analyzer: Arc<dyn Analyzer> = match &config.analysis_api_url {
        Some(url) => {
            info!("Analysis backend: remote ({url})");
            Arc::new(RemoteAnalyzer::new(url.clone()))
        }
        None => {
            info!("Analysis backend: built-in similarity engine");
            Arc::new(SimilarityAnalyzer)
        }
    };

    info!("Serving static frontend from {}", config.static_dir);

    let state = AppState {
        config: config.clone(),
        analyzer,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&config));

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Locks CORS down to the configured frontend origin when one is set;
/// otherwise stays permissive for local development.
fn cors_layer(config: &Config) -> CorsLayer {
    match config
        .frontend_url
        .as_deref()
        .and_then(|url| url.parse::<HeaderValue>().ok())
    {
        Some(origin) => CorsLayer::new()
            .allow_origin(origin)
            .allow_methods(tower_http::cors::Any)
            .allow_headers(tower_http::cors::Any),
        None => CorsLayer::permissive(),
    }
}
