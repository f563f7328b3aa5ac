mod analysis;
mod config;
mod errors;
mod models;
mod project;
mod reelpass;
mod routes;
mod state;
mod suggestions;
mod upstream;
mod verification;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::analysis::analyzer::{RuleBasedAnalyzer, ScopeAnalyzer, UpstreamAnalyzer};
use crate::config::Config;
use crate::routes::build_router;
use crate::state::AppState;
use crate::upstream::UpstreamClient;
use crate::verification::oracle::{HttpVerifier, PlaceholderVerifier, VideoVerifier};

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

    info!("Starting ReelPass API v{}", env!("CARGO_PKG_VERSION"));

    let timeout = Duration::from_secs(config.upstream_timeout_secs);

    // Scope analyzer: local rules unless ANALYSIS_UPSTREAM_URL is set
    let analyzer: Arc<dyn ScopeAnalyzer> = match &config.analysis_upstream_url {
        Some(url) => {
            let client = UpstreamClient::new(url, config.upstream_api_key.clone(), timeout)?;
            Arc::new(UpstreamAnalyzer::new(client))
        }
        None => Arc::new(RuleBasedAnalyzer),
    };
    info!("Scope analyzer initialized (backend: {})", analyzer.backend_name());

    // Video oracle: placeholder unless VIDEO_VERIFIER_URL is set
    let verifier: Arc<dyn VideoVerifier> = match &config.video_verifier_url {
        Some(url) => {
            let client = UpstreamClient::new(url, config.upstream_api_key.clone(), timeout)?;
            Arc::new(HttpVerifier::new(client))
        }
        None => Arc::new(PlaceholderVerifier),
    };
    info!("Video verifier initialized (backend: {})", verifier.backend_name());

    let state = AppState { analyzer, verifier };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
