use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use resumelens::analyzer::ResumeAnalyzer;
use resumelens::config::Config;
use resumelens::inference::InferenceClient;
use resumelens::routes::build_router;
use resumelens::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Resumelens API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize the inference client and the analyzer around it. The
    // analyzer is read-only after this point and shared by all requests.
    let generator = InferenceClient::new(config.inference_endpoint.clone());
    let analyzer = Arc::new(ResumeAnalyzer::new(Arc::new(generator)));
    info!(
        "Analyzer initialized (inference endpoint: {})",
        config.inference_endpoint
    );

    let state = AppState {
        analyzer,
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
