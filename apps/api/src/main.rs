mod chat;
mod config;
mod document;
mod errors;
mod generation;
mod llm_client;
mod render;
mod routes;
mod state;
#[cfg(test)]
mod test_support;

use anyhow::{Context, Result};
use axum::http::HeaderValue;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::document::ShellTemplate;
use crate::llm_client::LlmClient;
use crate::render::ChromiumRenderer;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={},tower_http={}",
                env!("CARGO_CRATE_NAME"),
                &config.rust_log,
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting GemCraft API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize LLM client
    let generator = LlmClient::new(config.gemini_api_key.clone())
        .context("Failed to build Gemini HTTP client")?;
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    // Initialize PDF renderer
    let renderer = ChromiumRenderer::new(config.chrome_bin.clone(), config.render_timeout);
    info!(
        "PDF renderer: {} (timeout {:?})",
        config.chrome_bin, config.render_timeout
    );

    // Resume shell used to wrap incomplete model output
    let shell = match &config.shell_template_path {
        Some(path) => ShellTemplate::from_file(path)
            .with_context(|| format!("Invalid shell template at {}", path.display()))?,
        None => ShellTemplate::default(),
    };

    let cors = build_cors(&config.cors_origins)?;
    let port = config.port;

    // Build app state
    let state = AppState {
        generator: Arc::new(generator),
        renderer: Arc::new(renderer),
        shell: Arc::new(shell),
        config: Arc::new(config),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    let addr: SocketAddr = format!("0.0.0.0:{port}").parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// CORS restricted to the configured frontend origins.
fn build_cors(origins: &[String]) -> Result<CorsLayer> {
    let origins = origins
        .iter()
        .map(|origin| {
            HeaderValue::from_str(origin).with_context(|| format!("Invalid CORS origin: {origin}"))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any))
}
