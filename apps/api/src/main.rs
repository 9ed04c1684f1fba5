mod analysis;
mod config;
mod errors;
mod extract;
mod llm_client;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::analysis::{AiAnalyzer, Lexicon, ResumeAnalyzer, RuleBasedAnalyzer};
use crate::config::Config;
use crate::llm_client::GeminiClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Resume ATS API v{}", env!("CARGO_PKG_VERSION"));

    // Load the lexicon once; every analyzer shares this instance.
    let lexicon = Arc::new(match &config.lexicon_path {
        Some(path) => Lexicon::from_file(path)
            .with_context(|| format!("Failed to load lexicon from {}", path.display()))?,
        None => Lexicon::builtin(),
    });
    info!(
        "Lexicon loaded: {} sections, {} keywords",
        lexicon.section_count(),
        lexicon.keywords().len()
    );

    let rule_based: Arc<dyn ResumeAnalyzer> =
        Arc::new(RuleBasedAnalyzer::new(Arc::clone(&lexicon)));

    // AI strategy is only wired up when a key is present.
    let ai: Option<Arc<dyn ResumeAnalyzer>> = match &config.gemini_api_key {
        Some(key) => {
            let client = GeminiClient::new(
                key.clone(),
                config.gemini_api_base.clone(),
                config.ai_request_timeout,
            )
            .context("Failed to build HTTP client")?;
            let analyzer = AiAnalyzer::new(
                Arc::new(client),
                config.gemini_models.clone(),
                Arc::clone(&lexicon),
                config.ai_analysis_timeout,
            );
            info!("AI analyzer initialized (cascade: {})", analyzer.models().join(" -> "));
            Some(Arc::new(analyzer))
        }
        None => {
            warn!("GEMINI_API_KEY is not set; AI analysis is disabled");
            None
        }
    };

    // Build app state
    let state = AppState {
        config: config.clone(),
        lexicon,
        rule_based,
        ai,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Resolves on Ctrl+C so in-flight requests can finish.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {e}");
        return;
    }
    info!("Shutdown signal received");
}
