//! Content Generation Server
//!
//! HTTP service exposing the content generation engine

use anyhow::{Context, Result};
use contentgen::config::{LoggingConfig, Settings};
use contentgen::handlers::create_router;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    // Load settings first so logging honours LOG_FORMAT from .env
    let settings = Settings::new().context("Failed to load server settings")?;

    init_logging(&settings.logging)?;
    info!("{}", contentgen::version_info());

    if settings.openai.api_key.is_none() && settings.anthropic.api_key.is_none() {
        warn!("No API keys configured, serving offline generations only");
    }

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let app = create_router(settings).context("Failed to create router")?;

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("🚀 Content generation server started!");
    info!("📝 Health check: http://{}/health", addr);
    info!("✍️  Generate endpoint: http://{}/api/ai/generate", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to start server: {}", e))?;

    Ok(())
}

/// Initialize logging system
fn init_logging(config: &LoggingConfig) -> Result<()> {
    let subscriber: Box<dyn tracing::Subscriber + Send + Sync> = if config.format == "json" {
        // JSON format logs (production environment)
        Box::new(tracing_subscriber::fmt()
            .with_env_filter(config.level.as_str())
            .json()
            .with_current_span(false)
            .with_span_list(false)
            .finish())
    } else {
        // Human readable format (development environment)
        Box::new(tracing_subscriber::fmt()
            .with_env_filter(config.level.as_str())
            .with_target(false)
            .with_thread_ids(false)
            .with_file(false)
            .with_line_number(false)
            .finish())
    };

    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;

    info!("Logging system initialized");
    Ok(())
}
