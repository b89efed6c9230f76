//! HTTP handlers module
//!
//! Contains all HTTP endpoint handling logic

pub mod demo;
pub mod generate;
pub mod health;

use crate::config::Settings;
use crate::middleware::logging::request_logging_middleware;
use crate::services::Orchestrator;
use anyhow::Result;
use axum::{
    extract::DefaultBodyLimit,
    http::HeaderValue,
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use std::time::Instant;
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::warn;

/// Application state
pub struct AppState {
    pub settings: Settings,
    pub orchestrator: Orchestrator,
    pub started_at: Instant,
}

/// Create application router with backends built from settings
pub fn create_router(settings: Settings) -> Result<Router> {
    let orchestrator = Orchestrator::new(&settings)?;
    Ok(create_router_with(settings, orchestrator))
}

/// Create application router around an existing orchestrator
pub fn create_router_with(settings: Settings, orchestrator: Orchestrator) -> Router {
    let cors = build_cors_layer(&settings);
    let body_limit = DefaultBodyLimit::max(settings.generation.max_request_size);

    let app_state = Arc::new(AppState {
        settings,
        orchestrator,
        started_at: Instant::now(),
    });

    let middleware_stack = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(request_logging_middleware))
        .layer(cors);

    Router::new()
        .route("/api/ai/generate", post(generate::handle_generate))
        .route("/api/ai/status", get(health::ai_status))
        .route("/api/demo", get(demo::handle_demo))
        .route("/health", get(health::health_check))
        .with_state(app_state)
        .layer(body_limit)
        .layer(middleware_stack)
}

/// Build the CORS layer from security settings
fn build_cors_layer(settings: &Settings) -> CorsLayer {
    if !settings.security.cors_enabled {
        return CorsLayer::new();
    }

    let origins = &settings.security.allowed_origins;
    let allow_origin = if origins.iter().any(|o| o == "*") {
        AllowOrigin::any()
    } else {
        let values: Vec<HeaderValue> = origins
            .iter()
            .filter_map(|origin| match origin.parse::<HeaderValue>() {
                Ok(value) => Some(value),
                Err(_) => {
                    warn!("Ignoring invalid CORS origin: {}", origin);
                    None
                }
            })
            .collect();
        AllowOrigin::list(values)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(Any)
        .allow_headers(Any)
}
