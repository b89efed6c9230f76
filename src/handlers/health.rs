//! Health check handlers
//!
//! Provides service health and backend availability endpoints

use crate::handlers::AppState;
use crate::providers::BackendKind;
use axum::{extract::State, response::Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Timestamp
    pub timestamp: String,
    /// Deployment environment
    pub environment: String,
    /// Human readable message
    pub message: String,
    /// Version information
    pub version: String,
    /// Uptime in seconds
    pub uptime_seconds: u64,
}

/// Backend availability response
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiStatusResponse {
    /// Whether a real backend is configured
    pub real_ai_available: bool,
    /// Backend tried first
    pub preferred_model: BackendKind,
    /// Configured real backends
    pub backends: Vec<BackendKind>,
}

/// Basic health check
///
/// GET /health
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    debug!("Executing health check");

    Json(HealthResponse {
        status: "ok".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        environment: state.settings.server.environment.clone(),
        message: "Content generation server is running".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.started_at.elapsed().as_secs(),
    })
}

/// Backend availability
///
/// GET /api/ai/status
pub async fn ai_status(State(state): State<Arc<AppState>>) -> Json<AiStatusResponse> {
    debug!("Executing AI status check");

    let orchestrator = &state.orchestrator;
    Json(AiStatusResponse {
        real_ai_available: orchestrator.is_real_ai_available(),
        preferred_model: orchestrator.preferred_model(),
        backends: orchestrator.available_backends(),
    })
}
