//! Content Generation Library
//!
//! Turns a natural-language brief into platform-ready content with
//! derived marketing metadata, degrading across generation backends

pub mod config;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod providers;
pub mod services;
pub mod utils;

// Re-export common types
pub use config::Settings;
pub use handlers::{create_router, create_router_with, AppState};
pub use models::{ContentMetadata, GenerationRequest, GenerationResult};
pub use providers::{BackendKind, GenerationBackend};
pub use services::Orchestrator;
pub use utils::error::{AppError, AppResult};

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Library description
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Get version information
pub fn version_info() -> String {
    format!("{} v{} - {}", NAME, VERSION, DESCRIPTION)
}
