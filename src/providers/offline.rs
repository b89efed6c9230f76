//! Offline backend implementation
//!
//! Deterministic template backend used when no real backend is configured
//! and as the last-resort fallback when one fails. It never errors.

use super::{BackendKind, Generation, GenerationBackend, Prompt};
use crate::models::{GenerationRequest, TokenUsage};
use crate::utils::error::AppResult;
use async_trait::async_trait;

/// Offline backend bound to one request's parameters
#[derive(Debug, Clone)]
pub struct OfflineBackend {
    content_type: String,
    platform: String,
    tone: String,
}

impl OfflineBackend {
    /// Create an offline backend for the given request
    pub fn for_request(request: &GenerationRequest) -> Self {
        Self {
            content_type: request.content_type.clone(),
            platform: request.platform.to_string(),
            tone: request.tone.to_string(),
        }
    }

    /// Synthesize the body for a user brief
    pub fn synthesize(&self, brief: &str) -> String {
        format!(
            "Generated {} for {} with {} tone: {}",
            self.content_type, self.platform, self.tone, brief
        )
    }

    /// Same as `generate`, without the async/Result wrapper
    pub fn generate_now(&self, prompt: &Prompt) -> Generation {
        Generation {
            text: self.synthesize(&prompt.user),
            usage: TokenUsage::new(0, 1),
        }
    }
}

#[async_trait]
impl GenerationBackend for OfflineBackend {
    fn kind(&self) -> BackendKind {
        BackendKind::Offline
    }

    async fn generate(&self, prompt: &Prompt) -> AppResult<Generation> {
        Ok(self.generate_now(prompt))
    }
}
