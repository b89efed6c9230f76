//! Generation orchestrator
//!
//! Picks a backend by preference, degrades to the offline backend on any
//! failure, and assembles the final result with metadata and usage.

use crate::config::Settings;
use crate::models::{ContentMetadata, GeneratedContent, GenerationRequest, GenerationResult};
use crate::providers::{
    AnthropicBackend, BackendKind, Generation, GenerationBackend, OfflineBackend, OpenAIBackend,
};
use crate::services::pricing::Pricing;
use crate::services::{metrics, policy, prompt};
use anyhow::Result;
use chrono::Utc;
use std::sync::Arc;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Keywords every result carries before the platform-specific ones
pub const BASE_SEO_KEYWORDS: [&str; 3] = ["content", "marketing", "social media"];

/// Generation orchestrator
///
/// The preferred backend is plain construction state. The HTTP layer
/// shares the orchestrator behind an `Arc` and never mutates it, so each
/// request sees one consistent preference.
pub struct Orchestrator {
    /// Primary backend (OpenAI)
    primary: Arc<dyn GenerationBackend>,
    /// Secondary backend (Anthropic)
    secondary: Arc<dyn GenerationBackend>,
    /// Backend tried first when configured
    preferred: BackendKind,
}

impl Orchestrator {
    /// Create an orchestrator from settings
    ///
    /// Missing credentials never fail here; the affected backend simply
    /// reports itself as unconfigured.
    pub fn new(settings: &Settings) -> Result<Self> {
        let primary: Arc<dyn GenerationBackend> = Arc::new(OpenAIBackend::new(&settings.openai)?);
        let secondary: Arc<dyn GenerationBackend> = Arc::new(AnthropicBackend::new(&settings.anthropic)?);

        let orchestrator = Self::with_backends(primary, secondary, settings.generation.preferred_model);

        info!(
            "Orchestrator initialized: preferred={}, available={:?}",
            orchestrator.preferred,
            orchestrator.available_backends()
        );

        Ok(orchestrator)
    }

    /// Create an orchestrator from explicit backends
    pub fn with_backends(
        primary: Arc<dyn GenerationBackend>,
        secondary: Arc<dyn GenerationBackend>,
        preferred: BackendKind,
    ) -> Self {
        Self {
            primary,
            secondary,
            preferred,
        }
    }

    /// Change which backend is tried first
    pub fn set_preferred_model(&mut self, preferred: BackendKind) {
        self.preferred = preferred;
    }

    pub fn preferred_model(&self) -> BackendKind {
        self.preferred
    }

    /// Whether any real (non-offline) backend is configured
    pub fn is_real_ai_available(&self) -> bool {
        self.primary.is_configured() || self.secondary.is_configured()
    }

    /// Configured real backends
    pub fn available_backends(&self) -> Vec<BackendKind> {
        [&self.primary, &self.secondary]
            .into_iter()
            .filter(|backend| backend.is_configured())
            .map(|backend| backend.kind())
            .collect()
    }

    /// Backend to try first, `None` meaning offline
    ///
    /// The secondary backend is used only when it is preferred and
    /// configured; otherwise the primary backend is used when configured.
    fn select_backend(&self) -> Option<&Arc<dyn GenerationBackend>> {
        match self.preferred {
            BackendKind::Offline => None,
            BackendKind::Anthropic if self.secondary.is_configured() => Some(&self.secondary),
            _ if self.primary.is_configured() => Some(&self.primary),
            _ => None,
        }
    }

    /// Generate content for a request
    ///
    /// Never fails: if the selected backend errors, the error is logged
    /// and the offline backend produces the body instead.
    pub async fn generate_content(&self, request: &GenerationRequest) -> GenerationResult {
        let prompt = prompt::build_prompt(request);
        let offline = OfflineBackend::for_request(request);

        let (kind, generation) = match self.select_backend() {
            Some(backend) => match backend.generate(&prompt).await {
                Ok(generation) => (backend.kind(), generation),
                Err(e) => {
                    warn!("{} generation failed, falling back to offline: {}", backend.kind(), e);
                    (BackendKind::Offline, offline.generate_now(&prompt))
                }
            },
            None => {
                debug!("No real backend selected, using offline backend");
                (BackendKind::Offline, offline.generate_now(&prompt))
            }
        };

        info!(
            "Generated {} for {} via {} ({} tokens)",
            request.content_type,
            request.platform,
            kind,
            generation.usage.total()
        );

        build_result(request, kind, generation)
    }
}

/// Assemble the result for a finished generation
pub fn build_result(request: &GenerationRequest, kind: BackendKind, generation: Generation) -> GenerationResult {
    let metadata = extract_metadata(&generation.text, request);
    let usage = Pricing::for_backend(kind).report(&generation.usage);

    GenerationResult {
        content: GeneratedContent {
            id: content_id(kind),
            title: generate_title(request),
            body: generation.text,
            platform: request.platform.clone(),
            content_type: request.content_type.clone(),
            metadata,
        },
        usage,
    }
}

/// Derive marketing metadata from a body
pub fn extract_metadata(body: &str, request: &GenerationRequest) -> ContentMetadata {
    ContentMetadata {
        hashtags: metrics::extract_hashtags(body),
        emojis: metrics::extract_emojis(body),
        seo_keywords: seo_keywords(request),
        // length in chars; UTF-16 lengths differ only for astral-plane emoji
        estimated_reach: metrics::estimate_reach(&request.platform, body.chars().count()),
        best_time_to_post: policy::best_time_for(&request.platform).to_string(),
        sentiment: metrics::analyze_sentiment(body),
        readability_score: metrics::calculate_readability(body),
    }
}

/// Base keywords followed by up to three platform terms
pub fn seo_keywords(request: &GenerationRequest) -> Vec<String> {
    BASE_SEO_KEYWORDS
        .iter()
        .chain(policy::seo_terms_for(&request.platform).iter().take(3))
        .map(|s| s.to_string())
        .collect()
}

/// "{Content type, capitalized} for {platform}"
pub fn generate_title(request: &GenerationRequest) -> String {
    let mut chars = request.content_type.chars();
    let content_type = match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
        None => String::new(),
    };
    format!("{} for {}", content_type, request.platform)
}

/// Backend-tagged, time-ordered unique id
fn content_id(kind: BackendKind) -> String {
    let suffix = Uuid::new_v4().simple().to_string();
    format!("{}_{}_{}", kind, Utc::now().timestamp_millis(), &suffix[..8])
}
