//! Anthropic backend implementation
//!
//! Secondary backend, backed by the Anthropic messages API

use super::{BackendKind, Generation, GenerationBackend, Prompt};
use crate::config::ProviderSettings;
use crate::models::anthropic::*;
use crate::models::TokenUsage;
use crate::utils::error::{helpers, AppResult, ErrorContext};
use crate::utils::logging::create_prompt_log_summary;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, error};

/// Anthropic API version header value
pub const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Anthropic backend
pub struct AnthropicBackend {
    client: Client,
    api_key: Option<String>,
    base_url: String,
    model: String,
}

impl AnthropicBackend {
    /// Create a new Anthropic backend from provider settings
    pub fn new(settings: &ProviderSettings) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout))
            .user_agent(concat!("contentgen/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            api_key: settings.api_key.clone(),
            base_url: settings.base_url.clone(),
            model: settings.model.clone(),
        })
    }

    /// Build request URL
    fn build_url(&self) -> String {
        let base_url = self.base_url.trim_end_matches('/');
        format!("{}/v1/messages", base_url)
    }

    fn build_request(&self, prompt: &Prompt) -> AnthropicRequest {
        AnthropicRequest {
            model: self.model.clone(),
            max_tokens: prompt.max_tokens,
            system: Some(prompt.system.clone()),
            messages: vec![AnthropicMessage::user(prompt.user.clone())],
        }
    }
}

#[async_trait]
impl GenerationBackend for AnthropicBackend {
    fn kind(&self) -> BackendKind {
        BackendKind::Anthropic
    }

    fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    async fn generate(&self, prompt: &Prompt) -> AppResult<Generation> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| helpers::backend_unavailable("Anthropic"))?;

        debug!("Sending Anthropic messages request: {}", create_prompt_log_summary(prompt));

        let response = self
            .client
            .post(self.build_url())
            .header("x-api-key", api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&self.build_request(prompt))
            .send()
            .await
            .backend_context("Failed to send Anthropic request")?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();

            return if let Ok(error_response) = serde_json::from_str::<AnthropicErrorResponse>(&error_text) {
                error!("Anthropic API error: {:?}", error_response.error);
                Err(helpers::backend_error(format!(
                    "Anthropic API error ({}): {}",
                    status, error_response.error.message
                )))
            } else {
                error!("Anthropic API request failed: {} - {}", status, error_text);
                Err(helpers::backend_error(format!(
                    "Anthropic API request failed: {} - {}",
                    status, error_text
                )))
            };
        }

        let anthropic_response: AnthropicResponse = response
            .json()
            .await
            .backend_context("Failed to parse Anthropic response")?;

        let text = anthropic_response
            .first_text()
            .ok_or_else(|| helpers::backend_error("Anthropic response contained no text block"))?
            .to_string();

        let usage = anthropic_response.usage.unwrap_or_default();

        debug!("Anthropic request completed successfully");
        Ok(Generation {
            text,
            usage: TokenUsage::new(usage.input_tokens, usage.output_tokens),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;

    #[test]
    fn test_build_url() {
        let mut settings = Settings::default().anthropic;
        settings.base_url = "https://api.anthropic.com/".to_string();

        let backend = AnthropicBackend::new(&settings).unwrap();
        assert_eq!(backend.build_url(), "https://api.anthropic.com/v1/messages");
    }

    #[test]
    fn test_build_request_carries_system_prompt() {
        let backend = AnthropicBackend::new(&Settings::default().anthropic).unwrap();
        let prompt = Prompt {
            system: "be helpful".to_string(),
            user: "write".to_string(),
            max_tokens: 1000,
        };

        let request = backend.build_request(&prompt);
        assert_eq!(request.model, "claude-3-sonnet-20240229");
        assert_eq!(request.system.as_deref(), Some("be helpful"));
        assert_eq!(request.messages.len(), 1);
        assert_eq!(request.messages[0].role, "user");
        assert_eq!(request.max_tokens, 1000);
    }

    #[test]
    fn test_unconfigured() {
        let backend = AnthropicBackend::new(&Settings::default().anthropic).unwrap();
        assert!(!backend.is_configured());
        assert_eq!(backend.kind(), BackendKind::Anthropic);
    }
}
