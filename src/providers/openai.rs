//! OpenAI backend implementation
//!
//! Primary backend, backed by the OpenAI chat completions API

use super::{BackendKind, Generation, GenerationBackend, Prompt};
use crate::config::ProviderSettings;
use crate::models::openai::*;
use crate::models::TokenUsage;
use crate::utils::error::{helpers, AppResult, ErrorContext};
use crate::utils::logging::create_prompt_log_summary;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, error};

/// Sampling temperature used for every generation
pub const TEMPERATURE: f32 = 0.7;

/// OpenAI backend
pub struct OpenAIBackend {
    client: Client,
    api_key: Option<String>,
    base_url: String,
    model: String,
}

impl OpenAIBackend {
    /// Create a new OpenAI backend from provider settings
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

    /// Build the request URL
    fn build_url(&self) -> String {
        let base_url = self.base_url.trim_end_matches('/');
        format!("{}/chat/completions", base_url)
    }

    /// Build the upstream request body
    fn build_request(&self, prompt: &Prompt) -> OpenAIRequest {
        OpenAIRequest {
            model: self.model.clone(),
            messages: vec![
                OpenAIMessage::system(prompt.system.clone()),
                OpenAIMessage::user(prompt.user.clone()),
            ],
            max_tokens: Some(prompt.max_tokens),
            temperature: Some(TEMPERATURE),
        }
    }
}

#[async_trait]
impl GenerationBackend for OpenAIBackend {
    fn kind(&self) -> BackendKind {
        BackendKind::OpenAI
    }

    fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    async fn generate(&self, prompt: &Prompt) -> AppResult<Generation> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| helpers::backend_unavailable("OpenAI"))?;

        debug!("Sending OpenAI chat completion request: {}", create_prompt_log_summary(prompt));

        let response = self
            .client
            .post(self.build_url())
            .bearer_auth(api_key)
            .json(&self.build_request(prompt))
            .send()
            .await
            .backend_context("Failed to send OpenAI request")?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();

            return if let Ok(error_response) = serde_json::from_str::<OpenAIErrorResponse>(&error_text) {
                error!("OpenAI API error: {:?}", error_response.error);
                Err(helpers::backend_error(format!(
                    "OpenAI API error ({}): {}",
                    status, error_response.error.message
                )))
            } else {
                error!("OpenAI API request failed: {} - {}", status, error_text);
                Err(helpers::backend_error(format!(
                    "OpenAI API request failed: {} - {}",
                    status, error_text
                )))
            };
        }

        let openai_response: OpenAIResponse = response
            .json()
            .await
            .backend_context("Failed to parse OpenAI response")?;

        let text = openai_response
            .first_text()
            .ok_or_else(|| helpers::backend_error("OpenAI response contained no message content"))?
            .to_string();

        let usage = openai_response.usage.unwrap_or_default();

        debug!("OpenAI request completed successfully");
        Ok(Generation {
            text,
            usage: TokenUsage::new(usage.prompt_tokens, usage.completion_tokens),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;

    #[test]
    fn test_build_url() {
        let mut settings = Settings::default().openai;
        settings.base_url = "https://api.openai.com/v1/".to_string();

        let backend = OpenAIBackend::new(&settings).unwrap();
        assert_eq!(backend.build_url(), "https://api.openai.com/v1/chat/completions");
    }

    #[test]
    fn test_build_request() {
        let backend = OpenAIBackend::new(&Settings::default().openai).unwrap();
        let prompt = Prompt {
            system: "system".to_string(),
            user: "user".to_string(),
            max_tokens: 300,
        };

        let request = backend.build_request(&prompt);
        assert_eq!(request.model, "gpt-4");
        assert_eq!(request.messages.len(), 2);
        assert_eq!(request.messages[0].role, "system");
        assert_eq!(request.messages[1].content.as_deref(), Some("user"));
        assert_eq!(request.max_tokens, Some(300));
        assert_eq!(request.temperature, Some(0.7));
    }

    #[tokio::test]
    async fn test_unconfigured_backend_is_unavailable() {
        let backend = OpenAIBackend::new(&Settings::default().openai).unwrap();
        assert!(!backend.is_configured());

        let prompt = Prompt {
            system: String::new(),
            user: "hello".to_string(),
            max_tokens: 10,
        };
        let result = backend.generate(&prompt).await;
        assert!(matches!(result, Err(crate::utils::error::AppError::BackendUnavailable(_))));
    }
}
