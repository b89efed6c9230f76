//! Generation backend module
//!
//! Defines the GenerationBackend trait and its implementations

pub mod anthropic;
pub mod offline;
pub mod openai;

use crate::models::TokenUsage;
use crate::utils::error::AppResult;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifies a generation backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    /// OpenAI chat completions (primary)
    #[serde(rename = "openai")]
    OpenAI,
    /// Anthropic messages (secondary)
    Anthropic,
    /// Deterministic offline fallback
    Offline,
}

impl BackendKind {
    /// Name used in logs and as the content id prefix
    pub fn as_str(&self) -> &'static str {
        match self {
            BackendKind::OpenAI => "openai",
            BackendKind::Anthropic => "anthropic",
            BackendKind::Offline => "offline",
        }
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BackendKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "openai" => Ok(BackendKind::OpenAI),
            "anthropic" => Ok(BackendKind::Anthropic),
            "offline" => Ok(BackendKind::Offline),
            other => anyhow::bail!("Unknown backend: {}", other),
        }
    }
}

/// Prompt handed to a backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    /// System instructions
    pub system: String,
    /// User brief
    pub user: String,
    /// Completion token budget
    pub max_tokens: u32,
}

/// Raw text produced by a backend
#[derive(Debug, Clone, PartialEq)]
pub struct Generation {
    pub text: String,
    pub usage: TokenUsage,
}

/// Backend capable of turning a prompt into text
///
/// Returns `AppError::BackendUnavailable` when the backend has no
/// credential and `AppError::Backend` when the call itself fails.
#[async_trait]
pub trait GenerationBackend: Send + Sync {
    /// Which backend this is
    fn kind(&self) -> BackendKind;

    /// Whether a credential is present
    fn is_configured(&self) -> bool {
        true
    }

    /// Generate text for the prompt
    async fn generate(&self, prompt: &Prompt) -> AppResult<Generation>;
}

pub use anthropic::AnthropicBackend;
pub use offline::OfflineBackend;
pub use openai::OpenAIBackend;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_kind_parsing() {
        assert_eq!("openai".parse::<BackendKind>().unwrap(), BackendKind::OpenAI);
        assert_eq!(" Anthropic ".parse::<BackendKind>().unwrap(), BackendKind::Anthropic);
        assert!("gemini".parse::<BackendKind>().is_err());
    }

    #[test]
    fn test_backend_kind_serde() {
        assert_eq!(serde_json::to_string(&BackendKind::OpenAI).unwrap(), "\"openai\"");
        let kind: BackendKind = serde_json::from_str("\"anthropic\"").unwrap();
        assert_eq!(kind, BackendKind::Anthropic);
    }
}
