//! Content generation handler
//!
//! Validates the incoming brief and hands it to the orchestrator

use crate::handlers::AppState;
use crate::models::{GenerationRequest, GenerationResult, Platform, Tone};
use crate::utils::error::{helpers, AppError, AppResult, ErrorContext};
use crate::utils::logging::create_request_log_summary;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

pub const MISSING_FIELDS_MESSAGE: &str = "Prompt, platform, and content type are required";

/// Raw request body; required fields are checked by `into_request`
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateBody {
    pub prompt: Option<String>,
    pub platform: Option<String>,
    pub content_type: Option<String>,
    pub tone: Option<String>,
    pub industry: Option<String>,
    pub target_audience: Option<String>,
    pub keywords: Option<Vec<String>>,
    pub word_count: Option<u32>,
}

impl GenerateBody {
    /// Validate required fields and apply defaults
    ///
    /// Tone defaults to professional; a zero word count is treated as absent.
    pub fn into_request(self) -> AppResult<GenerationRequest> {
        let required = |field: Option<String>| field.filter(|value| !value.is_empty());

        let (prompt, platform, content_type) = match (
            required(self.prompt),
            required(self.platform),
            required(self.content_type),
        ) {
            (Some(prompt), Some(platform), Some(content_type)) => (prompt, platform, content_type),
            _ => return Err(helpers::invalid_request(MISSING_FIELDS_MESSAGE)),
        };

        Ok(GenerationRequest {
            prompt,
            platform: Platform::from(platform),
            content_type,
            tone: self.tone.map(Tone::from).unwrap_or_default(),
            industry: self.industry,
            target_audience: self.target_audience,
            keywords: self.keywords,
            word_count: self.word_count.filter(|&count| count > 0),
        })
    }
}

/// Handle content generation requests
///
/// POST /api/ai/generate
pub async fn handle_generate(
    State(state): State<Arc<AppState>>,
    body: Result<Json<GenerateBody>, JsonRejection>,
) -> AppResult<Json<GenerationResult>> {
    let Json(body) = body.map_err(reject_body)?;

    let request = body.into_request()?;
    debug!("Generation request: {}", create_request_log_summary(&request));

    let timeout = Duration::from_secs(state.settings.generation.timeout);
    let task_state = Arc::clone(&state);
    let mut task = tokio::spawn(async move {
        task_state.orchestrator.generate_content(&request).await
    });

    let result = match tokio::time::timeout(timeout, &mut task).await {
        Ok(joined) => joined.internal_context("Generation task failed")?,
        Err(_) => {
            task.abort();
            return Err(AppError::Timeout);
        }
    };

    debug!("Generated {} via id {}", result.content.title, result.content.id);
    Ok(Json(result))
}

/// Map a body extraction failure to an API error
fn reject_body(rejection: JsonRejection) -> AppError {
    warn!("Rejected generation body: {}", rejection);
    if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge
    } else {
        helpers::invalid_request(MISSING_FIELDS_MESSAGE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body() -> GenerateBody {
        GenerateBody {
            prompt: Some("Spring sale".to_string()),
            platform: Some("instagram".to_string()),
            content_type: Some("post".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_defaults_applied() {
        let request = body().into_request().unwrap();
        assert_eq!(request.tone, Tone::Professional);
        assert_eq!(request.platform, Platform::Instagram);
        assert!(request.word_count.is_none());
    }

    #[test]
    fn test_missing_fields_rejected() {
        let mut missing_prompt = body();
        missing_prompt.prompt = None;
        let mut missing_platform = body();
        missing_platform.platform = None;
        let mut empty_content_type = body();
        empty_content_type.content_type = Some(String::new());

        for b in [missing_prompt, missing_platform, empty_content_type] {
            match b.into_request() {
                Err(AppError::InvalidRequest(msg)) => assert_eq!(msg, MISSING_FIELDS_MESSAGE),
                other => panic!("expected invalid request, got {:?}", other.map(|r| r.prompt)),
            }
        }
    }

    #[test]
    fn test_zero_word_count_ignored() {
        let mut b = body();
        b.word_count = Some(0);
        assert!(b.into_request().unwrap().word_count.is_none());
    }
}
