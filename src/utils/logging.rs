//! Logging utilities
//!
//! Shared logging configuration and helper functions

use crate::models::GenerationRequest;
use crate::providers::Prompt;

/// Set to true to include full prompts in debug logs
/// Default is false to reduce log verbosity
pub const VERBOSE_REQUEST_LOGGING: bool = false;

/// Truncate a string with a note about original length
pub fn truncate_content(s: &str, max_len: usize) -> String {
    let total = s.chars().count();
    if total > max_len {
        let head: String = s.chars().take(max_len).collect();
        format!("{}... ({} chars truncated)", head, total - max_len)
    } else {
        s.to_string()
    }
}

/// Create a filtered summary of a generation request for logging
pub fn create_request_log_summary(request: &GenerationRequest) -> serde_json::Value {
    if VERBOSE_REQUEST_LOGGING {
        serde_json::to_value(request).unwrap_or(serde_json::json!({"error": "serialize failed"}))
    } else {
        serde_json::json!({
            "prompt": truncate_content(&request.prompt, 200),
            "platform": request.platform.as_str(),
            "contentType": request.content_type,
            "tone": request.tone.as_str(),
            "wordCount": request.word_count,
            "keywords": request.keywords.as_ref().map(|k| k.len()).unwrap_or(0),
        })
    }
}

/// Create a filtered summary of a backend prompt for logging
pub fn create_prompt_log_summary(prompt: &Prompt) -> serde_json::Value {
    if VERBOSE_REQUEST_LOGGING {
        serde_json::json!({
            "system": prompt.system,
            "user": prompt.user,
            "max_tokens": prompt.max_tokens,
        })
    } else {
        serde_json::json!({
            "system": truncate_content(&prompt.system, 100),
            "user": truncate_content(&prompt.user, 200),
            "max_tokens": prompt.max_tokens,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_content() {
        assert_eq!(truncate_content("short", 10), "short");
        assert_eq!(truncate_content("abcdef", 3), "abc... (3 chars truncated)");
        // multi-byte characters are never split
        assert_eq!(truncate_content("✨✨✨✨", 2), "✨✨... (2 chars truncated)");
    }

    #[test]
    fn test_request_summary_hides_long_prompt() {
        let request = GenerationRequest::new("x".repeat(500), "blog", "article", "casual");
        let summary = create_request_log_summary(&request);

        assert_eq!(summary["platform"], "blog");
        assert!(summary["prompt"].as_str().unwrap().contains("300 chars truncated"));
    }
}
