//! Prompt builder
//!
//! Composes the backend prompt from the policy table and the request

use crate::models::GenerationRequest;
use crate::providers::Prompt;
use crate::services::policy;

/// Completion budget when the request has no word count
pub const DEFAULT_MAX_TOKENS: u32 = 1000;

const REQUIREMENTS: [&str; 7] = [
    "Create high-quality, engaging content",
    "Include relevant hashtags (3-5 for social media)",
    "Suggest appropriate emojis",
    "Optimize for the specified platform",
    "Consider SEO keywords if applicable",
    "Provide estimated reach and best posting time",
    "Ensure content is original and valuable",
];

/// Build the system prompt for a request
///
/// Only platform, tone and content type shape the prompt. `keywords`,
/// `industry` and `target_audience` are accepted on the request but are
/// not embedded here; changing that is a product decision.
pub fn build_system_prompt(request: &GenerationRequest) -> String {
    let requirements = REQUIREMENTS
        .iter()
        .enumerate()
        .map(|(i, line)| format!("{}. {}", i + 1, line))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "You are an expert content creator specializing in {platform} content generation.\n\n\
         Platform Guidelines: {platform_guideline}\n\n\
         Tone Guidelines: {tone_guideline}\n\n\
         Content Type: {content_type}\n\n\
         Requirements:\n{requirements}\n\n\
         Format your response as natural content that can be directly used.",
        platform = request.platform,
        platform_guideline = policy::guideline_for(&request.platform),
        tone_guideline = policy::tone_guideline_for(&request.tone),
        content_type = request.content_type,
        requirements = requirements,
    )
}

/// Completion token budget: twice the word count, or the default
pub fn max_tokens_for(request: &GenerationRequest) -> u32 {
    request
        .word_count
        .map(|count| count.saturating_mul(2))
        .unwrap_or(DEFAULT_MAX_TOKENS)
}

/// Assemble the full backend prompt for a request
pub fn build_prompt(request: &GenerationRequest) -> Prompt {
    Prompt {
        system: build_system_prompt(request),
        user: request.prompt.clone(),
        max_tokens: max_tokens_for(request),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_request() -> GenerationRequest {
        GenerationRequest::new("New seasonal croissant", "instagram", "post", "friendly")
    }

    #[test]
    fn test_prompt_embeds_policy() {
        let prompt = build_system_prompt(&sample_request());

        assert!(prompt.starts_with("You are an expert content creator specializing in instagram content generation."));
        assert!(prompt.contains("Platform Guidelines: Create visually appealing"));
        assert!(prompt.contains("Tone Guidelines: Warm, approachable tone"));
        assert!(prompt.contains("Content Type: post"));
        assert!(prompt.contains("2. Include relevant hashtags (3-5 for social media)"));
        assert!(prompt.contains("7. Ensure content is original and valuable"));
        assert!(prompt.ends_with("Format your response as natural content that can be directly used."));
    }

    #[test]
    fn test_prompt_ignores_keywords() {
        let plain = sample_request();
        let with_keywords = sample_request().with_keywords(vec!["butter".to_string(), "flaky".to_string()]);

        assert_eq!(build_system_prompt(&plain), build_system_prompt(&with_keywords));
        assert!(!build_system_prompt(&with_keywords).contains("butter"));
    }

    #[test]
    fn test_unknown_platform_uses_fallback_guideline() {
        let request = GenerationRequest::new("brief", "email", "newsletter", "cheeky");
        let prompt = build_system_prompt(&request);

        assert!(prompt.contains("specializing in email content generation"));
        assert!(prompt.contains("Platform Guidelines: Create engaging, platform-appropriate content."));
        assert!(prompt.contains("Tone Guidelines: Use professional, engaging tone."));
    }

    #[test]
    fn test_max_tokens() {
        assert_eq!(max_tokens_for(&sample_request()), 1000);
        assert_eq!(max_tokens_for(&sample_request().with_word_count(150)), 300);
    }

    #[test]
    fn test_build_prompt_uses_brief_as_user_message() {
        let prompt = build_prompt(&sample_request());
        assert_eq!(prompt.user, "New seasonal croissant");
        assert_eq!(prompt.max_tokens, 1000);
    }
}
