//! Content generation data models
//!
//! Defines the request accepted by the engine and the result it returns

use serde::{Deserialize, Serialize};
use std::fmt;

/// Target publishing platform
///
/// Unknown platforms are carried verbatim so every lookup can fall back
/// to a generic policy instead of rejecting the request.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Platform {
    Instagram,
    Twitter,
    Linkedin,
    Facebook,
    Blog,
    /// Any platform without a policy entry
    Other(String),
}

impl Platform {
    /// Platform name as supplied by the caller
    pub fn as_str(&self) -> &str {
        match self {
            Platform::Instagram => "instagram",
            Platform::Twitter => "twitter",
            Platform::Linkedin => "linkedin",
            Platform::Facebook => "facebook",
            Platform::Blog => "blog",
            Platform::Other(raw) => raw,
        }
    }
}

impl From<&str> for Platform {
    fn from(value: &str) -> Self {
        match value {
            "instagram" => Platform::Instagram,
            "twitter" => Platform::Twitter,
            "linkedin" => Platform::Linkedin,
            "facebook" => Platform::Facebook,
            "blog" => Platform::Blog,
            other => Platform::Other(other.to_string()),
        }
    }
}

impl From<String> for Platform {
    fn from(value: String) -> Self {
        Platform::from(value.as_str())
    }
}

impl From<Platform> for String {
    fn from(value: Platform) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Voice the generated content should use
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Tone {
    Professional,
    Casual,
    Friendly,
    Authoritative,
    Humorous,
    /// Any tone without a policy entry
    Other(String),
}

impl Tone {
    pub fn as_str(&self) -> &str {
        match self {
            Tone::Professional => "professional",
            Tone::Casual => "casual",
            Tone::Friendly => "friendly",
            Tone::Authoritative => "authoritative",
            Tone::Humorous => "humorous",
            Tone::Other(raw) => raw,
        }
    }
}

impl Default for Tone {
    fn default() -> Self {
        Tone::Professional
    }
}

impl From<&str> for Tone {
    fn from(value: &str) -> Self {
        match value {
            "professional" => Tone::Professional,
            "casual" => Tone::Casual,
            "friendly" => Tone::Friendly,
            "authoritative" => Tone::Authoritative,
            "humorous" => Tone::Humorous,
            other => Tone::Other(other.to_string()),
        }
    }
}

impl From<String> for Tone {
    fn from(value: String) -> Self {
        Tone::from(value.as_str())
    }
}

impl From<Tone> for String {
    fn from(value: Tone) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Content generation request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    /// Natural-language brief
    pub prompt: String,
    /// Target platform
    pub platform: Platform,
    /// Content type (post, article, newsletter, ...)
    pub content_type: String,
    /// Tone of voice
    #[serde(default)]
    pub tone: Tone,
    /// Industry (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    /// Target audience (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_audience: Option<String>,
    /// SEO keywords supplied by the caller (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<String>>,
    /// Desired word count (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub word_count: Option<u32>,
}

impl GenerationRequest {
    /// Create a request with only the required fields set
    pub fn new(
        prompt: impl Into<String>,
        platform: impl Into<Platform>,
        content_type: impl Into<String>,
        tone: impl Into<Tone>,
    ) -> Self {
        Self {
            prompt: prompt.into(),
            platform: platform.into(),
            content_type: content_type.into(),
            tone: tone.into(),
            industry: None,
            target_audience: None,
            keywords: None,
            word_count: None,
        }
    }

    pub fn with_word_count(mut self, word_count: u32) -> Self {
        self.word_count = Some(word_count);
        self
    }

    pub fn with_keywords(mut self, keywords: Vec<String>) -> Self {
        self.keywords = Some(keywords);
        self
    }
}

/// Detected overall sentiment of a text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Negative => "negative",
            Sentiment::Neutral => "neutral",
        }
    }
}

/// Marketing metadata derived from the generated body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentMetadata {
    /// At most five hashtags
    pub hashtags: Vec<String>,
    /// At most three emojis
    pub emojis: Vec<String>,
    /// SEO keywords
    pub seo_keywords: Vec<String>,
    /// Estimated audience reach
    pub estimated_reach: u64,
    /// Suggested posting time, e.g. "9:00 AM"
    pub best_time_to_post: String,
    /// Sentiment of the body
    pub sentiment: Sentiment,
    /// Flesch reading ease in [0, 100]
    pub readability_score: f64,
}

/// Generated content
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedContent {
    /// Backend-tagged, time-ordered unique id
    pub id: String,
    pub title: String,
    pub body: String,
    pub platform: Platform,
    pub content_type: String,
    pub metadata: ContentMetadata,
}

/// Usage and cost of a single generation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsageReport {
    /// Tokens consumed by this call
    pub current: u64,
    /// Nominal token limit (advisory)
    pub limit: u64,
    /// `limit - current`, negative when over the limit
    pub remaining: i64,
    /// Cost in USD
    pub cost: f64,
}

/// Full result of a generation call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationResult {
    pub content: GeneratedContent,
    pub usage: UsageReport,
}

/// Token counts reported by a backend
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenUsage {
    /// Prompt/input tokens
    pub input_tokens: u32,
    /// Completion/output tokens
    pub output_tokens: u32,
}

impl TokenUsage {
    pub fn new(input_tokens: u32, output_tokens: u32) -> Self {
        Self { input_tokens, output_tokens }
    }

    pub fn total(&self) -> u64 {
        self.input_tokens as u64 + self.output_tokens as u64
    }
}
