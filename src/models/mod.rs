//! Data models module
//!
//! Defines the generation request/result structures and the upstream
//! OpenAI and Anthropic wire formats

pub mod anthropic;
pub mod generation;
pub mod openai;

pub use generation::{
    ContentMetadata, GeneratedContent, GenerationRequest, GenerationResult, Platform, Sentiment,
    TokenUsage, Tone, UsageReport,
};
