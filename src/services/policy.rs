//! Platform policy table
//!
//! Static per-platform and per-tone guidance. Every lookup is total:
//! unknown platforms and tones resolve to a generic fallback.

use crate::models::{Platform, Tone};

pub const DEFAULT_PLATFORM_GUIDELINE: &str = "Create engaging, platform-appropriate content.";
pub const DEFAULT_TONE_GUIDELINE: &str = "Use professional, engaging tone.";
pub const DEFAULT_BASE_REACH: u64 = 500;
pub const DEFAULT_BEST_TIME: &str = "9:00 AM";

/// Writing guideline for a platform
pub fn guideline_for(platform: &Platform) -> &'static str {
    match platform {
        Platform::Instagram => "Create visually appealing, engaging content with relevant hashtags and emojis. Focus on storytelling and visual elements.",
        Platform::Twitter => "Keep content concise and engaging. Use trending hashtags and create shareable content.",
        Platform::Linkedin => "Professional tone with industry insights. Focus on thought leadership and business value.",
        Platform::Facebook => "Community-focused content that encourages engagement and sharing.",
        Platform::Blog => "Comprehensive, SEO-optimized content with clear structure and valuable insights.",
        Platform::Other(_) => DEFAULT_PLATFORM_GUIDELINE,
    }
}

/// Writing guideline for a tone
pub fn tone_guideline_for(tone: &Tone) -> &'static str {
    match tone {
        Tone::Professional => "Use formal language, industry terminology, and authoritative tone.",
        Tone::Casual => "Use conversational language, contractions, and friendly tone.",
        Tone::Friendly => "Warm, approachable tone with personal touches and inclusive language.",
        Tone::Authoritative => "Confident, expert tone with data and evidence to support claims.",
        Tone::Humorous => "Light-hearted, witty tone with appropriate humor and entertainment value.",
        Tone::Other(_) => DEFAULT_TONE_GUIDELINE,
    }
}

/// Baseline audience reach for a platform
pub fn base_reach_for(platform: &Platform) -> u64 {
    match platform {
        Platform::Instagram => 1000,
        Platform::Twitter => 800,
        Platform::Linkedin => 600,
        Platform::Facebook => 1200,
        Platform::Blog => 500,
        Platform::Other(_) => DEFAULT_BASE_REACH,
    }
}

/// Suggested posting time for a platform
pub fn best_time_for(platform: &Platform) -> &'static str {
    match platform {
        Platform::Instagram => "9:00 AM",
        Platform::Twitter => "8:00 AM",
        Platform::Linkedin => "9:00 AM",
        Platform::Facebook => "1:00 PM",
        Platform::Blog => "10:00 AM",
        Platform::Other(_) => DEFAULT_BEST_TIME,
    }
}

/// Platform-specific SEO terms, empty for unknown platforms
pub fn seo_terms_for(platform: &Platform) -> &'static [&'static str] {
    match platform {
        Platform::Instagram => &["visual", "storytelling", "engagement"],
        Platform::Twitter => &["trending", "conversation", "real-time"],
        Platform::Linkedin => &["professional", "networking", "industry"],
        Platform::Facebook => &["community", "sharing", "connection"],
        Platform::Blog => &["seo", "value", "insights"],
        Platform::Other(_) => &[],
    }
}
