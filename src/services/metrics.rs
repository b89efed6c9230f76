//! Text metrics
//!
//! Pure, deterministic heuristics deriving marketing metadata from a body
//! of text. The numbers feed UI previews, so the heuristics are pinned
//! exactly rather than made linguistically accurate.

use crate::models::{Platform, Sentiment};
use crate::services::policy;
use once_cell::sync::Lazy;
use regex::Regex;

pub const MAX_HASHTAGS: usize = 5;
pub const MAX_EMOJIS: usize = 3;

pub const FALLBACK_HASHTAGS: [&str; 3] = ["#content", "#ai", "#socialmedia"];
pub const FALLBACK_EMOJIS: [&str; 3] = ["💡", "✨", "🚀"];

const POSITIVE_WORDS: [&str; 6] = ["amazing", "great", "excellent", "wonderful", "fantastic", "awesome"];
const NEGATIVE_WORDS: [&str; 5] = ["terrible", "awful", "horrible", "bad", "disappointing"];

/// Code points treated as emojis (Miscellaneous Symbols and Dingbats)
const EMOJI_RANGE: std::ops::RangeInclusive<char> = '\u{2600}'..='\u{27BF}';

static HASHTAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"#[A-Za-z0-9_]+").expect("valid hashtag regex"));
static SENTENCE_SPLIT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]+").expect("valid sentence regex"));
static SILENT_SUFFIX_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:[^laeiouy]es|ed|[^laeiouy]e)$").expect("valid suffix regex"));
static LEADING_Y_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^y").expect("valid leading-y regex"));
static VOWEL_GROUP_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[aeiouy]{1,2}").expect("valid vowel regex"));

/// Hashtags in order of appearance, at most five
pub fn extract_hashtags(text: &str) -> Vec<String> {
    let found: Vec<String> = HASHTAG_RE
        .find_iter(text)
        .take(MAX_HASHTAGS)
        .map(|m| m.as_str().to_string())
        .collect();

    if found.is_empty() {
        FALLBACK_HASHTAGS.iter().map(|s| s.to_string()).collect()
    } else {
        found
    }
}

/// Emojis in order of appearance, at most three
pub fn extract_emojis(text: &str) -> Vec<String> {
    let found: Vec<String> = text
        .chars()
        .filter(|c| EMOJI_RANGE.contains(c))
        .take(MAX_EMOJIS)
        .map(String::from)
        .collect();

    if found.is_empty() {
        FALLBACK_EMOJIS.iter().map(|s| s.to_string()).collect()
    } else {
        found
    }
}

/// Platform base reach, boosted by half for bodies longer than 100 chars
pub fn estimate_reach(platform: &Platform, content_length: usize) -> u64 {
    let multiplier = if content_length > 100 { 1.5 } else { 1.0 };
    (policy::base_reach_for(platform) as f64 * multiplier).floor() as u64
}

/// Keyword-count sentiment; ties are neutral
pub fn analyze_sentiment(text: &str) -> Sentiment {
    let lowered = text.to_lowercase();
    let (positive, negative) = lowered
        .split_whitespace()
        .fold((0usize, 0usize), |(pos, neg), word| {
            (
                pos + POSITIVE_WORDS.contains(&word) as usize,
                neg + NEGATIVE_WORDS.contains(&word) as usize,
            )
        });

    if positive > negative {
        Sentiment::Positive
    } else if negative > positive {
        Sentiment::Negative
    } else {
        Sentiment::Neutral
    }
}

/// Flesch reading ease clamped to [0, 100]; 0 for blank text
///
/// Sentences are every segment produced by splitting on `.!?` runs,
/// including the empty segment after trailing punctuation, so "Hi." counts
/// as two.
pub fn calculate_readability(text: &str) -> f64 {
    let words = text.split_whitespace().count();
    if words == 0 {
        return 0.0;
    }

    let sentences = SENTENCE_SPLIT_RE.split(text).count();
    let syllables = count_syllables(text);

    let words_per_sentence = words as f64 / sentences as f64;
    let syllables_per_word = syllables as f64 / words as f64;

    let score = 206.835 - 1.015 * words_per_sentence - 84.6 * syllables_per_word;
    score.clamp(0.0, 100.0)
}

/// Total syllables over all whitespace-separated words
pub fn count_syllables(text: &str) -> usize {
    text.to_lowercase()
        .split_whitespace()
        .map(count_word_syllables)
        .sum()
}

/// Syllable heuristic for a single lowercase word
pub fn count_word_syllables(word: &str) -> usize {
    if word.chars().count() <= 3 {
        return 1;
    }

    let stripped = SILENT_SUFFIX_RE.replace(word, "");
    let stripped = LEADING_Y_RE.replace(&stripped, "");

    match VOWEL_GROUP_RE.find_iter(&stripped).count() {
        0 => 1,
        n => n,
    }
}
