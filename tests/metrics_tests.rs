//! Text metrics and prompt builder tests
//!
//! Pins the exact outputs of the deterministic heuristics

use contentgen::models::{GenerationRequest, Platform, Sentiment};
use contentgen::services::metrics::*;
use contentgen::services::prompt::{build_system_prompt, max_tokens_for};

#[test]
fn test_extract_hashtags_examples() {
    assert_eq!(extract_hashtags("check #one and #two"), vec!["#one", "#two"]);
    assert_eq!(extract_hashtags("no tags here"), vec!["#content", "#ai", "#socialmedia"]);
}

#[test]
fn test_extract_hashtags_word_characters_only() {
    assert_eq!(extract_hashtags("#snake_case2024! and #kebab-case"), vec!["#snake_case2024", "#kebab"]);
    // a lone '#' is not a hashtag
    assert_eq!(extract_hashtags("# heading"), vec!["#content", "#ai", "#socialmedia"]);
}

#[test]
fn test_hashtag_and_emoji_bounds() {
    let many_tags = (0..20).map(|i| format!("#tag{}", i)).collect::<Vec<_>>().join(" ");
    let tags = extract_hashtags(&many_tags);
    assert_eq!(tags.len(), 5);
    assert_eq!(tags[0], "#tag0");
    assert_eq!(tags[4], "#tag4");

    let many_emojis = "\u{2600}".repeat(10) + &"\u{2728}".repeat(10);
    let emojis = extract_emojis(&many_emojis);
    assert_eq!(emojis, vec!["\u{2600}", "\u{2600}", "\u{2600}"]);
}

#[test]
fn test_extract_emojis_fallback() {
    assert_eq!(extract_emojis(""), vec!["\u{1F4A1}", "\u{2728}", "\u{1F680}"]);
    assert_eq!(extract_emojis("Launch day \u{2705} \u{2764}"), vec!["\u{2705}", "\u{2764}"]);
}

#[test]
fn test_sentiment_examples() {
    assert_eq!(analyze_sentiment("this is amazing and wonderful"), Sentiment::Positive);
    assert_eq!(analyze_sentiment("this is terrible"), Sentiment::Negative);
    assert_eq!(analyze_sentiment("this is a thing"), Sentiment::Neutral);
    assert_eq!(analyze_sentiment(""), Sentiment::Neutral);
}

#[test]
fn test_sentiment_requires_exact_tokens() {
    // punctuation attached to a word prevents a match
    assert_eq!(analyze_sentiment("simply amazing!"), Sentiment::Neutral);
    assert_eq!(analyze_sentiment("bad bad great"), Sentiment::Negative);
}

#[test]
fn test_estimate_reach_examples() {
    assert_eq!(estimate_reach(&Platform::from("instagram"), 150), 1500);
    assert_eq!(estimate_reach(&Platform::from("unknown"), 50), 500);
    assert_eq!(estimate_reach(&Platform::from("unknown"), 500), 750);
    assert_eq!(estimate_reach(&Platform::Linkedin, 101), 900);
    assert_eq!(estimate_reach(&Platform::Blog, 0), 500);
}

#[test]
fn test_readability_edge_cases() {
    assert_eq!(calculate_readability(""), 0.0);
    assert_eq!(calculate_readability("   "), 0.0);
    // punctuation alone is one short "word" over two segments and clamps high
    assert_eq!(calculate_readability("..."), 100.0);
}

#[test]
fn test_readability_pinned_scores() {
    let score = calculate_readability("Content marketing drives growth.");
    assert!((score - 56.755).abs() < 1e-9, "unexpected score {}", score);

    // two sentences plus the trailing empty segment: 4 words over 3 segments, 7 syllables
    let score = calculate_readability("Marketing works. Content sells!");
    let expected = 206.835 - 1.015 * (4.0 / 3.0) - 84.6 * (7.0 / 4.0);
    assert!((score - expected).abs() < 1e-9, "unexpected score {}", score);

    // short monosyllabic text clamps at the top of the range
    assert_eq!(calculate_readability("I like it. We go now."), 100.0);

    for text in ["Hello world", "Beautiful organizations communicate effectively.", "a. b! c?"] {
        let score = calculate_readability(text);
        assert!((0.0..=100.0).contains(&score), "{} out of range for {:?}", score, text);
    }
}

#[test]
fn test_syllable_heuristic_pinned() {
    assert_eq!(count_syllables("the cat"), 2);
    assert_eq!(count_syllables("Hello beautiful world"), 7);
    assert_eq!(count_syllables("marketing content"), 5);
    assert_eq!(count_word_syllables("queue"), 2);
    assert_eq!(count_word_syllables("ooo"), 1);
    assert_eq!(count_word_syllables("brrr"), 1);
}

#[test]
fn test_system_prompt_is_pure() {
    let request = GenerationRequest::new("Announce our launch", "twitter", "thread", "humorous");
    assert_eq!(build_system_prompt(&request), build_system_prompt(&request.clone()));
}

#[test]
fn test_system_prompt_ignores_keywords() {
    let request = GenerationRequest::new("Announce our launch", "linkedin", "post", "professional");
    let with_keywords = request
        .clone()
        .with_keywords(vec!["saas".to_string(), "b2b".to_string()]);

    assert_eq!(build_system_prompt(&request), build_system_prompt(&with_keywords));
}

#[test]
fn test_max_tokens_policy() {
    let request = GenerationRequest::new("brief", "blog", "article", "casual");
    assert_eq!(max_tokens_for(&request), 1000);
    assert_eq!(max_tokens_for(&request.with_word_count(800)), 1600);
}
