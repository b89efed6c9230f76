//! Metadata extraction performance benchmarks

use contentgen::models::GenerationRequest;
use contentgen::services::metrics::*;
use contentgen::services::orchestrator::extract_metadata;
use contentgen::services::prompt::build_prompt;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

const SAMPLE_BODY: &str = "What an amazing week at the bakery! \u{2615} Our seasonal croissant is finally here. \
Flaky layers, maple glaze and a hint of cinnamon. Come by early, they sell out fast! \
#bakery #croissant #local #smallbusiness #fresh #weekend \u{2728}";

fn sample_request() -> GenerationRequest {
    GenerationRequest::new("Announce our seasonal croissant", "instagram", "post", "friendly")
        .with_word_count(150)
}

fn bench_individual_metrics(c: &mut Criterion) {
    let mut group = c.benchmark_group("metrics");

    group.bench_function("extract_hashtags", |b| {
        b.iter(|| extract_hashtags(black_box(SAMPLE_BODY)))
    });

    group.bench_function("extract_emojis", |b| {
        b.iter(|| extract_emojis(black_box(SAMPLE_BODY)))
    });

    group.bench_function("analyze_sentiment", |b| {
        b.iter(|| analyze_sentiment(black_box(SAMPLE_BODY)))
    });

    group.bench_function("calculate_readability", |b| {
        b.iter(|| calculate_readability(black_box(SAMPLE_BODY)))
    });

    group.finish();
}

fn bench_body_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("body_sizes");

    for repeats in [1usize, 10, 100].iter() {
        let body = SAMPLE_BODY.repeat(*repeats);
        group.bench_with_input(BenchmarkId::new("calculate_readability", repeats), &body, |b, body| {
            b.iter(|| calculate_readability(black_box(body)))
        });
    }

    group.finish();
}

fn bench_metadata(c: &mut Criterion) {
    let request = sample_request();

    c.bench_function("extract_metadata", |b| {
        b.iter(|| extract_metadata(black_box(SAMPLE_BODY), black_box(&request)))
    });

    c.bench_function("build_prompt", |b| {
        b.iter(|| build_prompt(black_box(&request)))
    });
}

criterion_group!(benches, bench_individual_metrics, bench_body_sizes, bench_metadata);
criterion_main!(benches);
