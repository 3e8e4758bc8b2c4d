//! Criterion benchmarks for fxpulse hot paths.
//!
//! Benchmarks:
//! 1. Polarity scoring (single headlines, batch aggregation)
//! 2. Daily change computation over rate windows
//! 3. Sentiment summary tallies

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use fxpulse_core::data::{sample_headlines, sample_rates};
use fxpulse_core::domain::SentimentSummary;
use fxpulse_core::sentiment::{aggregate, PolarityScorer};
use fxpulse_core::series::daily_change;

// ── Helpers ──────────────────────────────────────────────────────────

/// Cycles the bundled sample headlines out to `n` entries.
fn headline_batch(n: usize) -> Vec<String> {
    let base = sample_headlines(8);
    (0..n).map(|i| base[i % base.len()].clone()).collect()
}

// ── 1. Polarity Scoring ──────────────────────────────────────────────

fn bench_scoring(c: &mut Criterion) {
    let mut group = c.benchmark_group("polarity_scoring");
    let scorer = PolarityScorer::new();

    group.bench_function("indonesian_headline", |b| {
        b.iter(|| scorer.score(black_box("Rupiah melemah tertekan penguatan dolar AS")));
    });

    group.bench_function("english_headline", |b| {
        b.iter(|| scorer.score(black_box("Rupiah rallies as exports surge past forecasts")));
    });

    for &count in &[8, 32, 128] {
        let headlines = headline_batch(count);
        group.bench_with_input(BenchmarkId::new("aggregate", count), &count, |b, _| {
            b.iter(|| aggregate(black_box(&scorer), black_box(&headlines)));
        });
    }

    group.finish();
}

// ── 2. Daily Change ──────────────────────────────────────────────────

fn bench_daily_change(c: &mut Criterion) {
    let mut group = c.benchmark_group("daily_change");

    for &days in &[30i64, 180, 365] {
        let points = sample_rates(days, 7);
        group.bench_with_input(BenchmarkId::new("window", days), &days, |b, _| {
            b.iter(|| daily_change(black_box(&points)));
        });
    }

    group.finish();
}

// ── 3. Summary Tallies ───────────────────────────────────────────────

fn bench_summary(c: &mut Criterion) {
    let mut group = c.benchmark_group("sentiment_summary");

    let scorer = PolarityScorer::new();
    let table = aggregate(&scorer, &headline_batch(128));

    group.bench_function("tally_128_rows", |b| {
        b.iter(|| SentimentSummary::of(black_box(&table)));
    });

    group.finish();
}

criterion_group!(benches, bench_scoring, bench_daily_change, bench_summary);
criterion_main!(benches);
