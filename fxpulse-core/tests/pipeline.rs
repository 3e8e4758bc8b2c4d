//! End-to-end pipeline tests: canned feeds through scoring, aggregation,
//! and the change transform, the exact sequence a render cycle performs.

use chrono::NaiveDate;

use fxpulse_core::data::{sample_headlines, sample_rates, FeedResult, NewsFeed, RateFeed};
use fxpulse_core::domain::{Headline, RatePoint, SentimentLabel, SentimentSummary};
use fxpulse_core::sentiment::{aggregate, PolarityScorer};
use fxpulse_core::series::daily_change;

/// News feed that returns a fixed batch, standing in for the scraper.
struct CannedNews(Vec<Headline>);

impl NewsFeed for CannedNews {
    fn fetch(&self, _query: &str, limit: usize) -> FeedResult<Vec<Headline>> {
        Ok(self.0.iter().take(limit).cloned().collect())
    }
}

/// Rate feed that returns a fixed series, standing in for the downloader.
struct CannedRates(Vec<RatePoint>);

impl RateFeed for CannedRates {
    fn fetch(&self, _symbol: &str, _days: i64) -> FeedResult<Vec<RatePoint>> {
        Ok(self.0.clone())
    }
}

fn make_points(closes: &[f64]) -> Vec<RatePoint> {
    let start = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
    closes
        .iter()
        .enumerate()
        .map(|(i, &close)| RatePoint::new(start + chrono::Days::new(i as u64), close))
        .collect()
}

#[test]
fn news_cycle_labels_indonesian_headlines_in_order() {
    let feed = CannedNews(vec![
        "Rupiah melemah terhadap dolar".into(),
        "Ekonomi membaik pesat".into(),
    ]);
    let scorer = PolarityScorer::new();

    let headlines = feed.fetch("nilai tukar USD rupiah inflasi", 8).unwrap();
    let table = aggregate(&scorer, &headlines);

    assert_eq!(table.len(), 2);
    assert_eq!(table[0].text, "Rupiah melemah terhadap dolar");
    assert_eq!(table[0].label, SentimentLabel::Negative);
    assert_eq!(table[1].text, "Ekonomi membaik pesat");
    assert_eq!(table[1].label, SentimentLabel::Positive);

    let summary = SentimentSummary::of(&table);
    assert_eq!(summary.positive, 1);
    assert_eq!(summary.negative, 1);
    assert_eq!(summary.neutral, 0);
}

#[test]
fn empty_news_cycle_produces_empty_table_without_error() {
    let feed = CannedNews(Vec::new());
    let scorer = PolarityScorer::new();

    let headlines = feed.fetch("nilai tukar EUR rupiah inflasi", 8).unwrap();
    assert!(headlines.is_empty());

    let table = aggregate(&scorer, &headlines);
    assert!(table.is_empty());
    assert_eq!(SentimentSummary::of(&table).total(), 0);
}

#[test]
fn rate_cycle_aligns_chart_inputs() {
    let feed = CannedRates(make_points(&[15_000.0, 15_150.0, 15_100.0, 15_250.0]));

    let rates = feed.fetch("USDIDR=X", 180).unwrap();
    let changes = daily_change(&rates);

    assert_eq!(changes.len(), rates.len());
    assert!(changes[0].pct.is_nan());
    assert!((changes[1].pct - 1.0).abs() < 1e-10);
    for (rate, change) in rates.iter().zip(changes.iter()) {
        assert_eq!(rate.date, change.date);
    }

    // Points the chart actually plots: everything but the leading sentinel.
    let plotted = changes.iter().filter(|c| c.is_defined()).count();
    assert_eq!(plotted, rates.len() - 1);
}

#[test]
fn empty_rate_cycle_produces_empty_chart_inputs() {
    let feed = CannedRates(Vec::new());

    let rates = feed.fetch("EURIDR=X", 90).unwrap();
    let changes = daily_change(&rates);

    assert!(rates.is_empty());
    assert!(changes.is_empty());
}

#[test]
fn offline_cycle_runs_on_sample_data() {
    let rates = sample_rates(120, 42);
    let changes = daily_change(&rates);

    assert_eq!(rates.len(), 120);
    assert_eq!(changes.len(), 120);
    assert!(changes[0].pct.is_nan());
    // A positive random walk never trips the zero-divisor guard.
    assert!(changes.iter().skip(1).all(|c| c.is_defined()));

    let scorer = PolarityScorer::new();
    let table = aggregate(&scorer, &sample_headlines(8));
    assert_eq!(table.len(), 8);
    let summary = SentimentSummary::of(&table);
    assert_eq!(summary.total(), 8);
    // The fixed batch leans both ways, so the dashboard shows a mix.
    assert!(summary.positive > 0);
    assert!(summary.negative > 0);
}

#[test]
fn feeds_are_usable_as_trait_objects() {
    let news: Box<dyn NewsFeed> = Box::new(CannedNews(vec!["Rupiah stabil".into()]));
    let rates: Box<dyn RateFeed> = Box::new(CannedRates(make_points(&[15_000.0])));

    assert_eq!(news.fetch("q", 8).unwrap().len(), 1);
    assert_eq!(rates.fetch("USDIDR=X", 30).unwrap().len(), 1);
}
