//! FxPulse CLI — scored-headline and exchange-rate reports without the TUI.
//!
//! Commands:
//! - `news` — fetch headlines for a currency, score them, print the table
//! - `rates` — fetch the rate series, print the tail with summary stats
//! - `report` — both pipelines for one currency in a single run
//!
//! `news` and `rates` fail hard on a fetch error (nonzero exit); `report`
//! degrades per pipeline and renders whatever succeeded.

use anyhow::{anyhow, bail, Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use fxpulse_core::data::catalog::{
    DEFAULT_HEADLINE_LIMIT, DEFAULT_WINDOW_DAYS, MAX_WINDOW_DAYS, MIN_WINDOW_DAYS,
};
use fxpulse_core::data::{
    sample_headlines, sample_rates, symbol_seed, Currency, CurrencyCatalog, FeedResult,
    GoogleNewsFeed, NewsFeed, RateFeed, YahooRatesFeed,
};
use fxpulse_core::domain::{ChangePoint, RatePoint, SentimentRecord, SentimentSummary};
use fxpulse_core::sentiment::{aggregate, PolarityScorer};
use fxpulse_core::series::{change_bounds, daily_change, latest_change};

mod export;

/// Rows shown in the rates table; the full series goes to `--export`.
const TAIL_ROWS: usize = 10;

#[derive(Parser)]
#[command(
    name = "fxpulse-cli",
    about = "FxPulse CLI — rupiah news sentiment and exchange-rate reports"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch and score news headlines for a currency pair.
    News {
        /// Currency code from the catalog (e.g. USD, EUR, JPY).
        #[arg(long, default_value = "USD")]
        currency: String,

        /// Maximum number of headlines to fetch.
        #[arg(long, default_value_t = DEFAULT_HEADLINE_LIMIT)]
        limit: usize,

        /// Literal search query, overriding the one built from the currency.
        #[arg(long)]
        query: Option<String>,

        /// Path to a TOML currency catalog. Defaults to the built-in pairs.
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Offline mode: deterministic sample data, no network access.
        #[arg(long, default_value_t = false)]
        offline: bool,

        /// Write the scored table as CSV (text,label,score) to this path.
        #[arg(long)]
        export: Option<PathBuf>,
    },
    /// Fetch the exchange-rate series and its daily percent change.
    Rates {
        /// Currency code from the catalog (e.g. USD, EUR, JPY).
        #[arg(long, default_value = "USD")]
        currency: String,

        /// Lookback window in days.
        #[arg(long, default_value_t = DEFAULT_WINDOW_DAYS)]
        days: i64,

        /// Path to a TOML currency catalog. Defaults to the built-in pairs.
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Offline mode: deterministic sample data, no network access.
        #[arg(long, default_value_t = false)]
        offline: bool,

        /// Write the full series as CSV (date,close,change_pct) to this path.
        #[arg(long)]
        export: Option<PathBuf>,
    },
    /// Run both pipelines for one currency and print a combined report.
    Report {
        /// Currency code from the catalog (e.g. USD, EUR, JPY).
        #[arg(long, default_value = "USD")]
        currency: String,

        /// Lookback window in days.
        #[arg(long, default_value_t = DEFAULT_WINDOW_DAYS)]
        days: i64,

        /// Maximum number of headlines to fetch.
        #[arg(long, default_value_t = DEFAULT_HEADLINE_LIMIT)]
        limit: usize,

        /// Path to a TOML currency catalog. Defaults to the built-in pairs.
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Offline mode: deterministic sample data, no network access.
        #[arg(long, default_value_t = false)]
        offline: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::News {
            currency,
            limit,
            query,
            catalog,
            offline,
            export,
        } => run_news(currency, limit, query, catalog, offline, export),
        Commands::Rates {
            currency,
            days,
            catalog,
            offline,
            export,
        } => run_rates(currency, days, catalog, offline, export),
        Commands::Report {
            currency,
            days,
            limit,
            catalog,
            offline,
        } => run_report(currency, days, limit, catalog, offline),
    }
}

fn run_news(
    currency: String,
    limit: usize,
    query: Option<String>,
    catalog_path: Option<PathBuf>,
    offline: bool,
    export_path: Option<PathBuf>,
) -> Result<()> {
    let catalog = load_catalog(catalog_path.as_deref())?;
    // An explicit --query bypasses the catalog lookup entirely.
    let query = match query {
        Some(q) => q,
        None => select_currency(&catalog, &currency)?.news_query(),
    };

    let headlines = fetch_headlines(&query, limit, offline)
        .with_context(|| format!("news fetch failed for query '{query}'"))?;

    let scorer = PolarityScorer::new();
    let table = aggregate(&scorer, &headlines);
    let summary = SentimentSummary::of(&table);

    print_news(&query, &table, &summary);

    if let Some(path) = export_path {
        let csv = export::export_news_csv(&table)?;
        export::write_export(&path, &csv)?;
        println!("Exported: {}", path.display());
    }

    Ok(())
}

fn run_rates(
    currency: String,
    days: i64,
    catalog_path: Option<PathBuf>,
    offline: bool,
    export_path: Option<PathBuf>,
) -> Result<()> {
    validate_days(days)?;
    let catalog = load_catalog(catalog_path.as_deref())?;
    let pair = select_currency(&catalog, &currency)?;

    let rates = fetch_rates(&pair.symbol, days, offline)
        .with_context(|| format!("rate fetch failed for symbol '{}'", pair.symbol))?;
    let changes = daily_change(&rates);

    print_rates(pair, &rates, &changes);

    if let Some(path) = export_path {
        let csv = export::export_rates_csv(&rates, &changes)?;
        export::write_export(&path, &csv)?;
        println!("Exported: {}", path.display());
    }

    Ok(())
}

fn run_report(
    currency: String,
    days: i64,
    limit: usize,
    catalog_path: Option<PathBuf>,
    offline: bool,
) -> Result<()> {
    validate_days(days)?;
    let catalog = load_catalog(catalog_path.as_deref())?;
    let pair = select_currency(&catalog, &currency)?;
    let query = pair.news_query();

    println!("=== FxPulse Report: {} ({}) ===", pair.name, pair.code);
    println!();

    // One failing pipeline turns into an advisory line; the other still
    // renders.
    match fetch_headlines(&query, limit, offline) {
        Ok(headlines) => {
            let scorer = PolarityScorer::new();
            let table = aggregate(&scorer, &headlines);
            let summary = SentimentSummary::of(&table);
            print_news(&query, &table, &summary);
        }
        Err(err) => println!("News unavailable: {err}"),
    }

    println!();

    match fetch_rates(&pair.symbol, days, offline) {
        Ok(rates) => {
            let changes = daily_change(&rates);
            print_rates(pair, &rates, &changes);
        }
        Err(err) => println!("Rates unavailable: {err}"),
    }

    Ok(())
}

// ─── Shared plumbing ────────────────────────────────────────────────

fn load_catalog(path: Option<&Path>) -> Result<CurrencyCatalog> {
    match path {
        Some(p) => CurrencyCatalog::from_file(p)
            .map_err(|e| anyhow!("failed to load catalog {}: {e}", p.display())),
        None => Ok(CurrencyCatalog::default()),
    }
}

fn select_currency<'a>(catalog: &'a CurrencyCatalog, code: &str) -> Result<&'a Currency> {
    match catalog.by_code(code) {
        Some(currency) => Ok(currency),
        None => bail!(
            "unknown currency '{code}'. Valid: {}",
            catalog.codes().join(", ")
        ),
    }
}

fn validate_days(days: i64) -> Result<()> {
    if !(MIN_WINDOW_DAYS..=MAX_WINDOW_DAYS).contains(&days) {
        bail!("--days must be between {MIN_WINDOW_DAYS} and {MAX_WINDOW_DAYS}, got {days}");
    }
    Ok(())
}

fn fetch_headlines(query: &str, limit: usize, offline: bool) -> FeedResult<Vec<String>> {
    if offline {
        Ok(sample_headlines(limit))
    } else {
        GoogleNewsFeed::new().fetch(query, limit)
    }
}

fn fetch_rates(symbol: &str, days: i64, offline: bool) -> FeedResult<Vec<RatePoint>> {
    if offline {
        Ok(sample_rates(days, symbol_seed(symbol)))
    } else {
        YahooRatesFeed::new().fetch(symbol, days)
    }
}

// ─── Output ─────────────────────────────────────────────────────────

fn print_news(query: &str, table: &[SentimentRecord], summary: &SentimentSummary) {
    println!("Query:     {query}");
    println!("Headlines: {}", table.len());

    if table.is_empty() {
        println!();
        println!("No headlines found. Try --query or a different currency.");
        return;
    }

    println!();
    println!("{:>3}  {:>6}  {:<9} {}", "#", "Score", "Label", "Headline");
    println!("{}", "-".repeat(72));
    for (i, record) in table.iter().enumerate() {
        println!(
            "{:>3}  {:>+6.2}  {:<9} {}",
            i + 1,
            record.score,
            record.label.as_str(),
            record.text
        );
    }

    println!();
    println!(
        "Summary: {} positive / {} negative / {} neutral   mean {:+.2}",
        summary.positive, summary.negative, summary.neutral, summary.mean_score
    );
}

fn print_rates(pair: &Currency, rates: &[RatePoint], changes: &[ChangePoint]) {
    println!("Pair:     {} ({})", pair.pair_label(), pair.symbol);

    if rates.is_empty() {
        println!();
        println!("No rate history found for this window.");
        return;
    }

    let first = rates[0].date;
    let last = &rates[rates.len() - 1];
    println!("Sessions: {} ({} to {})", rates.len(), first, last.date);

    let (lo, hi) = rates
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| {
            (lo.min(p.close), hi.max(p.close))
        });
    println!("Close:    min {lo:.2}  max {hi:.2}  last {:.2}", last.close);

    if let (Some((lo, hi)), Some(latest)) = (change_bounds(changes), latest_change(changes)) {
        println!(
            "Change:   min {lo:+.2}%  max {hi:+.2}%  latest {:+.2}% ({})",
            latest.pct, latest.date
        );
    }

    println!();
    println!("{:<12} {:>12} {:>10}", "Date", "Close", "Change");
    println!("{}", "-".repeat(36));
    let start = rates.len().saturating_sub(TAIL_ROWS);
    for (rate, change) in rates[start..].iter().zip(&changes[start..]) {
        let pct = if change.is_defined() {
            format!("{:+.2}%", change.pct)
        } else {
            "-".into()
        };
        println!("{:<12} {:>12.2} {:>10}", rate.date.to_string(), rate.close, pct);
    }
}
