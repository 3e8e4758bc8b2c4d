//! Background worker thread — all network fetching and scoring run here.
//!
//! Communication with the TUI main thread is via `mpsc` channels. The worker
//! owns the feed clients and the scorer, so the UI thread never blocks on I/O.
//! In offline mode the worker serves bundled sample data through the same
//! response types.

use std::sync::mpsc::{Receiver, Sender};
use std::thread::{self, JoinHandle};

use fxpulse_core::data::{
    sample_headlines, sample_rates, symbol_seed, FeedError, GoogleNewsFeed, NewsFeed, RateFeed,
    YahooRatesFeed,
};
use fxpulse_core::domain::{ChangePoint, RatePoint, SentimentSummary, SentimentTable};
use fxpulse_core::sentiment::{aggregate, PolarityScorer};
use fxpulse_core::series::daily_change;

/// Commands sent from the TUI to the worker.
#[derive(Debug)]
pub enum WorkerCommand {
    FetchNews { query: String, limit: usize },
    FetchRates { symbol: String, days: i64 },
    Shutdown,
}

/// Responses sent from the worker back to the TUI.
#[derive(Debug)]
pub enum WorkerResponse {
    NewsReady {
        query: String,
        table: SentimentTable,
        summary: SentimentSummary,
    },
    NewsFailed {
        query: String,
        error: FeedError,
    },
    RatesReady {
        symbol: String,
        rates: Vec<RatePoint>,
        changes: Vec<ChangePoint>,
    },
    RatesFailed {
        symbol: String,
        error: FeedError,
    },
}

/// Spawn the background worker thread.
pub fn spawn_worker(
    rx: Receiver<WorkerCommand>,
    tx: Sender<WorkerResponse>,
    offline: bool,
) -> JoinHandle<()> {
    thread::Builder::new()
        .name("fxpulse-worker".into())
        .spawn(move || {
            worker_loop(rx, tx, offline);
        })
        .expect("failed to spawn worker thread")
}

fn worker_loop(rx: Receiver<WorkerCommand>, tx: Sender<WorkerResponse>, offline: bool) {
    // Feeds and the scorer are built once and live for the whole thread.
    let news = GoogleNewsFeed::new();
    let rates = YahooRatesFeed::new();
    let scorer = PolarityScorer::new();

    loop {
        match rx.recv() {
            Ok(WorkerCommand::Shutdown) | Err(_) => break,
            Ok(cmd) => handle_command(cmd, &news, &rates, &scorer, &tx, offline),
        }
    }
}

fn handle_command(
    cmd: WorkerCommand,
    news: &GoogleNewsFeed,
    rates: &YahooRatesFeed,
    scorer: &PolarityScorer,
    tx: &Sender<WorkerResponse>,
    offline: bool,
) {
    match cmd {
        WorkerCommand::FetchNews { query, limit } => {
            let fetched = if offline {
                Ok(sample_headlines(limit))
            } else {
                news.fetch(&query, limit)
            };
            match fetched {
                Ok(headlines) => {
                    let table = aggregate(scorer, &headlines);
                    let summary = SentimentSummary::of(&table);
                    let _ = tx.send(WorkerResponse::NewsReady {
                        query,
                        table,
                        summary,
                    });
                }
                Err(error) => {
                    let _ = tx.send(WorkerResponse::NewsFailed { query, error });
                }
            }
        }
        WorkerCommand::FetchRates { symbol, days } => {
            let fetched = if offline {
                Ok(sample_rates(days, symbol_seed(&symbol)))
            } else {
                rates.fetch(&symbol, days)
            };
            match fetched {
                Ok(points) => {
                    let changes = daily_change(&points);
                    let _ = tx.send(WorkerResponse::RatesReady {
                        symbol,
                        rates: points,
                        changes,
                    });
                }
                Err(error) => {
                    let _ = tx.send(WorkerResponse::RatesFailed { symbol, error });
                }
            }
        }
        WorkerCommand::Shutdown => {} // handled in loop
    }
}
