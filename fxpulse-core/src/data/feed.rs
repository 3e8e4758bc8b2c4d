//! Feed traits and structured error types.
//!
//! The two traits abstract over the external collaborators (headline source,
//! rate source) so the presentation surfaces can swap implementations and
//! tests can substitute canned feeds. An empty fetch result is a normal
//! outcome, never an error: the caller decides how to present "no data".

use std::time::Duration;

use thiserror::Error;

use crate::domain::{Headline, RatePoint};

/// Outbound HTTP defaults shared by the production feeds.
pub(crate) const HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Both providers serve a stripped shell (or nothing) to unknown agents, so
/// the feeds identify as a desktop browser.
pub(crate) const BROWSER_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// Structured error types for feed operations.
///
/// These are designed to be displayable in both CLI and TUI contexts. Data
/// shape issues (empty results, missing prior values) are NOT errors and do
/// not appear here.
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("network unreachable: {0}")]
    NetworkUnreachable(String),

    #[error("provider returned HTTP {status} for {what}")]
    HttpStatus { status: u16, what: String },

    #[error("response format changed: {0}")]
    ResponseFormatChanged(String),

    #[error("symbol not found: {symbol}")]
    SymbolNotFound { symbol: String },
}

pub type FeedResult<T> = Result<T, FeedError>;

/// Source of news headlines for a search query.
///
/// `fetch` returns at most `limit` headlines in source order. It may return
/// fewer, including none; it never returns blank strings.
pub trait NewsFeed: Send + Sync {
    /// Fetch recent headlines matching `query`.
    fn fetch(&self, query: &str, limit: usize) -> FeedResult<Vec<Headline>>;
}

/// Source of daily closing rates for a quote symbol.
///
/// `fetch` returns the trailing `days` window ordered by ascending date. An
/// empty series means the symbol/date range yielded no data.
pub trait RateFeed: Send + Sync {
    /// Fetch daily closes for `symbol` over the trailing `days` window.
    fn fetch(&self, symbol: &str, days: i64) -> FeedResult<Vec<RatePoint>>;
}
