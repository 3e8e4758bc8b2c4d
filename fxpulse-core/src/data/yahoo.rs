//! Yahoo Finance exchange-rate feed.
//!
//! Fetches daily closes for a quote symbol from Yahoo's v8 chart API.
//! Yahoo Finance has no official API and is subject to unannounced format
//! changes; structural drift surfaces as `ResponseFormatChanged`.

use chrono::{NaiveDate, Utc};
use serde::Deserialize;

use super::feed::{FeedError, FeedResult, RateFeed, BROWSER_USER_AGENT, HTTP_TIMEOUT};
use crate::domain::RatePoint;

/// Yahoo Finance v8 chart API response.
#[derive(Debug, Deserialize)]
struct ChartResponse {
    chart: ChartResult,
}

#[derive(Debug, Deserialize)]
struct ChartResult {
    result: Option<Vec<ChartData>>,
    error: Option<ChartError>,
}

#[derive(Debug, Deserialize)]
struct ChartError {
    code: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct ChartData {
    timestamp: Option<Vec<i64>>,
    indicators: Indicators,
}

#[derive(Debug, Deserialize)]
struct Indicators {
    quote: Vec<QuoteData>,
}

#[derive(Debug, Deserialize)]
struct QuoteData {
    close: Vec<Option<f64>>,
}

/// Exchange-rate feed backed by the Yahoo Finance chart API.
pub struct YahooRatesFeed {
    client: reqwest::blocking::Client,
}

impl YahooRatesFeed {
    pub fn new() -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(HTTP_TIMEOUT)
            .user_agent(BROWSER_USER_AGENT)
            .build()
            .expect("failed to build HTTP client");

        Self { client }
    }

    /// Build the chart API URL for a symbol and date range.
    fn chart_url(symbol: &str, start: NaiveDate, end: NaiveDate) -> String {
        let start_ts = start.and_hms_opt(0, 0, 0).unwrap().and_utc().timestamp();
        let end_ts = end.and_hms_opt(23, 59, 59).unwrap().and_utc().timestamp();
        format!(
            "https://query2.finance.yahoo.com/v8/finance/chart/{symbol}\
             ?period1={start_ts}&period2={end_ts}&interval=1d"
        )
    }

    /// Parse the chart API response into rate points.
    ///
    /// Bars with a null close (market holidays, half-days the provider pads
    /// out) are dropped. A well-formed response with no bars at all parses
    /// to an empty series; that is the provider's answer, not a fault.
    fn parse_response(symbol: &str, resp: ChartResponse) -> FeedResult<Vec<RatePoint>> {
        let result = resp.chart.result.ok_or_else(|| {
            if let Some(err) = resp.chart.error {
                if err.code == "Not Found" {
                    FeedError::SymbolNotFound {
                        symbol: symbol.to_string(),
                    }
                } else {
                    FeedError::ResponseFormatChanged(format!("{}: {}", err.code, err.description))
                }
            } else {
                FeedError::ResponseFormatChanged("empty result with no error".into())
            }
        })?;

        let data = result
            .into_iter()
            .next()
            .ok_or_else(|| FeedError::ResponseFormatChanged("result array is empty".into()))?;

        // No timestamps at all means the range held no trading days.
        let timestamps = data.timestamp.unwrap_or_default();

        let quote = data
            .indicators
            .quote
            .into_iter()
            .next()
            .ok_or_else(|| FeedError::ResponseFormatChanged("no quote data".into()))?;

        let mut points = Vec::with_capacity(timestamps.len());

        for (i, &ts) in timestamps.iter().enumerate() {
            let date = chrono::DateTime::from_timestamp(ts, 0)
                .map(|dt| dt.naive_utc().date())
                .ok_or_else(|| {
                    FeedError::ResponseFormatChanged(format!("invalid timestamp: {ts}"))
                })?;

            // Skip bars with no close (holidays/non-trading padding).
            if let Some(close) = quote.close.get(i).copied().flatten() {
                points.push(RatePoint { date, close });
            }
        }

        Ok(points)
    }
}

impl Default for YahooRatesFeed {
    fn default() -> Self {
        Self::new()
    }
}

impl RateFeed for YahooRatesFeed {
    fn fetch(&self, symbol: &str, days: i64) -> FeedResult<Vec<RatePoint>> {
        let end = Utc::now().date_naive();
        let start = end - chrono::Duration::days(days.max(1));
        let url = Self::chart_url(symbol, start, end);

        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|e| FeedError::NetworkUnreachable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::HttpStatus {
                status: status.as_u16(),
                what: format!("chart data for {symbol}"),
            });
        }

        let chart: ChartResponse = response.json().map_err(|e| {
            FeedError::ResponseFormatChanged(format!("failed to parse response for {symbol}: {e}"))
        })?;

        Self::parse_response(symbol, chart)
    }
}
