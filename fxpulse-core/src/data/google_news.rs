//! Google News headline feed.
//!
//! Scrapes the public Google News search page for a query and pulls the
//! article titles out of the HTML. There is no official API; the title
//! anchors are selected by Google's generated class name, which can change
//! without notice. When that happens the fetch degrades to an empty result
//! rather than an error, and stays that way until the selector is updated.

use scraper::{Html, Selector};

use super::feed::{FeedError, FeedResult, NewsFeed, BROWSER_USER_AGENT, HTTP_TIMEOUT};
use crate::domain::Headline;

const SEARCH_URL: &str = "https://news.google.com/search";

/// Class Google currently assigns to article-title anchors.
const TITLE_ANCHOR: &str = "a.JtKRv";

/// Headline feed backed by the Google News search page.
///
/// Locale parameters default to the Indonesian edition (`hl=id`, `gl=ID`,
/// `ceid=ID:id`) since rupiah headlines are the primary use, but any edition
/// works through [`GoogleNewsFeed::with_locale`].
pub struct GoogleNewsFeed {
    client: reqwest::blocking::Client,
    host_language: String,
    geo: String,
    edition: String,
}

impl GoogleNewsFeed {
    pub fn new() -> Self {
        Self::with_locale("id", "ID", "ID:id")
    }

    pub fn with_locale(host_language: &str, geo: &str, edition: &str) -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(HTTP_TIMEOUT)
            .user_agent(BROWSER_USER_AGENT)
            .build()
            .expect("failed to build HTTP client");

        Self {
            client,
            host_language: host_language.to_string(),
            geo: geo.to_string(),
            edition: edition.to_string(),
        }
    }

    /// Extract up to `limit` non-blank article titles in document order.
    fn parse_headlines(html: &str, limit: usize) -> Vec<Headline> {
        let document = Html::parse_document(html);
        let selector = Selector::parse(TITLE_ANCHOR).expect("title selector is valid");

        document
            .select(&selector)
            .map(|anchor| anchor.text().collect::<String>().trim().to_string())
            .filter(|text| !text.is_empty())
            .take(limit)
            .collect()
    }
}

impl Default for GoogleNewsFeed {
    fn default() -> Self {
        Self::new()
    }
}

impl NewsFeed for GoogleNewsFeed {
    fn fetch(&self, query: &str, limit: usize) -> FeedResult<Vec<Headline>> {
        let response = self
            .client
            .get(SEARCH_URL)
            .query(&[
                ("q", query),
                ("hl", self.host_language.as_str()),
                ("gl", self.geo.as_str()),
                ("ceid", self.edition.as_str()),
            ])
            .send()
            .map_err(|e| FeedError::NetworkUnreachable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::HttpStatus {
                status: status.as_u16(),
                what: format!("news search '{query}'"),
            });
        }

        let body = response
            .text()
            .map_err(|e| FeedError::NetworkUnreachable(e.to_string()))?;

        Ok(Self::parse_headlines(&body, limit))
    }
}
