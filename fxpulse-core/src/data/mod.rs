//! Data feeds — news scraping, exchange-rate downloads, catalog, sample data.

pub mod catalog;
pub mod feed;
pub mod google_news;
pub mod sample;
pub mod yahoo;

pub use catalog::{Currency, CurrencyCatalog};
pub use feed::{FeedError, FeedResult, NewsFeed, RateFeed};
pub use google_news::GoogleNewsFeed;
pub use sample::{sample_headlines, sample_rates, symbol_seed};
pub use yahoo::YahooRatesFeed;
