//! Domain types for FxPulse.

pub mod news;
pub mod rate;

pub use news::{Headline, SentimentLabel, SentimentRecord, SentimentSummary, SentimentTable};
pub use rate::{ChangePoint, RatePoint};
