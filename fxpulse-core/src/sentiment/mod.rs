//! Headline polarity scoring and table aggregation.
//!
//! The pipeline is two pure steps: score one headline into [-1, 1]
//! (`PolarityScorer`), then map a fetched headline batch into an ordered
//! table of scored records (`aggregate`). Summaries for display surfaces
//! come from `domain::SentimentSummary`.

pub mod aggregate;
pub mod lexicon;
pub mod scorer;

pub use aggregate::{aggregate, round2};
pub use scorer::PolarityScorer;
