//! FxPulse Core — domain types, sentiment pipeline, rate series transform, data feeds.
//!
//! This crate contains everything below the presentation surfaces:
//! - Domain types (rate points, change points, sentiment records and labels)
//! - Headline polarity scoring and table aggregation
//! - Day-over-day percent-change transform for exchange-rate series
//! - Feed traits plus the Google News and Yahoo Finance adapters
//! - Currency catalog (built-in rupiah pairs, TOML overrides)
//! - Deterministic sample data for offline runs

pub mod data;
pub mod domain;
pub mod sentiment;
pub mod series;
