//! Currency catalog — the pairs the dashboard can track.
//!
//! Stored as a TOML config file with one `[[currencies]]` table per pair:
//!
//! ```toml
//! [[currencies]]
//! code = "USD"
//! name = "US Dollar"
//! symbol = "USDIDR=X"
//! ```
//!
//! The built-in default covers the majors quoted against the Indonesian
//! rupiah.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Lookback window bounds for the rate series, in days.
pub const MIN_WINDOW_DAYS: i64 = 30;
pub const MAX_WINDOW_DAYS: i64 = 365;
pub const DEFAULT_WINDOW_DAYS: i64 = 180;
pub const WINDOW_STEP_DAYS: i64 = 30;

/// Default number of headlines fetched per refresh.
pub const DEFAULT_HEADLINE_LIMIT: usize = 8;

/// One tracked currency pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Currency {
    /// Display code of the foreign leg, e.g. "USD".
    pub code: String,
    /// Human-readable name, e.g. "US Dollar".
    pub name: String,
    /// Provider quote symbol, e.g. "USDIDR=X".
    pub symbol: String,
}

impl Currency {
    /// News search query for this pair, phrased in Indonesian to match the
    /// coverage of rupiah pairs.
    pub fn news_query(&self) -> String {
        format!("nilai tukar {} rupiah inflasi", self.code)
    }

    /// Axis/title label for the rate chart, e.g. "IDR per USD".
    pub fn pair_label(&self) -> String {
        format!("IDR per {}", self.code)
    }
}

/// The complete currency catalog, in display order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrencyCatalog {
    pub currencies: Vec<Currency>,
}

impl CurrencyCatalog {
    /// Load a catalog from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, String> {
        let content =
            std::fs::read_to_string(path).map_err(|e| format!("read catalog file: {e}"))?;
        Self::from_toml(&content)
    }

    /// Parse a catalog from a TOML string. A catalog with no currencies is
    /// rejected; every surface needs at least one selectable pair.
    pub fn from_toml(content: &str) -> Result<Self, String> {
        let catalog: Self =
            toml::from_str(content).map_err(|e| format!("parse catalog TOML: {e}"))?;
        if catalog.currencies.is_empty() {
            return Err("catalog has no currencies".into());
        }
        Ok(catalog)
    }

    /// Serialize the catalog to TOML.
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("serialize catalog: {e}"))
    }

    /// The built-in rupiah catalog.
    pub fn default_idr() -> Self {
        let pairs = [
            ("USD", "US Dollar", "USDIDR=X"),
            ("EUR", "Euro", "EURIDR=X"),
            ("JPY", "Japanese Yen", "JPYIDR=X"),
            ("SGD", "Singapore Dollar", "SGDIDR=X"),
            ("AUD", "Australian Dollar", "AUDIDR=X"),
            ("CNY", "Chinese Yuan", "CNYIDR=X"),
        ];

        Self {
            currencies: pairs
                .into_iter()
                .map(|(code, name, symbol)| Currency {
                    code: code.into(),
                    name: name.into(),
                    symbol: symbol.into(),
                })
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.currencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.currencies.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Currency> {
        self.currencies.get(index)
    }

    /// Case-insensitive lookup by display code.
    pub fn by_code(&self, code: &str) -> Option<&Currency> {
        self.currencies
            .iter()
            .find(|c| c.code.eq_ignore_ascii_case(code))
    }

    pub fn codes(&self) -> Vec<&str> {
        self.currencies.iter().map(|c| c.code.as_str()).collect()
    }
}

impl Default for CurrencyCatalog {
    fn default() -> Self {
        Self::default_idr()
    }
}
