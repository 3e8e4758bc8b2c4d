//! Application state — single-owner, main-thread only.
//!
//! All TUI state lives here. The worker thread communicates via channels.

use std::collections::VecDeque;
use std::sync::mpsc::{Receiver, Sender};

use chrono::NaiveDateTime;

use fxpulse_core::data::catalog::{
    DEFAULT_HEADLINE_LIMIT, DEFAULT_WINDOW_DAYS, MAX_WINDOW_DAYS, MIN_WINDOW_DAYS,
    WINDOW_STEP_DAYS,
};
use fxpulse_core::data::{Currency, CurrencyCatalog, FeedError};
use fxpulse_core::domain::{ChangePoint, RatePoint, SentimentSummary, SentimentTable};

use crate::worker::{WorkerCommand, WorkerResponse};

/// Which panel is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Markets,
    News,
    Chart,
    Help,
}

impl Panel {
    pub fn index(self) -> usize {
        match self {
            Panel::Markets => 0,
            Panel::News => 1,
            Panel::Chart => 2,
            Panel::Help => 3,
        }
    }

    pub fn from_index(i: usize) -> Option<Self> {
        match i {
            0 => Some(Panel::Markets),
            1 => Some(Panel::News),
            2 => Some(Panel::Chart),
            3 => Some(Panel::Help),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Panel::Markets => "Markets",
            Panel::News => "News",
            Panel::Chart => "Chart",
            Panel::Help => "Help",
        }
    }

    pub fn next(self) -> Panel {
        Panel::from_index((self.index() + 1) % 4).unwrap()
    }

    pub fn prev(self) -> Panel {
        Panel::from_index((self.index() + 3) % 4).unwrap()
    }
}

/// Status message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
    Error,
}

/// An error record for the error history overlay.
#[derive(Debug, Clone)]
pub struct ErrorRecord {
    pub timestamp: NaiveDateTime,
    pub category: ErrorCategory,
    pub message: String,
    pub context: String,
}

/// Error category for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Http,
    Format,
    Symbol,
}

impl ErrorCategory {
    pub fn label(self) -> &'static str {
        match self {
            ErrorCategory::Network => "NET",
            ErrorCategory::Http => "HTTP",
            ErrorCategory::Format => "FMT",
            ErrorCategory::Symbol => "SYM",
        }
    }

    pub fn of(err: &FeedError) -> Self {
        match err {
            FeedError::NetworkUnreachable(_) => ErrorCategory::Network,
            FeedError::HttpStatus { .. } => ErrorCategory::Http,
            FeedError::ResponseFormatChanged(_) => ErrorCategory::Format,
            FeedError::SymbolNotFound { .. } => ErrorCategory::Symbol,
        }
    }
}

/// Markets panel state — catalog cursor and fetch parameters.
#[derive(Debug)]
pub struct MarketPanelState {
    pub catalog: CurrencyCatalog,
    pub cursor: usize,
    pub window_days: i64,
    pub headline_limit: usize,
}

impl MarketPanelState {
    pub fn new(catalog: CurrencyCatalog) -> Self {
        Self {
            catalog,
            cursor: 0,
            window_days: DEFAULT_WINDOW_DAYS,
            headline_limit: DEFAULT_HEADLINE_LIMIT,
        }
    }

    /// Currency under the cursor.
    pub fn selected(&self) -> Option<&Currency> {
        self.catalog.get(self.cursor)
    }

    pub fn widen_window(&mut self) {
        self.window_days = (self.window_days + WINDOW_STEP_DAYS).min(MAX_WINDOW_DAYS);
    }

    pub fn narrow_window(&mut self) {
        self.window_days = (self.window_days - WINDOW_STEP_DAYS).max(MIN_WINDOW_DAYS);
    }
}

/// News panel state.
#[derive(Debug)]
pub struct NewsPanelState {
    pub table: SentimentTable,
    pub summary: Option<SentimentSummary>,
    pub cursor: usize,
    pub fetch_in_progress: bool,
    pub last_query: Option<String>,
}

impl NewsPanelState {
    pub fn new() -> Self {
        Self {
            table: Vec::new(),
            summary: None,
            cursor: 0,
            fetch_in_progress: false,
            last_query: None,
        }
    }
}

/// Chart panel state.
#[derive(Debug)]
pub struct ChartPanelState {
    pub rates: Vec<RatePoint>,
    pub changes: Vec<ChangePoint>,
    pub label: String,
    pub fetch_in_progress: bool,
}

impl ChartPanelState {
    pub fn new() -> Self {
        Self {
            rates: Vec::new(),
            changes: Vec::new(),
            label: String::new(),
            fetch_in_progress: false,
        }
    }
}

/// Which overlay (if any) is shown on top.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Overlay {
    None,
    Welcome,
    ErrorHistory,
}

/// Top-level application state.
pub struct AppState {
    // Navigation
    pub active_panel: Panel,
    pub running: bool,
    pub offline: bool,

    // Panel states
    pub markets: MarketPanelState,
    pub news: NewsPanelState,
    pub chart: ChartPanelState,

    // Worker communication
    pub worker_tx: Sender<WorkerCommand>,
    pub worker_rx: Receiver<WorkerResponse>,

    // Cross-cutting
    pub status_message: Option<(String, StatusLevel)>,
    pub error_history: VecDeque<ErrorRecord>,
    pub error_scroll: usize,
    pub overlay: Overlay,
}

impl AppState {
    pub fn new(
        worker_tx: Sender<WorkerCommand>,
        worker_rx: Receiver<WorkerResponse>,
        catalog: CurrencyCatalog,
        offline: bool,
    ) -> Self {
        Self {
            active_panel: Panel::Markets,
            running: true,
            offline,
            markets: MarketPanelState::new(catalog),
            news: NewsPanelState::new(),
            chart: ChartPanelState::new(),
            worker_tx,
            worker_rx,
            status_message: None,
            error_history: VecDeque::with_capacity(50),
            error_scroll: 0,
            overlay: Overlay::Welcome,
        }
    }

    /// Push an error to the history, capping at 50.
    pub fn push_error(&mut self, category: ErrorCategory, message: String, context: String) {
        let record = ErrorRecord {
            timestamp: chrono::Local::now().naive_local(),
            category,
            message: message.clone(),
            context,
        };
        self.error_history.push_front(record);
        if self.error_history.len() > 50 {
            self.error_history.pop_back();
        }
        self.status_message = Some((message, StatusLevel::Error));
    }

    /// Set an info status message.
    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Info));
    }

    /// Set a warning status message.
    pub fn set_warning(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Warning));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_app() -> AppState {
        let (tx, _rx) = std::sync::mpsc::channel();
        let (_tx2, rx2) = std::sync::mpsc::channel();
        AppState::new(tx, rx2, CurrencyCatalog::default(), true)
    }

    #[test]
    fn panel_cycle() {
        assert_eq!(Panel::Markets.next(), Panel::News);
        assert_eq!(Panel::Help.next(), Panel::Markets);
        assert_eq!(Panel::Markets.prev(), Panel::Help);
        assert_eq!(Panel::News.prev(), Panel::Markets);
    }

    #[test]
    fn panel_from_index() {
        for i in 0..4 {
            let p = Panel::from_index(i).unwrap();
            assert_eq!(p.index(), i);
        }
        assert!(Panel::from_index(4).is_none());
    }

    #[test]
    fn window_clamps_at_bounds() {
        let mut app = test_app();
        assert_eq!(app.markets.window_days, DEFAULT_WINDOW_DAYS);

        app.markets.widen_window();
        assert_eq!(app.markets.window_days, DEFAULT_WINDOW_DAYS + WINDOW_STEP_DAYS);

        for _ in 0..20 {
            app.markets.widen_window();
        }
        assert_eq!(app.markets.window_days, MAX_WINDOW_DAYS);

        for _ in 0..20 {
            app.markets.narrow_window();
        }
        assert_eq!(app.markets.window_days, MIN_WINDOW_DAYS);
    }

    #[test]
    fn selected_follows_cursor() {
        let mut app = test_app();
        let first = app.markets.selected().map(|c| c.code.clone());
        assert_eq!(first.as_deref(), Some("USD"));

        app.markets.cursor = app.markets.catalog.len();
        assert!(app.markets.selected().is_none());
    }

    #[test]
    fn error_history_caps_at_50() {
        let mut app = test_app();
        for i in 0..60 {
            app.push_error(ErrorCategory::Network, format!("error {i}"), String::new());
        }
        assert_eq!(app.error_history.len(), 50);
        assert!(app.error_history[0].message.contains("59"));
    }

    #[test]
    fn feed_errors_map_to_categories() {
        let net = FeedError::NetworkUnreachable("timed out".into());
        let sym = FeedError::SymbolNotFound { symbol: "XXXIDR=X".into() };
        assert_eq!(ErrorCategory::of(&net), ErrorCategory::Network);
        assert_eq!(ErrorCategory::of(&sym), ErrorCategory::Symbol);
        assert_eq!(ErrorCategory::Network.label(), "NET");
    }
}
