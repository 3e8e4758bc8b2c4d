//! fxpulse — four-panel terminal dashboard for rupiah news sentiment and rates.
//!
//! Panels:
//! 1. Markets — currency selection and lookback window
//! 2. News — scored headline table with sentiment summary
//! 3. Chart — close rate and daily percent change
//! 4. Help — keyboard shortcuts

mod app;
mod input;
mod theme;
mod ui;
mod worker;

use std::io::{self, stdout};
use std::path::Path;
use std::sync::mpsc;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use fxpulse_core::data::CurrencyCatalog;

use crate::app::{AppState, ErrorCategory};
use crate::worker::{WorkerCommand, WorkerResponse};

fn main() -> Result<()> {
    // Install a panic hook that restores the terminal before printing the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen);
        default_hook(info);
    }));

    let offline = std::env::args().any(|a| a == "--offline");

    // FXPULSE_CATALOG overrides the built-in pair list.
    let catalog = match std::env::var("FXPULSE_CATALOG") {
        Ok(path) => CurrencyCatalog::from_file(Path::new(&path))
            .map_err(|e| anyhow::anyhow!("failed to load catalog {path}: {e}"))?,
        Err(_) => CurrencyCatalog::default(),
    };

    // Worker channels
    let (cmd_tx, cmd_rx) = mpsc::channel();
    let (resp_tx, resp_rx) = mpsc::channel();

    // Spawn worker
    let worker_handle = worker::spawn_worker(cmd_rx, resp_tx, offline);

    // Build app state
    let mut app = AppState::new(cmd_tx.clone(), resp_rx, catalog, offline);

    // Queue an initial fetch for the default pair.
    input::request_refresh(&mut app);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Run the main event loop
    let result = run_app(&mut terminal, &mut app);

    // Shutdown worker
    let _ = cmd_tx.send(WorkerCommand::Shutdown);
    let _ = worker_handle.join();

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
) -> Result<()> {
    loop {
        // 1. Render
        terminal.draw(|f| ui::draw(f, app))?;

        // 2. Drain worker responses (non-blocking)
        while let Ok(resp) = app.worker_rx.try_recv() {
            handle_worker_response(app, resp);
        }

        // 3. Poll for input events (50ms timeout for ~20 FPS tick)
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                input::handle_key(app, key);
            }
        }

        // 4. Check quit
        if !app.running {
            break;
        }
    }
    Ok(())
}

fn handle_worker_response(app: &mut AppState, resp: WorkerResponse) {
    match resp {
        WorkerResponse::NewsReady {
            query,
            table,
            summary,
        } => {
            app.news.fetch_in_progress = false;
            app.news.cursor = 0;
            if table.is_empty() {
                app.set_warning(format!("No headlines found for \"{query}\""));
            } else {
                app.set_status(format!(
                    "Scored {} headlines: {} positive / {} negative / {} neutral",
                    summary.total(),
                    summary.positive,
                    summary.negative,
                    summary.neutral,
                ));
            }
            app.news.table = table;
            app.news.summary = Some(summary);
        }
        WorkerResponse::NewsFailed { query, error } => {
            app.news.fetch_in_progress = false;
            app.push_error(
                ErrorCategory::of(&error),
                error.to_string(),
                format!("news: {query}"),
            );
        }
        WorkerResponse::RatesReady {
            symbol,
            rates,
            changes,
        } => {
            app.chart.fetch_in_progress = false;
            if rates.is_empty() {
                app.set_warning(format!("No rate history for {symbol}"));
            } else {
                let pair = app
                    .markets
                    .catalog
                    .currencies
                    .iter()
                    .find(|c| c.symbol == symbol)
                    .map(|c| c.pair_label())
                    .unwrap_or_else(|| symbol.clone());
                app.chart.label = format!("{pair} | {} sessions", rates.len());
            }
            app.chart.rates = rates;
            app.chart.changes = changes;
        }
        WorkerResponse::RatesFailed { symbol, error } => {
            app.chart.fetch_in_progress = false;
            app.push_error(
                ErrorCategory::of(&error),
                error.to_string(),
                format!("rates: {symbol}"),
            );
        }
    }
}
