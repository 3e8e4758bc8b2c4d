//! Keyboard input dispatch — overlays first, then global keys, then panel handlers.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::{AppState, Overlay, Panel};
use crate::worker::WorkerCommand;

/// Handle a key event.
pub fn handle_key(app: &mut AppState, key: KeyEvent) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }

    // 1. Overlays consume input first.
    match &app.overlay {
        Overlay::Welcome => {
            app.overlay = Overlay::None;
            return;
        }
        Overlay::ErrorHistory => {
            handle_error_overlay(app, key);
            return;
        }
        Overlay::None => {}
    }

    // 2. Global keys (always available).
    match key.code {
        KeyCode::Char('q') => {
            app.running = false;
            return;
        }
        KeyCode::Char('1') => { app.active_panel = Panel::Markets; return; }
        KeyCode::Char('2') => { app.active_panel = Panel::News; return; }
        KeyCode::Char('3') => { app.active_panel = Panel::Chart; return; }
        KeyCode::Char('4') | KeyCode::Char('?') => { app.active_panel = Panel::Help; return; }
        KeyCode::Tab => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                app.active_panel = app.active_panel.prev();
            } else {
                app.active_panel = app.active_panel.next();
            }
            return;
        }
        KeyCode::BackTab => {
            app.active_panel = app.active_panel.prev();
            return;
        }
        KeyCode::Char('r') => {
            request_refresh(app);
            return;
        }
        KeyCode::Char('e') => {
            app.overlay = Overlay::ErrorHistory;
            app.error_scroll = 0;
            return;
        }
        _ => {}
    }

    // 3. Panel-specific keys.
    match app.active_panel {
        Panel::Markets => handle_markets_key(app, key),
        Panel::News => handle_news_key(app, key),
        Panel::Chart => {} // display only
        Panel::Help => {}
    }
}

/// Queue news and rate fetches for the currency under the cursor.
pub fn request_refresh(app: &mut AppState) {
    if app.news.fetch_in_progress || app.chart.fetch_in_progress {
        app.set_warning("Refresh already in progress");
        return;
    }

    let (query, symbol) = match app.markets.selected() {
        Some(currency) => (currency.news_query(), currency.symbol.clone()),
        None => {
            app.set_warning("No currency selected");
            return;
        }
    };

    app.news.fetch_in_progress = true;
    app.news.last_query = Some(query.clone());
    app.chart.fetch_in_progress = true;

    let _ = app.worker_tx.send(WorkerCommand::FetchNews {
        query,
        limit: app.markets.headline_limit,
    });
    let _ = app.worker_tx.send(WorkerCommand::FetchRates {
        symbol,
        days: app.markets.window_days,
    });
    app.set_status("Fetching news and rates...");
}

fn handle_error_overlay(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('e') => {
            app.overlay = Overlay::None;
        }
        KeyCode::Char('j') | KeyCode::Down => {
            if app.error_scroll + 1 < app.error_history.len() {
                app.error_scroll += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.error_scroll = app.error_scroll.saturating_sub(1);
        }
        _ => {}
    }
}

fn handle_markets_key(app: &mut AppState, key: KeyEvent) {
    let count = app.markets.catalog.len();

    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            if count > 0 && app.markets.cursor + 1 < count {
                app.markets.cursor += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.markets.cursor = app.markets.cursor.saturating_sub(1);
        }
        KeyCode::Char('h') | KeyCode::Left => {
            app.markets.narrow_window();
        }
        KeyCode::Char('l') | KeyCode::Right => {
            app.markets.widen_window();
        }
        KeyCode::Enter => {
            request_refresh(app);
        }
        _ => {}
    }
}

fn handle_news_key(app: &mut AppState, key: KeyEvent) {
    let rows = app.news.table.len();

    match key.code {
        KeyCode::Char('j') | KeyCode::Down => {
            if rows > 0 && app.news.cursor + 1 < rows {
                app.news.cursor += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.news.cursor = app.news.cursor.saturating_sub(1);
        }
        _ => {}
    }
}
