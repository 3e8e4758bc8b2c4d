//! Panel 1 — Markets: currency selector and lookback window.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::app::AppState;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let markets = &app.markets;
    let mut lines: Vec<Line> = Vec::new();

    // Header
    lines.push(Line::from(vec![
        Span::styled("Window: ", theme::muted()),
        Span::styled(format!("{} days", markets.window_days), theme::accent()),
        Span::styled(
            "  [j/k]select [h/l]window [Enter]refresh",
            theme::muted(),
        ),
    ]));
    if app.offline {
        lines.push(Line::from(Span::styled(
            "Offline mode: serving bundled sample data",
            theme::warning(),
        )));
    }
    lines.push(Line::from(""));

    // Currency rows
    for (i, currency) in markets.catalog.currencies.iter().enumerate() {
        let is_cursor = i == markets.cursor;
        let marker = if is_cursor { "▸" } else { " " };

        let row_style = if is_cursor {
            theme::accent().add_modifier(Modifier::REVERSED)
        } else {
            theme::muted()
        };
        let symbol_style = if is_cursor { row_style } else { theme::neutral() };

        lines.push(Line::from(vec![
            Span::styled(format!("{marker} {:<4}", currency.code), row_style),
            Span::styled(format!(" {:<22}", currency.name), row_style),
            Span::styled(format!(" {}", currency.symbol), symbol_style),
        ]));
    }

    // Footer: the exact news query the refresh will run.
    lines.push(Line::from(""));
    if let Some(currency) = markets.selected() {
        lines.push(Line::from(vec![
            Span::styled("Query: ", theme::muted()),
            Span::styled(currency.news_query(), theme::accent()),
        ]));
        lines.push(Line::from(vec![
            Span::styled("Chart: ", theme::muted()),
            Span::styled(currency.pair_label(), theme::accent()),
        ]));
    }

    let para = Paragraph::new(lines);
    f.render_widget(para, area);
}
