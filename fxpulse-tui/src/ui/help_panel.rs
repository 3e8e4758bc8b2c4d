//! Panel 4 — Help: keyboard shortcuts and data source notes.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::app::AppState;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, _app: &AppState) {
    let mut lines: Vec<Line> = Vec::new();

    section(&mut lines, "Global Navigation");
    key(&mut lines, "1-4", "Switch to panel by number");
    key(&mut lines, "Tab / Shift+Tab", "Cycle panels forward / back");
    key(&mut lines, "r", "Refresh news and rates for the selection");
    key(&mut lines, "e", "Open error history overlay");
    key(&mut lines, "?", "Jump to this panel");
    key(&mut lines, "q", "Quit");
    lines.push(Line::from(""));

    section(&mut lines, "Panel 1 — Markets");
    key(&mut lines, "j / k", "Move cursor down / up");
    key(&mut lines, "h / l", "Narrow / widen the lookback window (30-365 days)");
    key(&mut lines, "Enter", "Fetch news and rates for the cursor currency");
    lines.push(Line::from(""));

    section(&mut lines, "Panel 2 — News");
    key(&mut lines, "j / k", "Scroll the headline table");
    lines.push(Line::from(""));

    section(&mut lines, "Panel 3 — Chart");
    key(&mut lines, "", "Close rate on top, daily % change below");
    key(&mut lines, "", "The % change doubles as a crude inflation proxy");
    lines.push(Line::from(""));

    section(&mut lines, "Error Overlay");
    key(&mut lines, "j / k", "Scroll error records");
    key(&mut lines, "Esc", "Close overlay");
    lines.push(Line::from(""));

    section(&mut lines, "Data Sources");
    key(&mut lines, "News", "Google News search, Indonesian edition");
    key(&mut lines, "Rates", "Yahoo Finance daily closes, IDR quote symbols");
    key(&mut lines, "--offline", "Deterministic sample data, no network");

    let para = Paragraph::new(lines);
    f.render_widget(para, area);
}

fn section<'a>(lines: &mut Vec<Line<'a>>, title: &str) {
    lines.push(Line::from(Span::styled(title.to_string(), theme::accent_bold())));
}

fn key<'a>(lines: &mut Vec<Line<'a>>, keys: &str, desc: &str) {
    lines.push(Line::from(vec![
        Span::styled(format!("  {:>20}  ", keys), theme::accent()),
        Span::styled(desc.to_string(), theme::muted()),
    ]));
}
