//! Panel 2 — News: scored headline table with summary and lean advisory.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use fxpulse_core::domain::SentimentSummary;

use crate::app::AppState;
use crate::theme;

/// Mean score beyond which the advisory line calls a lean.
const LEAN_THRESHOLD: f64 = 0.05;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let news = &app.news;
    let mut lines: Vec<Line> = Vec::new();

    // Header
    let query = news.last_query.as_deref().unwrap_or("(none)");
    lines.push(Line::from(vec![
        Span::styled("Query: ", theme::muted()),
        Span::styled(query, theme::accent()),
        Span::styled("  [j/k]scroll [r]efresh", theme::muted()),
    ]));
    if news.fetch_in_progress {
        lines.push(Line::from(Span::styled(
            "Fetching headlines...",
            theme::warning(),
        )));
    }
    lines.push(Line::from(""));

    if news.table.is_empty() {
        lines.push(Line::from(Span::styled(
            "No headlines loaded. Press r to fetch news for the selected currency.",
            theme::muted(),
        )));
        f.render_widget(Paragraph::new(lines), area);
        return;
    }

    if let Some(summary) = &news.summary {
        lines.push(summary_line(summary));
        lines.push(advisory_line(summary));
        lines.push(Line::from(""));
    }

    // Column headers
    lines.push(Line::from(Span::styled(
        format!("{:>3} {:>6} {:>9}  {}", "#", "Score", "Label", "Headline"),
        theme::accent_bold(),
    )));

    // Rows
    for (i, record) in news.table.iter().enumerate() {
        let is_cursor = i == news.cursor;
        let row_style = if is_cursor {
            theme::accent().add_modifier(Modifier::REVERSED)
        } else {
            theme::muted()
        };
        let score_style = if is_cursor {
            row_style
        } else {
            theme::label_style(record.label)
        };

        lines.push(Line::from(vec![
            Span::styled(format!("{:>3} ", i + 1), row_style),
            Span::styled(format!("{:>6.2} ", record.score), score_style),
            Span::styled(format!("{:>9}  ", record.label.as_str()), score_style),
            Span::styled(truncate(&record.text, 70), row_style),
        ]));
    }

    let para = Paragraph::new(lines);
    f.render_widget(para, area);
}

fn summary_line(summary: &SentimentSummary) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{} positive", summary.positive), theme::positive()),
        Span::styled(" / ", theme::muted()),
        Span::styled(format!("{} negative", summary.negative), theme::negative()),
        Span::styled(" / ", theme::muted()),
        Span::styled(format!("{} neutral", summary.neutral), theme::neutral()),
        Span::styled(format!("   mean {:+.2}", summary.mean_score), theme::accent()),
    ])
}

fn advisory_line(summary: &SentimentSummary) -> Line<'static> {
    let (text, style) = if summary.mean_score > LEAN_THRESHOLD {
        ("Coverage leans positive on the rupiah", theme::positive())
    } else if summary.mean_score < -LEAN_THRESHOLD {
        ("Coverage leans negative on the rupiah", theme::negative())
    } else {
        ("Coverage is balanced", theme::neutral())
    };
    Line::from(Span::styled(text, style))
}

// Char-based cut; headlines carry non-ASCII.
fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{cut}.")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_is_char_safe() {
        let s = "Ekonomi domestik ◂menguat▸ di kuartal kedua";
        let cut = truncate(s, 24);
        assert_eq!(cut.chars().count(), 24);
        assert!(cut.ends_with('.'));
        assert_eq!(truncate("pendek", 24), "pendek");
    }
}
