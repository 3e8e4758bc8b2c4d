//! Panel 3 — Chart: close rate and daily percent change on a shared date axis.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::symbols;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Axis, Chart, Dataset, GraphType, Paragraph};

use fxpulse_core::domain::{ChangePoint, RatePoint};

use crate::app::AppState;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let chart = &app.chart;

    if chart.rates.is_empty() {
        render_empty(f, area, chart.fetch_in_progress);
        return;
    }

    let halves = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    render_close_chart(f, halves[0], &chart.rates, &chart.label);
    render_change_chart(f, halves[1], &chart.rates, &chart.changes);
}

fn render_empty(f: &mut Frame, area: Rect, fetching: bool) {
    let msg = if fetching {
        "Fetching rate history..."
    } else {
        "No rate history loaded. Press r to fetch the selected pair."
    };
    let lines = vec![
        Line::from(""),
        Line::from(""),
        Line::from(Span::styled(msg, theme::muted())),
    ];
    f.render_widget(Paragraph::new(lines), area);
}

fn render_close_chart(f: &mut Frame, area: Rect, rates: &[RatePoint], label: &str) {
    let data: Vec<(f64, f64)> = rates
        .iter()
        .enumerate()
        .map(|(i, p)| (i as f64, p.close))
        .collect();

    let min_y = rates.iter().map(|p| p.close).fold(f64::INFINITY, f64::min);
    let max_y = rates
        .iter()
        .map(|p| p.close)
        .fold(f64::NEG_INFINITY, f64::max);
    let padding = ((max_y - min_y).abs() * 0.05).max(1.0);
    let y_min = min_y - padding;
    let y_max = max_y + padding;

    let dataset = Dataset::default()
        .name(label.to_string())
        .marker(symbols::Marker::Braille)
        .style(Style::default().fg(theme::ACCENT))
        .graph_type(GraphType::Line)
        .data(&data);

    let chart = Chart::new(vec![dataset])
        .x_axis(date_axis(rates))
        .y_axis(
            Axis::default()
                .title(Span::styled("Close", theme::muted()))
                .style(theme::muted())
                .bounds([y_min, y_max])
                .labels(vec![
                    Span::styled(format!("{y_min:.0}"), theme::muted()),
                    Span::styled(format!("{y_max:.0}"), theme::muted()),
                ]),
        );

    f.render_widget(chart, area);
}

fn render_change_chart(f: &mut Frame, area: Rect, rates: &[RatePoint], changes: &[ChangePoint]) {
    // NaN sentinels (first point, zero prior close) are not plotted.
    let data: Vec<(f64, f64)> = changes
        .iter()
        .enumerate()
        .filter(|(_, c)| c.is_defined())
        .map(|(i, c)| (i as f64, c.pct))
        .collect();

    if data.is_empty() {
        let lines = vec![Line::from(Span::styled(
            "Not enough points to chart daily change.",
            theme::muted(),
        ))];
        f.render_widget(Paragraph::new(lines), area);
        return;
    }

    // Keep the zero line inside the window.
    let lo = data
        .iter()
        .map(|(_, v)| *v)
        .fold(f64::INFINITY, f64::min)
        .min(0.0);
    let hi = data
        .iter()
        .map(|(_, v)| *v)
        .fold(f64::NEG_INFINITY, f64::max)
        .max(0.0);
    let padding = ((hi - lo).abs() * 0.05).max(0.1);
    let y_min = lo - padding;
    let y_max = hi + padding;

    let dataset = Dataset::default()
        .name("daily change %")
        .marker(symbols::Marker::Braille)
        .style(Style::default().fg(theme::WARNING))
        .graph_type(GraphType::Line)
        .data(&data);

    let chart = Chart::new(vec![dataset])
        .x_axis(date_axis(rates))
        .y_axis(
            Axis::default()
                .title(Span::styled("Change %", theme::muted()))
                .style(theme::muted())
                .bounds([y_min, y_max])
                .labels(vec![
                    Span::styled(format!("{y_min:+.2}"), theme::muted()),
                    Span::styled("0", theme::muted()),
                    Span::styled(format!("{y_max:+.2}"), theme::muted()),
                ]),
        );

    f.render_widget(chart, area);
}

/// Both charts index the same rate series, so they share x bounds and labels.
fn date_axis(rates: &[RatePoint]) -> Axis<'static> {
    let x_max = rates.len().saturating_sub(1) as f64;
    let first = rates.first().map(|p| p.date.to_string()).unwrap_or_default();
    let last = rates.last().map(|p| p.date.to_string()).unwrap_or_default();

    Axis::default()
        .style(theme::muted())
        .bounds([0.0, x_max.max(1.0)])
        .labels(vec![
            Span::styled(first, theme::muted()),
            Span::styled(last, theme::muted()),
        ])
}
