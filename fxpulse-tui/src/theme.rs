//! Neon-on-dark theme for the fxpulse dashboard.
//!
//! Color roles:
//! - **Accent**: electric cyan (focus, highlights, active borders)
//! - **Positive**: neon green (positive sentiment, rate gains)
//! - **Negative**: hot pink (negative sentiment, rate drops)
//! - **Warning**: neon orange (in-progress fetches, degraded data)
//! - **Neutral**: cool purple (neutral sentiment, secondary info)
//! - **Muted**: steel blue (hints, inactive rows)

use ratatui::style::{Color, Modifier, Style};

use fxpulse_core::domain::SentimentLabel;

pub const ACCENT: Color = Color::Rgb(0, 255, 255);
pub const POSITIVE: Color = Color::Rgb(0, 255, 128);
pub const NEGATIVE: Color = Color::Rgb(255, 20, 147);
pub const WARNING: Color = Color::Rgb(255, 140, 0);
pub const NEUTRAL: Color = Color::Rgb(147, 112, 219);
pub const MUTED: Color = Color::Rgb(100, 149, 237);

pub fn accent() -> Style {
    Style::default().fg(ACCENT)
}

pub fn accent_bold() -> Style {
    accent().add_modifier(Modifier::BOLD)
}

pub fn positive() -> Style {
    Style::default().fg(POSITIVE)
}

pub fn negative() -> Style {
    Style::default().fg(NEGATIVE)
}

pub fn warning() -> Style {
    Style::default().fg(WARNING)
}

pub fn neutral() -> Style {
    Style::default().fg(NEUTRAL)
}

pub fn muted() -> Style {
    Style::default().fg(MUTED)
}

pub fn panel_border(active: bool) -> Style {
    if active {
        accent()
    } else {
        muted()
    }
}

pub fn panel_title(active: bool) -> Style {
    if active {
        accent_bold()
    } else {
        muted()
    }
}

/// Style for a sentiment label cell.
pub fn label_style(label: SentimentLabel) -> Style {
    match label {
        SentimentLabel::Positive => positive(),
        SentimentLabel::Negative => negative(),
        SentimentLabel::Neutral => neutral(),
    }
}

/// Style for a signed percent change (zero counts as a gain).
pub fn change_style(pct: f64) -> Style {
    if pct >= 0.0 {
        positive()
    } else {
        negative()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_styles_follow_sentiment() {
        assert_eq!(label_style(SentimentLabel::Positive), positive());
        assert_eq!(label_style(SentimentLabel::Negative), negative());
        assert_eq!(label_style(SentimentLabel::Neutral), neutral());
    }

    #[test]
    fn change_style_splits_on_sign() {
        assert_eq!(change_style(0.42), positive());
        assert_eq!(change_style(0.0), positive());
        assert_eq!(change_style(-0.17), negative());
    }

    #[test]
    fn panel_border_tracks_focus() {
        assert_eq!(panel_border(true), accent());
        assert_eq!(panel_border(false), muted());
    }
}
