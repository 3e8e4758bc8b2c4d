//! CSV export for scored headlines and rate series.
//!
//! Both exporters render into an in-memory string so the caller decides
//! where the bytes land. Column layouts:
//! - news: `text,label,score`
//! - rates: `date,close,change_pct`
//!
//! Undefined change values (the NaN sentinel) export as empty cells, never
//! as the literal string "NaN".

use std::path::Path;

use anyhow::{Context, Result};
use fxpulse_core::domain::{ChangePoint, RatePoint, SentimentRecord};

/// Render a sentiment table as CSV with `text,label,score` columns.
pub fn export_news_csv(records: &[SentimentRecord]) -> Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);
    wtr.write_record(["text", "label", "score"])?;
    for record in records {
        let score = format!("{:.2}", record.score);
        wtr.write_record([record.text.as_str(), record.label.as_str(), score.as_str()])?;
    }
    let data = wtr.into_inner().context("failed to flush CSV writer")?;
    String::from_utf8(data).context("CSV output is not valid UTF-8")
}

/// Render a rate series and its date-aligned change series as CSV with
/// `date,close,change_pct` columns. The two slices come out of
/// `daily_change`, so they share length and dates.
pub fn export_rates_csv(rates: &[RatePoint], changes: &[ChangePoint]) -> Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);
    wtr.write_record(["date", "close", "change_pct"])?;
    for (rate, change) in rates.iter().zip(changes.iter()) {
        let date = rate.date.to_string();
        let close = format!("{:.4}", rate.close);
        let pct = if change.is_defined() {
            format!("{:.4}", change.pct)
        } else {
            String::new()
        };
        wtr.write_record([date.as_str(), close.as_str(), pct.as_str()])?;
    }
    let data = wtr.into_inner().context("failed to flush CSV writer")?;
    String::from_utf8(data).context("CSV output is not valid UTF-8")
}

/// Write an export string to disk, creating parent directories as needed.
pub fn write_export(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create export dir: {}", parent.display()))?;
        }
    }
    std::fs::write(path, content)
        .with_context(|| format!("failed to write export file: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use fxpulse_core::domain::SentimentLabel;
    use fxpulse_core::series::daily_change;

    // ─── Test helpers ────────────────────────────────────────────────

    fn sample_records() -> Vec<SentimentRecord> {
        vec![
            SentimentRecord {
                text: "Rupiah menguat terhadap dolar AS".into(),
                label: SentimentLabel::Positive,
                score: 0.42,
            },
            SentimentRecord {
                text: "Inflasi naik, rupiah tertekan".into(),
                label: SentimentLabel::Negative,
                score: -0.31,
            },
            SentimentRecord {
                text: "Kurs stabil sepanjang pekan".into(),
                label: SentimentLabel::Neutral,
                score: 0.0,
            },
        ]
    }

    fn sample_series() -> Vec<RatePoint> {
        let start = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();
        [15_500.0, 15_655.0, 15_500.0]
            .into_iter()
            .enumerate()
            .map(|(i, close)| RatePoint::new(start + chrono::Days::new(i as u64), close))
            .collect()
    }

    // ─── News CSV ───────────────────────────────────────────────────

    #[test]
    fn news_csv_columns_and_rows() {
        let csv = export_news_csv(&sample_records()).unwrap();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines.len(), 4); // header + 3 rows
        assert_eq!(lines[0], "text,label,score");
        assert!(lines[1].contains("Positive"));
        assert!(lines[1].ends_with("0.42"));
        assert!(lines[2].contains("-0.31"));
        assert!(lines[3].ends_with("0.00"));
    }

    #[test]
    fn news_csv_quotes_embedded_commas() {
        let csv = export_news_csv(&sample_records()).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        // "Inflasi naik, rupiah tertekan" has a comma, so the text field
        // must be quoted to stay one field.
        assert!(lines[2].starts_with("\"Inflasi naik, rupiah tertekan\""));
    }

    #[test]
    fn news_csv_empty_table() {
        let csv = export_news_csv(&[]).unwrap();
        assert_eq!(csv.lines().count(), 1); // header only
    }

    // ─── Rates CSV ──────────────────────────────────────────────────

    #[test]
    fn rates_csv_blank_cell_for_undefined_change() {
        let rates = sample_series();
        let changes = daily_change(&rates);
        let csv = export_rates_csv(&rates, &changes).unwrap();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "date,close,change_pct");
        // First change is the NaN sentinel: empty trailing cell.
        assert_eq!(lines[1], "2024-03-04,15500.0000,");
        // (15655 - 15500) / 15500 * 100 = 1.0 exactly.
        assert_eq!(lines[2], "2024-03-05,15655.0000,1.0000");
        assert!(!csv.contains("NaN"));
    }

    #[test]
    fn rates_csv_empty_series() {
        let csv = export_rates_csv(&[], &[]).unwrap();
        assert_eq!(csv.lines().count(), 1);
    }

    // ─── Disk round-trip ────────────────────────────────────────────

    #[test]
    fn export_writes_through_nested_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("news.csv");

        let csv = export_news_csv(&sample_records()).unwrap();
        write_export(&path, &csv).unwrap();

        let read_back = std::fs::read_to_string(&path).unwrap();
        assert_eq!(read_back, csv);
    }
}
