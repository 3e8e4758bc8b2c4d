//! Headline batch aggregation.

use crate::domain::{SentimentLabel, SentimentRecord, SentimentTable};
use crate::sentiment::PolarityScorer;

/// Round to two decimals, half away from zero. This is the precision shown
/// in every table and stored in every record.
pub fn round2(score: f64) -> f64 {
    (score * 100.0).round() / 100.0
}

/// Score an ordered headline batch into a table, one record per non-blank
/// headline.
///
/// Blank (empty or whitespace-only) entries are skipped; the order of the
/// rest is preserved, duplicates included. Each record stores the text as
/// given, the score rounded to two decimals, and the label derived from that
/// rounded score.
///
/// An empty batch produces an empty table. That is a normal result, not an
/// error; callers decide how to present "no data".
pub fn aggregate(scorer: &PolarityScorer, headlines: &[String]) -> SentimentTable {
    let mut table = Vec::with_capacity(headlines.len());

    for text in headlines {
        if text.trim().is_empty() {
            continue;
        }
        let score = round2(scorer.score(text));
        table.push(SentimentRecord {
            text: text.clone(),
            label: SentimentLabel::from_score(score),
            score,
        });
    }

    table
}
