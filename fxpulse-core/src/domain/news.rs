//! Sentiment records — scored news headlines.

use serde::{Deserialize, Serialize};

/// One news item's displayed text. No identity beyond the text itself;
/// blank entries are filtered out before scoring.
pub type Headline = String;

/// Three-way polarity classification of a headline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    /// Total mapping from score to label: strictly positive scores are
    /// `Positive`, strictly negative are `Negative`, exactly zero is
    /// `Neutral`. NaN never occurs here (scores are clamped upstream), but
    /// the comparison chain sends it to `Neutral` rather than panicking.
    pub fn from_score(score: f64) -> Self {
        if score > 0.0 {
            SentimentLabel::Positive
        } else if score < 0.0 {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "Positive",
            SentimentLabel::Negative => "Negative",
            SentimentLabel::Neutral => "Neutral",
        }
    }
}

/// One scored headline. Immutable once built; lives for a single render
/// cycle. `score` is already rounded to two decimals and `label` is derived
/// from that rounded value, so the stored pair is always consistent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentRecord {
    pub text: String,
    pub label: SentimentLabel,
    pub score: f64,
}

/// Ordered collection of scored headlines, insertion order = fetch order.
/// Duplicate texts are allowed.
pub type SentimentTable = Vec<SentimentRecord>;

/// Per-label counts and mean score over a table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentSummary {
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
    pub mean_score: f64,
}

impl SentimentSummary {
    /// Tally a table. The mean is over the rounded per-record scores and is
    /// 0.0 for an empty table.
    pub fn of(records: &[SentimentRecord]) -> Self {
        let mut summary = SentimentSummary {
            positive: 0,
            negative: 0,
            neutral: 0,
            mean_score: 0.0,
        };
        if records.is_empty() {
            return summary;
        }
        let mut total = 0.0;
        for record in records {
            match record.label {
                SentimentLabel::Positive => summary.positive += 1,
                SentimentLabel::Negative => summary.negative += 1,
                SentimentLabel::Neutral => summary.neutral += 1,
            }
            total += record.score;
        }
        summary.mean_score = total / records.len() as f64;
        summary
    }

    pub fn total(&self) -> usize {
        self.positive + self.negative + self.neutral
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(text: &str, score: f64) -> SentimentRecord {
        SentimentRecord {
            text: text.into(),
            label: SentimentLabel::from_score(score),
            score,
        }
    }

    #[test]
    fn label_covers_all_signs() {
        assert_eq!(SentimentLabel::from_score(0.01), SentimentLabel::Positive);
        assert_eq!(SentimentLabel::from_score(-0.01), SentimentLabel::Negative);
        assert_eq!(SentimentLabel::from_score(0.0), SentimentLabel::Neutral);
        assert_eq!(SentimentLabel::from_score(-0.0), SentimentLabel::Neutral);
    }

    #[test]
    fn summary_tallies_counts_and_mean() {
        let records = vec![
            record("rupiah menguat", 0.5),
            record("rupiah melemah", -0.25),
            record("kurs tetap", 0.0),
            record("ekonomi membaik", 0.35),
        ];
        let summary = SentimentSummary::of(&records);
        assert_eq!(summary.positive, 2);
        assert_eq!(summary.negative, 1);
        assert_eq!(summary.neutral, 1);
        assert_eq!(summary.total(), 4);
        assert!((summary.mean_score - 0.15).abs() < 1e-10);
    }

    #[test]
    fn summary_of_empty_table() {
        let summary = SentimentSummary::of(&[]);
        assert_eq!(summary.total(), 0);
        assert_eq!(summary.mean_score, 0.0);
    }

    #[test]
    fn record_serialization_roundtrip() {
        let original = record("Rupiah stabil di tengah tekanan global", 0.12);
        let json = serde_json::to_string(&original).unwrap();
        let deser: SentimentRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(original, deser);
    }
}
