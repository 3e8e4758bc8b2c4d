//! Headline polarity scoring.

use vader_sentiment::SentimentIntensityAnalyzer;

use crate::sentiment::lexicon;

/// Weight applied to the lexicon boost before it is added to the base
/// compound score. Half weight keeps a single keyword hit from drowning out
/// the model on mixed headlines.
const BOOST_WEIGHT: f64 = 0.5;

/// Polarity estimator for news headlines.
///
/// Combines the VADER compound score with the currency-news keyword boost
/// from [`lexicon`], clamped to the closed interval [-1.0, 1.0]. Pure with
/// respect to its input: no side effects, no state mutated by scoring, and
/// blank input scores 0.0 rather than failing.
pub struct PolarityScorer {
    analyzer: SentimentIntensityAnalyzer<'static>,
}

impl PolarityScorer {
    pub fn new() -> Self {
        Self {
            analyzer: SentimentIntensityAnalyzer::new(),
        }
    }

    /// Net polarity of `text` in [-1.0, 1.0].
    pub fn score(&self, text: &str) -> f64 {
        if text.trim().is_empty() {
            return 0.0;
        }

        let scores = self.analyzer.polarity_scores(text);
        let compound = scores["compound"];
        let boost = lexicon::keyword_boost(text);

        (compound + boost * BOOST_WEIGHT).clamp(-1.0, 1.0)
    }
}

impl Default for PolarityScorer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_input_scores_zero() {
        let scorer = PolarityScorer::new();
        assert_eq!(scorer.score(""), 0.0);
        assert_eq!(scorer.score("   "), 0.0);
        assert_eq!(scorer.score("\t\n"), 0.0);
    }

    #[test]
    fn indonesian_headlines_direction() {
        let scorer = PolarityScorer::new();

        let negative = [
            "Rupiah melemah terhadap dolar",
            "Kurs rupiah anjlok ke level terendah",
            "Nilai tukar tertekan gejolak global",
        ];
        for headline in negative {
            let score = scorer.score(headline);
            assert!(score < 0.0, "expected negative for '{headline}', got {score}");
        }

        let positive = [
            "Ekonomi membaik pesat",
            "Rupiah menguat tajam pagi ini",
            "Cadangan devisa naik, rupiah stabil",
        ];
        for headline in positive {
            let score = scorer.score(headline);
            assert!(score > 0.0, "expected positive for '{headline}', got {score}");
        }
    }

    #[test]
    fn english_headlines_direction() {
        let scorer = PolarityScorer::new();
        assert!(scorer.score("Rupiah rallies as exports surge") > 0.0);
        assert!(scorer.score("Currency crisis deepens as rupiah plunges") < 0.0);
    }

    #[test]
    fn score_stays_in_range() {
        let scorer = PolarityScorer::new();
        // Stack enough loaded terms that the raw sum would leave the range.
        let pile = "anjlok ambruk krisis merosot jatuh crash plunge slump terpuruk";
        let score = scorer.score(pile);
        assert!((-1.0..=1.0).contains(&score));
        assert!(score < 0.0);
    }

    #[test]
    fn scoring_is_deterministic() {
        let scorer = PolarityScorer::new();
        let text = "Rupiah menguat tipis di tengah tekanan eksternal";
        assert_eq!(scorer.score(text), scorer.score(text));
    }
}
