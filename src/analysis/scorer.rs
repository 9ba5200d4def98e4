use crate::analysis::{IntensityAnalyzer, SubjectivityAnalyzer};
use crate::core::SentimentScorer;
use crate::domain::model::SentimentScores;

/// Default scorer: compound polarity from the intensity analyzer, lexical
/// polarity and subjectivity from the adjective analyzer.
#[derive(Default)]
pub struct LexiconScorer {
    intensity: IntensityAnalyzer,
    subjectivity: SubjectivityAnalyzer,
}

impl LexiconScorer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_analyzers(intensity: IntensityAnalyzer, subjectivity: SubjectivityAnalyzer) -> Self {
        Self {
            intensity,
            subjectivity,
        }
    }
}

impl SentimentScorer for LexiconScorer {
    fn score(&self, text: &str) -> SentimentScores {
        let assessment = self.subjectivity.assess(text);
        SentimentScores {
            polarity: self.intensity.compound(text),
            lexical_polarity: assessment.polarity,
            subjectivity: assessment.subjectivity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scores_stay_in_range() {
        let scorer = LexiconScorer::new();
        let texts = [
            "I love this product!",
            "Worst purchase ever. Stale, broken and overpriced!!!",
            "Arrived Tuesday in a brown box.",
            "",
        ];
        for text in texts {
            let scores = scorer.score(text);
            assert!((-1.0..=1.0).contains(&scores.polarity), "{}", text);
            assert!((-1.0..=1.0).contains(&scores.lexical_polarity), "{}", text);
            assert!((0.0..=1.0).contains(&scores.subjectivity), "{}", text);
        }
    }

    #[test]
    fn test_scoring_is_deterministic() {
        let scorer = LexiconScorer::new();
        let text = "The cookies were not fresh but the coffee was REALLY good!!";
        let first = scorer.score(text);
        for _ in 0..10 {
            assert_eq!(scorer.score(text), first);
        }
        assert_eq!(LexiconScorer::new().score(text), first);
    }

    #[test]
    fn test_empty_text_is_neutral_and_objective() {
        let scorer = LexiconScorer::new();
        assert_eq!(scorer.score("   "), SentimentScores::default());
    }
}
