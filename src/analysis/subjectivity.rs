//! Adjective-lexicon analyzer estimating polarity and subjectivity.

use crate::analysis::lexicon::{ASSESSMENTS, ASSESSMENT_NEGATIONS};
use regex::Regex;
use std::collections::HashMap;

/// Polarity multiplier when a negation precedes an assessed word.
const NEGATION_FACTOR: f64 = -0.5;

#[derive(Debug, Clone, Copy, PartialEq)]
struct Entry {
    polarity: f64,
    subjectivity: f64,
    intensity: f64,
}

/// Averaged assessment of a text.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Assessment {
    pub polarity: f64,
    pub subjectivity: f64,
    /// Number of lexicon words that contributed.
    pub matched: usize,
}

pub struct SubjectivityAnalyzer {
    entries: HashMap<&'static str, Entry>,
    word_regex: Regex,
}

impl SubjectivityAnalyzer {
    pub fn new() -> Self {
        let entries = ASSESSMENTS
            .iter()
            .map(|(word, polarity, subjectivity, intensity)| {
                (
                    *word,
                    Entry {
                        polarity: *polarity,
                        subjectivity: *subjectivity,
                        intensity: *intensity,
                    },
                )
            })
            .collect();

        Self {
            entries,
            word_regex: Regex::new(r"[a-z]+(?:'[a-z]+)?").expect("static word pattern"),
        }
    }

    pub fn assess(&self, text: &str) -> Assessment {
        let lowered = text.to_lowercase();
        let words: Vec<&str> = self
            .word_regex
            .find_iter(&lowered)
            .map(|m| m.as_str())
            .collect();

        let mut scored: Vec<(f64, f64)> = Vec::new();
        let mut modifier: Option<f64> = None;
        let mut negated = false;

        for word in words {
            if is_negation(word) {
                negated = true;
                modifier = None;
                continue;
            }

            let Some(entry) = self.entries.get(word).copied() else {
                modifier = None;
                negated = false;
                continue;
            };

            if entry.intensity != 1.0 {
                // Adverbs modify the next entry instead of being scored.
                modifier = Some(entry.intensity);
                continue;
            }

            let mut polarity = entry.polarity;
            let mut subjectivity = entry.subjectivity;
            if let Some(intensity) = modifier.take() {
                polarity *= intensity;
                subjectivity = (subjectivity * intensity).min(1.0);
            }
            if negated {
                polarity *= NEGATION_FACTOR;
                negated = false;
            }
            scored.push((polarity, subjectivity));
        }

        if scored.is_empty() {
            return Assessment::default();
        }

        let n = scored.len() as f64;
        let polarity = scored.iter().map(|(p, _)| p).sum::<f64>() / n;
        let subjectivity = scored.iter().map(|(_, s)| s).sum::<f64>() / n;

        Assessment {
            polarity: polarity.clamp(-1.0, 1.0),
            subjectivity: subjectivity.clamp(0.0, 1.0),
            matched: scored.len(),
        }
    }
}

impl Default for SubjectivityAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

fn is_negation(word: &str) -> bool {
    ASSESSMENT_NEGATIONS.contains(&word) || word.ends_with("n't")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_adjective() {
        let analyzer = SubjectivityAnalyzer::new();
        let result = analyzer.assess("The tea is good.");
        assert_eq!(result.matched, 1);
        assert!((result.polarity - 0.7).abs() < 1e-9);
        assert!((result.subjectivity - 0.6).abs() < 1e-9);
    }

    #[test]
    fn test_intensifier_scales_following_word() {
        let analyzer = SubjectivityAnalyzer::new();
        let result = analyzer.assess("very good");
        assert_eq!(result.matched, 1);
        assert!((result.polarity - 0.91).abs() < 1e-9);
        assert!((result.subjectivity - 0.78).abs() < 1e-9);
    }

    #[test]
    fn test_negation_halves_and_flips() {
        let analyzer = SubjectivityAnalyzer::new();
        let result = analyzer.assess("not good");
        assert!((result.polarity + 0.35).abs() < 1e-9);

        let result = analyzer.assess("it isn't bad");
        assert!((result.polarity - 0.35).abs() < 1e-9);
    }

    #[test]
    fn test_average_over_matches() {
        let analyzer = SubjectivityAnalyzer::new();
        let result = analyzer.assess("Great taste but terrible packaging");
        assert_eq!(result.matched, 2);
        assert!((result.polarity - (-0.1)).abs() < 1e-9);
        assert!((result.subjectivity - 0.875).abs() < 1e-9);
    }

    #[test]
    fn test_factual_text_has_zero_subjectivity() {
        let analyzer = SubjectivityAnalyzer::new();
        let result = analyzer.assess("Shipped in a box of twelve cans");
        assert_eq!(result, Assessment::default());
        assert_eq!(analyzer.assess(""), Assessment::default());
    }

    #[test]
    fn test_subjectivity_capped() {
        let analyzer = SubjectivityAnalyzer::new();
        let result = analyzer.assess("extremely delicious");
        assert!(result.subjectivity <= 1.0);
        assert!((result.polarity - 1.0).abs() < 1e-9);
    }
}
