//! Rule-based sentiment intensity analyzer producing a compound polarity
//! score in [-1, 1].

use crate::analysis::lexicon::{BOOSTERS, NEGATIONS, VALENCE};
use std::collections::{HashMap, HashSet};

/// Added to an ALL-CAPS lexicon word when the text mixes cases.
const CAPS_INCR: f64 = 0.733;
/// Multiplier applied once per negating token in the lookback window.
const NEGATION_SCALAR: f64 = -0.74;
const EXCLAMATION_INCR: f64 = 0.292;
const MAX_EXCLAMATIONS: usize = 4;
const QUESTION_INCR: f64 = 0.18;
const QUESTION_CAP: f64 = 0.96;
/// Normalization constant approximating the max expected sum.
const ALPHA: f64 = 15.0;
const LOOKBACK: usize = 3;

pub struct IntensityAnalyzer {
    valences: HashMap<String, f64>,
    boosters: HashMap<String, f64>,
    negations: HashSet<String>,
}

impl Default for IntensityAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl IntensityAnalyzer {
    pub fn new() -> Self {
        Self {
            valences: VALENCE.iter().map(|(w, v)| (w.to_string(), *v)).collect(),
            boosters: BOOSTERS.iter().map(|(w, v)| (w.to_string(), *v)).collect(),
            negations: NEGATIONS.iter().map(|w| w.to_string()).collect(),
        }
    }

    /// Add or override a lexicon entry.
    pub fn add_word(&mut self, word: &str, valence: f64) {
        self.valences.insert(word.to_lowercase(), valence);
    }

    pub fn valence(&self, word: &str) -> Option<f64> {
        self.valences.get(&word.to_lowercase()).copied()
    }

    fn is_negation(&self, word_lower: &str) -> bool {
        self.negations.contains(word_lower) || word_lower.contains("n't")
    }

    /// Compound score rounded to four decimals. Text without lexicon words
    /// scores 0.0.
    pub fn compound(&self, text: &str) -> f64 {
        let tokens = tokenize(text);
        if tokens.is_empty() {
            return 0.0;
        }
        let lowered: Vec<String> = tokens.iter().map(|t| t.to_lowercase()).collect();
        let cap_diff = has_cap_differential(&tokens);

        let mut sentiments: Vec<f64> = Vec::with_capacity(tokens.len());
        for (i, token) in tokens.iter().enumerate() {
            let word = &lowered[i];
            if self.boosters.contains_key(word) {
                sentiments.push(0.0);
                continue;
            }
            let Some(mut valence) = self.valences.get(word).copied() else {
                sentiments.push(0.0);
                continue;
            };

            if cap_diff && is_all_caps(token) {
                valence += CAPS_INCR.copysign(valence);
            }

            for distance in 0..LOOKBACK {
                if i <= distance {
                    break;
                }
                let prev = i - (distance + 1);
                if self.valences.contains_key(&lowered[prev]) {
                    continue;
                }
                let mut scalar = self.booster_scalar(&tokens[prev], &lowered[prev], valence, cap_diff);
                scalar *= match distance {
                    1 => 0.95,
                    2 => 0.9,
                    _ => 1.0,
                };
                valence += scalar;
                if self.is_negation(&lowered[prev]) {
                    valence *= NEGATION_SCALAR;
                }
            }

            sentiments.push(valence);
        }

        apply_contrast(&lowered, &mut sentiments);

        let mut sum: f64 = sentiments.iter().sum();
        let emphasis = punctuation_emphasis(text);
        if sum > 0.0 {
            sum += emphasis;
        } else if sum < 0.0 {
            sum -= emphasis;
        }

        round4(normalize(sum))
    }

    fn booster_scalar(&self, token: &str, word_lower: &str, valence: f64, cap_diff: bool) -> f64 {
        let Some(base) = self.boosters.get(word_lower).copied() else {
            return 0.0;
        };
        let mut scalar = if valence < 0.0 { -base } else { base };
        if cap_diff && is_all_caps(token) {
            scalar += CAPS_INCR.copysign(valence);
        }
        scalar
    }
}

/// Whitespace tokens with surrounding punctuation removed, unless stripping
/// would leave fewer than three characters. Single characters are dropped.
fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(|raw| {
            let stripped = raw.trim_matches(|c: char| c.is_ascii_punctuation());
            if stripped.chars().count() <= 2 {
                raw.to_string()
            } else {
                stripped.to_string()
            }
        })
        .filter(|t| t.chars().count() > 1)
        .collect()
}

fn is_all_caps(token: &str) -> bool {
    let mut cased = token.chars().filter(|c| c.is_alphabetic()).peekable();
    cased.peek().is_some() && cased.all(|c| c.is_uppercase())
}

fn has_cap_differential(tokens: &[String]) -> bool {
    let caps = tokens.iter().filter(|t| is_all_caps(t)).count();
    caps > 0 && caps < tokens.len()
}

/// Valences before the first "but" are halved, those after it scaled by 1.5.
fn apply_contrast(lowered: &[String], sentiments: &mut [f64]) {
    let Some(pivot) = lowered.iter().position(|w| w == "but") else {
        return;
    };
    for (i, s) in sentiments.iter_mut().enumerate() {
        if i < pivot {
            *s *= 0.5;
        } else if i > pivot {
            *s *= 1.5;
        }
    }
}

fn punctuation_emphasis(text: &str) -> f64 {
    let exclamations = text.matches('!').count().min(MAX_EXCLAMATIONS) as f64 * EXCLAMATION_INCR;
    let questions = text.matches('?').count();
    let question_emphasis = match questions {
        0 | 1 => 0.0,
        2 | 3 => questions as f64 * QUESTION_INCR,
        _ => QUESTION_CAP,
    };
    exclamations + question_emphasis
}

fn normalize(sum: f64) -> f64 {
    (sum / (sum * sum + ALPHA).sqrt()).clamp(-1.0, 1.0)
}

fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}
