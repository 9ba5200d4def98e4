//! Text cleaning for the single-feedback form.

use crate::analysis::stopwords;
use regex::Regex;
use std::collections::HashSet;

pub struct TextCleaner {
    digits_regex: Regex,
    stop_words: HashSet<String>,
}

impl Default for TextCleaner {
    fn default() -> Self {
        Self::new()
    }
}

impl TextCleaner {
    pub fn new() -> Self {
        Self {
            digits_regex: Regex::new(r"\d+").expect("static digits pattern"),
            // Contractions are also stored without the apostrophe ("don't" -> "dont")
            // since punctuation is stripped before matching.
            stop_words: stopwords::english()
                .into_iter()
                .flat_map(|w| [w.to_string(), w.replace('\'', "")])
                .collect(),
        }
    }

    /// Lowercase, strip digits and ASCII punctuation, drop English stopwords
    /// and collapse whitespace.
    pub fn clean(&self, text: &str) -> String {
        let lowercase = text.to_lowercase();
        let no_digits = self.digits_regex.replace_all(&lowercase, "");
        let no_punct: String = no_digits
            .chars()
            .filter(|c| !c.is_ascii_punctuation())
            .collect();

        no_punct
            .split_whitespace()
            .filter(|word| !self.stop_words.contains(*word))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
