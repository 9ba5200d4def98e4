use serde::{Deserialize, Serialize};
use std::fmt;

/// One input row: the review body and the rating it came with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewRecord {
    #[serde(rename = "Text")]
    pub text: String,
    #[serde(rename = "Score")]
    pub score: f64,
}

/// Ordinal sentiment bucket, most positive first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SentimentClass {
    #[serde(rename = "Highly positive")]
    HighlyPositive,
    #[serde(rename = "Positive")]
    Positive,
    #[serde(rename = "Neutral")]
    Neutral,
    #[serde(rename = "Negative")]
    Negative,
    /// Not produced by [`crate::core::classifier::classify`]; every real score
    /// lands in one of the four classes above.
    #[serde(rename = "Highly negative")]
    HighlyNegative,
}

impl SentimentClass {
    pub const ALL: [SentimentClass; 5] = [
        SentimentClass::HighlyPositive,
        SentimentClass::Positive,
        SentimentClass::Neutral,
        SentimentClass::Negative,
        SentimentClass::HighlyNegative,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SentimentClass::HighlyPositive => "Highly positive",
            SentimentClass::Positive => "Positive",
            SentimentClass::Neutral => "Neutral",
            SentimentClass::Negative => "Negative",
            SentimentClass::HighlyNegative => "Highly negative",
        }
    }
}

impl fmt::Display for SentimentClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Scorer output for a single text.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SentimentScores {
    /// Compound polarity in [-1, 1].
    pub polarity: f64,
    /// Adjective-lexicon polarity in [-1, 1].
    pub lexical_polarity: f64,
    /// Opinion vs. fact estimate in [0, 1].
    pub subjectivity: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabeledReview {
    #[serde(rename = "Score")]
    pub score: f64,
    #[serde(rename = "Text")]
    pub text: String,
    #[serde(rename = "Sentiment Score")]
    pub sentiment_score: f64,
    #[serde(rename = "Sentiment Class")]
    pub sentiment_class: SentimentClass,
    #[serde(rename = "Subjectivity")]
    pub subjectivity: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackAnalysis {
    pub input: String,
    pub sentiment_class: SentimentClass,
    pub sentiment_score: f64,
    pub lexical_polarity: f64,
    pub subjectivity: f64,
    pub cleaned_text: String,
}

/// What the single-text form shows for the current input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum FeedbackPanel {
    Prompt,
    Analyzed(FeedbackAnalysis),
}

#[derive(Debug, Clone)]
pub struct TransformResult {
    pub reviews: Vec<LabeledReview>,
    pub feedback: FeedbackPanel,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_labels() {
        let labels: Vec<&str> = SentimentClass::ALL.iter().map(|c| c.label()).collect();
        assert_eq!(
            labels,
            vec!["Highly positive", "Positive", "Neutral", "Negative", "Highly negative"]
        );
        assert_eq!(SentimentClass::Neutral.to_string(), "Neutral");
    }

    #[test]
    fn test_class_serializes_as_label() {
        let json = serde_json::to_string(&SentimentClass::HighlyPositive).unwrap();
        assert_eq!(json, "\"Highly positive\"");
    }

    #[test]
    fn test_feedback_panel_tagging() {
        let json = serde_json::to_value(&FeedbackPanel::Prompt).unwrap();
        assert_eq!(json["state"], "prompt");
    }
}
