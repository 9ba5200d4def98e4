use crate::analysis::TextCleaner;
use crate::core::classifier::classify;
use crate::core::SentimentScorer;
use crate::domain::model::{FeedbackAnalysis, FeedbackPanel};

pub const FEEDBACK_PROMPT: &str = "Please enter feedback to analyze and clean.";

/// The single-text form: scores, classifies and cleans one piece of feedback.
pub struct FeedbackForm<'a, S: SentimentScorer + ?Sized> {
    scorer: &'a S,
    cleaner: &'a TextCleaner,
}

impl<'a, S: SentimentScorer + ?Sized> FeedbackForm<'a, S> {
    pub fn new(scorer: &'a S, cleaner: &'a TextCleaner) -> Self {
        Self { scorer, cleaner }
    }

    /// Empty or whitespace-only input yields the prompt panel.
    pub fn submit(&self, input: Option<&str>) -> FeedbackPanel {
        let Some(text) = input.filter(|t| !t.trim().is_empty()) else {
            return FeedbackPanel::Prompt;
        };

        let scores = self.scorer.score(text);
        let analysis = FeedbackAnalysis {
            input: text.to_string(),
            sentiment_class: classify(scores.polarity),
            sentiment_score: scores.polarity,
            lexical_polarity: scores.lexical_polarity,
            subjectivity: scores.subjectivity,
            cleaned_text: self.cleaner.clean(text),
        };
        tracing::debug!(
            "Feedback classified as {} ({:.4})",
            analysis.sentiment_class,
            analysis.sentiment_score
        );
        FeedbackPanel::Analyzed(analysis)
    }
}

/// Plain-text rendering of the panel, as printed by the interactive loop.
pub fn render_text(panel: &FeedbackPanel) -> String {
    match panel {
        FeedbackPanel::Prompt => FEEDBACK_PROMPT.to_string(),
        FeedbackPanel::Analyzed(a) => format!(
            "Sentiment Class: {}\nSentiment Score: {}\nLexical Polarity: {}\nSubjectivity: {}\nClean Text: {}",
            a.sentiment_class, a.sentiment_score, a.lexical_polarity, a.subjectivity, a.cleaned_text
        ),
    }
}
