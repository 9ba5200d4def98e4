use review_sentiment::analysis::TextCleaner;
use review_sentiment::core::feedback::{render_text, FeedbackForm, FEEDBACK_PROMPT};
use review_sentiment::core::SentimentScorer;
use review_sentiment::domain::model::FeedbackPanel;
use review_sentiment::{classify, LexiconScorer, SentimentClass};

#[test]
fn test_love_feedback_is_positive() {
    let scorer = LexiconScorer::new();
    let cleaner = TextCleaner::new();
    let form = FeedbackForm::new(&scorer, &cleaner);

    match form.submit(Some("I love this product!")) {
        FeedbackPanel::Analyzed(analysis) => {
            assert!(analysis.sentiment_score > 0.4);
            assert!(matches!(
                analysis.sentiment_class,
                SentimentClass::Positive | SentimentClass::HighlyPositive
            ));
            assert_eq!(analysis.cleaned_text, "love product");
            assert!(analysis.subjectivity > 0.0);
        }
        FeedbackPanel::Prompt => panic!("expected an analyzed panel"),
    }
}

#[test]
fn test_empty_feedback_shows_prompt() {
    let scorer = LexiconScorer::new();
    let cleaner = TextCleaner::new();
    let form = FeedbackForm::new(&scorer, &cleaner);

    for input in [None, Some(""), Some("   \n")] {
        let panel = form.submit(input);
        assert_eq!(panel, FeedbackPanel::Prompt);
        assert_eq!(render_text(&panel), FEEDBACK_PROMPT);
    }
}

#[test]
fn test_shouting_feedback_cleans_to_content_word() {
    let scorer = LexiconScorer::new();
    let cleaner = TextCleaner::new();
    let form = FeedbackForm::new(&scorer, &cleaner);

    let FeedbackPanel::Analyzed(analysis) = form.submit(Some("THIS IS GREAT!!! 123")) else {
        panic!("expected an analyzed panel");
    };
    assert_eq!(analysis.cleaned_text, "great");
    assert_eq!(analysis.input, "THIS IS GREAT!!! 123");
    assert!(analysis.sentiment_score > 0.4);
}

#[test]
fn test_scorer_is_deterministic() {
    let scorer = LexiconScorer::new();
    let texts = [
        "Not bad at all, but the packaging was awful.",
        "Absolutely delicious!!",
        "It arrived on Tuesday.",
        "",
    ];
    for text in texts {
        let a = scorer.score(text);
        let b = scorer.score(text);
        assert_eq!(a, b);
        assert_eq!(classify(a.polarity), classify(b.polarity));
    }
}

#[test]
fn test_neutral_text_is_neutral() {
    let scorer = LexiconScorer::new();
    let scores = scorer.score("It arrived on Tuesday.");
    assert_eq!(scores.polarity, 0.0);
    assert_eq!(classify(scores.polarity), SentimentClass::Neutral);
}
