use crate::domain::model::{FeedbackPanel, LabeledReview, SentimentClass};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportSummary {
    pub generated_at: DateTime<Utc>,
    pub total_reviews: usize,
    pub class_counts: BTreeMap<SentimentClass, usize>,
    pub mean_sentiment_score: f64,
    pub mean_subjectivity: f64,
    pub feedback: FeedbackPanel,
}

impl ReportSummary {
    pub fn from_reviews(reviews: &[LabeledReview], feedback: &FeedbackPanel) -> Self {
        let mut class_counts = BTreeMap::new();
        for review in reviews {
            *class_counts.entry(review.sentiment_class).or_insert(0) += 1;
        }

        let n = reviews.len().max(1) as f64;
        Self {
            generated_at: Utc::now(),
            total_reviews: reviews.len(),
            class_counts,
            mean_sentiment_score: reviews.iter().map(|r| r.sentiment_score).sum::<f64>() / n,
            mean_subjectivity: reviews.iter().map(|r| r.subjectivity).sum::<f64>() / n,
            feedback: feedback.clone(),
        }
    }
}
