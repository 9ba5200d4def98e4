pub mod classifier;
pub mod engine;
pub mod feedback;

pub use crate::domain::model::{LabeledReview, ReviewRecord, SentimentScores, TransformResult};
pub use crate::domain::ports::{ConfigProvider, Pipeline, SentimentScorer, Storage};
pub use crate::utils::error::Result;
