use crate::config::WordCloudSettings;
use crate::domain::model::{ReviewRecord, SentimentScores, TransformResult};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn input_path(&self) -> &str;
    fn output_path(&self) -> &str;
    fn output_formats(&self) -> &[String];
    fn compress(&self) -> bool;
    fn archive_name(&self) -> &str;
    fn feedback(&self) -> Option<&str>;
    fn wordcloud(&self) -> WordCloudSettings;
}

/// Turns a text into polarity and subjectivity scores.
///
/// Implementations must be deterministic and free of side effects.
pub trait SentimentScorer: Send + Sync {
    fn score(&self, text: &str) -> SentimentScores;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<ReviewRecord>>;
    async fn transform(&self, data: Vec<ReviewRecord>) -> Result<TransformResult>;
    async fn load(&self, result: TransformResult) -> Result<String>;
}
