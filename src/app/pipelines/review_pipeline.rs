use crate::analysis::TextCleaner;
use crate::core::classifier::classify;
use crate::core::feedback::FeedbackForm;
use crate::core::{ConfigProvider, LabeledReview, Pipeline, ReviewRecord, SentimentScorer, Storage, TransformResult};
use crate::presenter::{charts, dashboard, table, DashboardView, ReportSummary, WordCloudBuilder};
use crate::utils::error::{Result, SentimentError};
use std::io::Write;
use zip::write::{FileOptions, ZipWriter};

pub const TEXT_COLUMN: &str = "Text";
pub const SCORE_COLUMN: &str = "Score";

pub const DASHBOARD_FILE: &str = "dashboard.html";
pub const CHARTS_FILE: &str = "charts.svg";
pub const WORDCLOUD_FILE: &str = "wordcloud.svg";
pub const LABELED_CSV_FILE: &str = "labeled_reviews.csv";
pub const SUMMARY_FILE: &str = "summary.json";

/// Loads `Reviews.csv`-shaped data, labels every review and renders the
/// dashboard artifacts.
pub struct ReviewPipeline<S: Storage, C: ConfigProvider, Sc: SentimentScorer> {
    pub(crate) storage: S,
    pub(crate) config: C,
    pub(crate) scorer: Sc,
    pub(crate) cleaner: TextCleaner,
}

impl<S: Storage, C: ConfigProvider, Sc: SentimentScorer> ReviewPipeline<S, C, Sc> {
    pub fn new(storage: S, config: C, scorer: Sc) -> Self {
        Self {
            storage,
            config,
            scorer,
            cleaner: TextCleaner::new(),
        }
    }

    pub fn scorer(&self) -> &Sc {
        &self.scorer
    }

    pub fn cleaner(&self) -> &TextCleaner {
        &self.cleaner
    }

    fn output_file(&self, name: &str) -> String {
        format!("{}/{}", self.config.output_path().trim_end_matches('/'), name)
    }

    fn label(&self, record: ReviewRecord) -> LabeledReview {
        let scores = self.scorer.score(&record.text);
        LabeledReview {
            score: record.score,
            text: record.text,
            sentiment_score: scores.polarity,
            sentiment_class: classify(scores.polarity),
            subjectivity: scores.subjectivity,
        }
    }
}

/// Parses CSV bytes into review records. The header must contain `Text` and
/// `Score`; other columns are ignored.
pub fn parse_reviews(data: &[u8]) -> Result<Vec<ReviewRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .from_reader(data);

    let headers = reader.headers()?.clone();
    for column in [TEXT_COLUMN, SCORE_COLUMN] {
        if !headers.iter().any(|h| h == column) {
            return Err(SentimentError::MissingColumnError {
                column: column.to_string(),
            });
        }
    }

    let mut records = Vec::new();
    for row in reader.deserialize::<ReviewRecord>() {
        records.push(row?);
    }
    Ok(records)
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider, Sc: SentimentScorer> Pipeline for ReviewPipeline<S, C, Sc> {
    async fn extract(&self) -> Result<Vec<ReviewRecord>> {
        tracing::debug!("Reading reviews from {}", self.config.input_path());
        let data = self.storage.read_file(self.config.input_path()).await?;
        let records = parse_reviews(&data)?;

        if records.is_empty() {
            return Err(SentimentError::EmptyDatasetError);
        }
        Ok(records)
    }

    async fn transform(&self, data: Vec<ReviewRecord>) -> Result<TransformResult> {
        let reviews: Vec<LabeledReview> = data.into_iter().map(|r| self.label(r)).collect();

        let feedback = FeedbackForm::new(&self.scorer, &self.cleaner).submit(self.config.feedback());

        Ok(TransformResult { reviews, feedback })
    }

    async fn load(&self, result: TransformResult) -> Result<String> {
        let formats = self.config.output_formats();
        let wants = |format: &str| formats.iter().any(|f| f == format);

        // The whole page is rendered on every pass, whatever gets persisted.
        let chart_svg = charts::render_figure(&result.reviews);
        let cloud = WordCloudBuilder::new(self.config.wordcloud())
            .generate(result.reviews.iter().map(|r| r.text.as_str()))?;
        tracing::debug!("Word cloud placed {} words", cloud.words.len());
        let wordcloud_svg = cloud.render_svg();

        let mut artifacts: Vec<(&str, Vec<u8>)> = Vec::new();
        if wants("html") {
            let page = dashboard::render(&DashboardView {
                reviews: &result.reviews,
                feedback: &result.feedback,
                chart_svg: &chart_svg,
                wordcloud_svg: &wordcloud_svg,
            });
            artifacts.push((DASHBOARD_FILE, page.into_bytes()));
            artifacts.push((CHARTS_FILE, chart_svg.into_bytes()));
            artifacts.push((WORDCLOUD_FILE, wordcloud_svg.into_bytes()));
        }
        if wants("csv") {
            artifacts.push((LABELED_CSV_FILE, table::to_csv(&result.reviews)?));
        }
        if wants("json") {
            let summary = ReportSummary::from_reviews(&result.reviews, &result.feedback);
            artifacts.push((SUMMARY_FILE, serde_json::to_vec_pretty(&summary)?));
        }

        if self.config.compress() {
            tracing::debug!("Creating ZIP file with {} files", artifacts.len());

            let zip_data = {
                let mut zip = ZipWriter::new(std::io::Cursor::new(Vec::new()));
                for (name, data) in &artifacts {
                    zip.start_file::<_, ()>(*name, FileOptions::default())?;
                    zip.write_all(data)?;
                }
                let cursor = zip.finish()?;
                cursor.into_inner()
            };

            let archive_path = self.output_file(self.config.archive_name());
            tracing::debug!("Writing ZIP file ({} bytes) to storage", zip_data.len());
            self.storage.write_file(&archive_path, &zip_data).await?;
            return Ok(archive_path);
        }

        for (name, data) in &artifacts {
            self.storage.write_file(&self.output_file(name), data).await?;
        }

        if wants("html") {
            Ok(self.output_file(DASHBOARD_FILE))
        } else {
            Ok(self.config.output_path().to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_reviews_ignores_extra_columns() {
        let csv = "Id,ProductId,Score,Summary,Text\n\
                   1,B001,5,Yum,\"Great taffy, fresh and tasty\"\n\
                   2,B002,1,Meh,Arrived stale\n";
        let records = parse_reviews(csv.as_bytes()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].text, "Great taffy, fresh and tasty");
        assert_eq!(records[0].score, 5.0);
        assert_eq!(records[1].score, 1.0);
    }

    #[test]
    fn test_parse_reviews_missing_column() {
        let err = parse_reviews(b"Score,Summary\n5,Great\n").unwrap_err();
        match err {
            SentimentError::MissingColumnError { column } => assert_eq!(column, "Text"),
            other => panic!("unexpected error: {:?}", other),
        }

        let err = parse_reviews(b"Text\nGreat\n").unwrap_err();
        assert!(matches!(err, SentimentError::MissingColumnError { column } if column == "Score"));
    }

    #[test]
    fn test_parse_reviews_non_numeric_score() {
        let err = parse_reviews(b"Text,Score\nGreat,five\n").unwrap_err();
        assert!(matches!(err, SentimentError::CsvError(_)));
    }

    #[test]
    fn test_parse_reviews_header_only() {
        let records = parse_reviews(b"Text,Score\n").unwrap();
        assert!(records.is_empty());
    }
}
