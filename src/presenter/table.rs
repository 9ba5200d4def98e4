use crate::domain::model::LabeledReview;
use crate::presenter::svg::escape;
use crate::utils::error::{Result, SentimentError};
use std::fmt::Write;

pub const TABLE_ROW_LIMIT: usize = 30;
pub const COLUMNS: [&str; 5] = [
    "Score",
    "Text",
    "Sentiment Score",
    "Sentiment Class",
    "Subjectivity",
];

/// The first `TABLE_ROW_LIMIT` rows, or fewer.
pub fn head(reviews: &[LabeledReview]) -> &[LabeledReview] {
    &reviews[..reviews.len().min(TABLE_ROW_LIMIT)]
}

pub fn render_html(reviews: &[LabeledReview]) -> String {
    let mut html = String::from("<table class=\"dataframe\">\n<thead><tr><th></th>");
    for column in COLUMNS {
        let _ = write!(html, "<th>{}</th>", column);
    }
    html.push_str("</tr></thead>\n<tbody>\n");

    for (i, review) in head(reviews).iter().enumerate() {
        let _ = writeln!(
            html,
            "<tr><th>{}</th><td>{}</td><td class=\"text\">{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            i,
            review.score,
            escape(&review.text),
            review.sentiment_score,
            review.sentiment_class,
            review.subjectivity
        );
    }
    html.push_str("</tbody>\n</table>\n");
    html
}

/// Every labeled row as CSV with the table's column headers.
pub fn to_csv(reviews: &[LabeledReview]) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for review in reviews {
        writer.serialize(review)?;
    }
    writer
        .into_inner()
        .map_err(|e| SentimentError::IoError(e.into_error()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::SentimentClass;

    fn reviews(n: usize) -> Vec<LabeledReview> {
        (0..n)
            .map(|i| LabeledReview {
                score: (i % 5 + 1) as f64,
                text: format!("review {}", i),
                sentiment_score: 0.1,
                sentiment_class: SentimentClass::Neutral,
                subjectivity: 0.2,
            })
            .collect()
    }

    #[test]
    fn test_head_caps_at_thirty() {
        assert_eq!(head(&reviews(0)).len(), 0);
        assert_eq!(head(&reviews(7)).len(), 7);
        assert_eq!(head(&reviews(30)).len(), 30);
        assert_eq!(head(&reviews(500)).len(), 30);
    }

    #[test]
    fn test_html_table_rows() {
        let html = render_html(&reviews(45));
        assert_eq!(html.matches("</td></tr>").count(), 30);
        assert!(html.contains("<th>Sentiment Class</th>"));
        assert!(html.contains("review 29"));
        assert!(!html.contains("review 30"));
    }

    #[test]
    fn test_html_escapes_review_text() {
        let mut rows = reviews(1);
        rows[0].text = "<script>alert(1)</script>".to_string();
        let html = render_html(&rows);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_csv_has_all_rows_and_headers() {
        let data = to_csv(&reviews(45)).unwrap();
        let text = String::from_utf8(data).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some("Score,Text,Sentiment Score,Sentiment Class,Subjectivity")
        );
        assert_eq!(lines.count(), 45);
        assert!(text.contains("1.0,review 0,0.1,Neutral,0.2"));
    }
}
