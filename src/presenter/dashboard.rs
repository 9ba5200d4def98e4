use crate::core::feedback::FEEDBACK_PROMPT;
use crate::domain::model::{FeedbackPanel, LabeledReview};
use crate::presenter::svg::escape;
use crate::presenter::table;
use std::fmt::Write;

pub const TITLE: &str = "🌟 Sentiment Analysis On Customer Feedback 🌟";

const STYLE: &str = r#"
body { font-family: sans-serif; max-width: 1100px; margin: 2rem auto; color: #222; }
h1 { text-align: center; }
section { margin-bottom: 2.5rem; }
.feedback dt { font-weight: bold; }
.feedback dd { margin: 0 0 0.5rem 0; }
.chart svg { width: 100%; height: auto; }
table.dataframe { border-collapse: collapse; width: 100%; font-size: 0.85rem; }
table.dataframe th, table.dataframe td { border: 1px solid #ddd; padding: 4px 6px; vertical-align: top; }
table.dataframe td.text { max-width: 520px; }
"#;

/// Everything one render pass shows.
pub struct DashboardView<'a> {
    pub reviews: &'a [LabeledReview],
    pub feedback: &'a FeedbackPanel,
    pub chart_svg: &'a str,
    pub wordcloud_svg: &'a str,
}

pub fn render(view: &DashboardView<'_>) -> String {
    let mut html = String::new();
    let _ = write!(
        html,
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n<style>{}</style>\n</head>\n<body>\n<h1>{}</h1>\n",
        escape(TITLE),
        STYLE,
        escape(TITLE)
    );

    html.push_str("<section class=\"feedback\">\n<h2>Enter Your Feedback</h2>\n");
    html.push_str(&render_feedback(view.feedback));
    html.push_str("</section>\n");

    let _ = write!(
        html,
        "<section class=\"chart\">\n<h2>Graphical Representation of Data</h2>\n{}</section>\n",
        view.chart_svg
    );
    let _ = write!(
        html,
        "<section class=\"chart\">\n<h2>Word Cloud of Frequent Terms</h2>\n{}</section>\n",
        view.wordcloud_svg
    );
    let _ = write!(
        html,
        "<section>\n<h2>Input Dataframe</h2>\n{}</section>\n",
        table::render_html(view.reviews)
    );

    html.push_str("</body>\n</html>\n");
    html
}

pub fn render_feedback(panel: &FeedbackPanel) -> String {
    match panel {
        FeedbackPanel::Prompt => format!("<p>{}</p>\n", FEEDBACK_PROMPT),
        FeedbackPanel::Analyzed(a) => {
            let mut html = String::new();
            let _ = writeln!(html, "<blockquote>{}</blockquote>", escape(&a.input));
            html.push_str("<dl>\n");
            for (label, value) in [
                ("Sentiment Class", a.sentiment_class.to_string()),
                ("Sentiment Score", a.sentiment_score.to_string()),
                ("Lexical Polarity", a.lexical_polarity.to_string()),
                ("Subjectivity", a.subjectivity.to_string()),
            ] {
                let _ = writeln!(html, "<dt>{}</dt><dd>{}</dd>", label, escape(&value));
            }
            html.push_str("</dl>\n<h3>Clean Text</h3>\n");
            let _ = writeln!(html, "<p>{}</p>", escape(&a.cleaned_text));
            html
        }
    }
}
