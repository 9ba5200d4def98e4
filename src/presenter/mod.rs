//! Rendering of a labeled dataset: chart figure, word cloud, table, summary
//! and the dashboard page that ties them together.

pub mod charts;
pub mod dashboard;
pub mod summary;
pub mod svg;
pub mod table;
pub mod wordcloud;

pub use dashboard::DashboardView;
pub use summary::ReportSummary;
pub use wordcloud::{WordCloud, WordCloudBuilder};
