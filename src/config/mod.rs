#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};

pub const DEFAULT_INPUT_PATH: &str = "Reviews.csv";
pub const DEFAULT_OUTPUT_PATH: &str = "./output";
pub const DEFAULT_ARCHIVE_NAME: &str = "sentiment_report.zip";
pub const OUTPUT_FORMATS: [&str; 3] = ["html", "csv", "json"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WordCloudSettings {
    pub width: u32,
    pub height: u32,
    pub max_words: usize,
    pub background: String,
}

impl Default for WordCloudSettings {
    fn default() -> Self {
        Self {
            width: 800,
            height: 400,
            max_words: 200,
            background: "white".to_string(),
        }
    }
}

impl Validate for WordCloudSettings {
    fn validate(&self) -> Result<()> {
        validation::validate_range("wordcloud.width", self.width, 100, 4000)?;
        validation::validate_range("wordcloud.height", self.height, 100, 4000)?;
        validation::validate_positive_number("wordcloud.max_words", self.max_words, 1)?;
        validation::validate_non_empty_string("wordcloud.background", &self.background)
    }
}

pub(crate) fn default_output_formats() -> Vec<String> {
    OUTPUT_FORMATS.iter().map(|f| f.to_string()).collect()
}

/// Checks shared by every [`ConfigProvider`].
pub(crate) fn validate_provider<C: ConfigProvider + ?Sized>(config: &C) -> Result<()> {
    validation::validate_path("input.path", config.input_path())?;
    validation::validate_file_extension("input.path", config.input_path(), &["csv"])?;
    validation::validate_path("load.output_path", config.output_path())?;
    validation::validate_one_of("load.output_formats", config.output_formats(), &OUTPUT_FORMATS)?;
    if config.compress() {
        validation::validate_file_extension("load.compression.filename", config.archive_name(), &["zip"])?;
    }
    config.wordcloud().validate()
}

#[cfg(feature = "cli")]
mod cli_config {
    use super::*;
    use clap::Parser;

    #[derive(Debug, Clone, Serialize, Deserialize, Parser)]
    #[command(name = "review-sentiment")]
    #[command(about = "Label customer reviews by sentiment and render a dashboard")]
    pub struct CliConfig {
        #[arg(long, default_value = DEFAULT_INPUT_PATH)]
        pub input: String,

        #[arg(long, default_value = DEFAULT_OUTPUT_PATH)]
        pub output_path: String,

        #[arg(long, help = "Single feedback text to analyze and clean")]
        pub feedback: Option<String>,

        #[arg(long, value_delimiter = ',', default_values_t = default_output_formats())]
        pub formats: Vec<String>,

        #[arg(long, help = "Bundle all outputs into a ZIP archive")]
        pub zip: bool,

        #[arg(long, help = "TOML configuration file")]
        pub config: Option<String>,

        #[arg(long, help = "Read feedback lines from stdin after rendering")]
        pub interactive: bool,

        #[arg(long, help = "Enable verbose output")]
        pub verbose: bool,

        #[arg(long, help = "Emit logs as JSON lines on stderr")]
        pub json_logs: bool,
    }

    impl ConfigProvider for CliConfig {
        fn input_path(&self) -> &str {
            &self.input
        }

        fn output_path(&self) -> &str {
            &self.output_path
        }

        fn output_formats(&self) -> &[String] {
            &self.formats
        }

        fn compress(&self) -> bool {
            self.zip
        }

        fn archive_name(&self) -> &str {
            DEFAULT_ARCHIVE_NAME
        }

        fn feedback(&self) -> Option<&str> {
            self.feedback.as_deref()
        }

        fn wordcloud(&self) -> WordCloudSettings {
            WordCloudSettings::default()
        }
    }

    impl Validate for CliConfig {
        fn validate(&self) -> Result<()> {
            validate_provider(self)
        }
    }
}

#[cfg(feature = "cli")]
pub use cli_config::CliConfig;

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_cli_defaults() {
        let config = CliConfig::parse_from(["review-sentiment"]);
        assert_eq!(config.input_path(), "Reviews.csv");
        assert_eq!(config.output_path(), "./output");
        assert_eq!(config.output_formats(), &["html", "csv", "json"]);
        assert!(config.feedback().is_none());
        assert!(!config.compress());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_cli_overrides() {
        let config = CliConfig::parse_from([
            "review-sentiment",
            "--input",
            "data/amazon.csv",
            "--formats",
            "html,json",
            "--feedback",
            "I love this product!",
            "--zip",
        ]);
        assert_eq!(config.input_path(), "data/amazon.csv");
        assert_eq!(config.output_formats(), &["html", "json"]);
        assert_eq!(config.feedback(), Some("I love this product!"));
        assert!(config.compress());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_cli_rejects_unknown_format() {
        let config = CliConfig::parse_from(["review-sentiment", "--formats", "pdf"]);
        assert!(config.validate().is_err());
    }
}
