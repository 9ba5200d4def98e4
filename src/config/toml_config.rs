use crate::config::{
    default_output_formats, validate_provider, WordCloudSettings, DEFAULT_ARCHIVE_NAME,
    DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_PATH,
};
use crate::core::ConfigProvider;
use crate::utils::error::{Result, SentimentError};
use crate::utils::validation::Validate;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub load: LoadConfig,
    #[serde(default)]
    pub wordcloud: WordCloudSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    #[serde(default = "default_input_path")]
    pub path: String,
    pub feedback: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadConfig {
    #[serde(default = "default_output_path")]
    pub output_path: String,
    #[serde(default = "default_output_formats")]
    pub output_formats: Vec<String>,
    pub compression: Option<CompressionConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompressionConfig {
    pub enabled: bool,
    #[serde(default = "default_archive_name")]
    pub filename: String,
}

fn default_input_path() -> String {
    DEFAULT_INPUT_PATH.to_string()
}

fn default_output_path() -> String {
    DEFAULT_OUTPUT_PATH.to_string()
}

fn default_archive_name() -> String {
    DEFAULT_ARCHIVE_NAME.to_string()
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            path: default_input_path(),
            feedback: None,
        }
    }
}

impl Default for LoadConfig {
    fn default() -> Self {
        Self {
            output_path: default_output_path(),
            output_formats: default_output_formats(),
            compression: None,
        }
    }
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(SentimentError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| SentimentError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${REVIEWS_PATH})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| SentimentError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

impl ConfigProvider for TomlConfig {
    fn input_path(&self) -> &str {
        &self.input.path
    }

    fn output_path(&self) -> &str {
        &self.load.output_path
    }

    fn output_formats(&self) -> &[String] {
        &self.load.output_formats
    }

    fn compress(&self) -> bool {
        self.load.compression.as_ref().map(|c| c.enabled).unwrap_or(false)
    }

    fn archive_name(&self) -> &str {
        self.load
            .compression
            .as_ref()
            .map(|c| c.filename.as_str())
            .unwrap_or(DEFAULT_ARCHIVE_NAME)
    }

    fn feedback(&self) -> Option<&str> {
        self.input.feedback.as_deref()
    }

    fn wordcloud(&self) -> WordCloudSettings {
        self.wordcloud.clone()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_provider(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_toml_config() {
        let toml_content = r#"
[input]
path = "data/Reviews.csv"
feedback = "Arrived broken, very disappointed"

[load]
output_path = "./dashboard"
output_formats = ["html", "json"]

[load.compression]
enabled = true
filename = "reviews.zip"

[wordcloud]
width = 1200
height = 600
max_words = 100
background = "black"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.input_path(), "data/Reviews.csv");
        assert_eq!(config.feedback(), Some("Arrived broken, very disappointed"));
        assert_eq!(config.output_formats(), &["html", "json"]);
        assert!(config.compress());
        assert_eq!(config.archive_name(), "reviews.zip");
        assert_eq!(config.wordcloud().max_words, 100);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert_eq!(config.input_path(), "Reviews.csv");
        assert_eq!(config.output_path(), "./output");
        assert_eq!(config.output_formats(), &["html", "csv", "json"]);
        assert!(!config.compress());
        assert_eq!(config.wordcloud(), WordCloudSettings::default());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("REVIEW_SENTIMENT_TEST_INPUT", "/tmp/fine_foods.csv");

        let toml_content = r#"
[input]
path = "${REVIEW_SENTIMENT_TEST_INPUT}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.input.path, "/tmp/fine_foods.csv");

        std::env::remove_var("REVIEW_SENTIMENT_TEST_INPUT");
    }

    #[test]
    fn test_config_validation() {
        let toml_content = r#"
[input]
path = "reviews.xlsx"
"#;
        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());

        let toml_content = r#"
[wordcloud]
max_words = 0
"#;
        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = TomlConfig::from_toml_str("[input\npath = ").unwrap_err();
        assert!(matches!(err, SentimentError::ConfigError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[load]
output_path = "./from-file"
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.output_path(), "./from-file");
    }
}
