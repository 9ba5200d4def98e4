use thiserror::Error;

#[derive(Error, Debug)]
pub enum SentimentError {
    #[error("Zip operation failed: {0}")]
    ZipError(#[from] zip::result::ZipError),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required column '{column}' in input dataset")]
    MissingColumnError { column: String },

    #[error("Input dataset contains no reviews")]
    EmptyDatasetError,

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    Processing,
    Output,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl SentimentError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SentimentError::IoError(e) if e.kind() == std::io::ErrorKind::NotFound => {
                ErrorCategory::Input
            }
            SentimentError::CsvError(_)
            | SentimentError::MissingColumnError { .. }
            | SentimentError::EmptyDatasetError => ErrorCategory::Input,
            SentimentError::ConfigError { .. }
            | SentimentError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            SentimentError::ProcessingError { .. } => ErrorCategory::Processing,
            SentimentError::ZipError(_)
            | SentimentError::IoError(_)
            | SentimentError::SerializationError(_) => ErrorCategory::Output,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            SentimentError::EmptyDatasetError => ErrorSeverity::Medium,
            SentimentError::IoError(e) if e.kind() == std::io::ErrorKind::NotFound => {
                ErrorSeverity::High
            }
            SentimentError::ConfigError { .. }
            | SentimentError::InvalidConfigValueError { .. }
            | SentimentError::MissingColumnError { .. }
            | SentimentError::CsvError(_)
            | SentimentError::ProcessingError { .. } => ErrorSeverity::High,
            SentimentError::IoError(_)
            | SentimentError::ZipError(_)
            | SentimentError::SerializationError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            SentimentError::IoError(e) if e.kind() == std::io::ErrorKind::NotFound => {
                "Check that the input file exists (default: Reviews.csv) or pass --input".to_string()
            }
            SentimentError::IoError(_) => {
                "Check file permissions and free disk space for the output directory".to_string()
            }
            SentimentError::CsvError(_) => {
                "Make sure the dataset is valid CSV and the Score column is numeric".to_string()
            }
            SentimentError::MissingColumnError { column } => {
                format!("Add a '{}' column to the dataset header", column)
            }
            SentimentError::EmptyDatasetError => {
                "Provide a dataset with at least one review containing words".to_string()
            }
            SentimentError::ConfigError { .. } | SentimentError::InvalidConfigValueError { .. } => {
                "Fix the configuration value and run again (see --help)".to_string()
            }
            SentimentError::ZipError(_) => "Disable --zip or check the output path".to_string(),
            SentimentError::SerializationError(_) | SentimentError::ProcessingError { .. } => {
                "Run again with --verbose and inspect the logs".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Input => format!("Could not read the review dataset: {}", self),
            ErrorCategory::Configuration => format!("Invalid configuration: {}", self),
            ErrorCategory::Processing => format!("Sentiment analysis failed: {}", self),
            ErrorCategory::Output => format!("Could not write the dashboard: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, SentimentError>;
