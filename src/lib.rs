pub mod analysis;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod presenter;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{cli::LocalStorage, CliConfig};

pub use analysis::LexiconScorer;
pub use app::pipelines::ReviewPipeline;
pub use config::toml_config::TomlConfig;
pub use core::{classifier::classify, engine::DashboardEngine};
pub use domain::model::{LabeledReview, ReviewRecord, SentimentClass, SentimentScores};
pub use utils::error::{Result, SentimentError};
