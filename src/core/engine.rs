use crate::core::Pipeline;
use crate::utils::error::Result;
use std::time::Instant;

/// Drives a pipeline through extract, transform and load in order.
pub struct DashboardEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> DashboardEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub fn pipeline(&self) -> &P {
        &self.pipeline
    }

    pub async fn run(&self) -> Result<String> {
        let started = Instant::now();
        tracing::info!("Starting sentiment dashboard run");

        // Extract
        tracing::info!("Loading reviews...");
        let reviews = self.pipeline.extract().await?;
        tracing::info!("Loaded {} reviews", reviews.len());

        // Transform
        tracing::info!("Scoring and classifying reviews...");
        let result = self.pipeline.transform(reviews).await?;
        tracing::info!("Labeled {} reviews", result.reviews.len());

        // Load
        tracing::info!("Rendering dashboard...");
        let output_path = self.pipeline.load(result).await?;
        tracing::info!(
            "Dashboard written to {} in {:?}",
            output_path,
            started.elapsed()
        );

        Ok(output_path)
    }
}
