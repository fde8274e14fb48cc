use crate::adapters::civic::CivicInfoClient;
use crate::adapters::roster::RosterReader;
use crate::adapters::storage::LocalStorage;
use crate::adapters::template::TeraLetterRenderer;
use crate::core::pipeline::{LetterPipeline, RunSummary};
use crate::core::ConfigProvider;
use crate::utils::error::{EtlError, Result};

/// Wires the roster, civic client, template and output directory into a
/// [`LetterPipeline`] and runs it once.
pub struct EtlEngine<C: ConfigProvider> {
    config: C,
}

impl<C: ConfigProvider> EtlEngine<C> {
    pub fn new(config: C) -> Self {
        Self { config }
    }

    pub async fn run(&self) -> Result<RunSummary> {
        println!("EventManager initialized.");
        tracing::info!("Reading attendees from {}", self.config.attendees_path());

        let roster = RosterReader::from_path(self.config.attendees_path())?;

        let template_path = self.config.template_path();
        let template = tokio::fs::read_to_string(template_path)
            .await
            .map_err(|e| EtlError::file(template_path, e))?;
        let renderer = TeraLetterRenderer::new(&template)?;

        if self.config.api_key().is_none() {
            tracing::warn!("API_KEY is not set, letters will use the fallback message");
        }
        let client = CivicInfoClient::new(
            self.config.api_endpoint(),
            self.config.api_key().map(str::to_string),
            self.config.request_timeout(),
        )?;

        let storage = LocalStorage::new(self.config.output_path());
        let mut pipeline = LetterPipeline::new(storage, client, renderer);
        let summary = pipeline.run(roster).await?;

        tracing::info!(
            "Finished: {} letters in {}",
            summary.letters_written(),
            self.config.output_path()
        );
        Ok(summary)
    }
}
