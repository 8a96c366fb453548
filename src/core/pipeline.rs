use crate::adapters::http::{fetch_contacts, submit_batch};
use crate::core::{BatchPayload, ConfigProvider, Pipeline, Record, SubmitOutcome};
use crate::domain::services::build_batch;
use crate::utils::error::Result;
use reqwest::Client;

/// Source API to HubSpot, one request each way.
pub struct ContactSyncPipeline<C: ConfigProvider> {
    config: C,
    client: Client,
}

impl<C: ConfigProvider> ContactSyncPipeline<C> {
    pub fn new(config: C) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }
}

#[async_trait::async_trait]
impl<C: ConfigProvider> Pipeline for ContactSyncPipeline<C> {
    async fn extract(&self) -> Result<Vec<Record>> {
        let records = fetch_contacts(
            &self.client,
            self.config.source_endpoint(),
            self.config.source_token(),
        )
        .await?;

        tracing::info!(
            "Successfully retrieved {} contacts from source API",
            records.len()
        );
        tracing::debug!("Source contacts: {:?}", records);
        Ok(records)
    }

    async fn transform(&self, data: Vec<Record>) -> Result<BatchPayload> {
        build_batch(&data)
    }

    async fn load(&self, payload: BatchPayload) -> Result<SubmitOutcome> {
        submit_batch(
            &self.client,
            self.config.target_endpoint(),
            self.config.target_token(),
            &payload,
        )
        .await
    }
}
