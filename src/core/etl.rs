use crate::core::{Pipeline, SubmitOutcome, SyncReport};
use crate::utils::error::Result;

pub struct SyncEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> SyncEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// Runs extract, transform and load once each, in order. The first
    /// failing stage ends the run.
    pub async fn run(&self) -> Result<SyncReport> {
        tracing::info!("Fetching contacts from source API...");
        let records = self.pipeline.extract().await?;
        let fetched = records.len();

        tracing::info!("Mapping {} contacts to HubSpot properties...", fetched);
        let payload = self.pipeline.transform(records).await?;
        let submitted = payload.len();

        tracing::info!("Submitting batch of {} contacts to HubSpot...", submitted);
        let outcome = self.pipeline.load(payload).await?;

        match &outcome {
            SubmitOutcome::Created { .. } => match outcome.response_len() {
                Some(len) => tracing::info!(
                    "Contacts created/updated in HubSpot. Response length: {}",
                    len
                ),
                None => tracing::info!("Contacts created/updated in HubSpot"),
            },
            SubmitOutcome::CreatedUnparsed { .. } => tracing::info!(
                "Successfully created/updated contacts in HubSpot, but unable to parse the response JSON"
            ),
        }

        Ok(SyncReport {
            fetched,
            submitted,
            outcome,
        })
    }
}
