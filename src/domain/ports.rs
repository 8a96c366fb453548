use crate::domain::model::{BatchPayload, Record, SubmitOutcome};
use crate::utils::error::Result;
use async_trait::async_trait;
use secrecy::SecretString;

pub trait ConfigProvider: Send + Sync {
    fn source_endpoint(&self) -> &str;
    fn source_token(&self) -> &SecretString;
    fn target_endpoint(&self) -> &str;
    fn target_token(&self) -> &SecretString;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<Record>>;
    async fn transform(&self, data: Vec<Record>) -> Result<BatchPayload>;
    async fn load(&self, payload: BatchPayload) -> Result<SubmitOutcome>;
}
