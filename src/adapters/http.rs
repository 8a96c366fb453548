use crate::domain::model::{BatchPayload, Record, SubmitOutcome};
use crate::utils::error::{Result, SyncError};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde_json::Value;

/// GET the source contact list. Only a 200 with a JSON array is accepted.
pub async fn fetch_contacts(
    client: &Client,
    endpoint: &str,
    token: &SecretString,
) -> Result<Vec<Record>> {
    tracing::debug!("Making source API request to: {}", endpoint);
    let response = client
        .get(endpoint)
        .bearer_auth(token.expose_secret())
        .send()
        .await
        .map_err(SyncError::SourceRequestError)?;

    let status = response.status();
    tracing::debug!("Source API response status: {}", status);
    if status != StatusCode::OK {
        return Err(SyncError::SourceStatusError {
            status: status.as_u16(),
        });
    }

    let body = response
        .bytes()
        .await
        .map_err(SyncError::SourceRequestError)?;
    let json: Value = serde_json::from_slice(&body).map_err(|e| SyncError::SourceFormatError {
        reason: format!("body is not valid JSON: {}", e),
    })?;

    match json {
        Value::Array(items) => Ok(items.into_iter().map(Record::from).collect()),
        other => Err(SyncError::SourceFormatError {
            reason: format!("expected a JSON array, got {}", json_kind(&other)),
        }),
    }
}

/// POST the whole batch in one request. Only a 201 counts as success.
pub async fn submit_batch(
    client: &Client,
    endpoint: &str,
    token: &SecretString,
    payload: &BatchPayload,
) -> Result<SubmitOutcome> {
    let body = serde_json::to_vec(payload)?;
    tracing::debug!(
        "Posting {} contacts ({} bytes) to: {}",
        payload.len(),
        body.len(),
        endpoint
    );

    let response = client
        .post(endpoint)
        .bearer_auth(token.expose_secret())
        .header(CONTENT_TYPE, "application/json")
        .body(body)
        .send()
        .await
        .map_err(SyncError::TargetRequestError)?;

    let status = response.status();
    tracing::debug!("HubSpot API response status: {}", status);
    let text = response
        .text()
        .await
        .map_err(SyncError::TargetRequestError)?;

    if status != StatusCode::CREATED {
        return Err(SyncError::TargetStatusError {
            status: status.as_u16(),
            body: text,
        });
    }

    match serde_json::from_str::<Value>(&text) {
        Ok(response) => Ok(SubmitOutcome::Created { response }),
        Err(e) => {
            tracing::warn!("HubSpot response is not valid JSON: {}", e);
            Ok(SubmitOutcome::CreatedUnparsed { body: text })
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
