#[cfg(feature = "cli")]
pub mod cli;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::{Result, SyncError};
use crate::utils::validation::validate_required_values;
use secrecy::SecretString;
use std::path::Path;

pub const HUBSPOT_API_KEY: &str = "HUBSPOT_API_KEY";
pub const AWS_BEARER_TOKEN: &str = "AWS_BEARER_TOKEN";
pub const AWS_API_ENDPOINT: &str = "AWS_API_ENDPOINT";

pub const HUBSPOT_CONTACTS_ENDPOINT: &str = "https://api.hubapi.com/crm/v3/objects/contacts";

/// Built once at startup and handed to the pipeline. Tokens are redacted in
/// `Debug` output.
#[derive(Debug)]
pub struct SyncConfig {
    pub hubspot_api_key: SecretString,
    pub source_bearer_token: SecretString,
    pub source_endpoint: String,
    pub target_endpoint: String,
}

impl SyncConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let hubspot_api_key = lookup(HUBSPOT_API_KEY);
        let source_bearer_token = lookup(AWS_BEARER_TOKEN);
        let source_endpoint = lookup(AWS_API_ENDPOINT);

        validate_required_values(&[
            (HUBSPOT_API_KEY, hubspot_api_key.as_deref()),
            (AWS_BEARER_TOKEN, source_bearer_token.as_deref()),
            (AWS_API_ENDPOINT, source_endpoint.as_deref()),
        ])?;

        // all three were checked above
        Ok(Self {
            hubspot_api_key: SecretString::new(hubspot_api_key.unwrap_or_default()),
            source_bearer_token: SecretString::new(source_bearer_token.unwrap_or_default()),
            source_endpoint: source_endpoint.unwrap_or_default(),
            target_endpoint: HUBSPOT_CONTACTS_ENDPOINT.to_string(),
        })
    }

    pub fn with_target_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.target_endpoint = endpoint.into();
        self
    }
}

impl ConfigProvider for SyncConfig {
    fn source_endpoint(&self) -> &str {
        &self.source_endpoint
    }

    fn source_token(&self) -> &SecretString {
        &self.source_bearer_token
    }

    fn target_endpoint(&self) -> &str {
        &self.target_endpoint
    }

    fn target_token(&self) -> &SecretString {
        &self.hubspot_api_key
    }
}

/// Loads `.env` style variables without overriding ones already set.
///
/// With no explicit path a missing `./.env` is ignored; an explicit path must
/// exist.
pub fn load_env_file(path: Option<&Path>) -> Result<()> {
    match path {
        Some(path) => dotenvy::from_path(path).map_err(|e| SyncError::EnvFileError {
            path: path.display().to_string(),
            message: e.to_string(),
        }),
        None => match dotenvy::dotenv() {
            Ok(path) => {
                tracing::debug!("Loaded environment from {}", path.display());
                Ok(())
            }
            Err(e) if e.not_found() => Ok(()),
            Err(e) => Err(SyncError::EnvFileError {
                path: ".env".to_string(),
                message: e.to_string(),
            }),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;
    use std::collections::HashMap;

    const NAMES: [&str; 3] = [HUBSPOT_API_KEY, AWS_BEARER_TOKEN, AWS_API_ENDPOINT];

    fn lookup_from(vars: HashMap<&'static str, &'static str>) -> impl Fn(&str) -> Option<String> {
        move |name| vars.get(name).map(|v| v.to_string())
    }

    #[test]
    fn test_from_lookup_reads_all_three_values() {
        let config = SyncConfig::from_lookup(lookup_from(HashMap::from([
            (HUBSPOT_API_KEY, "hub-key"),
            (AWS_BEARER_TOKEN, "aws-token"),
            (AWS_API_ENDPOINT, "https://source.example.com/contacts"),
        ])))
        .unwrap();

        assert_eq!(config.hubspot_api_key.expose_secret(), "hub-key");
        assert_eq!(config.source_bearer_token.expose_secret(), "aws-token");
        assert_eq!(config.source_endpoint, "https://source.example.com/contacts");
        assert_eq!(config.target_endpoint, HUBSPOT_CONTACTS_ENDPOINT);
    }

    #[test]
    fn test_every_missing_subset_is_rejected() {
        for mask in 1u8..8 {
            let mut vars = HashMap::new();
            for (bit, name) in NAMES.iter().enumerate() {
                if mask & (1 << bit) == 0 {
                    vars.insert(*name, "value");
                }
            }

            let expected: Vec<String> = NAMES
                .iter()
                .enumerate()
                .filter(|(bit, _)| mask & (1 << bit) != 0)
                .map(|(_, name)| name.to_string())
                .collect();

            match SyncConfig::from_lookup(lookup_from(vars)) {
                Err(SyncError::MissingConfigError { missing }) => assert_eq!(missing, expected),
                other => panic!("mask {:03b}: unexpected result {:?}", mask, other),
            }
        }
    }

    #[test]
    fn test_empty_value_counts_as_missing() {
        let result = SyncConfig::from_lookup(lookup_from(HashMap::from([
            (HUBSPOT_API_KEY, "hub-key"),
            (AWS_BEARER_TOKEN, ""),
            (AWS_API_ENDPOINT, "https://source.example.com"),
        ])));

        assert!(matches!(
            result,
            Err(SyncError::MissingConfigError { ref missing }) if missing == &vec![AWS_BEARER_TOKEN.to_string()]
        ));
    }

    #[test]
    fn test_debug_output_redacts_tokens() {
        let config = SyncConfig::from_lookup(lookup_from(HashMap::from([
            (HUBSPOT_API_KEY, "hub-key-secret"),
            (AWS_BEARER_TOKEN, "aws-token-secret"),
            (AWS_API_ENDPOINT, "https://source.example.com"),
        ])))
        .unwrap();

        let debug = format!("{:?}", config);
        assert!(!debug.contains("hub-key-secret"));
        assert!(!debug.contains("aws-token-secret"));
        assert!(debug.contains("https://source.example.com"));
    }

    #[test]
    fn test_explicit_missing_env_file_is_an_error() {
        let result = load_env_file(Some(Path::new("/nonexistent/contact-sync/.env")));
        assert!(matches!(result, Err(SyncError::EnvFileError { .. })));
    }
}
