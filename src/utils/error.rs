use thiserror::Error;

pub const MISSING_CONFIG_MESSAGE: &str = "Please set the required environment variables.";

#[derive(Error, Debug)]
pub enum SyncError {
    #[error("{} Missing: {}", MISSING_CONFIG_MESSAGE, .missing.join(", "))]
    MissingConfigError { missing: Vec<String> },

    #[error("Failed to load env file {path}: {message}")]
    EnvFileError { path: String, message: String },

    #[error("Failed to retrieve contact data from source API. Status code: {status}")]
    SourceStatusError { status: u16 },

    #[error("Source API request failed: {0}")]
    SourceRequestError(#[source] reqwest::Error),

    #[error("Source API returned an unexpected payload: {reason}")]
    SourceFormatError { reason: String },

    #[error("Source contact #{index} is not an object")]
    MalformedRecordError { index: usize },

    #[error("Source contact #{index} is missing field `{field}`")]
    MissingFieldError { index: usize, field: &'static str },

    #[error("Failed to create/update contacts in HubSpot. Status code: {status}")]
    TargetStatusError { status: u16, body: String },

    #[error("HubSpot API request failed: {0}")]
    TargetRequestError(#[source] reqwest::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Pipeline stage an error originated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Config,
    Fetch,
    Transform,
    Submit,
}

impl SyncError {
    pub fn stage(&self) -> Stage {
        match self {
            SyncError::MissingConfigError { .. } | SyncError::EnvFileError { .. } => Stage::Config,
            SyncError::SourceStatusError { .. }
            | SyncError::SourceRequestError(_)
            | SyncError::SourceFormatError { .. } => Stage::Fetch,
            SyncError::MalformedRecordError { .. } | SyncError::MissingFieldError { .. } => {
                Stage::Transform
            }
            SyncError::TargetStatusError { .. }
            | SyncError::TargetRequestError(_)
            | SyncError::SerializationError(_) => Stage::Submit,
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.stage() {
            Stage::Config => 1,
            Stage::Fetch => 2,
            Stage::Transform => 3,
            Stage::Submit => 4,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            SyncError::MissingConfigError { .. } => {
                "Export HUBSPOT_API_KEY, AWS_BEARER_TOKEN and AWS_API_ENDPOINT or put them in a .env file"
            }
            SyncError::EnvFileError { .. } => "Check the path passed to --env-file",
            SyncError::SourceStatusError { status: 401 | 403 }
            | SyncError::TargetStatusError {
                status: 401 | 403,
                ..
            } => "Check that the bearer token is valid and has access",
            SyncError::SourceStatusError { .. } | SyncError::SourceFormatError { .. } => {
                "Check that AWS_API_ENDPOINT returns a JSON array of contacts"
            }
            SyncError::SourceRequestError(_) | SyncError::TargetRequestError(_) => {
                "Check network connectivity and the endpoint host"
            }
            SyncError::MalformedRecordError { .. } | SyncError::MissingFieldError { .. } => {
                "Fix the offending source record; nothing was submitted"
            }
            SyncError::TargetStatusError { .. } => {
                "Inspect the HubSpot response body; contacts may have been partially created"
            }
            SyncError::SerializationError(_) => "Report this as a bug",
        }
    }
}

pub type Result<T> = std::result::Result<T, SyncError>;
