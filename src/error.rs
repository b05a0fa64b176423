use thiserror::Error;

/// Failures surfaced by the write paths of an entity accessor.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("request failed: {0}")]
    Transport(#[from] ClientError),

    #[error("{0}")]
    Rejected(String),

    #[error("{0}")]
    RecordFailed(String),

    #[error("No data returned from {verb} operation")]
    NoData { verb: &'static str },

    #[error("failed to encode record: {0}")]
    Encode(#[from] serde_json::Error),
}

impl ServiceError {
    /// Message for a failure the backend did not explain.
    pub(crate) fn fallback_message(verb: &str, entity: &str) -> String {
        format!("Failed to {} {}", verb, entity)
    }
}

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("backend error ({status}): {message}")]
    Status { status: u16, message: String },

    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required config: {0}")]
    MissingRequired(String),

    #[error("invalid value for {0}")]
    InvalidValue(String),
}
