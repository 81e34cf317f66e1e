//! Provider error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// No API key configured for the named provider
    #[error("missing API key for provider '{0}'")]
    MissingApiKey(String),

    /// Transport-level failure
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success status or error payload from the provider
    #[error("provider error: {0}")]
    Provider(String),

    /// The provider answered but produced no text
    #[error("provider returned an empty response")]
    EmptyResponse,

    #[error("request timed out after {0}s")]
    Timeout(u64),

    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl Error {
    pub fn provider_error(msg: impl Into<String>) -> Self {
        Error::Provider(msg.into())
    }

    /// Whether another attempt could plausibly succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Error::Http(_) | Error::Timeout(_) | Error::Provider(_) | Error::EmptyResponse
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;
