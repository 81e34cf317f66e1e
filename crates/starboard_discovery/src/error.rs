use thiserror::Error;

/// Why a reply could not be turned into AI-derived suggestions.
///
/// None of these reach callers of the discovery service; each one routes the
/// request to the fallback table.
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("no JSON object found in reply")]
    NoJsonFound,

    #[error("malformed JSON: {0}")]
    MalformedJson(#[from] serde_json::Error),

    #[error("invalid shape: {0}")]
    InvalidShape(String),

    #[error("upstream failure: {0}")]
    UpstreamFailure(String),
}

impl ExtractError {
    /// Stable label for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            ExtractError::NoJsonFound => "no_json_found",
            ExtractError::MalformedJson(_) => "malformed_json",
            ExtractError::InvalidShape(_) => "invalid_shape",
            ExtractError::UpstreamFailure(_) => "upstream_failure",
        }
    }
}

impl From<starboard_llms::Error> for ExtractError {
    fn from(err: starboard_llms::Error) -> Self {
        ExtractError::UpstreamFailure(err.to_string())
    }
}
