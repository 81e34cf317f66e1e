//! Validated discovery request.

use serde::{Deserialize, Serialize};

use crate::error::{Result, StarboardError};

/// Upper bound on a description, counted in characters.
pub const MAX_DESCRIPTION_CHARS: usize = 500;

/// A free-text description of the celebrity the caller is looking for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DiscoverRequest {
    description: String,
}

impl DiscoverRequest {
    /// Trims the description and checks it is non-empty and within
    /// [`MAX_DESCRIPTION_CHARS`].
    pub fn new(description: impl Into<String>) -> Result<Self> {
        let description = description.into();
        let trimmed = description.trim();
        if trimmed.is_empty() {
            return Err(StarboardError::Validation(
                "description must not be empty".into(),
            ));
        }
        let len = trimmed.chars().count();
        if len > MAX_DESCRIPTION_CHARS {
            return Err(StarboardError::Validation(format!(
                "description is {} characters; at most {} allowed",
                len, MAX_DESCRIPTION_CHARS
            )));
        }
        Ok(Self {
            description: trimmed.to_string(),
        })
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

impl TryFrom<String> for DiscoverRequest {
    type Error = StarboardError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl From<DiscoverRequest> for String {
    fn from(req: DiscoverRequest) -> Self {
        req.description
    }
}
