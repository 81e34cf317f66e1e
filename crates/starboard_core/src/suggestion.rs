//! Discovery output: one [`CelebritySuggestion`] per candidate, wrapped in a
//! [`DiscoveryResult`] whose `total_found` always equals the suggestion count.

use serde::{Deserialize, Serialize};

/// One candidate celebrity, either parsed from a model reply or produced by the fallback table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CelebritySuggestion {
    pub name: String,
    pub category: String,
    pub country: String,
    /// Always within `[0, 1]` once coerced.
    pub confidence_score: f64,
    pub bio: String,
    /// Always at least 1000 once coerced.
    pub estimated_fanbase: u64,
    pub instagram_handle: Option<String>,
    pub youtube_channel: Option<String>,
    pub spotify_artist: Option<String>,
    pub image_url: Option<String>,
    pub notable_works: Vec<String>,
    pub genres: Vec<String>,
}

/// Which path produced a [`DiscoveryResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultSource {
    #[default]
    Ai,
    Fallback,
}

impl ResultSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResultSource::Ai => "ai",
            ResultSource::Fallback => "fallback",
        }
    }
}

impl std::fmt::Display for ResultSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Ranked suggestions for one discovery request.
///
/// Fields are read through accessors so `total_found` cannot drift from the
/// suggestion count; deserialization recomputes it from the list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "DiscoveryResultWire")]
pub struct DiscoveryResult {
    suggestions: Vec<CelebritySuggestion>,
    query_interpretation: String,
    total_found: usize,
    source: ResultSource,
}

#[derive(Deserialize)]
struct DiscoveryResultWire {
    suggestions: Vec<CelebritySuggestion>,
    query_interpretation: String,
    #[serde(default)]
    source: ResultSource,
}

impl From<DiscoveryResultWire> for DiscoveryResult {
    fn from(wire: DiscoveryResultWire) -> Self {
        Self::new(wire.suggestions, wire.query_interpretation, wire.source)
    }
}

impl DiscoveryResult {
    pub fn new(
        suggestions: Vec<CelebritySuggestion>,
        query_interpretation: impl Into<String>,
        source: ResultSource,
    ) -> Self {
        let total_found = suggestions.len();
        Self {
            suggestions,
            query_interpretation: query_interpretation.into(),
            total_found,
            source,
        }
    }

    pub fn suggestions(&self) -> &[CelebritySuggestion] {
        &self.suggestions
    }

    pub fn query_interpretation(&self) -> &str {
        &self.query_interpretation
    }

    pub fn total_found(&self) -> usize {
        self.total_found
    }

    pub fn source(&self) -> ResultSource {
        self.source
    }

    pub fn is_fallback(&self) -> bool {
        self.source == ResultSource::Fallback
    }

    pub fn into_suggestions(self) -> Vec<CelebritySuggestion> {
        self.suggestions
    }
}
