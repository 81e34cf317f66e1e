//! Offline keyword fallback.
//!
//! Every rule is checked against the lower-cased description and each match
//! appends its record, so one query can yield several suggestions. When no
//! rule matches, a single generic placeholder is returned; the result is
//! never empty.

use starboard_core::{CelebritySuggestion, DiscoveryResult, ResultSource};

/// Condition over the lower-cased description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeywordPredicate {
    /// Matches when any of the phrases occurs.
    Any(Vec<String>),
    /// Matches when every phrase occurs.
    All(Vec<String>),
}

impl KeywordPredicate {
    pub fn any<I, S>(phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Any(phrases.into_iter().map(|p| p.into().to_lowercase()).collect())
    }

    pub fn all<I, S>(phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::All(phrases.into_iter().map(|p| p.into().to_lowercase()).collect())
    }

    /// `haystack` must already be lower-cased.
    pub fn matches(&self, haystack: &str) -> bool {
        match self {
            KeywordPredicate::Any(phrases) => phrases.iter().any(|p| haystack.contains(p.as_str())),
            KeywordPredicate::All(phrases) => phrases.iter().all(|p| haystack.contains(p.as_str())),
        }
    }
}

/// One row of the fallback table.
#[derive(Debug, Clone, PartialEq)]
pub struct KeywordRule {
    pub predicate: KeywordPredicate,
    pub suggestion: CelebritySuggestion,
}

impl KeywordRule {
    pub fn new(predicate: KeywordPredicate, suggestion: CelebritySuggestion) -> Self {
        Self {
            predicate,
            suggestion,
        }
    }
}

/// Deterministic, network-free substitute for model output.
#[derive(Debug, Clone)]
pub struct FallbackGenerator {
    rules: Vec<KeywordRule>,
}

impl Default for FallbackGenerator {
    fn default() -> Self {
        Self::new(seed_rules())
    }
}

impl FallbackGenerator {
    pub fn new(rules: Vec<KeywordRule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[KeywordRule] {
        &self.rules
    }

    pub fn generate(&self, description: &str) -> DiscoveryResult {
        let haystack = description.to_lowercase();
        let mut suggestions: Vec<CelebritySuggestion> = self
            .rules
            .iter()
            .filter(|rule| rule.predicate.matches(&haystack))
            .map(|rule| rule.suggestion.clone())
            .collect();

        if suggestions.is_empty() {
            suggestions.push(placeholder());
        }

        DiscoveryResult::new(
            suggestions,
            format!("Fallback search results for: {}", description),
            ResultSource::Fallback,
        )
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn seed_rules() -> Vec<KeywordRule> {
    vec![
        KeywordRule::new(
            KeywordPredicate::any(["punjabi", "indian singer"]),
            CelebritySuggestion {
                name: "Diljit Dosanjh".into(),
                category: "Singer".into(),
                country: "India".into(),
                confidence_score: 0.8,
                bio: "Popular Punjabi singer and actor who has performed internationally including at Coachella".into(),
                estimated_fanbase: 15_000_000,
                instagram_handle: Some("diljitdosanjh".into()),
                youtube_channel: Some("DiljitDosanjh".into()),
                spotify_artist: Some("Diljit Dosanjh".into()),
                image_url: None,
                notable_works: strings(&["G.O.A.T.", "Born to Shine", "Coachella Performance"]),
                genres: strings(&["Punjabi Pop", "Bhangra", "Hip Hop"]),
            },
        ),
        KeywordRule::new(
            KeywordPredicate::all(["british", "rock"]),
            CelebritySuggestion {
                name: "Coldplay".into(),
                category: "Band".into(),
                country: "United Kingdom".into(),
                confidence_score: 0.9,
                bio: "British rock band formed in London, known for alternative rock and pop music".into(),
                estimated_fanbase: 50_000_000,
                instagram_handle: Some("coldplay".into()),
                youtube_channel: Some("ColdplayOfficial".into()),
                spotify_artist: Some("Coldplay".into()),
                image_url: None,
                notable_works: strings(&["Yellow", "Fix You", "Viva La Vida", "Paradise"]),
                genres: strings(&["Alternative Rock", "Pop Rock", "Post-Britpop"]),
            },
        ),
    ]
}

fn placeholder() -> CelebritySuggestion {
    CelebritySuggestion {
        name: "Global Celebrity".into(),
        category: "Entertainment".into(),
        country: "International".into(),
        confidence_score: 0.5,
        bio: "Internationally recognized celebrity in the entertainment industry".into(),
        estimated_fanbase: 1_000_000,
        instagram_handle: None,
        youtube_channel: None,
        spotify_artist: None,
        image_url: None,
        notable_works: strings(&["Various acclaimed works"]),
        genres: strings(&["Entertainment"]),
    }
}
