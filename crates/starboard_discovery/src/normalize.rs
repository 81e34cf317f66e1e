//! Reply normalization: raw model text in, validated [`DiscoveryResult`] out.
//!
//! Coercion never rejects a record. Missing or unusable fields take their
//! defaults, numbers are clamped into range, and a `suggestions` element
//! that is not an object becomes an all-defaults record.

use serde_json::{Map, Value};
use starboard_core::{CelebritySuggestion, DiscoveryResult, ResultSource};

use crate::error::ExtractError;
use crate::extract::extract_json;
use crate::fallback::FallbackGenerator;

pub const DEFAULT_NAME: &str = "Unknown Celebrity";
pub const DEFAULT_CATEGORY: &str = "Entertainment";
pub const DEFAULT_COUNTRY: &str = "Unknown";
pub const DEFAULT_BIO: &str = "No biography available";
pub const DEFAULT_CONFIDENCE: f64 = 0.5;
pub const DEFAULT_FANBASE: u64 = 10_000;
pub const MIN_FANBASE: u64 = 1_000;

/// Parses replies and falls back to a keyword table on any failure.
#[derive(Debug, Clone, Default)]
pub struct Normalizer {
    fallback: FallbackGenerator,
}

impl Normalizer {
    pub fn new(fallback: FallbackGenerator) -> Self {
        Self { fallback }
    }

    pub fn fallback(&self) -> &FallbackGenerator {
        &self.fallback
    }

    /// Never fails: extraction or shape errors produce the fallback result
    /// for `description`.
    pub fn normalize(&self, reply: &str, description: &str) -> DiscoveryResult {
        match parse_reply(reply, description) {
            Ok(result) => result,
            Err(e) => {
                tracing::warn!(kind = e.kind(), error = %e, "reply rejected, using fallback");
                self.fallback.generate(description)
            }
        }
    }
}

/// [`Normalizer::normalize`] with the built-in fallback table.
pub fn normalize_response(reply: &str, description: &str) -> DiscoveryResult {
    Normalizer::default().normalize(reply, description)
}

/// The strict path: extract, check shape, coerce.
pub fn parse_reply(reply: &str, description: &str) -> Result<DiscoveryResult, ExtractError> {
    let payload = extract_json(reply)?;

    let raw_suggestions = payload
        .get("suggestions")
        .and_then(Value::as_array)
        .ok_or_else(|| {
            ExtractError::InvalidShape("`suggestions` is missing or not an array".into())
        })?;

    let suggestions: Vec<CelebritySuggestion> =
        raw_suggestions.iter().map(coerce_suggestion).collect();

    let query_interpretation = non_empty_str(payload.get("query_interpretation"))
        .unwrap_or_else(|| format!("Search for: {}", description));

    tracing::debug!(count = suggestions.len(), "reply normalized");
    Ok(DiscoveryResult::new(
        suggestions,
        query_interpretation,
        ResultSource::Ai,
    ))
}

/// Repair one untrusted record into a fully populated suggestion.
pub fn coerce_suggestion(raw: &Value) -> CelebritySuggestion {
    let empty = Map::new();
    let obj = raw.as_object().unwrap_or(&empty);
    let field = |key: &str| obj.get(key);

    CelebritySuggestion {
        name: non_empty_str(field("name")).unwrap_or_else(|| DEFAULT_NAME.to_string()),
        category: non_empty_str(field("category")).unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
        country: non_empty_str(field("country")).unwrap_or_else(|| DEFAULT_COUNTRY.to_string()),
        confidence_score: nonzero_number(field("confidence_score"))
            .unwrap_or(DEFAULT_CONFIDENCE)
            .clamp(0.0, 1.0),
        bio: non_empty_str(field("bio")).unwrap_or_else(|| DEFAULT_BIO.to_string()),
        estimated_fanbase: nonzero_number(field("estimated_fanbase"))
            .map(|n| n.trunc().max(MIN_FANBASE as f64) as u64)
            .unwrap_or(DEFAULT_FANBASE)
            .max(MIN_FANBASE),
        instagram_handle: non_empty_str(field("instagram_handle")),
        youtube_channel: non_empty_str(field("youtube_channel")),
        spotify_artist: non_empty_str(field("spotify_artist")),
        image_url: non_empty_str(field("image_url")),
        notable_works: string_list(field("notable_works")),
        genres: string_list(field("genres")),
    }
}

fn non_empty_str(value: Option<&Value>) -> Option<String> {
    let s = value?.as_str()?.trim();
    (!s.is_empty()).then(|| s.to_string())
}

/// A finite, non-zero number, from a JSON number or a numeric string.
/// Zero counts as absent.
fn nonzero_number(value: Option<&Value>) -> Option<f64> {
    let n = match value? {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    (n.is_finite() && n != 0.0).then_some(n)
}

fn string_list(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s.clone()),
                Value::Number(n) => Some(n.to_string()),
                Value::Bool(b) => Some(b.to_string()),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn only(result: &DiscoveryResult) -> &CelebritySuggestion {
        assert_eq!(result.suggestions().len(), 1);
        &result.suggestions()[0]
    }

    #[test]
    fn test_fenced_name_only_gets_defaults() {
        let reply = "```json {\"suggestions\":[{\"name\":\"X\"}]} ```";
        let result = normalize_response(reply, "anything");
        assert_eq!(result.source(), ResultSource::Ai);
        let s = only(&result);
        assert_eq!(s.name, "X");
        assert_eq!(s.category, "Entertainment");
        assert_eq!(s.country, "Unknown");
        assert_eq!(s.confidence_score, 0.5);
        assert_eq!(s.bio, "No biography available");
        assert_eq!(s.estimated_fanbase, DEFAULT_FANBASE);
        assert!(s.notable_works.is_empty());
        assert!(s.genres.is_empty());
        assert!(s.instagram_handle.is_none());
        assert!(s.image_url.is_none());
    }

    #[test]
    fn test_confidence_clamped() {
        assert_eq!(coerce_suggestion(&json!({"confidence_score": 1.5})).confidence_score, 1.0);
        assert_eq!(coerce_suggestion(&json!({"confidence_score": -3})).confidence_score, 0.0);
        assert_eq!(coerce_suggestion(&json!({"confidence_score": 0.72})).confidence_score, 0.72);
        assert_eq!(coerce_suggestion(&json!({"confidence_score": "0.9"})).confidence_score, 0.9);
        assert_eq!(coerce_suggestion(&json!({"confidence_score": "high"})).confidence_score, 0.5);
        assert_eq!(coerce_suggestion(&json!({"confidence_score": 0})).confidence_score, 0.5);
    }

    #[test]
    fn test_fanbase_floor() {
        assert_eq!(coerce_suggestion(&json!({"estimated_fanbase": 50})).estimated_fanbase, 1000);
        assert_eq!(coerce_suggestion(&json!({"estimated_fanbase": 500})).estimated_fanbase, 1000);
        assert_eq!(coerce_suggestion(&json!({"estimated_fanbase": -20})).estimated_fanbase, 1000);
        assert_eq!(coerce_suggestion(&json!({})).estimated_fanbase, 10_000);
        assert_eq!(
            coerce_suggestion(&json!({"estimated_fanbase": 2_500_000.7})).estimated_fanbase,
            2_500_000
        );
        assert_eq!(
            coerce_suggestion(&json!({"estimated_fanbase": "1200000"})).estimated_fanbase,
            1_200_000
        );
    }

    #[test]
    fn test_lists_and_handles() {
        let s = coerce_suggestion(&json!({
            "notable_works": "Yellow",
            "genres": ["Rock", 7, null, {"x": 1}, true],
            "instagram_handle": "",
            "youtube_channel": null,
            "spotify_artist": "Coldplay",
            "image_url": 42
        }));
        assert!(s.notable_works.is_empty());
        assert_eq!(s.genres, vec!["Rock", "7", "true"]);
        assert!(s.instagram_handle.is_none());
        assert!(s.youtube_channel.is_none());
        assert_eq!(s.spotify_artist.as_deref(), Some("Coldplay"));
        assert!(s.image_url.is_none());
    }

    #[test]
    fn test_malformed_elements_repaired_not_dropped() {
        let reply = r#"{"suggestions":[{"name":"A","confidence_score":0.9}, "junk", null, 5]}"#;
        let result = normalize_response(reply, "q");
        assert_eq!(result.total_found(), 4);
        assert_eq!(result.suggestions()[0].name, "A");
        for s in &result.suggestions()[1..] {
            assert_eq!(s.name, DEFAULT_NAME);
            assert_eq!(s.estimated_fanbase, DEFAULT_FANBASE);
        }
    }

    #[test]
    fn test_total_found_overrides_model() {
        let reply = r#"{"suggestions":[{"name":"A"},{"name":"B"}],"total_found":17}"#;
        let result = normalize_response(reply, "q");
        assert_eq!(result.total_found(), 2);
    }

    #[test]
    fn test_order_preserved() {
        let reply = r#"{"suggestions":[{"name":"Low","confidence_score":0.2},{"name":"High","confidence_score":0.99}]}"#;
        let result = normalize_response(reply, "q");
        let names: Vec<_> = result.suggestions().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Low", "High"]);
    }

    #[test]
    fn test_query_interpretation() {
        let result = normalize_response(r#"{"suggestions":[]}"#, "British rock band");
        assert_eq!(result.query_interpretation(), "Search for: British rock band");
        assert_eq!(result.total_found(), 0);

        let result = normalize_response(
            r#"{"suggestions":[],"query_interpretation":"UK rock acts"}"#,
            "British rock band",
        );
        assert_eq!(result.query_interpretation(), "UK rock acts");
    }

    #[test]
    fn test_no_brace_equals_direct_fallback() {
        let description = "xyz completely unrelated text";
        let via_normalizer = normalize_response("Sorry, I cannot help with that.", description);
        let direct = FallbackGenerator::default().generate(description);
        assert_eq!(via_normalizer, direct);
        assert_eq!(
            via_normalizer.query_interpretation(),
            "Fallback search results for: xyz completely unrelated text"
        );
    }

    #[test]
    fn test_invalid_shapes_fall_back() {
        for reply in [
            r#"{"suggestions":"none"}"#,
            r#"{"results":[{"name":"A"}]}"#,
            r#"{"suggestions": [ {"name": "A", } "#,
            "```json\n[1,2]\n```",
        ] {
            let result = normalize_response(reply, "Punjabi singer");
            assert!(result.is_fallback(), "reply should fall back: {}", reply);
            assert_eq!(result.suggestions()[0].name, "Diljit Dosanjh");
        }
    }

    #[test]
    fn test_parse_reply_errors() {
        assert!(matches!(parse_reply("nothing", "q"), Err(ExtractError::NoJsonFound)));
        assert!(matches!(
            parse_reply(r#"{"suggestions":{}}"#, "q"),
            Err(ExtractError::InvalidShape(_))
        ));
    }
}
