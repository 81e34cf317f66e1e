//! Discovery prompt builder.

/// Schema the model is asked to fill in. Field names match
/// [`CelebritySuggestion`](starboard_core::CelebritySuggestion).
const RESPONSE_SCHEMA: &str = r#"{
  "suggestions": [
    {
      "name": "Celebrity Full Name",
      "category": "Singer|Actor|Speaker|Comedian|etc",
      "country": "Primary Country",
      "confidence_score": 0.95,
      "bio": "Brief professional bio (50-100 words)",
      "estimated_fanbase": estimated_number,
      "instagram_handle": "username_without_@",
      "youtube_channel": "channel_name",
      "spotify_artist": "artist_name",
      "image_url": null,
      "notable_works": ["work1", "work2", "work3"],
      "genres": ["genre1", "genre2"]
    }
  ],
  "query_interpretation": "How you interpreted the user's description",
  "total_found": number_of_suggestions
}"#;

const RULES: &[&str] = &[
    "Order by confidence_score (highest confidence first)",
    "Only include real, well-known celebrities",
    "Use null for unknown social media handles",
    "Return only valid JSON, no additional text",
];

const EXAMPLES: &[(&str, &str)] = &[
    (
        "Punjabi singer from India who performed at Coachella",
        "Include Diljit Dosanjh",
    ),
    ("British rock band", "Include Coldplay, Queen, etc."),
];

/// Render the instruction sent to the model for one description.
///
/// The description is embedded verbatim.
pub fn build_discovery_prompt(description: &str) -> String {
    let mut parts = Vec::new();
    parts.push(format!("Based on this description: \"{}\"\n", description));
    parts.push(
        "Find 3-5 matching celebrities and return them in this exact JSON format:\n".to_string(),
    );
    parts.push(format!("{}\n", RESPONSE_SCHEMA));
    parts.push("Rules:".to_string());
    for (i, rule) in RULES.iter().enumerate() {
        parts.push(format!("{}. {}", i + 1, rule));
    }
    parts.push(String::new());
    parts.push("Examples:".to_string());
    for (query, hint) in EXAMPLES {
        parts.push(format!("- For \"{}\": {}", query, hint));
    }
    parts.join("\n")
}
