//! Conversion between a plain prompt string and Gemini wire types

use super::types::{
    GeminiConfig, GeminiContent, GeminiGenerationConfig, GeminiPart, GeminiRequest,
    GeminiResponse,
};
use crate::error::{Error, Result};

pub(super) fn to_gemini_request(prompt: &str, config: &GeminiConfig) -> GeminiRequest {
    GeminiRequest {
        contents: vec![GeminiContent {
            role: Some("user".to_string()),
            parts: vec![GeminiPart {
                text: Some(prompt.to_string()),
            }],
        }],
        generation_config: config.temperature.map(|t| GeminiGenerationConfig {
            temperature: Some(t),
        }),
    }
}

/// Concatenate the text parts of the first candidate.
pub(super) fn from_gemini_response(resp: GeminiResponse) -> Result<String> {
    if resp.candidates.is_empty() {
        if let Some(reason) = resp.prompt_feedback.and_then(|f| f.block_reason) {
            return Err(Error::provider_error(format!("prompt blocked: {}", reason)));
        }
        return Err(Error::EmptyResponse);
    }

    let text: String = resp
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter_map(|p| p.text)
                .collect::<Vec<_>>()
                .join("")
        })
        .unwrap_or_default();

    if text.trim().is_empty() {
        return Err(Error::EmptyResponse);
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_shape() {
        let config = GeminiConfig::new("k");
        let req = to_gemini_request("hello", &config);
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["contents"][0]["parts"][0]["text"], "hello");
        assert_eq!(json["contents"][0]["role"], "user");
        assert!(json.get("generationConfig").is_none());

        let req = to_gemini_request("hello", &config.with_temperature(0.2));
        let json = serde_json::to_value(&req).unwrap();
        assert!(json["generationConfig"]["temperature"].is_number());
    }

    #[test]
    fn test_joins_parts() {
        let resp: GeminiResponse = serde_json::from_str(
            r#"{"candidates":[{"content":{"role":"model","parts":[{"text":"{\"a\":"},{"text":"1}"}]},"finishReason":"STOP"}]}"#,
        )
        .unwrap();
        assert_eq!(from_gemini_response(resp).unwrap(), r#"{"a":1}"#);
    }

    #[test]
    fn test_no_candidates_is_empty() {
        let resp: GeminiResponse = serde_json::from_str(r#"{"candidates":[]}"#).unwrap();
        assert!(matches!(from_gemini_response(resp), Err(Error::EmptyResponse)));
    }

    #[test]
    fn test_blocked_prompt() {
        let resp: GeminiResponse =
            serde_json::from_str(r#"{"promptFeedback":{"blockReason":"SAFETY"}}"#).unwrap();
        let err = from_gemini_response(resp).unwrap_err();
        assert!(err.to_string().contains("SAFETY"));
    }

    #[test]
    fn test_whitespace_text_is_empty() {
        let resp: GeminiResponse =
            serde_json::from_str(r#"{"candidates":[{"content":{"parts":[{"text":"  \n"}]}}]}"#)
                .unwrap();
        assert!(matches!(from_gemini_response(resp), Err(Error::EmptyResponse)));
    }
}
