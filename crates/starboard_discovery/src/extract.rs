//! Locating the JSON payload inside a free-text model reply.
//!
//! Candidates are tried in order:
//! 1. each balanced `{...}` object, scanned with string and escape awareness
//! 2. the greedy span from the first `{` to the last `}`
//! 3. the interior of a ```` ```json ```` fenced block
//!
//! The first candidate that parses and carries a `suggestions` key wins.
//! Otherwise the first candidate that parses at all is returned, so the
//! caller can report an invalid shape rather than a parse failure.

use serde_json::Value;

use crate::error::ExtractError;

const FENCE_OPEN: &str = "```json";
const FENCE_CLOSE: &str = "```";

/// Pull the most plausible JSON payload out of `reply`.
pub fn extract_json(reply: &str) -> Result<Value, ExtractError> {
    let mut first_parsed: Option<Value> = None;
    let mut first_err: Option<serde_json::Error> = None;

    let candidates = balanced_objects(reply)
        .into_iter()
        .chain(outermost_span(reply))
        .chain(fenced_block(reply));

    for candidate in candidates {
        match serde_json::from_str::<Value>(candidate) {
            Ok(value) if has_suggestions(&value) => return Ok(value),
            Ok(value) => {
                tracing::debug!("JSON candidate parsed without a suggestions key");
                first_parsed.get_or_insert(value);
            }
            Err(e) => {
                tracing::debug!(error = %e, "JSON candidate failed to parse");
                first_err.get_or_insert(e);
            }
        }
    }

    if let Some(value) = first_parsed {
        return Ok(value);
    }
    match first_err {
        Some(e) => Err(ExtractError::MalformedJson(e)),
        None => Err(ExtractError::NoJsonFound),
    }
}

fn has_suggestions(value: &Value) -> bool {
    value.get("suggestions").is_some()
}

/// Every top-level balanced object in `text`, left to right.
///
/// An opening brace that never closes is skipped and scanning resumes just
/// after it, so stray prose braces do not hide a later object.
fn balanced_objects(text: &str) -> Vec<&str> {
    let mut found = Vec::new();
    let mut pos = 0;
    while let Some(offset) = text[pos..].find('{') {
        let start = pos + offset;
        match matching_brace(text, start) {
            Some(end) => {
                found.push(&text[start..=end]);
                pos = end + 1;
            }
            None => pos = start + 1,
        }
    }
    found
}

/// Byte index of the `}` closing the `{` at `start`.
fn matching_brace(text: &str, start: usize) -> Option<usize> {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escape_next = false;

    for (i, ch) in text[start..].char_indices() {
        if escape_next {
            escape_next = false;
            continue;
        }
        match ch {
            '\\' if in_string => escape_next = true,
            '"' => in_string = !in_string,
            '{' if !in_string => depth += 1,
            '}' if !in_string => {
                depth -= 1;
                if depth == 0 {
                    return Some(start + i);
                }
            }
            _ => {}
        }
    }
    None
}

/// First `{` through last `}`.
fn outermost_span(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (end > start).then(|| &text[start..=end])
}

/// Interior of the first ```` ```json ```` fence.
fn fenced_block(text: &str) -> Option<&str> {
    let open = text.find(FENCE_OPEN)?;
    let rest = &text[open + FENCE_OPEN.len()..];
    let close = rest.find(FENCE_CLOSE)?;
    let inner = rest[..close].trim();
    (!inner.is_empty()).then_some(inner)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_object() {
        let value = extract_json(r#"{"suggestions":[]}"#).unwrap();
        assert!(value["suggestions"].is_array());
    }

    #[test]
    fn test_object_with_prose() {
        let reply = "Sure! Here you go:\n{\"suggestions\":[{\"name\":\"X\"}]}\nHope that helps.";
        let value = extract_json(reply).unwrap();
        assert_eq!(value["suggestions"][0]["name"], "X");
    }

    #[test]
    fn test_fenced_block() {
        let reply = "```json\n{\"suggestions\":[{\"name\":\"X\"}]}\n```";
        let value = extract_json(reply).unwrap();
        assert_eq!(value["suggestions"][0]["name"], "X");
    }

    #[test]
    fn test_braces_inside_strings() {
        let reply = r#"{"suggestions":[{"name":"Brace } Man","bio":"likes { and \" quotes"}]}"#;
        let value = extract_json(reply).unwrap();
        assert_eq!(value["suggestions"][0]["name"], "Brace } Man");
    }

    #[test]
    fn test_skips_earlier_fragment() {
        let reply = r#"Format is {name}. Result: {"suggestions":[{"name":"Y"}]} and {"note":1}"#;
        let value = extract_json(reply).unwrap();
        assert_eq!(value["suggestions"][0]["name"], "Y");
    }

    #[test]
    fn test_unclosed_prose_brace() {
        let reply = r#"I think { maybe... {"suggestions":[]}"#;
        let value = extract_json(reply).unwrap();
        assert!(value["suggestions"].is_array());
    }

    #[test]
    fn test_no_braces() {
        assert!(matches!(
            extract_json("I could not find anyone, sorry."),
            Err(ExtractError::NoJsonFound)
        ));
        assert!(matches!(extract_json(""), Err(ExtractError::NoJsonFound)));
    }

    #[test]
    fn test_malformed() {
        assert!(matches!(
            extract_json(r#"{"suggestions": [ {"name": "X", } "#),
            Err(ExtractError::MalformedJson(_))
        ));
    }

    #[test]
    fn test_parsed_without_suggestions_is_returned() {
        let value = extract_json(r#"{"results":[]}"#).unwrap();
        assert!(value.get("results").is_some());
    }

    #[test]
    fn test_fenced_non_object() {
        let value = extract_json("```json\n[1, 2]\n```").unwrap();
        assert!(value.is_array());
    }

    #[test]
    fn test_balanced_objects_multibyte() {
        let objs = balanced_objects("héllo {\"a\":\"ü\"} wörld {\"b\":2}");
        assert_eq!(objs, vec!["{\"a\":\"ü\"}", "{\"b\":2}"]);
    }
}
