//! Reply extraction across provider response envelopes.
//!
//! Extractors run in order and the first non-blank text wins.

use serde_json::Value;

type Extractor = fn(&Value) -> Option<String>;

const EXTRACTORS: [Extractor; 4] = [
    top_level_text,
    candidate_parts_text,
    candidate_output,
    candidate_text,
];

pub fn extract_text(envelope: &Value) -> Option<String> {
    EXTRACTORS
        .iter()
        .filter_map(|extract| extract(envelope))
        .map(|text| text.trim().to_string())
        .find(|text| !text.is_empty())
}

/// `{ "text": "..." }`
fn top_level_text(envelope: &Value) -> Option<String> {
    envelope.get("text")?.as_str().map(str::to_string)
}

/// `{ "candidates": [{ "content": { "parts": [{ "text": "..." }] } }] }`
fn candidate_parts_text(envelope: &Value) -> Option<String> {
    let parts = first_candidate(envelope)?
        .get("content")?
        .get("parts")?
        .as_array()?;
    let joined: String = parts
        .iter()
        .filter_map(|part| part.get("text").and_then(Value::as_str))
        .collect();
    Some(joined)
}

/// Legacy `{ "candidates": [{ "output": "..." }] }`
fn candidate_output(envelope: &Value) -> Option<String> {
    first_candidate(envelope)?
        .get("output")?
        .as_str()
        .map(str::to_string)
}

/// `{ "candidates": [{ "text": "..." }] }`
fn candidate_text(envelope: &Value) -> Option<String> {
    first_candidate(envelope)?
        .get("text")?
        .as_str()
        .map(str::to_string)
}

fn first_candidate(envelope: &Value) -> Option<&Value> {
    envelope.get("candidates")?.as_array()?.first()
}
