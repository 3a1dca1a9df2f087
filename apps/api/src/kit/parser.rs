//! Reply parsing: recovers the kit payload from a free-form model reply.
//!
//! The model is instructed to emit pure JSON but may not comply (preamble
//! prose, trailing commentary, markdown code fences). Extraction walks the
//! text with a bracket-depth scanner that respects string and escape context,
//! so a `}` inside a string value never terminates the object early.

use serde_json::Value;
use thiserror::Error;

use crate::kit::models::KitPayload;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("no JSON object found in model reply")]
    NoJsonObject,

    #[error("malformed JSON in model reply: {0}")]
    Malformed(#[source] serde_json::Error),

    #[error("model reply failed kit validation: {0}")]
    Invalid(#[source] serde_json::Error),
}

/// Parses a raw model reply into a validated `KitPayload`.
///
/// Steps: strip code fences, extract the first complete JSON object, parse it
/// strictly, then convert into the typed payload. Shape violations (missing
/// arrays, non-enumerated `type`/`difficulty` values) fail as `Invalid` and
/// are treated by callers exactly like a parse failure.
pub fn parse_kit_payload(raw: &str) -> Result<KitPayload, ParseError> {
    let text = strip_code_fences(raw);
    let object = extract_json_object(text).ok_or(ParseError::NoJsonObject)?;

    let value: Value = serde_json::from_str(object).map_err(ParseError::Malformed)?;
    serde_json::from_value(value).map_err(ParseError::Invalid)
}

/// Strips ```json ... ``` or ``` ... ``` code fences from LLM output.
fn strip_code_fences(text: &str) -> &str {
    let text = text.trim();
    if let Some(stripped) = text.strip_prefix("```json") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else if let Some(stripped) = text.strip_prefix("```") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else {
        text
    }
}

/// Returns the first complete brace-delimited JSON object in `text`.
///
/// Tracks nesting depth and string/escape state from the first `{`. If the
/// object never closes (truncated reply), falls back to the greedy
/// first-`{`..last-`}` substring as a last resort.
fn extract_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;

    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, &byte) in text.as_bytes().iter().enumerate().skip(start) {
        if in_string {
            if escaped {
                escaped = false;
            } else if byte == b'\\' {
                escaped = true;
            } else if byte == b'"' {
                in_string = false;
            }
            continue;
        }
        match byte {
            b'"' => in_string = true,
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[start..=offset]);
                }
            }
            _ => {}
        }
    }

    // Unbalanced reply: greedy substring, the parse step will report the rest
    let end = text.rfind('}')?;
    (end > start).then(|| &text[start..=end])
}
