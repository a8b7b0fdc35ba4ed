//! Decoding of raw `InvokeModel` responses into corrected output.

use serde_json::Value;

use crate::core::models::ModelResponse;
use crate::core::profile::ResponseShape;
use crate::errors::CorrectorError;

/// Returns the first output's generated text from a raw Bedrock response body.
///
/// # Errors
///
/// Fails if the body is not UTF-8, not JSON, or carries no outputs.
pub fn generated_text(raw: &[u8]) -> Result<String, CorrectorError> {
    let decoded = std::str::from_utf8(raw)?;
    let response: ModelResponse = serde_json::from_str(decoded).map_err(|e| {
        CorrectorError::ExtractionError(format!("unexpected model response body: {e}"))
    })?;

    response
        .outputs
        .into_iter()
        .next()
        .map(|output| output.text)
        .ok_or_else(|| CorrectorError::ExtractionError("model returned no outputs".to_string()))
}

/// Finds the first balanced `{...}` region in `text` that parses as a JSON object.
///
/// Braces inside JSON string literals are ignored while matching.
///
/// # Errors
///
/// Returns `ExtractionError` when no such region exists.
pub fn extract_json_object(text: &str) -> Result<Value, CorrectorError> {
    let mut search_from = 0;

    while let Some(offset) = text[search_from..].find('{') {
        let start = search_from + offset;
        if let Some(end) = balanced_end(&text[start..]) {
            let candidate = &text[start..start + end];
            if let Ok(value @ Value::Object(_)) = serde_json::from_str::<Value>(candidate) {
                return Ok(value);
            }
        }
        search_from = start + 1;
    }

    Err(CorrectorError::ExtractionError(
        "no JSON object found in model output".to_string(),
    ))
}

/// Byte length of the balanced region starting at `s[0] == '{'`, if it closes.
fn balanced_end(s: &str) -> Option<usize> {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (idx, c) in s.char_indices() {
        if in_string {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }

        match c {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return Some(idx + c.len_utf8());
                }
            }
            _ => {}
        }
    }

    None
}

/// Turns a raw model response into the JSON body returned to the caller.
///
/// # Errors
///
/// Propagates decoding and extraction failures.
pub fn shape_response(raw: &[u8], shape: ResponseShape) -> Result<Value, CorrectorError> {
    let text = generated_text(raw)?;
    match shape {
        ResponseShape::PlainText => Ok(serde_json::json!({ "text": text.trim() })),
        ResponseShape::StructuredJson => extract_json_object(&text),
    }
}
