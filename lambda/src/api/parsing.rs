use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde_json::Value;

use crate::core::models::{CorrectionRequest, HttpEvent};
use crate::errors::CorrectorError;

/// Reads the event body, decoding it first when the integration base64-encoded it.
///
/// # Errors
///
/// Returns `ParseError` for invalid base64 or a non-UTF-8 decoded body.
pub fn decoded_body(event: &HttpEvent) -> Result<Option<String>, CorrectorError> {
    let Some(body) = event.body.as_deref() else {
        return Ok(None);
    };

    if !event.is_base64_encoded {
        return Ok(Some(body.to_string()));
    }

    let bytes = STANDARD.decode(body)?;
    String::from_utf8(bytes)
        .map(Some)
        .map_err(|e| CorrectorError::ParseError(format!("body is not UTF-8: {e}")))
}

/// Extracts the correction request from the event body.
///
/// # Errors
///
/// Returns `ParseError` when the body is absent, is not JSON, or lacks a
/// non-empty string `text` field.
pub fn parse_correction_request(event: &HttpEvent) -> Result<CorrectionRequest, CorrectorError> {
    let body = decoded_body(event)?
        .filter(|b| !b.is_empty())
        .ok_or_else(|| CorrectorError::ParseError("request body is missing".to_string()))?;

    let json: Value = serde_json::from_str(&body)?;

    let text = json
        .get("text")
        .and_then(Value::as_str)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| CorrectorError::ParseError("field 'text' is missing or empty".to_string()))?;

    Ok(CorrectionRequest {
        text: text.to_string(),
    })
}
