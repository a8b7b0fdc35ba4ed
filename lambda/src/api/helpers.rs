//! Builders for the HTTP-style results returned by the handler.

use std::collections::BTreeMap;

use serde_json::{Value, json};

use crate::core::models::HttpResult;
use crate::core::profile::CorsPolicy;

pub const MISSING_TEXT_MESSAGE: &str = "El campo \"text\" es requerido.";
pub const INTERNAL_ERROR_MESSAGE: &str = "Error interno al procesar el texto.";

#[must_use]
pub fn cors_headers(cors: Option<&CorsPolicy>) -> Option<BTreeMap<String, String>> {
    cors.map(|policy| {
        BTreeMap::from([
            (
                "Access-Control-Allow-Origin".to_string(),
                policy.allow_origin.clone(),
            ),
            (
                "Access-Control-Allow-Methods".to_string(),
                policy.allow_methods.clone(),
            ),
            (
                "Access-Control-Allow-Headers".to_string(),
                policy.allow_headers.clone(),
            ),
        ])
    })
}

#[must_use]
pub fn json_response(status_code: u16, body: &Value, cors: Option<&CorsPolicy>) -> HttpResult {
    HttpResult {
        status_code,
        headers: cors_headers(cors),
        body: body.to_string(),
    }
}

/// Returns `{ "message": ... }` with the given status code.
#[must_use]
pub fn message_response(status_code: u16, message: &str, cors: Option<&CorsPolicy>) -> HttpResult {
    json_response(status_code, &json!({ "message": message }), cors)
}

/// Pre-flight answer: 204, empty body, CORS headers only.
#[must_use]
pub fn preflight_response(cors: &CorsPolicy) -> HttpResult {
    HttpResult {
        status_code: 204,
        headers: cors_headers(Some(cors)),
        body: String::new(),
    }
}

#[must_use]
pub fn bad_request(cors: Option<&CorsPolicy>) -> HttpResult {
    message_response(400, MISSING_TEXT_MESSAGE, cors)
}

#[must_use]
pub fn internal_error(cors: Option<&CorsPolicy>) -> HttpResult {
    message_response(500, INTERNAL_ERROR_MESSAGE, cors)
}
