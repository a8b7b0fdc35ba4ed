use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// HTTP-style event delivered by a Lambda function URL or API Gateway.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HttpEvent {
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub is_base64_encoded: bool,
    #[serde(default)]
    pub request_context: Option<RequestContext>,
    // API Gateway REST (v1) events carry the method at the top level
    #[serde(default)]
    pub http_method: Option<String>,
}

#[derive(Debug, Default, Clone, Deserialize)]
pub struct RequestContext {
    #[serde(default)]
    pub http: Option<HttpDescription>,
}

#[derive(Debug, Default, Clone, Deserialize)]
pub struct HttpDescription {
    #[serde(default)]
    pub method: String,
}

impl HttpEvent {
    #[must_use]
    pub fn method(&self) -> Option<&str> {
        self.request_context
            .as_ref()
            .and_then(|ctx| ctx.http.as_ref())
            .map(|http| http.method.as_str())
            .filter(|m| !m.is_empty())
            .or(self.http_method.as_deref())
    }

    #[must_use]
    pub fn is_preflight(&self) -> bool {
        self.method()
            .is_some_and(|m| m.eq_ignore_ascii_case("OPTIONS"))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorrectionRequest {
    pub text: String,
}

/// Result returned to the function URL integration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HttpResult {
    pub status_code: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers: Option<BTreeMap<String, String>>,
    pub body: String,
}

/// Request body sent to Bedrock `InvokeModel` for Mistral text models.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelPayload {
    pub prompt: String,
    pub max_tokens: u32,
    pub temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_k: Option<u32>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ModelInvocation {
    pub model_id: String,
    pub payload: ModelPayload,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ModelResponse {
    #[serde(default)]
    pub outputs: Vec<ModelOutput>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ModelOutput {
    pub text: String,
}
