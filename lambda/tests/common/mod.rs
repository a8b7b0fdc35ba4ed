#![allow(dead_code)]

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use serde_json::{Value, json};
use spellcheck::ai::ModelInvoker;
use spellcheck::core::models::ModelInvocation;
use spellcheck::errors::CorrectorError;

/// Test double for Bedrock that records every invocation.
pub struct MockInvoker {
    response: Result<Vec<u8>, String>,
    calls: AtomicUsize,
    last: Mutex<Option<ModelInvocation>>,
}

impl MockInvoker {
    pub fn replying_with_text(text: &str) -> Self {
        Self::replying_with_body(&json!({ "outputs": [{ "text": text, "stop_reason": "stop" }] }))
    }

    pub fn replying_with_body(body: &Value) -> Self {
        Self {
            response: Ok(body.to_string().into_bytes()),
            calls: AtomicUsize::new(0),
            last: Mutex::new(None),
        }
    }

    pub fn replying_with_bytes(bytes: Vec<u8>) -> Self {
        Self {
            response: Ok(bytes),
            calls: AtomicUsize::new(0),
            last: Mutex::new(None),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            response: Err(message.to_string()),
            calls: AtomicUsize::new(0),
            last: Mutex::new(None),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_invocation(&self) -> Option<ModelInvocation> {
        self.last.lock().unwrap().clone()
    }
}

#[async_trait]
impl ModelInvoker for MockInvoker {
    async fn invoke(&self, invocation: &ModelInvocation) -> Result<Vec<u8>, CorrectorError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last.lock().unwrap() = Some(invocation.clone());
        self.response
            .clone()
            .map_err(CorrectorError::ModelError)
    }
}

/// Function URL event with a JSON body and the given method.
pub fn url_event(method: &str, body: Option<&str>) -> Value {
    let mut event = json!({
        "version": "2.0",
        "rawPath": "/",
        "headers": { "content-type": "application/json" },
        "requestContext": { "http": { "method": method, "path": "/" } },
        "isBase64Encoded": false
    });
    if let Some(body) = body {
        event["body"] = json!(body);
    }
    event
}

pub fn post_text(text: &str) -> Value {
    url_event("POST", Some(&json!({ "text": text }).to_string()))
}

pub fn body_json(body: &str) -> Value {
    serde_json::from_str(body).expect("response body should be JSON")
}
