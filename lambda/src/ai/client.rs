//! Bedrock `InvokeModel` client
//!
//! The handler talks to the model through [`ModelInvoker`] so the Bedrock
//! runtime client can be swapped for a test double.

use async_trait::async_trait;
use aws_sdk_bedrockruntime::Client as BedrockClient;
use aws_sdk_bedrockruntime::error::DisplayErrorContext;
use aws_sdk_bedrockruntime::primitives::Blob;
use tracing::{debug, info};

use crate::core::config::AppConfig;
use crate::core::models::ModelInvocation;
use crate::errors::CorrectorError;

pub const JSON_CONTENT_TYPE: &str = "application/json";

#[async_trait]
pub trait ModelInvoker: Send + Sync {
    /// Sends one invocation and returns the raw response body.
    async fn invoke(&self, invocation: &ModelInvocation) -> Result<Vec<u8>, CorrectorError>;
}

/// Process-wide Bedrock runtime client, built once at cold start.
#[derive(Debug, Clone)]
pub struct BedrockInvoker {
    client: BedrockClient,
}

impl BedrockInvoker {
    #[must_use]
    pub fn new(client: BedrockClient) -> Self {
        Self { client }
    }

    pub async fn from_config(config: &AppConfig) -> Self {
        let shared = aws_config::from_env()
            .region(aws_config::Region::new(config.bedrock_region.clone()))
            .load()
            .await;
        info!(region = %config.bedrock_region, "Bedrock runtime client initialised");
        Self::new(BedrockClient::new(&shared))
    }
}

#[async_trait]
impl ModelInvoker for BedrockInvoker {
    async fn invoke(&self, invocation: &ModelInvocation) -> Result<Vec<u8>, CorrectorError> {
        let body = serde_json::to_vec(&invocation.payload).map_err(|e| {
            CorrectorError::ModelError(format!("failed to serialize model payload: {e}"))
        })?;

        debug!(
            model_id = %invocation.model_id,
            payload_bytes = body.len(),
            "Invoking Bedrock model"
        );

        let response = self
            .client
            .invoke_model()
            .model_id(&invocation.model_id)
            .content_type(JSON_CONTENT_TYPE)
            .accept(JSON_CONTENT_TYPE)
            .body(Blob::new(body))
            .send()
            .await
            .map_err(|e| {
                CorrectorError::ModelError(format!("invoke_model: {}", DisplayErrorContext(&e)))
            })?;

        Ok(response.body.into_inner())
    }
}
