//! Corrector profiles.
//!
//! A profile bundles everything that distinguishes one corrector deployment
//! from another: prompt template, Bedrock model, decoding parameters, the
//! shape of the 200 body and whether CORS headers are emitted.

use std::fmt;
use std::str::FromStr;

use crate::ai::prompt_builder::PromptTemplate;
use crate::errors::CorrectorError;

use super::config::AppConfig;

pub const PLAIN_MODEL_ID: &str = "mistral.mistral-7b-instruct-v0:2";
pub const BLOCKS_MODEL_ID: &str = "mistral.mistral-small-2402-v1:0";
pub const ERRORS_MODEL_ID: &str = "mistral.mistral-large-2402-v1:0";

/// Generation cap shared by every variant.
pub const MAX_TOKENS: u32 = 2000;

pub const ALLOW_METHODS: &str = "POST, OPTIONS";
pub const ALLOW_HEADERS: &str = "Content-Type";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CorrectorVariant {
    /// Returns `{ "text": <corrected text> }`.
    Plain,
    /// Returns numbered text blocks plus a `corrections_made` list.
    Blocks,
    /// Returns one corrected string plus an `errors` list.
    Errors,
}

impl CorrectorVariant {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            CorrectorVariant::Plain => "plain",
            CorrectorVariant::Blocks => "blocks",
            CorrectorVariant::Errors => "errors",
        }
    }

    #[must_use]
    pub fn default_model_id(self) -> &'static str {
        match self {
            CorrectorVariant::Plain => PLAIN_MODEL_ID,
            CorrectorVariant::Blocks => BLOCKS_MODEL_ID,
            CorrectorVariant::Errors => ERRORS_MODEL_ID,
        }
    }
}

impl fmt::Display for CorrectorVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CorrectorVariant {
    type Err = CorrectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "plain" => Ok(CorrectorVariant::Plain),
            "blocks" => Ok(CorrectorVariant::Blocks),
            "errors" => Ok(CorrectorVariant::Errors),
            other => Err(CorrectorError::ConfigError(format!(
                "unknown corrector variant '{other}' (expected plain, blocks or errors)"
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DecodingParameters {
    pub max_tokens: u32,
    pub temperature: f32,
    pub top_p: Option<f32>,
    pub top_k: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseShape {
    /// Generated text is trimmed and wrapped as `{ "text": ... }`.
    PlainText,
    /// Generated text must contain a JSON object, returned as-is.
    StructuredJson,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorsPolicy {
    pub allow_origin: String,
    pub allow_methods: String,
    pub allow_headers: String,
}

impl CorsPolicy {
    #[must_use]
    pub fn for_origin(origin: &str) -> Self {
        Self {
            allow_origin: origin.to_string(),
            allow_methods: ALLOW_METHODS.to_string(),
            allow_headers: ALLOW_HEADERS.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CorrectorProfile {
    pub variant: CorrectorVariant,
    pub prompt_template: PromptTemplate,
    pub model_id: String,
    pub decoding: DecodingParameters,
    pub response_shape: ResponseShape,
    pub cors: Option<CorsPolicy>,
}

impl CorrectorProfile {
    /// Built-in profile for a variant. CORS variants use `allowed_origin`.
    #[must_use]
    pub fn for_variant(variant: CorrectorVariant, allowed_origin: &str) -> Self {
        match variant {
            CorrectorVariant::Plain => Self {
                variant,
                prompt_template: PromptTemplate::PlainText,
                model_id: variant.default_model_id().to_string(),
                decoding: DecodingParameters {
                    max_tokens: MAX_TOKENS,
                    temperature: 0.2,
                    top_p: Some(0.8),
                    top_k: Some(50),
                },
                response_shape: ResponseShape::PlainText,
                cors: None,
            },
            CorrectorVariant::Blocks => Self {
                variant,
                prompt_template: PromptTemplate::NumberedBlocks,
                model_id: variant.default_model_id().to_string(),
                decoding: DecodingParameters {
                    max_tokens: MAX_TOKENS,
                    temperature: 0.1,
                    top_p: None,
                    top_k: None,
                },
                response_shape: ResponseShape::StructuredJson,
                cors: Some(CorsPolicy::for_origin(allowed_origin)),
            },
            CorrectorVariant::Errors => Self {
                variant,
                prompt_template: PromptTemplate::ErrorList,
                model_id: variant.default_model_id().to_string(),
                decoding: DecodingParameters {
                    max_tokens: MAX_TOKENS,
                    temperature: 0.2,
                    top_p: None,
                    top_k: None,
                },
                response_shape: ResponseShape::StructuredJson,
                cors: Some(CorsPolicy::for_origin(allowed_origin)),
            },
        }
    }

    /// Profile for the configured variant with any model override applied.
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        let profile = Self::for_variant(config.variant, &config.allowed_origin);
        match &config.model_id {
            Some(model_id) => profile.with_model_id(model_id),
            None => profile,
        }
    }

    #[must_use]
    pub fn with_model_id(mut self, model_id: &str) -> Self {
        self.model_id = model_id.to_string();
        self
    }
}
