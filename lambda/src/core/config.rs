use std::env;

use super::profile::CorrectorVariant;

pub const DEFAULT_BEDROCK_REGION: &str = "us-east-1";
pub const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:5173";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub variant: CorrectorVariant,
    pub bedrock_region: String,
    pub model_id: Option<String>,
    pub allowed_origin: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        let variant = match env::var("CORRECTOR_VARIANT") {
            Ok(raw) => raw
                .parse::<CorrectorVariant>()
                .map_err(|e| format!("CORRECTOR_VARIANT: {}", e))?,
            Err(_) => CorrectorVariant::Plain,
        };

        Ok(Self {
            variant,
            bedrock_region: non_empty_var("BEDROCK_REGION")
                .unwrap_or_else(|| DEFAULT_BEDROCK_REGION.to_string()),
            model_id: non_empty_var("BEDROCK_MODEL_ID"),
            allowed_origin: non_empty_var("CORS_ALLOWED_ORIGIN")
                .unwrap_or_else(|| DEFAULT_ALLOWED_ORIGIN.to_string()),
        })
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            variant: CorrectorVariant::Plain,
            bedrock_region: DEFAULT_BEDROCK_REGION.to_string(),
            model_id: None,
            allowed_origin: DEFAULT_ALLOWED_ORIGIN.to_string(),
        }
    }
}

pub(crate) fn non_empty_var(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
