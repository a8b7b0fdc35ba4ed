use thiserror::Error;

#[derive(Debug, Error)]
pub enum CorrectorError {
    #[error("Failed to parse request: {0}")]
    ParseError(String),

    #[error("Failed to invoke Bedrock model: {0}")]
    ModelError(String),

    #[error("Failed to extract model output: {0}")]
    ExtractionError(String),

    #[error("Invalid configuration: {0}")]
    ConfigError(String),
}

impl From<serde_json::Error> for CorrectorError {
    fn from(error: serde_json::Error) -> Self {
        CorrectorError::ParseError(error.to_string())
    }
}

impl From<std::str::Utf8Error> for CorrectorError {
    fn from(error: std::str::Utf8Error) -> Self {
        CorrectorError::ExtractionError(format!("model response is not UTF-8: {error}"))
    }
}

impl From<base64::DecodeError> for CorrectorError {
    fn from(error: base64::DecodeError) -> Self {
        CorrectorError::ParseError(format!("invalid base64 body: {error}"))
    }
}
