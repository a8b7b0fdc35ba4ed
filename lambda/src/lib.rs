//! spellcheck - A serverless Spanish spelling and grammar corrector backed by Amazon Bedrock.
//!
//! This crate implements a single-Lambda architecture:
//! 1. A corrector Lambda behind a public function URL that validates the
//!    request, prompts a Mistral model on Bedrock and shapes its answer
//! 2. A synth binary that emits the CloudFormation template provisioning the
//!    function, its `bedrock:InvokeModel` grant and the URL
//!
//! # Architecture
//!
//! The system uses:
//! - AWS Lambda function URLs for serverless HTTP execution
//! - `aws-sdk-bedrockruntime` for model invocation
//! - a `CorrectorProfile` configuration object selecting prompt, model,
//!   decoding parameters, response shape and CORS policy
//! - Tokio for async runtime
//!
//! # Example
//!
//! ```no_run
//! use spellcheck::ai::BedrockInvoker;
//! use spellcheck::api::handler::correct;
//! use spellcheck::core::config::AppConfig;
//! use spellcheck::core::models::CorrectionRequest;
//! use spellcheck::core::profile::CorrectorProfile;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     spellcheck::setup_logging();
//!
//!     let config = AppConfig::default();
//!     let profile = CorrectorProfile::from_config(&config);
//!     let invoker = BedrockInvoker::from_config(&config).await;
//!
//!     let request = CorrectionRequest {
//!         text: "Este es un texto con erores".to_string(),
//!     };
//!     let corrected = correct(&invoker, &profile, &request).await?;
//!     println!("{corrected}");
//!
//!     Ok(())
//! }
//! ```

// Module declarations
pub mod ai;
pub mod api;
pub mod core;
pub mod errors;
pub mod infra;

pub use errors::CorrectorError;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// This function sets up tracing-subscriber with a JSON formatter suitable for
/// `CloudWatch` Logs integration. Calling it again after a subscriber is
/// installed is a no-op.
///
/// # Example
///
/// ```
/// // Initialize structured logging at the start of your Lambda handler
/// spellcheck::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    let _ = tracing_subscriber::registry().with(fmt_layer).try_init();
}
