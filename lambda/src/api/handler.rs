//! Corrector Lambda handler.
//!
//! One linear pass per invocation:
//! - CORS pre-flight short-circuit (profiles with a CORS policy only)
//! - Body validation (400 without calling the model)
//! - Prompt rendering and a single Bedrock invocation
//! - Output shaping (200) or a generic failure (500)

use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::{error, info};

use super::{helpers, parsing};
use crate::ai::{ModelInvoker, extract};
use crate::core::models::{CorrectionRequest, HttpEvent, HttpResult, ModelInvocation, ModelPayload};
use crate::core::profile::CorrectorProfile;
use crate::errors::CorrectorError;

pub use self::function_handler as handler;

/// Lambda entrypoint. The invoker and profile are built once at cold start.
///
/// Handler failures are mapped to 400/500 results rather than Lambda errors.
#[tracing::instrument(
    level = "info",
    skip_all,
    fields(request_id = %event.context.request_id, variant = %profile.variant)
)]
pub async fn function_handler<I>(
    invoker: &I,
    profile: &CorrectorProfile,
    event: LambdaEvent<Value>,
) -> Result<HttpResult, Error>
where
    I: ModelInvoker + ?Sized,
{
    info!("Corrector Lambda received request: {:?}", event.payload);
    Ok(handle_event(invoker, profile, &event.payload).await)
}

/// Processes a raw function URL event and always produces an HTTP result.
pub async fn handle_event<I>(invoker: &I, profile: &CorrectorProfile, payload: &Value) -> HttpResult
where
    I: ModelInvoker + ?Sized,
{
    let cors = profile.cors.as_ref();

    let event: HttpEvent = match serde_json::from_value(payload.clone()) {
        Ok(event) => event,
        Err(e) => {
            info!("Unrecognised event shape: {}", e);
            return helpers::bad_request(cors);
        }
    };

    if let Some(policy) = cors {
        if event.is_preflight() {
            return helpers::preflight_response(policy);
        }
    }

    let request = match parsing::parse_correction_request(&event) {
        Ok(request) => request,
        Err(e) => {
            info!("Rejecting request: {}", e);
            return helpers::bad_request(cors);
        }
    };

    match correct(invoker, profile, &request).await {
        Ok(body) => helpers::json_response(200, &body, cors),
        Err(e) => {
            error!("Failed to correct text: {}", e);
            helpers::internal_error(cors)
        }
    }
}

/// Builds the invocation for a request under the given profile.
#[must_use]
pub fn build_invocation(profile: &CorrectorProfile, request: &CorrectionRequest) -> ModelInvocation {
    let prompt = profile.prompt_template.render(&request.text);

    #[cfg(feature = "debug-logs")]
    info!("Using Bedrock prompt:\n{}", prompt);

    ModelInvocation {
        model_id: profile.model_id.clone(),
        payload: ModelPayload {
            prompt,
            max_tokens: profile.decoding.max_tokens,
            temperature: profile.decoding.temperature,
            top_p: profile.decoding.top_p,
            top_k: profile.decoding.top_k,
        },
    }
}

/// Invokes the model and shapes its output into the 200 body.
///
/// # Errors
///
/// Returns an error if the invocation fails or the output cannot be decoded
/// into the profile's response shape.
pub async fn correct<I>(
    invoker: &I,
    profile: &CorrectorProfile,
    request: &CorrectionRequest,
) -> Result<Value, CorrectorError>
where
    I: ModelInvoker + ?Sized,
{
    let invocation = build_invocation(profile, request);
    info!(
        model_id = %invocation.model_id,
        input_chars = request.text.chars().count(),
        "Requesting correction"
    );

    let raw = invoker.invoke(&invocation).await?;
    extract::shape_response(&raw, profile.response_shape)
}
