// Lambda bootstrap entry point for the corrector function

use lambda_runtime::{Error, run, service_fn};
use spellcheck::ai::BedrockInvoker;
use spellcheck::api::handler;
use spellcheck::core::{config::AppConfig, profile::CorrectorProfile};
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Error> {
    spellcheck::setup_logging();

    let config = AppConfig::from_env().map_err(|e| {
        error!("Config error: {}", e);
        Error::from(e)
    })?;
    let profile = CorrectorProfile::from_config(&config);
    let invoker = BedrockInvoker::from_config(&config).await;

    info!(
        variant = %profile.variant,
        model_id = %profile.model_id,
        cors = profile.cors.is_some(),
        "Corrector ready"
    );

    run(service_fn(|event| handler(&invoker, &profile, event))).await
}
