//! `starboard discover` and `starboard draft`.

use anyhow::{Result, bail};
use starboard_core::{DiscoverRequest, DiscoveryResult, ProfileDraft};
use starboard_discovery::{DiscoveryService, FallbackGenerator};
use starboard_llms::{GeminiConfig, GeminiProvider};

use crate::output;

pub async fn discover(description: &str, model: Option<String>) -> Result<()> {
    let result = run(description, model).await?;
    output::discovery(&result);
    Ok(())
}

pub async fn draft(description: &str, pick: usize, model: Option<String>) -> Result<()> {
    let result = run(description, model).await?;
    let Some(suggestion) = pick.checked_sub(1).and_then(|i| result.suggestions().get(i)) else {
        bail!(
            "--pick {} is out of range; {} suggestion(s) found",
            pick,
            result.total_found()
        );
    };
    output::draft(&ProfileDraft::from(suggestion));
    Ok(())
}

async fn run(description: &str, model: Option<String>) -> Result<DiscoveryResult> {
    let request = DiscoverRequest::new(description)?;

    let config = match GeminiConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            // No key means no upstream; degrade like any other upstream failure.
            tracing::warn!(error = %e, "model client unavailable");
            output::warning(&format!(
                "{}; set {} to query the model",
                e,
                GeminiConfig::API_KEY_ENV
            ));
            return Ok(FallbackGenerator::default().generate(request.description()));
        }
    };
    let config = match model {
        Some(model) => config.with_model(model),
        None => config,
    };

    let service = DiscoveryService::new(GeminiProvider::new(config)?);
    let spinner = output::spinner("Asking the model...");
    let result = service.discover_request(&request).await;
    spinner.finish_and_clear();
    Ok(result)
}
