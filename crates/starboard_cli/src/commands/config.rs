//! `starboard config`: show the effective configuration.

use anyhow::Result;
use starboard_llms::GeminiConfig;
use starboard_observability::ObservabilityConfig;

use crate::config::global_env_path;
use crate::output;

pub fn show() -> Result<()> {
    output::header("Configuration");

    match GeminiConfig::from_env() {
        Ok(gemini) => {
            output::kv(GeminiConfig::API_KEY_ENV, &gemini.masked_key());
            output::kv("base_url", &gemini.base_url);
            output::kv("model", &gemini.model);
            output::kv("timeout_secs", &gemini.timeout_secs.to_string());
            output::kv("max_retries", &gemini.max_retries.to_string());
        }
        Err(_) => {
            output::kv(GeminiConfig::API_KEY_ENV, "(not set: discovery uses the keyword fallback)");
        }
    }

    let obs = ObservabilityConfig::from_env();
    output::kv("log_level", obs.log_level.as_deref().unwrap_or("warn"));
    output::kv(
        "otlp_endpoint",
        obs.otlp_endpoint.as_deref().unwrap_or("(disabled)"),
    );
    if let Some(path) = global_env_path() {
        output::dim(&format!("env file: {}", path.display()));
    }
    Ok(())
}
