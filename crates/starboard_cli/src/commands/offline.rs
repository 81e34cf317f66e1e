//! Commands that never call the model: `prompt`, `normalize`, `fallback`.

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use starboard_core::DiscoverRequest;
use starboard_discovery::{FallbackGenerator, build_discovery_prompt, normalize_response};

use crate::output;

pub fn prompt(description: &str) -> Result<()> {
    let request = DiscoverRequest::new(description)?;
    output::raw("prompt", &build_discovery_prompt(request.description()));
    Ok(())
}

pub fn normalize(description: &str, file: Option<PathBuf>) -> Result<()> {
    let request = DiscoverRequest::new(description)?;
    let reply = match file {
        Some(path) => std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read reply from {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read reply from stdin")?;
            buf
        }
    };
    output::discovery(&normalize_response(&reply, request.description()));
    Ok(())
}

pub fn fallback(description: &str) -> Result<()> {
    let request = DiscoverRequest::new(description)?;
    output::discovery(&FallbackGenerator::default().generate(request.description()));
    Ok(())
}
