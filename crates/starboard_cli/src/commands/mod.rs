//! Command dispatch.

pub mod config;
pub mod discover;
pub mod offline;

use anyhow::Result;

use crate::cli::{Cli, Command};

pub async fn handle(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Discover { description, model } => discover::discover(&description, model).await,
        Command::Draft {
            description,
            pick,
            model,
        } => discover::draft(&description, pick, model).await,
        Command::Prompt { description } => offline::prompt(&description),
        Command::Normalize { description, file } => offline::normalize(&description, file),
        Command::Fallback { description } => offline::fallback(&description),
        Command::Config => config::show(),
    }
}
