//! CLI entry point for starboard.

mod cli;
mod commands;
mod config;
mod output;

use clap::Parser;
use starboard_observability::ObservabilityConfig;

use crate::cli::Cli;

fn observability_config(verbose: bool) -> ObservabilityConfig {
    let config = ObservabilityConfig::from_env().with_version(env!("CARGO_PKG_VERSION"));
    if verbose {
        config.with_log_level("debug")
    } else if config.log_level.is_none() {
        config.with_log_level("warn")
    } else {
        config
    }
}

#[tokio::main]
async fn main() {
    config::load_env_files();
    let cli = Cli::parse();
    output::init(cli.output);

    if let Err(e) = starboard_observability::init(observability_config(cli.verbose)) {
        output::warning(&e.to_string());
    }

    let code = match commands::handle(cli).await {
        Ok(()) => 0,
        Err(e) => {
            output::error(&e.to_string());
            1
        }
    };
    starboard_observability::shutdown();
    std::process::exit(code);
}
