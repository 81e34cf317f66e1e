//! CLI argument definitions using clap derive macros.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Find celebrities from a free-text description
#[derive(Parser)]
#[command(name = "starboard", about, version, propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose (debug) logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format: text (human-readable) or json (machine-readable)
    #[arg(short, long, global = true, default_value = "text")]
    pub output: OutputFormat,
}

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum OutputFormat {
    /// Colored terminal output for humans
    #[default]
    Text,
    /// Structured JSON for machine consumption
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Ask the model for matching celebrities (falls back to the keyword table on failure)
    Discover {
        /// What you are looking for, e.g. "Punjabi singer who performed at Coachella"
        description: String,
        /// Model to use. Uses GEMINI_MODEL env if not set.
        #[arg(long)]
        model: Option<String>,
    },
    /// Discover, then show the profile fields one suggestion would seed
    Draft {
        description: String,
        /// 1-based suggestion to adopt
        #[arg(long, default_value_t = 1)]
        pick: usize,
        #[arg(long)]
        model: Option<String>,
    },
    /// Print the prompt that would be sent for a description
    Prompt { description: String },
    /// Normalize a saved model reply without calling the model
    Normalize {
        /// The description the reply answers
        description: String,
        /// File holding the raw reply (default: stdin)
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
    /// Show the offline keyword fallback for a description
    Fallback { description: String },
    /// Show the effective configuration
    Config,
}
