//! starboard_llms — the text-completion seam used by celebrity discovery.
//!
//! ```text
//!   DiscoveryService ──prompt──▶ dyn ModelClient ──▶ GeminiProvider ──HTTP──▶ generateContent
//!                    ◀──reply──                  ◀──               ◀──JSON──
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use starboard_llms::{GeminiProvider, ModelClient};
//!
//! # async fn run() -> starboard_llms::Result<()> {
//! let provider = GeminiProvider::from_env()?;
//! let reply = provider.complete("Name one British rock band as JSON").await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod providers;


pub use client::ModelClient;
pub use error::{Error, Result};
pub use providers::GeminiProvider;
pub use providers::gemini::GeminiConfig;
