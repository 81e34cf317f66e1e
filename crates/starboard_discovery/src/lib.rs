//! Celebrity discovery: turn a free-text description into ranked
//! [`CelebritySuggestion`]s.
//!
//! The pipeline is prompt → model → extract → coerce, and every failure on
//! the way lands in the keyword [`FallbackGenerator`], so
//! [`DiscoveryService::discover`] always returns a usable result.

pub mod error;
pub mod extract;
pub mod fallback;
pub mod normalize;
pub mod prompt;
pub mod service;

pub use error::ExtractError;
pub use fallback::{FallbackGenerator, KeywordPredicate, KeywordRule};
pub use normalize::{Normalizer, coerce_suggestion, normalize_response, parse_reply};
pub use prompt::build_discovery_prompt;
pub use service::DiscoveryService;

pub use starboard_core::{CelebritySuggestion, DiscoverRequest, DiscoveryResult, ResultSource};
