pub mod error;
pub mod profile;
pub mod request;
pub mod suggestion;

pub use error::{Result, StarboardError};
pub use profile::ProfileDraft;
pub use request::{DiscoverRequest, MAX_DESCRIPTION_CHARS};
pub use suggestion::{CelebritySuggestion, DiscoveryResult, ResultSource};
