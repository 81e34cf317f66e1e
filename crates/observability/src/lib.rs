//! Starboard observability: one place to install the tracing subscriber.
//!
//! ```no_run
//! use starboard_observability::{init, ObservabilityConfig};
//!
//! let config = ObservabilityConfig::new("starboard")
//!     .with_log_level("info");
//! init(config)?;
//! tracing::info!("Service started");
//! # Ok::<(), starboard_observability::ObservabilityError>(())
//! ```
//!
//! # Environment Variables
//!
//! - `OTEL_SERVICE_NAME` - Service name
//! - `OTEL_SERVICE_VERSION` - Service version
//! - `OTEL_EXPORTER_OTLP_ENDPOINT` - OTLP endpoint; export is off when unset
//! - `STARBOARD_LOG` or `RUST_LOG` - Log level filter

pub mod config;
pub mod error;
pub mod spans;
pub mod telemetry;

pub use config::ObservabilityConfig;
pub use error::ObservabilityError;
pub use telemetry::{init, init_from_env, shutdown};
pub use spans::{record_duration, record_error};
