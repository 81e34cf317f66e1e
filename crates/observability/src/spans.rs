//! Span helpers for discovery requests

/// Span wrapping one discovery request.
///
/// `source`, `total_found` and `duration_ms` start empty and are recorded
/// when the request completes.
///
/// ```rust
/// use starboard_observability::discovery_span;
///
/// let span = discovery_span!("6f1c0e1e-request");
/// let _guard = span.enter();
/// ```
#[macro_export]
macro_rules! discovery_span {
    ($request_id:expr) => {
        tracing::info_span!(
            "discovery",
            request.id = %$request_id,
            source = tracing::field::Empty,
            total_found = tracing::field::Empty,
            duration_ms = tracing::field::Empty,
            error = tracing::field::Empty,
            error.message = tracing::field::Empty,
        )
    };
}

/// Span wrapping one call to the text-completion provider.
///
/// ```rust
/// use starboard_observability::upstream_span;
///
/// let span = upstream_span!("gemini");
/// let _guard = span.enter();
/// ```
#[macro_export]
macro_rules! upstream_span {
    ($provider:expr) => {
        tracing::info_span!(
            "upstream.complete",
            provider = $provider,
            duration_ms = tracing::field::Empty,
            error = tracing::field::Empty,
            error.message = tracing::field::Empty,
        )
    };
}

/// Mark the current span as failed and log the error at `warn`.
///
/// Discovery failures always degrade to fallback results, so they are not
/// logged at `error`.
pub fn record_error<E: std::fmt::Display + ?Sized>(error: &E) {
    let span = tracing::Span::current();
    span.record("error", true);
    span.record("error.message", error.to_string());
    tracing::warn!(error = %error, "operation failed");
}

/// Record a duration in milliseconds on the current span under `key`.
pub fn record_duration(key: &str, duration: std::time::Duration) {
    let span = tracing::Span::current();
    span.record(key, duration.as_millis() as u64);
}
