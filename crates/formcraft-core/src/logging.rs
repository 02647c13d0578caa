//! Logging integration for formcraft.
//!
//! Provides a helper for configuring [`tracing`]-based logging and for
//! creating per-submission spans. The builder has no configuration file or
//! environment surface, so the subscriber is configured from explicit
//! arguments supplied by the embedding application.

/// Sets up the global tracing subscriber.
///
/// `level` is an env-filter directive string (e.g. "debug", "info",
/// "formcraft_builder=debug"). When `pretty` is set a human-readable
/// format is used; otherwise a structured JSON format.
///
/// Installing a second subscriber is a no-op rather than a panic, so
/// embedding applications and tests may call this freely.
pub fn setup_logging(level: &str, pretty: bool) {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"));

    if pretty {
        fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .pretty()
            .try_init()
            .ok();
    } else {
        fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_target(true)
            .json()
            .try_init()
            .ok();
    }
}

/// Creates a tracing span for one submission attempt.
///
/// Attach this span around rule compilation and evaluation so that all log
/// entries emitted while checking a submission carry the attempt number.
///
/// # Examples
///
/// ```
/// use formcraft_core::logging::submit_span;
///
/// let span = submit_span(1);
/// let _guard = span.enter();
/// tracing::info!("evaluating submission");
/// ```
pub fn submit_span(attempt: u64) -> tracing::Span {
    tracing::info_span!("submit", attempt)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setup_logging_is_idempotent() {
        setup_logging("debug", true);
        setup_logging("info", false);
    }

    #[test]
    fn test_submit_span_enters_cleanly() {
        let span = submit_span(3);
        let _guard = span.enter();
        tracing::debug!("inside submit span");
    }
}
