/*!
 * Tracing
 * Structured tracing for console sessions and registry operations
 *
 * Environment variables:
 * - RUST_LOG: Set log level (default: info)
 * - PROCMAN_TRACE_JSON: Enable JSON output (default: false)
 *
 * All output goes to stderr so it never interleaves with console text.
 */

use std::time::Instant;
use tracing::{debug, info, span, Level};
use tracing_subscriber::{
    fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};
use uuid::Uuid;

/// Initialize structured tracing
pub fn init_tracing(json: bool) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry().with(env_filter);

    if json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_current_span(true)
                    .with_span_list(true)
                    .with_span_events(FmtSpan::CLOSE),
            )
            .init();
        info!("Structured tracing initialized with JSON output");
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_line_number(true)
                    .compact(),
            )
            .init();
        info!("Structured tracing initialized");
    }
}

/// Generate a unique ID for correlating a console session
pub fn generate_session_id() -> String {
    Uuid::new_v4().to_string()
}

/// Span covering one console command
pub struct CommandSpan {
    span: tracing::Span,
    start: Instant,
    command: &'static str,
}

impl CommandSpan {
    pub fn new(command: &'static str) -> Self {
        let span = span!(
            Level::DEBUG,
            "command",
            command = command,
            pid = tracing::field::Empty,
            result = tracing::field::Empty,
            error = tracing::field::Empty,
            duration_us = tracing::field::Empty,
        );

        Self {
            span,
            start: Instant::now(),
            command,
        }
    }

    pub fn record_pid(&self, pid: u32) {
        self.span.record("pid", pid);
    }

    /// Record the command result
    pub fn record_result(&self, success: bool) {
        self.span
            .record("result", if success { "success" } else { "error" });
    }

    /// Record an error
    pub fn record_error(&self, error: &str) {
        self.span.record("error", error);
        self.span.record("result", "error");
    }

    pub fn enter(&self) -> tracing::span::Entered<'_> {
        self.span.enter()
    }
}

impl Drop for CommandSpan {
    fn drop(&mut self) {
        let duration = self.start.elapsed();
        let _entered = self.span.enter();
        self.span.record("duration_us", duration.as_micros() as u64);
        debug!(
            command = self.command,
            duration_us = duration.as_micros() as u64,
            "command completed"
        );
    }
}

/// Create a span for a whole console session
pub fn span_session(session_id: &str) -> tracing::Span {
    span!(Level::INFO, "session", session_id = %session_id)
}
