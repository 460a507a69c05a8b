//! Tracing initialization for the Lambda function.
//!
//! JSON output for CloudWatch Logs by default; set `LOG_FORMAT=text` for
//! human-readable output when running locally.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Flattened JSON events (default).
    #[default]
    Json,
    /// Human-readable text.
    Text,
}

impl LogFormat {
    /// Parse a `LOG_FORMAT` value. "text" and "pretty" select text; anything
    /// else selects JSON.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "text" | "pretty" => LogFormat::Text,
            _ => LogFormat::Json,
        }
    }

    fn from_env() -> Self {
        std::env::var("LOG_FORMAT")
            .map(|v| Self::parse(&v))
            .unwrap_or_default()
    }
}

/// Initialize tracing for the Lambda.
///
/// This should be called once at the start of `main`, before calling
/// `lambda_runtime::run()`. The log level is controlled via `RUST_LOG`
/// (default `info`) and the format via `LOG_FORMAT`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    match LogFormat::from_env() {
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_level(true)
                    .with_thread_ids(false)
                    .with_thread_names(false)
                    .flatten_event(true),
            )
            .init(),
        LogFormat::Text => registry
            .with(fmt::layer().with_target(true).with_ansi(false))
            .init(),
    }
}
