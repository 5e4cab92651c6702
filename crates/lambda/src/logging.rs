//! Tracing subscriber setup.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LogFormat;

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "stepstart_lambda=info,stepstart_sfn=info";

/// Install the global subscriber. Call once, from `main`.
pub fn init(format: LogFormat) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| DEFAULT_FILTER.into());

    let registry = tracing_subscriber::registry().with(filter);

    // Lambda stamps every log line itself.
    match format {
        LogFormat::Text => registry
            .with(tracing_subscriber::fmt::layer().without_time().with_ansi(false))
            .init(),
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().without_time())
            .init(),
    }
}
