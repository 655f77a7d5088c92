//! Crate-scoped `tracing` formatting layer.
//!
//! The binary composes this into its subscriber registry to get compact,
//! RFC3339-UTC-timestamped lines for gateway events without affecting
//! other crates' log formatting.

use std::io::{self, IsTerminal};

use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{EnvFilter, Layer, filter, fmt};

/// Crate target prefix used to scope the layer to gateway events.
pub const TARGET_PREFIX: &str = "llm_gateway";

/// RFC3339 UTC timer via `chrono`, compact (`2026-08-08T10:20:30Z`).
#[derive(Clone, Debug, Default)]
struct ChronoRfc3339Utc;

impl FormatTime for ChronoRfc3339Utc {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        let s = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true);
        w.write_str(&s)
    }
}

/// Formatting layer rendering ONLY events emitted by this crate.
///
/// Single-line compact output with level, target and `file:line`; ANSI
/// colors only when stdout is a terminal. Span close events are logged so
/// instrumented calls report their duration.
pub fn layer<S>() -> impl Layer<S> + Send + Sync
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
{
    let use_ansi = io::stdout().is_terminal();
    let only_this_crate = filter::filter_fn(|meta| meta.target().starts_with(TARGET_PREFIX));

    fmt::layer()
        .with_timer(ChronoRfc3339Utc)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .with_ansi(use_ansi)
        .with_span_events(fmt::format::FmtSpan::CLOSE)
        .with_filter(only_this_crate)
}

/// `EnvFilter` from `RUST_LOG`, falling back to the given default directive
/// string (e.g. `"info"` or `"info,llm_gateway=debug"`).
pub fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}
