//! Logging initialization: tracing subscriber writing to stdout and a log file.

use std::fs::OpenOptions;
use std::io;
use std::sync::Arc;

use tracing_subscriber::{
    fmt::format::Writer, fmt::time::FormatTime, fmt::writer::MakeWriterExt,
    layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry,
};

/// Local wall-clock time (`YYYY-MM-DD HH:MM:SS`) for log lines.
struct LocalTimer;

impl FormatTime for LocalTimer {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        write!(w, "{} ", chrono::Local::now().format("%Y-%m-%d %H:%M:%S"))
    }
}

/// Initializes the global tracing subscriber.
///
/// Events go to stdout and to `log_file_path` (appended, no ANSI codes).
/// The level filter comes from `RUST_LOG`, defaulting to `info`.
/// Fails if called twice or if the log file cannot be opened.
pub fn init_tracing(log_file_path: &str) -> anyhow::Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file_path)?;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_timer(LocalTimer)
        .with_target(true)
        .with_ansi(false)
        .with_writer(io::stdout.and(Arc::new(file)));

    Registry::default()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to set global subscriber: {}", e))?;

    Ok(())
}
