use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::{Metadata, warn};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::fmt::writer::MakeWriterExt;

/// Filter used when the requested directive does not parse
const FALLBACK_FILTER: &str = "warn";

/// Whether stderr logging may write. Closed while the terminal is in raw mode.
static STDERR_OPEN: AtomicBool = AtomicBool::new(true);

/// Install the global `tracing` subscriber.
///
/// With a log file, everything is appended there without ANSI colors. Without
/// one, output goes to stderr, and only while no [`StderrPause`] is alive.
/// An invalid `directive` is reported once the fallback subscriber is up.
pub fn init_logging(directive: &str, log_file: Option<&Path>) -> std::io::Result<()> {
    let (filter, rejected) = parse_filter(directive);

    match log_file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(gated(std::io::stderr, &STDERR_OPEN))
                .init();
        }
    }

    if let Some(e) = rejected {
        warn!(directive, error = %e, "invalid log level, using \"{FALLBACK_FILTER}\"");
    }
    Ok(())
}

/// Parse an `EnvFilter` directive, falling back to `warn` on error.
/// The parse error, if any, is handed back for reporting.
fn parse_filter(directive: &str) -> (EnvFilter, Option<ParseError>) {
    match EnvFilter::try_new(directive) {
        Ok(filter) => (filter, None),
        Err(e) => (EnvFilter::new(FALLBACK_FILTER), Some(e)),
    }
}

/// Wrap `writer` so that events are dropped while `gate` is false
fn gated<M>(
    writer: M,
    gate: &'static AtomicBool,
) -> impl for<'w> MakeWriter<'w> + Send + Sync + 'static
where
    M: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    writer.with_filter(move |_: &Metadata<'_>| gate.load(Ordering::Relaxed))
}

/// Silences stderr logging until dropped.
///
/// Held by the TUI for as long as it owns the terminal; file logging is
/// unaffected.
#[must_use]
pub struct StderrPause(());

pub fn pause_stderr() -> StderrPause {
    STDERR_OPEN.store(false, Ordering::Relaxed);
    StderrPause(())
}

impl Drop for StderrPause {
    fn drop(&mut self) {
        STDERR_OPEN.store(true, Ordering::Relaxed);
    }
}
