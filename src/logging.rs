use std::env;
use std::fs::OpenOptions;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "BLUE_XO_LOG";
pub const LOG_FILE: &str = "blue-xo.log";

/// File-backed tracing, opt-in via `BLUE_XO_LOG` (e.g. `BLUE_XO_LOG=debug`).
/// The TUI owns the terminal, so log output goes to a file; the returned
/// guard must stay alive until exit to flush the writer thread.
pub fn init() -> Option<WorkerGuard> {
    let directives = env::var(LOG_ENV).ok()?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(LOG_FILE)
        .ok()?;
    let (writer, guard) = tracing_appender::non_blocking(file);
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(directives))
        .with_writer(writer)
        .with_ansi(false)
        .init();
    Some(guard)
}
