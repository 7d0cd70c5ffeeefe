//! Process-wide logging configuration
//!
//! Every [`Logger`](super::Logger) reads the threshold and sink from here on each
//! call, so changes apply to existing and future loggers immediately. The lock
//! is held across format-and-write, so lines from different threads never
//! interleave.

use std::io::Write;
use std::path::Path;

use once_cell::sync::Lazy;
use parking_lot::Mutex;

use super::config::{LogConfig, LogSettings};
use super::error::LogResult;
use super::level::Severity;
use super::sink::SinkKind;

/// Global configuration, initialised to defaults (DEBUG, console)
static CONFIG: Lazy<Mutex<LogConfig>> = Lazy::new(|| Mutex::new(LogConfig::new()));

/// Run `f` with exclusive access to the process-wide config
///
/// The lock is not re-entrant: logging from inside `f`, or from a writer
/// installed with [`set_writer`], deadlocks.
pub fn with_config<R>(f: impl FnOnce(&mut LogConfig) -> R) -> R {
    let mut config = CONFIG.lock();
    f(&mut config)
}

pub fn set_threshold(level: Severity) {
    with_config(|config| config.set_threshold(level));
}

pub fn threshold() -> Severity {
    with_config(|config| config.threshold())
}

/// Whether a message at `level` would currently be written
pub fn should_emit(level: Severity) -> bool {
    with_config(|config| config.should_emit(level))
}

/// Switch the process-wide sink; see [`LogConfig::set_sink`]
pub fn set_sink(kind: SinkKind, path: Option<&Path>) -> LogResult<()> {
    with_config(|config| config.set_sink(kind, path))
}

/// Install an injected byte sink process-wide
pub fn set_writer(writer: impl Write + Send + 'static) {
    with_config(|config| config.set_writer(writer));
}

pub fn sink_kind() -> SinkKind {
    with_config(|config| config.sink_kind())
}

/// Apply settings (e.g. from [`LogSettings::from_env`]) to the process-wide config
pub fn configure(settings: &LogSettings) -> LogResult<()> {
    with_config(|config| settings.apply(config))
}

/// Restore defaults and close any open log file
pub fn reset() {
    with_config(LogConfig::reset);
}
