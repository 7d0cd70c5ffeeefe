//! Tagged logger instances

use super::config::LogConfig;
use super::error::LogResult;
use super::level::Severity;
use super::registry;
use super::value::LogValue;

/// A named emitter
///
/// Holds only its tag. Threshold and sink are read from the process-wide
/// registry on every call, so any number of loggers can share them.
///
/// # Example
///
/// ```
/// use taglog_core::logging::{Logger, LogValue};
///
/// let logger = Logger::new("FooBar");
/// logger.info(&[LogValue::from("hello"), LogValue::from(42)]).unwrap();
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Logger {
    tag: String,
}

impl Logger {
    /// Create a logger; any tag is accepted, including an empty one
    pub fn new(tag: impl Into<String>) -> Self {
        Self { tag: tag.into() }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Whether a call at `level` would currently be written
    pub fn enabled(&self, level: Severity) -> bool {
        registry::should_emit(level)
    }

    /// Write `values` at `level` to the process-wide sink if it passes the threshold
    pub fn log(&self, level: Severity, values: &[LogValue]) -> LogResult<()> {
        registry::with_config(|config| self.log_to(config, level, values))
    }

    /// Same as [`Logger::log`], but through a caller-owned config
    pub fn log_to(
        &self,
        config: &mut LogConfig,
        level: Severity,
        values: &[LogValue],
    ) -> LogResult<()> {
        config.emit(level, &self.tag, values).map(|_| ())
    }

    pub fn debug(&self, values: &[LogValue]) -> LogResult<()> {
        self.log(Severity::Debug, values)
    }

    pub fn info(&self, values: &[LogValue]) -> LogResult<()> {
        self.log(Severity::Info, values)
    }

    pub fn warn(&self, values: &[LogValue]) -> LogResult<()> {
        self.log(Severity::Warn, values)
    }

    pub fn error(&self, values: &[LogValue]) -> LogResult<()> {
        self.log(Severity::Error, values)
    }
}

/// Log mixed values at a level, skipping conversion when the level is suppressed
///
/// Each value goes through `LogValue::from`.
#[macro_export]
macro_rules! log_at {
    ($logger:expr, $level:expr $(, $value:expr)* $(,)?) => {{
        let logger = &$logger;
        let level = $level;
        if logger.enabled(level) {
            logger.log(level, &[$($crate::logging::LogValue::from($value)),*])
        } else {
            Ok(())
        }
    }};
}

#[macro_export]
macro_rules! log_debug {
    ($logger:expr $(, $value:expr)* $(,)?) => {
        $crate::log_at!($logger, $crate::logging::Severity::Debug $(, $value)*)
    };
}

#[macro_export]
macro_rules! log_info {
    ($logger:expr $(, $value:expr)* $(,)?) => {
        $crate::log_at!($logger, $crate::logging::Severity::Info $(, $value)*)
    };
}

#[macro_export]
macro_rules! log_warn {
    ($logger:expr $(, $value:expr)* $(,)?) => {
        $crate::log_at!($logger, $crate::logging::Severity::Warn $(, $value)*)
    };
}

#[macro_export]
macro_rules! log_error {
    ($logger:expr $(, $value:expr)* $(,)?) => {
        $crate::log_at!($logger, $crate::logging::Severity::Error $(, $value)*)
    };
}
