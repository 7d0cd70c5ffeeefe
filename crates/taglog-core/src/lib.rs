//! Taglog Core
//!
//! Minimal synchronous logging: timestamped, tagged lines filtered by a
//! process-wide severity threshold and written to the console or appended to a
//! file.
//!
//! ```rust,no_run
//! use taglog_core::logging::{self, Logger, Severity, SinkKind};
//! use taglog_core::log_info;
//! use std::path::Path;
//!
//! logging::set_threshold(Severity::Info);
//! logging::set_sink(SinkKind::File, Some(Path::new("/tmp/app.log")))?;
//!
//! let logger = Logger::new("FooBar");
//! log_info!(logger, "started", vec!["a", "b"])?;
//!
//! logging::set_sink(SinkKind::Console, None)?;
//! # Ok::<(), taglog_core::logging::LogError>(())
//! ```

pub mod logging;

// Re-export commonly used types
pub use logging::{
    LogConfig, LogError, LogResult, LogSettings, LogValue, Logger, Severity, Sink, SinkKind,
};
