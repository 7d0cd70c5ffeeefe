//! Leveled, tagged logging
//!
//! - `Severity`: ordered levels and the threshold check
//! - `LogValue`: values passed to a log call and how they render
//! - `Sink`: console, append-only file, or an injected writer
//! - `LogConfig`: threshold plus sink, usable standalone
//! - `registry`: the process-wide `LogConfig` every `Logger` writes through
//! - `Logger`: a tagged emitter with one method per level

mod config;
mod error;
mod format;
mod level;
mod logger;
pub mod registry;
mod sink;
mod value;

pub use config::{LogConfig, LogSettings, ENV_FILE, ENV_LEVEL};
pub use error::{LogError, LogResult};
pub use format::{format_line, format_line_at, format_payload, format_timestamp};
pub use level::Severity;
pub use logger::Logger;
pub use sink::{MemoryWriter, Sink, SinkKind};
pub use value::LogValue;

// Process-wide configuration, re-exported for convenience
pub use registry::{reset, set_sink, set_threshold, set_writer, should_emit, threshold};
