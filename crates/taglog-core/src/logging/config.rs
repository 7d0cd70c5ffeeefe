//! Logging configuration: threshold and active sink
//!
//! `LogConfig` is a plain value that can be owned by a test or embedder; the
//! process-wide instance lives in [`super::registry`].

use std::ffi::OsString;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::error::{LogError, LogResult};
use super::format::format_line;
use super::level::Severity;
use super::sink::{Sink, SinkKind};
use super::value::LogValue;

/// Environment variable holding the threshold name (`debug`, `info`, `warn`, `error`)
pub const ENV_LEVEL: &str = "TAGLOG_LEVEL";

/// Environment variable holding a log file path
pub const ENV_FILE: &str = "TAGLOG_FILE";

/// Threshold plus active sink
///
/// Defaults to `Severity::Debug` and the console.
#[derive(Debug, Default)]
pub struct LogConfig {
    threshold: Severity,
    sink: Sink,
}

impl LogConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn threshold(&self) -> Severity {
        self.threshold
    }

    pub fn set_threshold(&mut self, level: Severity) {
        self.threshold = level;
    }

    /// Whether a message at `level` would be written
    pub fn should_emit(&self, level: Severity) -> bool {
        level.passes(self.threshold)
    }

    pub fn sink_kind(&self) -> SinkKind {
        self.sink.kind()
    }

    /// Path of the active log file, if writing to a file
    pub fn sink_path(&self) -> Option<&Path> {
        self.sink.path()
    }

    /// Switch the active sink
    ///
    /// Switching to the console while already on the console does nothing.
    /// Any open file is closed before the new destination is opened, so a
    /// failed open leaves the console active and no handle held.
    pub fn set_sink(&mut self, kind: SinkKind, path: Option<&Path>) -> LogResult<()> {
        match (kind, path) {
            (SinkKind::Console, _) if self.sink.kind() == SinkKind::Console => return Ok(()),
            (SinkKind::File, None) => {
                return Err(LogError::configuration("File sink requires a path"));
            }
            (SinkKind::File, Some(p)) if p.as_os_str().is_empty() => {
                return Err(LogError::configuration("File sink requires a non-empty path"));
            }
            (SinkKind::Writer, _) => {
                return Err(LogError::configuration(
                    "Writer sink must be installed with set_writer",
                ));
            }
            _ => {}
        }

        self.sink = Sink::Console;
        self.sink = Sink::from_kind(kind, path)?;
        Ok(())
    }

    pub fn set_console(&mut self) {
        self.sink = Sink::Console;
    }

    pub fn set_file(&mut self, path: impl AsRef<Path>) -> LogResult<()> {
        self.set_sink(SinkKind::File, Some(path.as_ref()))
    }

    /// Install an arbitrary byte sink
    pub fn set_writer(&mut self, writer: impl Write + Send + 'static) {
        self.sink = Sink::writer(writer);
    }

    /// Restore defaults, closing any open file
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Write one already-formatted line to the active sink
    pub fn write_line(&mut self, line: &str) -> LogResult<()> {
        self.sink.write_line(line)
    }

    /// Format and write a line if `level` passes the threshold
    ///
    /// Returns whether a line was written.
    pub fn emit(&mut self, level: Severity, tag: &str, values: &[LogValue]) -> LogResult<bool> {
        if !self.should_emit(level) {
            return Ok(false);
        }
        let line = format_line(level, tag, values);
        self.sink.write_line(&line)?;
        Ok(true)
    }
}

/// Declarative logging settings, from the environment or a YAML file
///
/// ```yaml
/// level: warn
/// file: /var/log/app.log
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogSettings {
    /// Threshold; unchanged when absent
    #[serde(default)]
    pub level: Option<Severity>,

    /// Append to this file; console when absent
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl LogSettings {
    /// Read `TAGLOG_LEVEL` and `TAGLOG_FILE`
    pub fn from_env() -> LogResult<Self> {
        Self::from_vars(std::env::var_os(ENV_LEVEL), std::env::var_os(ENV_FILE))
    }

    fn from_vars(level: Option<OsString>, file: Option<OsString>) -> LogResult<Self> {
        let level = match level {
            Some(raw) => {
                let raw = raw.to_string_lossy();
                if raw.trim().is_empty() {
                    None
                } else {
                    Some(raw.parse()?)
                }
            }
            None => None,
        };
        let file = file.filter(|f| !f.is_empty()).map(PathBuf::from);

        Ok(Self { level, file })
    }

    pub fn from_yaml_str(content: &str) -> LogResult<Self> {
        serde_yaml::from_str(content)
            .map_err(|e| LogError::configuration(format!("Failed to parse YAML: {}", e)))
    }

    /// Load settings from a YAML file
    pub fn load(path: impl AsRef<Path>) -> LogResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| LogError::file_access(path, e))?;
        Self::from_yaml_str(&content)
    }

    /// Apply to a config: set the threshold if given, then the sink
    pub fn apply(&self, config: &mut LogConfig) -> LogResult<()> {
        if let Some(level) = self.level {
            config.set_threshold(level);
        }
        match &self.file {
            Some(path) => config.set_sink(SinkKind::File, Some(path.as_path())),
            None => config.set_sink(SinkKind::Console, None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::sink::MemoryWriter;
    use tempfile::tempdir;

    fn values(text: &str) -> Vec<LogValue> {
        vec![LogValue::from(text)]
    }

    #[test]
    fn test_defaults() {
        let config = LogConfig::new();
        assert_eq!(config.threshold(), Severity::Debug);
        assert_eq!(config.sink_kind(), SinkKind::Console);
        assert!(config.sink_path().is_none());
    }

    #[test]
    fn test_threshold_filters_emit() {
        let capture = MemoryWriter::new();
        let mut config = LogConfig::new();
        config.set_writer(capture.clone());
        config.set_threshold(Severity::Warn);

        let mut written = 0;
        for level in Severity::ALL {
            if config.emit(level, "FooBar", &values("hi")).unwrap() {
                written += 1;
            }
        }

        assert_eq!(written, 2);
        let lines = capture.lines();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("W/FooBar: hi"));
        assert!(lines[1].contains("E/FooBar: hi"));
    }

    #[test]
    fn test_threshold_change_affects_later_calls_only() {
        let capture = MemoryWriter::new();
        let mut config = LogConfig::new();
        config.set_writer(capture.clone());

        config.emit(Severity::Debug, "T", &values("first")).unwrap();
        config.set_threshold(Severity::Error);
        config.emit(Severity::Debug, "T", &values("second")).unwrap();
        config.emit(Severity::Error, "T", &values("third")).unwrap();

        let lines = capture.lines();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("D/T: first"));
        assert!(lines[1].ends_with("E/T: third"));
    }

    #[test]
    fn test_file_sink_requires_path() {
        let mut config = LogConfig::new();
        assert!(matches!(
            config.set_sink(SinkKind::File, None),
            Err(LogError::Configuration(_))
        ));
        assert_eq!(config.sink_kind(), SinkKind::Console);
    }

    #[test]
    fn test_empty_path_keeps_open_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("app.log");

        let mut config = LogConfig::new();
        config.set_file(&path).unwrap();

        assert!(matches!(
            config.set_sink(SinkKind::File, Some(Path::new(""))),
            Err(LogError::Configuration(_))
        ));
        assert_eq!(config.sink_kind(), SinkKind::File);
        assert_eq!(config.sink_path(), Some(path.as_path()));

        config.emit(Severity::Info, "T", &values("still here")).unwrap();
        config.reset();
        assert!(fs::read_to_string(&path).unwrap().contains("I/T: still here"));
    }

    #[test]
    fn test_console_is_idempotent() {
        let mut config = LogConfig::new();
        config.set_sink(SinkKind::Console, None).unwrap();
        config.set_sink(SinkKind::Console, None).unwrap();
        assert_eq!(config.sink_kind(), SinkKind::Console);
    }

    #[test]
    fn test_switch_to_console_releases_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("app.log");
        let moved = dir.path().join("moved.log");

        let mut config = LogConfig::new();
        config.set_file(&path).unwrap();
        assert_eq!(config.sink_path(), Some(path.as_path()));
        config.emit(Severity::Info, "T", &values("kept")).unwrap();

        config.set_sink(SinkKind::Console, None).unwrap();
        assert!(config.sink_path().is_none());

        fs::rename(&path, &moved).unwrap();
        fs::remove_file(&moved).unwrap();
    }

    #[test]
    fn test_failed_open_leaves_console_active() {
        let dir = tempdir().unwrap();
        let good = dir.path().join("good.log");
        let bad = dir.path().join("missing").join("bad.log");

        let mut config = LogConfig::new();
        config.set_file(&good).unwrap();

        let err = config.set_file(&bad).unwrap_err();
        assert!(matches!(err, LogError::FileAccess { .. }));
        assert_eq!(config.sink_kind(), SinkKind::Console);

        fs::remove_file(&good).unwrap();
    }

    #[test]
    fn test_reset_restores_defaults() {
        let dir = tempdir().unwrap();
        let mut config = LogConfig::new();
        config.set_threshold(Severity::Error);
        config.set_file(dir.path().join("app.log")).unwrap();

        config.reset();
        assert_eq!(config.threshold(), Severity::Debug);
        assert_eq!(config.sink_kind(), SinkKind::Console);
    }

    #[test]
    fn test_settings_from_vars() {
        let settings =
            LogSettings::from_vars(Some("WARN".into()), Some("/tmp/app.log".into())).unwrap();
        assert_eq!(settings.level, Some(Severity::Warn));
        assert_eq!(settings.file, Some(PathBuf::from("/tmp/app.log")));

        let empty = LogSettings::from_vars(Some("  ".into()), Some("".into())).unwrap();
        assert_eq!(empty, LogSettings::default());

        assert!(matches!(
            LogSettings::from_vars(Some("loud".into()), None),
            Err(LogError::Configuration(_))
        ));
    }

    #[test]
    fn test_settings_from_yaml() {
        let settings = LogSettings::from_yaml_str("level: error\nfile: out.log\n").unwrap();
        assert_eq!(settings.level, Some(Severity::Error));
        assert_eq!(settings.file, Some(PathBuf::from("out.log")));

        let empty = LogSettings::from_yaml_str("{}").unwrap();
        assert_eq!(empty, LogSettings::default());

        assert!(matches!(
            LogSettings::from_yaml_str("level: [not, a, level]"),
            Err(LogError::Configuration(_))
        ));
    }

    #[test]
    fn test_settings_load_and_apply() {
        let dir = tempdir().unwrap();
        let log_path = dir.path().join("app.log");
        let settings_path = dir.path().join("logging.yaml");
        fs::write(
            &settings_path,
            format!("level: info\nfile: {}\n", log_path.display()),
        )
        .unwrap();

        let settings = LogSettings::load(&settings_path).unwrap();
        let mut config = LogConfig::new();
        settings.apply(&mut config).unwrap();

        assert_eq!(config.threshold(), Severity::Info);
        assert_eq!(config.sink_kind(), SinkKind::File);

        config.emit(Severity::Debug, "T", &values("dropped")).unwrap();
        config.emit(Severity::Info, "T", &values("kept")).unwrap();
        config.reset();

        let content = fs::read_to_string(&log_path).unwrap();
        assert_eq!(content.lines().count(), 1);
        assert!(content.contains("I/T: kept"));
    }

    #[test]
    fn test_settings_load_missing_file() {
        let dir = tempdir().unwrap();
        assert!(matches!(
            LogSettings::load(dir.path().join("nope.yaml")),
            Err(LogError::FileAccess { .. })
        ));
    }
}
