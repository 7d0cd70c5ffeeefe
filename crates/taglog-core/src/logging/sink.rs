//! Log line destinations
//!
//! A `Sink` owns whatever it writes to. Dropping it (including by replacing it
//! with another sink) closes any open file handle.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use super::error::{LogError, LogResult};

/// Which kind of destination is active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SinkKind {
    /// Standard output
    Console,
    /// A file opened for append
    File,
    /// An injected byte sink
    Writer,
}

impl std::fmt::Display for SinkKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SinkKind::Console => write!(f, "console"),
            SinkKind::File => write!(f, "file"),
            SinkKind::Writer => write!(f, "writer"),
        }
    }
}

/// An active destination for formatted lines
#[derive(Default)]
pub enum Sink {
    #[default]
    Console,
    File { path: PathBuf, file: File },
    Writer(Box<dyn Write + Send>),
}

impl Sink {
    /// Open (or create) `path` for append
    ///
    /// Fails with `LogError::FileAccess` right away if the file cannot be opened.
    pub fn open_file(path: impl AsRef<Path>) -> LogResult<Self> {
        let path = path.as_ref();
        if path.as_os_str().is_empty() {
            return Err(LogError::configuration("File sink requires a non-empty path"));
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| LogError::file_access(path, e))?;

        Ok(Sink::File {
            path: path.to_path_buf(),
            file,
        })
    }

    /// Wrap an arbitrary byte sink
    pub fn writer(writer: impl Write + Send + 'static) -> Self {
        Sink::Writer(Box::new(writer))
    }

    /// Build a console or file sink from a kind and optional path
    ///
    /// `SinkKind::Writer` cannot be built this way; use [`Sink::writer`].
    pub fn from_kind(kind: SinkKind, path: Option<&Path>) -> LogResult<Self> {
        match (kind, path) {
            (SinkKind::Console, _) => Ok(Sink::Console),
            (SinkKind::File, Some(path)) => Sink::open_file(path),
            (SinkKind::File, None) => Err(LogError::configuration("File sink requires a path")),
            (SinkKind::Writer, _) => Err(LogError::configuration(
                "Writer sink must be given a writer, not a kind",
            )),
        }
    }

    pub fn kind(&self) -> SinkKind {
        match self {
            Sink::Console => SinkKind::Console,
            Sink::File { .. } => SinkKind::File,
            Sink::Writer(_) => SinkKind::Writer,
        }
    }

    /// Path of the open file, if this is a file sink
    pub fn path(&self) -> Option<&Path> {
        match self {
            Sink::File { path, .. } => Some(path),
            _ => None,
        }
    }

    /// Write `line` followed by exactly one newline, then flush
    pub fn write_line(&mut self, line: &str) -> LogResult<()> {
        let mut buf = String::with_capacity(line.len() + 1);
        buf.push_str(line);
        buf.push('\n');

        match self {
            Sink::Console => {
                let mut out = io::stdout().lock();
                out.write_all(buf.as_bytes())?;
                out.flush()?;
            }
            Sink::File { file, .. } => {
                file.write_all(buf.as_bytes())?;
                file.flush()?;
            }
            Sink::Writer(writer) => {
                writer.write_all(buf.as_bytes())?;
                writer.flush()?;
            }
        }
        Ok(())
    }
}

impl std::fmt::Debug for Sink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Sink::Console => f.write_str("Sink::Console"),
            Sink::File { path, .. } => f.debug_struct("Sink::File").field("path", path).finish(),
            Sink::Writer(_) => f.write_str("Sink::Writer"),
        }
    }
}

/// In-memory byte sink for capturing output
///
/// Clones share the same buffer, so one clone can be installed as a sink while
/// another is used to read back what was written.
#[derive(Debug, Clone, Default)]
pub struct MemoryWriter {
    buf: Arc<Mutex<Vec<u8>>>,
}

impl MemoryWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, lossily decoded as UTF-8
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buf.lock()).into_owned()
    }

    /// Written lines, without their newlines
    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_string).collect()
    }

    pub fn clear(&self) {
        self.buf.lock().clear();
    }
}

impl Write for MemoryWriter {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.buf.lock().extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
