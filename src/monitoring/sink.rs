/*!
 * Log Sink
 *
 * Flat report file. Its mode is decided from the on-disk size at every tick,
 * and it is opened and closed once per tick.
 */

use super::report::ReportMode;
use crate::core::errors::{ProfilerError, ProfilerResult};
use std::fs::{self, File, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct LogSink {
    path: PathBuf,
}

impl LogSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Bootstrap when the file is absent or holds zero bytes
    pub fn mode(&self) -> ReportMode {
        match fs::metadata(&self.path) {
            Ok(meta) if meta.len() == 0 => ReportMode::Bootstrap,
            Ok(_) => ReportMode::Appending,
            Err(e) if e.kind() == ErrorKind::NotFound => ReportMode::Bootstrap,
            Err(_) => ReportMode::Appending,
        }
    }

    /// Open for truncating write (bootstrap) or append
    pub fn open(&self, mode: ReportMode) -> ProfilerResult<File> {
        let mut options = OpenOptions::new();
        options.create(true);
        match mode {
            ReportMode::Bootstrap => options.write(true).truncate(true),
            ReportMode::Appending => options.append(true),
        };

        options.open(&self.path).map_err(|source| ProfilerError::SinkOpen {
            path: self.path.clone(),
            source,
        })
    }

    /// Empty the file, creating it if needed
    pub fn truncate(&self) -> ProfilerResult<()> {
        self.open(ReportMode::Bootstrap).map(drop)
    }

    /// Write one rendered report in a single call
    pub fn write(&self, file: &mut File, report: &str) -> ProfilerResult<()> {
        file.write_all(report.as_bytes())
            .and_then(|_| file.flush())
            .map_err(|source| ProfilerError::SinkWrite {
                path: self.path.clone(),
                source,
            })
    }
}
