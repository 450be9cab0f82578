/*!
 * Error Types
 * Centralized error handling with thiserror and miette
 */

use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

// Re-export MemoryError from memory module
pub use crate::memory::MemoryError;

/// Profiler operation result
pub type ProfilerResult<T> = Result<T, ProfilerError>;

/// Errors raised by the sampling loop and its report sink
#[derive(Error, Debug, Diagnostic)]
pub enum ProfilerError {
    #[error("Failed to open log sink {path}: {source}")]
    #[diagnostic(
        code(profiler::sink_open),
        help("Check that the log directory exists and is writable.")
    )]
    SinkOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write report to {path}: {source}")]
    #[diagnostic(
        code(profiler::sink_write),
        help("The disk may be full or the file may have been removed.")
    )]
    SinkWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid configuration value for {key}: {value}")]
    #[diagnostic(code(profiler::invalid_config))]
    InvalidConfig { key: &'static str, value: String },

    #[error("Profiler task failed: {0}")]
    #[diagnostic(code(profiler::task))]
    Task(String),
}
