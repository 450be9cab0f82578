/*!
 * Profiler Configuration
 *
 * Defaults match the historical behavior of the tool. Environment variables
 * override them:
 * - MEMPROF_LOG_PATH: report file (default: memory_profile.log)
 * - MEMPROF_INTERVAL_MS: sampling period in milliseconds (default: 2000)
 * - MEMPROF_BOOTSTRAP_INFERENCE: include inference text in bootstrap reports (default: false)
 * - MEMPROF_PROC_ROOT: procfs mount point (default: /proc)
 */

use crate::core::errors::{ProfilerError, ProfilerResult};
use crate::core::limits::{DEFAULT_LOG_FILE, DEFAULT_PROC_ROOT, DEFAULT_SAMPLE_INTERVAL};
use std::path::PathBuf;
use std::time::Duration;
use tracing::warn;

/// Sampling loop configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfilerConfig {
    /// Report sink path
    pub log_path: PathBuf,

    /// Time between ticks (default: 2s)
    pub interval: Duration,

    /// Write inference text in bootstrap reports too (default: false).
    /// Bootstrap reports have historically omitted it. When enabled, the
    /// `Inference:` line follows `Process Name:`, so the header still opens
    /// with the timestamp and name.
    pub bootstrap_inference: bool,

    /// Empty the sink before the first tick (default: true)
    pub truncate_on_start: bool,

    /// Procfs mount point
    pub proc_root: PathBuf,
}

impl ProfilerConfig {
    pub fn new() -> Self {
        Self {
            log_path: PathBuf::from(DEFAULT_LOG_FILE),
            interval: DEFAULT_SAMPLE_INTERVAL,
            bootstrap_inference: false,
            truncate_on_start: true,
            proc_root: PathBuf::from(DEFAULT_PROC_ROOT),
        }
    }

    /// Defaults with environment overrides applied. Bad values are logged and ignored.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like `from_env`, reading variables through `lookup`
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::new();

        if let Some(path) = lookup("MEMPROF_LOG_PATH").filter(|p| !p.is_empty()) {
            config.log_path = PathBuf::from(path);
        }
        if let Some(root) = lookup("MEMPROF_PROC_ROOT").filter(|p| !p.is_empty()) {
            config.proc_root = PathBuf::from(root);
        }
        if let Some(raw) = lookup("MEMPROF_INTERVAL_MS") {
            match parse_interval_ms(&raw) {
                Ok(interval) => config.interval = interval,
                Err(e) => warn!(error = %e, "Ignoring sampling interval override"),
            }
        }
        if let Some(raw) = lookup("MEMPROF_BOOTSTRAP_INFERENCE") {
            match parse_flag("MEMPROF_BOOTSTRAP_INFERENCE", &raw) {
                Ok(flag) => config.bootstrap_inference = flag,
                Err(e) => warn!(error = %e, "Ignoring bootstrap inference override"),
            }
        }

        config
    }

    pub fn with_log_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_path = path.into();
        self
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn with_bootstrap_inference(mut self, enabled: bool) -> Self {
        self.bootstrap_inference = enabled;
        self
    }

    pub fn with_truncate_on_start(mut self, enabled: bool) -> Self {
        self.truncate_on_start = enabled;
        self
    }

    pub fn with_proc_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.proc_root = root.into();
        self
    }
}

impl Default for ProfilerConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_interval_ms(raw: &str) -> ProfilerResult<Duration> {
    match raw.trim().parse::<u64>() {
        Ok(ms) if ms > 0 => Ok(Duration::from_millis(ms)),
        _ => Err(ProfilerError::InvalidConfig {
            key: "MEMPROF_INTERVAL_MS",
            value: raw.to_string(),
        }),
    }
}

fn parse_flag(key: &'static str, raw: &str) -> ProfilerResult<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ProfilerError::InvalidConfig {
            key,
            value: raw.to_string(),
        }),
    }
}
