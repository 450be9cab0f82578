/*!
 * Sampling Profiler
 *
 * Owns all per-run state: the last reported snapshot and the report counter.
 * Comparison is always against the last *reported* snapshot, so ticks that
 * emit nothing do not move the baseline.
 */

use super::config::ProfilerConfig;
use super::inference::generate_inference;
use super::report::{Report, ReportMode};
use super::sink::LogSink;
use super::snapshot::{has_changed, Snapshot};
use crate::core::errors::ProfilerResult;
use crate::core::types::{Pid, Timestamp};
use crate::memory::MemoryInfo;
use crate::process::{system_page_size, ProcReader};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// What a single tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// A report was written
    Reported {
        timestamp: Timestamp,
        mode: ReportMode,
    },
    /// Nothing changed since the last report
    Unchanged,
    /// The sink could not be opened
    SinkUnavailable,
    /// The sink opened but the report could not be written
    WriteFailed,
}

pub struct Profiler {
    pid: Pid,
    config: ProfilerConfig,
    reader: ProcReader,
    heap: Arc<dyn MemoryInfo>,
    sink: LogSink,
    previous: Snapshot,
    next_timestamp: Timestamp,
}

impl Profiler {
    /// Profiler reading the configured procfs root with the system page size
    pub fn new(pid: Pid, config: ProfilerConfig, heap: Arc<dyn MemoryInfo>) -> Self {
        let reader = ProcReader::with_root(config.proc_root.clone(), system_page_size());
        Self::with_reader(pid, config, reader, heap)
    }

    pub fn with_reader(
        pid: Pid,
        config: ProfilerConfig,
        reader: ProcReader,
        heap: Arc<dyn MemoryInfo>,
    ) -> Self {
        let sink = LogSink::new(config.log_path.clone());
        Self {
            pid,
            config,
            reader,
            heap,
            sink,
            previous: Snapshot::default(),
            next_timestamp: 0,
        }
    }

    pub fn pid(&self) -> Pid {
        self.pid
    }

    pub fn config(&self) -> &ProfilerConfig {
        &self.config
    }

    /// Last reported snapshot (all zeros before the first report)
    pub fn previous(&self) -> &Snapshot {
        &self.previous
    }

    /// Number of reports written so far
    pub fn reports_emitted(&self) -> Timestamp {
        self.next_timestamp
    }

    /// Empty the sink if configured to do so
    pub fn prepare_sink(&self) -> ProfilerResult<()> {
        if self.config.truncate_on_start {
            self.sink.truncate()?;
            info!(path = %self.sink.path().display(), "Log sink truncated");
        }
        Ok(())
    }

    /// Read procfs and heap counters
    pub fn sample(&self) -> Snapshot {
        let (virtual_kb, resident_kb) = self.reader.read_memory_sizes(self.pid);
        let stack_kb = self.reader.read_stack_size(self.pid);
        Snapshot::from_parts(virtual_kb, resident_kb, stack_kb, &self.heap.stats())
    }

    /// Run one sampling tick
    #[instrument(level = "debug", skip(self), fields(pid = self.pid))]
    pub fn tick(&mut self) -> TickOutcome {
        let current = self.sample();
        let mode = self.sink.mode();

        let mut file = match self.sink.open(mode) {
            Ok(file) => file,
            Err(e) => {
                debug!(error = %e, "Sink unavailable, skipping tick");
                return TickOutcome::SinkUnavailable;
            }
        };

        // The first bootstrap report goes out even against the all-zero baseline
        let first_bootstrap = mode == ReportMode::Bootstrap && self.next_timestamp == 0;
        if !has_changed(&current, &self.previous) && !first_bootstrap {
            return TickOutcome::Unchanged;
        }

        let text = self.render(mode, &current);
        if let Err(e) = self.sink.write(&mut file, &text) {
            warn!(error = %e, "Failed to write memory report");
            return TickOutcome::WriteFailed;
        }

        let timestamp = self.next_timestamp;
        self.next_timestamp += 1;
        self.previous = current;

        debug!(timestamp, %mode, snapshot = ?current, "Memory report written");
        TickOutcome::Reported { timestamp, mode }
    }

    fn render(&self, mode: ReportMode, current: &Snapshot) -> String {
        let process_name = match mode {
            ReportMode::Bootstrap => Some(self.reader.read_process_name(self.pid)),
            ReportMode::Appending => None,
        };
        let inference = match mode {
            ReportMode::Bootstrap if !self.config.bootstrap_inference => None,
            _ => Some(generate_inference(current, &self.previous)),
        };

        Report {
            timestamp: self.next_timestamp,
            pid: self.pid,
            process_name: process_name.as_deref(),
            inference: inference.as_deref(),
            snapshot: current,
        }
        .to_string()
    }
}

impl std::fmt::Debug for Profiler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Profiler")
            .field("pid", &self.pid)
            .field("config", &self.config)
            .field("previous", &self.previous)
            .field("next_timestamp", &self.next_timestamp)
            .finish()
    }
}
