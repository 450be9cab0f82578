/*!
 * Memory Profiler Library
 *
 * Samples one process's memory footprint from procfs at a fixed interval,
 * compares it with the last reported reading, and appends a report to a flat
 * log file whenever anything moved. Heap figures come from an opt-in tracker
 * that only sees allocations explicitly routed through it.
 */

pub mod core;
pub mod memory;
pub mod monitoring;
pub mod process;

// Re-exports
pub use crate::core::{Pid, ProfilerError, ProfilerResult};
pub use memory::{AggregateStats, HeapTracker, MemoryError, MemoryResult};
pub use monitoring::{
    generate_inference, has_changed, init_tracing, Profiler, ProfilerConfig, ProfilerTask,
    Snapshot, TickOutcome,
};
pub use process::ProcReader;
