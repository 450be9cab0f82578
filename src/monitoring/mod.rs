/*!
 * Memory Monitoring
 * Snapshot comparison, inference, and the sampling loop that logs reports
 */

mod config;
mod inference;
mod profiler;
mod report;
mod sink;
mod snapshot;
mod task;
mod tracer;

pub use config::ProfilerConfig;
pub use inference::{generate_inference, metric_inference, NO_SIGNIFICANT_CHANGE};
pub use profiler::{Profiler, TickOutcome};
pub use report::{Report, ReportMode};
pub use sink::LogSink;
pub use snapshot::{has_changed, Metric, Snapshot};
pub use task::{ProfilerCommand, ProfilerTask};
pub use tracer::init_tracing;
