/*!
 * Memory Profiler - Main Entry Point
 *
 * Usage: mem_profiler <PID>
 */

use clap::Parser;
use miette::IntoDiagnostic;
use std::sync::Arc;
use tracing::{info, warn};

use mem_profiler::{init_tracing, HeapTracker, Pid, Profiler, ProfilerConfig, ProfilerTask};

/// Log a process's memory profile whenever it changes
#[derive(Debug, Parser)]
#[command(name = "mem_profiler", version, about)]
struct Cli {
    /// Process ID to monitor
    pid: Pid,
}

#[tokio::main]
async fn main() -> miette::Result<()> {
    let cli = Cli::parse();

    init_tracing();

    let config = ProfilerConfig::from_env();
    info!(pid = cli.pid, config = ?config, "Memory profiler starting");

    println!("Check {} file for results", config.log_path.display());
    println!("Press Ctrl+C to exit");
    println!("Running Memory Profiler...");

    let heap = Arc::new(HeapTracker::new());
    let profiler = Profiler::new(cli.pid, config, heap);
    if let Err(e) = profiler.prepare_sink() {
        warn!(error = %e, "Could not reset log sink");
    }

    let task = ProfilerTask::spawn(profiler);

    tokio::signal::ctrl_c().await.into_diagnostic()?;
    info!("Shutdown requested");

    let profiler = task.shutdown().await?;
    info!(reports = profiler.reports_emitted(), "Memory profiler stopped");
    Ok(())
}
