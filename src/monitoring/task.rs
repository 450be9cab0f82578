/*!
 * Profiler Task
 * Runs the sampling loop on tokio until told to stop
 */

use super::profiler::Profiler;
use crate::core::errors::{ProfilerError, ProfilerResult};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{info, warn};

/// Shortest period tokio's interval accepts in practice
const MIN_SAMPLE_INTERVAL: Duration = Duration::from_millis(1);

/// Commands for controlling the sampling loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfilerCommand {
    /// Sample immediately, outside the regular schedule
    Trigger,
    /// Stop after the current tick
    Shutdown,
}

/// Handle to a running sampling loop
pub struct ProfilerTask {
    command_tx: mpsc::UnboundedSender<ProfilerCommand>,
    handle: Option<JoinHandle<Profiler>>,
}

impl ProfilerTask {
    /// Spawn the loop. The first tick fires immediately.
    pub fn spawn(profiler: Profiler) -> Self {
        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let handle = tokio::spawn(run_profiler_loop(profiler, command_rx));

        Self {
            command_tx,
            handle: Some(handle),
        }
    }

    /// Request an immediate tick
    pub fn trigger(&self) -> ProfilerResult<()> {
        self.send(ProfilerCommand::Trigger)
    }

    fn send(&self, cmd: ProfilerCommand) -> ProfilerResult<()> {
        self.command_tx
            .send(cmd)
            .map_err(|_| ProfilerError::Task("sampling loop is not running".into()))
    }

    /// Stop the loop and hand back the profiler with its final state
    pub async fn shutdown(mut self) -> ProfilerResult<Profiler> {
        let _ = self.command_tx.send(ProfilerCommand::Shutdown);

        let handle = self
            .handle
            .take()
            .ok_or_else(|| ProfilerError::Task("task already shut down".into()))?;

        let profiler = handle
            .await
            .map_err(|e| ProfilerError::Task(e.to_string()))?;
        info!(
            reports = profiler.reports_emitted(),
            "Profiler task shutdown complete"
        );
        Ok(profiler)
    }
}

impl Drop for ProfilerTask {
    fn drop(&mut self) {
        // Fallback path: graceful shutdown wasn't called
        if let Some(handle) = self.handle.take() {
            warn!("ProfilerTask dropped without shutdown, aborting sampling loop");
            handle.abort();
        }
    }
}

/// Sampling loop: tick on the interval, react to commands
async fn run_profiler_loop(
    mut profiler: Profiler,
    mut command_rx: mpsc::UnboundedReceiver<ProfilerCommand>,
) -> Profiler {
    let period = profiler.config().interval.max(MIN_SAMPLE_INTERVAL);
    let mut interval = tokio::time::interval(period);
    interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    info!(
        pid = profiler.pid(),
        interval_ms = period.as_millis() as u64,
        log = %profiler.config().log_path.display(),
        "Profiler loop started"
    );

    loop {
        tokio::select! {
            _ = interval.tick() => {
                profiler.tick();
            }

            cmd = command_rx.recv() => {
                match cmd {
                    Some(ProfilerCommand::Trigger) => {
                        profiler.tick();
                    }
                    Some(ProfilerCommand::Shutdown) | None => {
                        info!("Profiler loop shutting down");
                        break;
                    }
                }
            }
        }
    }

    profiler
}
