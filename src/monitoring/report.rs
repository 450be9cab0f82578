/*!
 * Report Formatting
 * Renders one log entry: header lines followed by the six-row memory table
 */

use super::snapshot::{Metric, Snapshot};
use crate::core::types::{Pid, Timestamp};
use std::fmt;

const RULE: &str = "---------------------------------------------";
const LABEL_WIDTH: usize = 20;

/// Sink state at the time of a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportMode {
    /// Sink is empty or absent: truncate and write a header report
    Bootstrap,
    /// Sink already has content: append
    Appending,
}

impl fmt::Display for ReportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportMode::Bootstrap => write!(f, "bootstrap"),
            ReportMode::Appending => write!(f, "appending"),
        }
    }
}

/// One log entry
#[derive(Debug, Clone)]
pub struct Report<'a> {
    pub timestamp: Timestamp,
    pub pid: Pid,
    pub process_name: Option<&'a str>,
    pub inference: Option<&'a str>,
    pub snapshot: &'a Snapshot,
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Timestamp: {}", self.timestamp)?;
        if let Some(name) = self.process_name {
            writeln!(f, "Process Name: {}", name)?;
        }
        if let Some(inference) = self.inference {
            writeln!(f, "Inference: {}", inference)?;
        }

        writeln!(f, "{}", RULE)?;
        writeln!(f, "Memory Profile for PID: {}", self.pid)?;
        writeln!(f, "{}", RULE)?;
        writeln!(f, "{:<width$}| Usage (KB)", "Memory Type", width = LABEL_WIDTH)?;
        writeln!(f, "{}", RULE)?;
        for metric in Metric::ALL {
            writeln!(
                f,
                "{:<width$}| {}",
                metric.label(),
                self.snapshot.get(metric),
                width = LABEL_WIDTH
            )?;
        }
        write!(f, "{}\n\n\n", RULE)
    }
}
