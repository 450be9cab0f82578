/*!
 * Procfs Reader
 *
 * Reads memory counters for a single PID from `statm`, `status` and `comm`.
 * Every read opens and closes its own file, so the target may exit between
 * calls. Missing or malformed data degrades to zero (or `"Unknown"` for the
 * name) and is only logged at debug level.
 */

use crate::core::limits::{
    BYTES_PER_KB, DEFAULT_PROC_ROOT, FALLBACK_PAGE_SIZE, STATUS_STACK_KEY, UNKNOWN_PROCESS_NAME,
};
use crate::core::types::{Kilobytes, Pid};
use nix::unistd::{sysconf, SysconfVar};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Page size reported by the OS, or 4096 if it cannot be queried
pub fn system_page_size() -> u64 {
    match sysconf(SysconfVar::PAGE_SIZE) {
        Ok(Some(size)) if size > 0 => size as u64,
        other => {
            debug!(result = ?other, "sysconf(PAGE_SIZE) unavailable, using fallback");
            FALLBACK_PAGE_SIZE
        }
    }
}

/// Reader for one procfs mount
#[derive(Debug, Clone)]
pub struct ProcReader {
    root: PathBuf,
    page_size: u64,
}

impl ProcReader {
    /// Reader for the live `/proc` with the system page size
    pub fn new() -> Self {
        Self::with_root(DEFAULT_PROC_ROOT, system_page_size())
    }

    /// Reader for an arbitrary procfs-shaped tree (useful for testing)
    pub fn with_root(root: impl Into<PathBuf>, page_size: u64) -> Self {
        Self {
            root: root.into(),
            page_size,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn page_size(&self) -> u64 {
        self.page_size
    }

    fn pid_file(&self, pid: Pid, name: &str) -> PathBuf {
        self.root.join(pid.to_string()).join(name)
    }

    /// Virtual and resident size in KB, from page counts in `statm`
    pub fn read_memory_sizes(&self, pid: Pid) -> (Kilobytes, Kilobytes) {
        let path = self.pid_file(pid, "statm");
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) => {
                debug!(pid, path = %path.display(), error = %e, "statm unreadable");
                return (0, 0);
            }
        };

        match parse_statm(&content) {
            Some((size, resident)) => (self.pages_to_kb(size), self.pages_to_kb(resident)),
            None => {
                debug!(pid, "statm malformed");
                (0, 0)
            }
        }
    }

    /// Stack size in KB from the `VmStk:` line of `status`
    pub fn read_stack_size(&self, pid: Pid) -> Kilobytes {
        let path = self.pid_file(pid, "status");
        match fs::read_to_string(&path) {
            Ok(content) => parse_stack_kb(&content).unwrap_or(0),
            Err(e) => {
                debug!(pid, path = %path.display(), error = %e, "status unreadable");
                0
            }
        }
    }

    /// Short command name from `comm`
    pub fn read_process_name(&self, pid: Pid) -> String {
        let path = self.pid_file(pid, "comm");
        match fs::read(&path) {
            Ok(bytes) => first_line(&String::from_utf8_lossy(&bytes)).to_string(),
            Err(e) => {
                debug!(pid, path = %path.display(), error = %e, "comm unreadable");
                UNKNOWN_PROCESS_NAME.to_string()
            }
        }
    }

    #[inline]
    fn pages_to_kb(&self, pages: u64) -> Kilobytes {
        pages.saturating_mul(self.page_size) / BYTES_PER_KB
    }
}

impl Default for ProcReader {
    fn default() -> Self {
        Self::new()
    }
}

/// First two fields of `statm`: total and resident pages
fn parse_statm(content: &str) -> Option<(u64, u64)> {
    let mut fields = content.split_whitespace();
    let size = fields.next()?.parse().ok()?;
    let resident = fields.next()?.parse().ok()?;
    Some((size, resident))
}

/// Last parsable `VmStk:` value wins
fn parse_stack_kb(content: &str) -> Option<Kilobytes> {
    content
        .lines()
        .filter_map(|line| line.strip_prefix(STATUS_STACK_KEY))
        .filter_map(|rest| rest.split_whitespace().next()?.parse().ok())
        .last()
}

fn first_line(content: &str) -> &str {
    let line = content.split('\n').next().unwrap_or("");
    line.strip_suffix('\r').unwrap_or(line)
}
