/*!
 * Profiler Limits and Constants
 *
 * Centralized location for defaults and magic numbers.
 */

use std::time::Duration;

// =============================================================================
// SAMPLING
// =============================================================================

/// Default period between sampling ticks (2s)
pub const DEFAULT_SAMPLE_INTERVAL: Duration = Duration::from_secs(2);

/// Default report sink, relative to the working directory
pub const DEFAULT_LOG_FILE: &str = "memory_profile.log";

/// Default procfs mount point
pub const DEFAULT_PROC_ROOT: &str = "/proc";

// =============================================================================
// PROCFS
// =============================================================================

/// Page size used when sysconf cannot report one
pub const FALLBACK_PAGE_SIZE: u64 = 4096;

/// Bytes per kilobyte for all KB conversions
pub const BYTES_PER_KB: u64 = 1024;

/// Process name reported when `comm` cannot be read
pub const UNKNOWN_PROCESS_NAME: &str = "Unknown";

/// Stack size key in `/proc/<pid>/status`
pub const STATUS_STACK_KEY: &str = "VmStk:";
