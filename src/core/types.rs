/*!
 * Core Types
 * Common types used across the profiler
 */

/// Process ID type
pub type Pid = u32;

/// Address type for tracked heap blocks
pub type Address = usize;

/// Size type for memory operations (bytes)
pub type Size = usize;

/// Kilobyte counter as reported by procfs and written to the log
pub type Kilobytes = u64;

/// Report sequence number (not a wall-clock time)
pub type Timestamp = u64;
