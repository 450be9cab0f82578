/*!
 * Process Module
 * Read-only access to kernel-exposed per-process counters
 */

pub mod procfs;

pub use procfs::{system_page_size, ProcReader};
