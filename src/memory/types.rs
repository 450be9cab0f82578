/*!
 * Memory Types
 * Common types for tracked heap allocations
 */

use crate::core::types::{Address, Size};
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Memory operation result
pub type MemoryResult<T> = Result<T, MemoryError>;

/// Memory errors
#[derive(Error, Debug, Clone, PartialEq, Eq, Diagnostic)]
pub enum MemoryError {
    #[error("Allocation of {requested} bytes failed")]
    #[diagnostic(
        code(memory::allocation_failed),
        help("System may be low on memory. No tracking state was changed.")
    )]
    AllocationFailed { requested: Size },

    #[error("Zero-sized allocations are not tracked")]
    #[diagnostic(code(memory::zero_sized))]
    ZeroSized,
}

/// One live, explicitly tracked heap block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AllocationRecord {
    pub address: Address,
    pub size: Size,
}

impl AllocationRecord {
    pub fn new(address: Address, size: Size) -> Self {
        Self { address, size }
    }
}

/// Process-wide heap counters, in bytes
///
/// `total_allocated` and `total_freed` only ever grow. `peak_usage` is the
/// highest `total_allocated - total_freed` seen so far.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateStats {
    pub total_allocated: Size,
    pub total_freed: Size,
    pub peak_usage: Size,
}

impl AggregateStats {
    /// Bytes currently held by live tracked blocks
    #[inline]
    pub fn in_use(&self) -> Size {
        self.total_allocated.saturating_sub(self.total_freed)
    }

    pub fn record_allocation(&mut self, size: Size) {
        self.total_allocated = self.total_allocated.saturating_add(size);
        self.peak_usage = self.peak_usage.max(self.in_use());
    }

    pub fn record_release(&mut self, size: Size) {
        self.total_freed = self.total_freed.saturating_add(size);
    }
}
