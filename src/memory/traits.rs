/*!
 * Memory Traits
 * Seams between the heap tracker and its consumers
 */

use super::types::*;
use crate::core::types::Size;
use std::ptr::NonNull;

/// Tracked allocator interface
pub trait Allocator: Send + Sync {
    /// Allocate `size` bytes and start tracking the block
    fn allocate(&self, size: Size) -> MemoryResult<NonNull<u8>>;

    /// Stop tracking a block and free it, returning its size.
    /// Untracked pointers are left alone and yield `None`.
    fn release(&self, ptr: NonNull<u8>) -> Option<Size>;

    /// Check if a pointer is currently tracked
    fn contains(&self, ptr: NonNull<u8>) -> bool;

    /// Get the size of a tracked block
    fn block_size(&self, ptr: NonNull<u8>) -> Option<Size>;
}

/// Heap statistics provider
pub trait MemoryInfo: Send + Sync {
    /// Consistent (allocated, freed, peak) triple
    fn stats(&self) -> AggregateStats;

    /// Number of live tracked blocks
    fn live_blocks(&self) -> usize;

    /// Sum of sizes of live tracked blocks
    fn live_bytes(&self) -> Size;
}
