/*!
 * Heap Tracker
 *
 * Opt-in instrumentation for heap blocks that callers explicitly route through it.
 * It is not a global allocator and never sees third-party allocations.
 *
 * ## Locking
 *
 * The live-block map and the aggregate counters sit behind a single mutex so that
 * readers always observe a consistent (allocated, freed, peak) triple. The lock is
 * held only for the map mutation and counter update; calls into the system allocator
 * happen outside it.
 */

mod allocator;
mod tracking;

use super::traits::{Allocator, MemoryInfo};
use super::types::{AggregateStats, MemoryResult};
use crate::core::types::Size;
use parking_lot::Mutex;
use std::ptr::NonNull;
use tracking::TrackerState;

/// Registry of live tracked allocations plus running totals
pub struct HeapTracker {
    state: Mutex<TrackerState>,
}

impl HeapTracker {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(TrackerState::new()),
        }
    }

    /// Snapshot of the aggregate counters
    pub fn stats(&self) -> AggregateStats {
        self.state.lock().stats
    }

    pub fn live_blocks(&self) -> usize {
        self.state.lock().live.len()
    }

    pub fn live_bytes(&self) -> Size {
        self.state.lock().live_bytes()
    }
}

impl Allocator for HeapTracker {
    fn allocate(&self, size: Size) -> MemoryResult<NonNull<u8>> {
        HeapTracker::allocate(self, size)
    }

    fn release(&self, ptr: NonNull<u8>) -> Option<Size> {
        HeapTracker::release(self, ptr)
    }

    fn contains(&self, ptr: NonNull<u8>) -> bool {
        HeapTracker::contains(self, ptr)
    }

    fn block_size(&self, ptr: NonNull<u8>) -> Option<Size> {
        HeapTracker::block_size(self, ptr)
    }
}

impl MemoryInfo for HeapTracker {
    fn stats(&self) -> AggregateStats {
        HeapTracker::stats(self)
    }

    fn live_blocks(&self) -> usize {
        HeapTracker::live_blocks(self)
    }

    fn live_bytes(&self) -> Size {
        HeapTracker::live_bytes(self)
    }
}

impl Default for HeapTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for HeapTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.lock();
        f.debug_struct("HeapTracker")
            .field("live_blocks", &state.live.len())
            .field("stats", &state.stats)
            .finish()
    }
}

impl Drop for HeapTracker {
    fn drop(&mut self) {
        let state = self.state.get_mut();
        for (address, record) in state.live.drain() {
            allocator::free_block(address, record.size);
        }
    }
}
