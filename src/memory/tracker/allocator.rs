/*!
 * Tracked Allocation
 * Allocate and release logic
 */

use super::super::types::{MemoryError, MemoryResult};
use super::HeapTracker;
use crate::core::types::{Address, Size};
use std::alloc::{self, Layout};
use std::ptr::NonNull;
use tracing::{trace, warn};

/// Blocks are handed out as raw bytes
const BLOCK_ALIGN: usize = 1;

#[inline]
fn address_of(ptr: NonNull<u8>) -> Address {
    ptr.as_ptr() as Address
}

/// Return a block to the system allocator
pub(super) fn free_block(address: Address, size: Size) {
    // Layout was validated when the block was allocated
    if let Ok(layout) = Layout::from_size_align(size, BLOCK_ALIGN) {
        // SAFETY: `address` came from `alloc::alloc` with this exact layout and
        // has just been removed from the live map, so it is freed exactly once.
        unsafe { alloc::dealloc(address as *mut u8, layout) };
    }
}

impl HeapTracker {
    /// Allocate `size` bytes and record the block.
    /// On failure nothing is recorded and no counter moves.
    pub fn allocate(&self, size: Size) -> MemoryResult<NonNull<u8>> {
        if size == 0 {
            return Err(MemoryError::ZeroSized);
        }

        let layout = Layout::from_size_align(size, BLOCK_ALIGN).map_err(|_| {
            warn!(requested = size, "Allocation size exceeds layout limits");
            MemoryError::AllocationFailed { requested: size }
        })?;

        // SAFETY: layout has non-zero size
        let raw = unsafe { alloc::alloc(layout) };
        let Some(ptr) = NonNull::new(raw) else {
            warn!(requested = size, "System allocator returned null");
            return Err(MemoryError::AllocationFailed { requested: size });
        };

        let address = address_of(ptr);
        let in_use = {
            let mut state = self.state.lock();
            state.add_allocation(address, size);
            state.stats.in_use()
        };

        trace!(size, address, in_use, "Tracked allocation");
        Ok(ptr)
    }

    /// Stop tracking `ptr` and free it, returning the block size.
    /// Pointers this tracker never handed out are ignored.
    pub fn release(&self, ptr: NonNull<u8>) -> Option<Size> {
        let address = address_of(ptr);
        let record = self.state.lock().remove_allocation(address);

        match record {
            Some(record) => {
                free_block(address, record.size);
                trace!(size = record.size, address, "Tracked release");
                Some(record.size)
            }
            None => {
                trace!(address, "Release of untracked block ignored");
                None
            }
        }
    }

    pub fn contains(&self, ptr: NonNull<u8>) -> bool {
        self.state.lock().live.contains_key(&address_of(ptr))
    }

    pub fn block_size(&self, ptr: NonNull<u8>) -> Option<Size> {
        self.state
            .lock()
            .live
            .get(&address_of(ptr))
            .map(|record| record.size)
    }
}
