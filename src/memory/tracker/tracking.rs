/*!
 * Tracker State
 * Live block registry and running totals, guarded together
 */

use super::super::types::{AggregateStats, AllocationRecord};
use crate::core::types::{Address, Size};
use ahash::RandomState;
use std::collections::HashMap;

/// Everything the tracker lock protects
#[derive(Debug, Default)]
pub(super) struct TrackerState {
    pub live: HashMap<Address, AllocationRecord, RandomState>,
    pub stats: AggregateStats,
}

impl TrackerState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_allocation(&mut self, address: Address, size: Size) {
        self.live.insert(address, AllocationRecord::new(address, size));
        self.stats.record_allocation(size);
    }

    /// Remove a live record. Unknown addresses leave the counters untouched.
    pub fn remove_allocation(&mut self, address: Address) -> Option<AllocationRecord> {
        let record = self.live.remove(&address)?;
        self.stats.record_release(record.size);
        Some(record)
    }

    pub fn live_bytes(&self) -> Size {
        self.live.values().map(|record| record.size).sum()
    }
}
