/*!
 * Memory Snapshots
 * Point-in-time readings and change detection
 */

use crate::core::limits::BYTES_PER_KB;
use crate::core::types::{Kilobytes, Size};
use crate::memory::AggregateStats;
use serde::{Deserialize, Serialize};

/// One reading of all six tracked metrics, in KB
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Snapshot {
    pub virtual_kb: Kilobytes,
    pub resident_kb: Kilobytes,
    pub heap_allocated_kb: Kilobytes,
    pub heap_freed_kb: Kilobytes,
    pub heap_peak_kb: Kilobytes,
    pub stack_kb: Kilobytes,
}

impl Snapshot {
    pub fn new(
        virtual_kb: Kilobytes,
        resident_kb: Kilobytes,
        heap_allocated_kb: Kilobytes,
        heap_freed_kb: Kilobytes,
        heap_peak_kb: Kilobytes,
        stack_kb: Kilobytes,
    ) -> Self {
        Self {
            virtual_kb,
            resident_kb,
            heap_allocated_kb,
            heap_freed_kb,
            heap_peak_kb,
            stack_kb,
        }
    }

    /// Combine procfs readings with heap counters (bytes, truncated to KB)
    pub fn from_parts(
        virtual_kb: Kilobytes,
        resident_kb: Kilobytes,
        stack_kb: Kilobytes,
        heap: &AggregateStats,
    ) -> Self {
        Self::new(
            virtual_kb,
            resident_kb,
            bytes_to_kb(heap.total_allocated),
            bytes_to_kb(heap.total_freed),
            bytes_to_kb(heap.peak_usage),
            stack_kb,
        )
    }

    /// Value of a single metric
    #[inline]
    pub fn get(&self, metric: Metric) -> Kilobytes {
        match metric {
            Metric::Virtual => self.virtual_kb,
            Metric::Resident => self.resident_kb,
            Metric::HeapAllocated => self.heap_allocated_kb,
            Metric::HeapFreed => self.heap_freed_kb,
            Metric::HeapPeak => self.heap_peak_kb,
            Metric::Stack => self.stack_kb,
        }
    }
}

#[inline]
fn bytes_to_kb(bytes: Size) -> Kilobytes {
    bytes as u64 / BYTES_PER_KB
}

/// The six metrics, in report order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    Virtual,
    Resident,
    HeapAllocated,
    HeapFreed,
    HeapPeak,
    Stack,
}

impl Metric {
    pub const ALL: [Metric; 6] = [
        Metric::Virtual,
        Metric::Resident,
        Metric::HeapAllocated,
        Metric::HeapFreed,
        Metric::HeapPeak,
        Metric::Stack,
    ];

    /// Row label in the memory table
    pub fn label(self) -> &'static str {
        match self {
            Metric::Virtual => "Virtual Memory",
            Metric::Resident => "Resident Memory",
            Metric::HeapAllocated => "Heap Allocated",
            Metric::HeapFreed => "Heap Freed",
            Metric::HeapPeak => "Heap Peak Usage",
            Metric::Stack => "Stack Size",
        }
    }
}

/// True iff any metric differs. No tolerance.
pub fn has_changed(current: &Snapshot, previous: &Snapshot) -> bool {
    Metric::ALL
        .iter()
        .any(|&metric| current.get(metric) != previous.get(metric))
}
