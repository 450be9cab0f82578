/*!
 * Change Inference
 * Human-readable guesses at why each metric moved
 */

use super::snapshot::{Metric, Snapshot};
use std::cmp::Ordering;

/// Returned when no metric moved
pub const NO_SIGNIFICANT_CHANGE: &str = "No significant change in memory.";

impl Metric {
    /// Explanation emitted when the metric grew
    pub fn increase_text(self) -> &'static str {
        match self {
            Metric::Virtual => "\nVirtual memory increased.\n   The process is storing large datasets, buffers, or mapping files into memory.\n   Therefore, workload increased.",
            Metric::Resident => "\nResident memory increased.\n   More physical memory (RAM) is being actively used by the application. ",
            Metric::HeapAllocated => "\nHeap allocated increased.\n   The application is dynamically allocating more memory on the heap (e.g., using malloc, calloc, or new in C/C++) ",
            Metric::HeapFreed => "\nHeap freed increased.\n   The application is releasing memory it no longer needs. ",
            Metric::HeapPeak => "\nHeap peak usage increased.\n   Indicates the maximum memory demand that the application required at any point. Helps identify memory bottlenecks ",
            Metric::Stack => "\nStack size increased.\n   Deeper recursion or larger local variables being used in the application.\n   Could also be due to too many nested function calls, excessive recursion, or large local data structures,",
        }
    }

    /// Explanation emitted when the metric shrank
    pub fn decrease_text(self) -> &'static str {
        match self {
            Metric::Virtual => "\nVirtual memory decreased.\n   The memory-mapped files or large allocations are being released.",
            Metric::Resident => "\nResident memory decreased.\n   Pages in RAM are swapped out to disk (in systems with swap space) or memory is released and is no longer required.",
            Metric::HeapAllocated => "\nHeap allocated decreased.\n   The application has released memory, via free() or similar calls ",
            Metric::HeapFreed => "\nHeap freed decreased.\n   Memory allocated earlier is being kept for future use, or it may indicate that memory is not being properly managed (potential memory leak).",
            Metric::HeapPeak => "\nHeap peak usage decreased.\n   Possibly due to more efficient memory management, optimized algorithms, or reduced workload. ",
            Metric::Stack => "\nStack size decreased.\n   Application has returned from function calls, ",
        }
    }
}

/// Fragment for one metric, if it moved
pub fn metric_inference(
    metric: Metric,
    current: &Snapshot,
    previous: &Snapshot,
) -> Option<&'static str> {
    match current.get(metric).cmp(&previous.get(metric)) {
        Ordering::Greater => Some(metric.increase_text()),
        Ordering::Less => Some(metric.decrease_text()),
        Ordering::Equal => None,
    }
}

/// Concatenate per-metric fragments in report order.
/// Each metric is judged on its own.
pub fn generate_inference(current: &Snapshot, previous: &Snapshot) -> String {
    let inference: String = Metric::ALL
        .iter()
        .filter_map(|&metric| metric_inference(metric, current, previous))
        .collect();

    if inference.is_empty() {
        NO_SIGNIFICANT_CHANGE.to_string()
    } else {
        inference
    }
}
