/*!
 * Heap Tracker Tests
 * Allocation accounting, peak tracking, and untracked releases
 */

use mem_profiler::memory::{AggregateStats, Allocator, HeapTracker, MemoryError, MemoryInfo};
use pretty_assertions::assert_eq;
use std::ptr::NonNull;

#[test]
fn test_tracker_initialization() {
    let tracker = HeapTracker::new();
    let stats = tracker.stats();

    assert_eq!(stats.total_allocated, 0);
    assert_eq!(stats.total_freed, 0);
    assert_eq!(stats.peak_usage, 0);
    assert_eq!(tracker.live_blocks(), 0);
}

#[test]
fn test_multiple_allocations() {
    let tracker = HeapTracker::new();

    let a = tracker.allocate(1024).unwrap();
    let b = tracker.allocate(2048).unwrap();
    let c = tracker.allocate(4096).unwrap();

    assert_ne!(a, b);
    assert_ne!(b, c);
    assert_eq!(tracker.live_blocks(), 3);
    assert_eq!(tracker.live_bytes(), 1024 + 2048 + 4096);
    assert_eq!(tracker.stats().peak_usage, 1024 + 2048 + 4096);

    for ptr in [a, b, c] {
        tracker.release(ptr);
    }
}

#[test]
fn test_peak_survives_release() {
    let tracker = HeapTracker::new();

    let big = tracker.allocate(10_000).unwrap();
    tracker.release(big);
    let small = tracker.allocate(100).unwrap();

    let stats = tracker.stats();
    assert_eq!(stats.total_allocated, 10_100);
    assert_eq!(stats.total_freed, 10_000);
    assert_eq!(stats.peak_usage, 10_000);
    assert_eq!(stats.in_use(), 100);

    tracker.release(small);
}

#[test]
fn test_release_untracked_pointer_is_noop() {
    let tracker = HeapTracker::new();
    let tracked = tracker.allocate(64).unwrap();
    let before = tracker.stats();

    let mut local = 0u8;
    assert_eq!(tracker.release(NonNull::from(&mut local)), None);
    assert_eq!(tracker.stats(), before);
    assert_eq!(tracker.live_blocks(), 1);

    tracker.release(tracked);
}

#[test]
fn test_double_release_counts_once() {
    let tracker = HeapTracker::new();
    let ptr = tracker.allocate(512).unwrap();

    assert_eq!(tracker.release(ptr), Some(512));
    assert_eq!(tracker.stats().total_freed, 512);

    // Second release must not free again or move counters
    assert_eq!(tracker.release(ptr), None);
    assert_eq!(tracker.stats().total_freed, 512);
}

#[test]
fn test_release_is_scoped_to_owning_tracker() {
    let first = HeapTracker::new();
    let second = HeapTracker::new();
    let ptr = first.allocate(128).unwrap();

    assert_eq!(second.release(ptr), None);
    assert!(first.contains(ptr));
    assert_eq!(first.release(ptr), Some(128));
}

#[test]
fn test_failed_allocation_changes_nothing() {
    let tracker = HeapTracker::new();

    assert_eq!(tracker.allocate(0), Err(MemoryError::ZeroSized));
    assert!(matches!(
        tracker.allocate(usize::MAX),
        Err(MemoryError::AllocationFailed { .. })
    ));
    assert_eq!(tracker.stats(), AggregateStats::default());
    assert_eq!(tracker.live_blocks(), 0);
}

#[test]
fn test_trait_objects() {
    let tracker = HeapTracker::new();
    let allocator: &dyn Allocator = &tracker;
    let info: &dyn MemoryInfo = &tracker;

    let ptr = allocator.allocate(300).unwrap();
    assert_eq!(allocator.block_size(ptr), Some(300));
    assert_eq!(info.live_bytes(), 300);

    allocator.release(ptr);
    assert_eq!(info.live_blocks(), 0);
    assert_eq!(info.stats().total_freed, 300);
}

#[test]
fn test_drop_with_live_blocks() {
    let tracker = HeapTracker::new();
    for size in [16, 32, 64] {
        tracker.allocate(size).unwrap();
    }
    assert_eq!(tracker.live_blocks(), 3);
    drop(tracker);
}
