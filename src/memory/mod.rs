/*!
 * Memory Module
 * Opt-in heap allocation tracking
 */

pub mod traits;
pub mod tracker;
pub mod types;

// Re-export for convenience
pub use tracker::HeapTracker;
pub use traits::*;
pub use types::*;
