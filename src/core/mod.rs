/*!
 * Core Module
 * Shared types, constants and errors
 */

pub mod errors;
pub mod limits;
pub mod types;

pub use errors::{ProfilerError, ProfilerResult};
pub use types::*;
