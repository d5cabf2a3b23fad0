//! Foundation types for range values.
//!
//! This module provides the primitives the rest of the crate builds on:
//! - [`Mask`] - Boundary flags (emptiness, inclusivity, infinity)
//!
//! This module has NO dependencies on other pgrange modules.

mod mask;

pub use mask::Mask;

// Re-export text-size types for convenience
pub use text_size::{self, TextSize};
