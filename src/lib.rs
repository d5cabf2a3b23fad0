//! # pgrange
//!
//! Range values over any ordered domain, the PostgreSQL range literal
//! format, and the interval algebra on top of them.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! literal   → Parser/serializer for `[lower,upper)` literals, ParseError
//!   ↓
//! range     → Bound, Range, containment/ordering/union/intersection/difference
//!   ↓
//! base      → Primitives (Mask flags, TextSize)
//! ```
//!
//! `literal` and the algebra never call into each other; both only see
//! [`Range`] values.
//!
//! ```rust
//! use pgrange::Range;
//!
//! let a: Range<i32> = "[0,10)".parse()?;
//! let b: Range<i32> = "[5,20)".parse()?;
//!
//! assert!(a.overlaps(&b));
//! assert_eq!(a.intersection(&b).to_string(), "[5,10)");
//! assert_eq!(a.union(&b)?.to_string(), "[0,20)");
//! assert_eq!(a.difference(&b)?.to_string(), "[0,5)");
//! # Ok::<(), pgrange::Error>(())
//! ```

// ============================================================================
// MODULES (dependency order: base → range → literal)
// ============================================================================

/// Foundation types: Mask flags, text offsets
pub mod base;

/// Range values and interval algebra
pub mod range;

/// Text codec for range literals
pub mod literal;

mod error;

/// Serde support through the literal text form
#[cfg(feature = "serde")]
mod serde_impls;

pub use base::Mask;
pub use error::{Error, Result};
pub use literal::{ParseError, parse, parse_with, serialize, serialize_with, try_parse_with};
pub use range::{Bound, InvalidOperation, Range};
