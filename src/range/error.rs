//! Errors for range algebra.

use thiserror::Error;

/// An algebra operation whose result is not a single contiguous range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum InvalidOperation {
    /// `union` of ranges that neither overlap nor touch.
    #[error("non-overlapping, non-adjacent ranges have no single-range union")]
    DisjointUnion,

    /// `difference` that would leave a piece on both sides of the subtrahend.
    #[error("difference would split the range into two disjoint pieces")]
    SplitDifference,
}

impl InvalidOperation {
    /// Name of the operation that failed
    pub fn operation(&self) -> &'static str {
        match self {
            Self::DisjointUnion => "union",
            Self::SplitDifference => "difference",
        }
    }
}
