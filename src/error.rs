//! Crate-level error type.

use thiserror::Error;

use crate::literal::ParseError;
use crate::range::InvalidOperation;

/// Any failure produced by this crate
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Malformed range literal.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// Algebra operation without a single-range result.
    #[error("invalid operation: {0}")]
    InvalidOperation(#[from] InvalidOperation),
}

impl Error {
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse(_))
    }

    pub fn is_invalid_operation(&self) -> bool {
        matches!(self, Self::InvalidOperation(_))
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
