//! Error code definitions for literal parsing diagnostics
//!
//! Error codes follow a naming convention: E{category}{number}
//! - E01xx: Lexical errors (delimiters, truncated tokens)
//! - E02xx: Structural errors (separators, trailing input)
//! - E03xx: Value errors (bound text rejected by the caller's transform)

use std::fmt;

/// Error codes for range literal parse failures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // E01xx: Lexical errors
    // =========================================================================
    /// Opening delimiter is not `[` or `(`
    E0101,
    /// Input ended inside a bound (mid-token, mid-quote or mid-escape)
    E0102,

    // =========================================================================
    // E02xx: Structural errors
    // =========================================================================
    /// No `,` between the two bounds
    E0201,
    /// Closing delimiter is not `]` or `)`
    E0202,
    /// Characters after the closing delimiter
    E0203,

    // =========================================================================
    // E03xx: Value errors
    // =========================================================================
    /// Bound text rejected by the value transform
    E0301,
}

impl ErrorCode {
    /// Get the string representation of the error code (e.g., "E0201")
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::E0101 => "E0101",
            Self::E0102 => "E0102",
            Self::E0201 => "E0201",
            Self::E0202 => "E0202",
            Self::E0203 => "E0203",
            Self::E0301 => "E0301",
        }
    }

    /// Get a short description of the error category
    pub fn category_description(&self) -> &'static str {
        match self {
            Self::E0101 | Self::E0102 => "lexical error",
            Self::E0201 | Self::E0202 | Self::E0203 => "structural error",
            Self::E0301 => "value error",
        }
    }

    /// Get the default message template for this error code
    pub fn default_message(&self) -> &'static str {
        match self {
            Self::E0101 => "invalid opening delimiter",
            Self::E0102 => "unexpected end of input",
            Self::E0201 => "missing comma between bounds",
            Self::E0202 => "invalid closing delimiter",
            Self::E0203 => "junk after closing delimiter",
            Self::E0301 => "invalid bound value",
        }
    }

    /// Check if this is a delimiter or separator error
    pub fn is_structural(&self) -> bool {
        matches!(self, Self::E0101 | Self::E0201 | Self::E0202 | Self::E0203)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
