//! Parse error types

use text_size::TextSize;
use thiserror::Error;

use super::codes::ErrorCode;

fn describe(found: &Option<char>) -> String {
    match found {
        Some(c) => format!("{:?}", c),
        None => "end of input".to_string(),
    }
}

/// What went wrong while parsing a range literal
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    /// Expected `[` or `(`.
    #[error("expected '[' or '(', found {}", describe(.found))]
    InvalidOpening { found: Option<char> },

    /// Input ended before a bound was terminated.
    #[error("unexpected end of input")]
    UnexpectedEnd,

    /// Expected `,` after the lower bound.
    #[error("expected ',' between bounds, found {}", describe(.found))]
    MissingComma { found: Option<char> },

    /// Expected `]` or `)`.
    #[error("expected ']' or ')', found {}", describe(.found))]
    InvalidClosing { found: Option<char> },

    /// Something follows the closing delimiter.
    #[error("unexpected {found:?} after closing delimiter")]
    TrailingCharacters { found: char },

    /// The value transform rejected a bound's text.
    #[error("invalid bound value {text:?}: {message}")]
    InvalidBound { text: String, message: String },
}

impl ParseErrorKind {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::InvalidOpening { .. } => ErrorCode::E0101,
            Self::UnexpectedEnd => ErrorCode::E0102,
            Self::MissingComma { .. } => ErrorCode::E0201,
            Self::InvalidClosing { .. } => ErrorCode::E0202,
            Self::TrailingCharacters { .. } => ErrorCode::E0203,
            Self::InvalidBound { .. } => ErrorCode::E0301,
        }
    }
}

/// A malformed range literal
///
/// `offset` is the byte offset into the literal after surrounding
/// whitespace has been trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} at offset {offset:?}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub offset: TextSize,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, offset: TextSize) -> Self {
        Self { kind, offset }
    }

    /// Categorized code for this error
    pub fn code(&self) -> ErrorCode {
        self.kind.code()
    }

    /// Format the error with its code, e.g. `E0201: expected ',' ...`
    pub fn format(&self) -> String {
        format!("{}: {}", self.code(), self)
    }
}
