//! Literal parse error handling
//!
//! - Categorized error codes for filtering and documentation
//! - Error kinds carrying the offending character or bound text
//! - Byte offsets into the literal

mod codes;
mod error;

pub use codes::ErrorCode;
pub use error::{ParseError, ParseErrorKind};
