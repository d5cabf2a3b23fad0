//! PostgreSQL range literal codec
//!
//! Converts between [`Range`] values and the text form PostgreSQL uses for
//! range types: `empty`, or `[`/`(` + lower + `,` + upper + `]`/`)` with
//! empty bounds meaning infinity.
//!
//! ## Parsing
//!
//! - [`parse`] keeps bound text as `String`
//! - [`parse_with`] / [`try_parse_with`] turn bound text into typed values
//! - `str::parse::<Range<T>>()` uses `T: FromStr`, ignoring unquoted
//!   whitespace around each bound
//!
//! ## Serializing
//!
//! - [`serialize`] / `Display` format values with `Display`
//! - [`serialize_with`] / [`Range::to_postgres`] take a formatting callback
//!
//! ```rust
//! use pgrange::Range;
//!
//! let r: Range<i32> = "[0,10)".parse().unwrap();
//! assert_eq!(r, Range::closed_open(0, 10));
//! assert_eq!(r.to_string(), "[0,10)");
//! ```

mod errors;
mod parser;
mod serializer;

pub use errors::{ErrorCode, ParseError, ParseErrorKind};
pub use parser::{parse, parse_with, try_parse_with};
pub use serializer::{quote_bound, serialize, serialize_with};

use std::fmt::Display;
use std::str::FromStr;

use crate::range::Range;

/// Literal for the empty range
pub const EMPTY: &str = "empty";

/// Suffix of an unquoted bound that means "no bound"
pub const INFINITY: &str = "infinity";

impl<T> FromStr for Range<T>
where
    T: FromStr,
    T::Err: Display,
{
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parser::parse_from_str(s)
    }
}
