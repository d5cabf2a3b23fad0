//! Range literal serializer
//!
//! Inverse of the parser. Bound text is quoted when it is empty, contains
//! whitespace or one of `"\()[],`, or would otherwise read back as the
//! infinity sentinel. Inside quotes `"` and `\` are doubled.

use std::borrow::Cow;
use std::fmt::{self, Display};

use super::{EMPTY, INFINITY};
use crate::range::Range;

fn needs_quotes(text: &str) -> bool {
    text.is_empty()
        || text.ends_with(INFINITY)
        || text
            .chars()
            .any(|c| matches!(c, '"' | '\\' | '(' | ')' | '[' | ']' | ',') || c.is_whitespace())
}

/// Quote and escape one bound's text for use inside a literal
///
/// ```rust
/// use pgrange::literal::quote_bound;
///
/// assert_eq!(quote_bound("abc"), "abc");
/// assert_eq!(quote_bound(""), "\"\"");
/// assert_eq!(quote_bound("\"A\""), "\"\"\"A\"\"\"");
/// ```
pub fn quote_bound(text: &str) -> Cow<'_, str> {
    if !needs_quotes(text) {
        return Cow::Borrowed(text);
    }

    let mut quoted = String::with_capacity(text.len() + 2);
    quoted.push('"');
    for c in text.chars() {
        if c == '"' || c == '\\' {
            quoted.push(c);
        }
        quoted.push(c);
    }
    quoted.push('"');
    Cow::Owned(quoted)
}

fn write_literal<W, T, F>(out: &mut W, range: &Range<T>, mut format: F) -> fmt::Result
where
    W: fmt::Write,
    F: FnMut(&T) -> String,
{
    let (lower, upper) = match range {
        Range::Empty => return out.write_str(EMPTY),
        Range::Bounded { lower, upper } => (lower, upper),
    };

    out.write_char(if lower.is_closed() { '[' } else { '(' })?;
    if let Some(value) = lower.value() {
        out.write_str(&quote_bound(&format(value)))?;
    }
    out.write_char(',')?;
    if let Some(value) = upper.value() {
        out.write_str(&quote_bound(&format(value)))?;
    }
    out.write_char(if upper.is_closed() { ']' } else { ')' })
}

/// Render a range as a literal, formatting values with `Display`
pub fn serialize<T: Display>(range: &Range<T>) -> String {
    serialize_with(range, T::to_string)
}

/// Render a range as a literal, formatting values with `format`
///
/// `format` is not called for infinite bounds or the empty range.
pub fn serialize_with<T, F>(range: &Range<T>, format: F) -> String
where
    F: FnMut(&T) -> String,
{
    let mut out = String::new();
    // Writing to a String never fails.
    let _ = write_literal(&mut out, range, format);
    out
}

impl<T: Display> Display for Range<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_literal(f, self, T::to_string)
    }
}

impl<T> Range<T> {
    /// Formatting hook for database drivers
    ///
    /// `prepare_value` turns a bound value into its text form using the
    /// driver's own conventions; the result is quoted and assembled into a
    /// range literal.
    pub fn to_postgres<F>(&self, prepare_value: F) -> String
    where
        F: FnMut(&T) -> String,
    {
        serialize_with(self, prepare_value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_borrowed() {
        assert!(matches!(quote_bound("abc"), Cow::Borrowed("abc")));
    }

    #[test]
    fn test_whitespace_forces_quotes() {
        assert_eq!(quote_bound("a b"), "\"a b\"");
        assert_eq!(quote_bound("a\tb"), "\"a\tb\"");
    }

    #[test]
    fn test_backslash_doubled() {
        assert_eq!(quote_bound("\\A\\"), "\"\\\\A\\\\\"");
    }

    #[test]
    fn test_infinity_text_quoted() {
        assert_eq!(quote_bound("infinity"), "\"infinity\"");
        assert_eq!(quote_bound("-infinity"), "\"-infinity\"");
        assert_eq!(quote_bound("infinite"), "infinite");
    }
}
