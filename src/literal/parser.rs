//! Range literal parser
//!
//! Grammar (after trimming surrounding whitespace):
//!
//! ```text
//! literal := "empty" | open bound "," bound close
//! open    := "[" | "("
//! close   := "]" | ")"
//! bound   := ε | token
//! ```
//!
//! An empty bound is infinite. A token runs to the first unquoted `,`, `)`
//! or `]`. Backslash copies the next character verbatim, `"` toggles quoted
//! mode, and `""` inside quotes is a literal quote. An unquoted token
//! ending in `infinity` is also infinite.

use std::convert::Infallible;
use std::fmt::Display;
use std::str::FromStr;

use text_size::TextSize;

use super::errors::{ParseError, ParseErrorKind};
use super::{EMPTY, INFINITY};
use crate::range::{Bound, Range};

/// Bound text with its position in the literal
#[derive(Debug, Clone, PartialEq, Eq)]
struct RawBound {
    text: String,
    offset: TextSize,
    /// Byte span of `text` left after dropping unquoted, unescaped
    /// whitespace at either end
    start: usize,
    end: usize,
}

impl RawBound {
    fn new(offset: TextSize) -> Self {
        Self {
            text: String::new(),
            offset,
            start: 0,
            end: 0,
        }
    }

    /// Append a character; `literal` marks quoted or escaped input
    fn push(&mut self, c: char, literal: bool) {
        if literal || !c.is_whitespace() {
            if self.start == self.end {
                self.start = self.text.len();
            }
            self.end = self.text.len() + c.len_utf8();
        }
        self.text.push(c);
    }

    /// Bound text without the surrounding unquoted whitespace
    fn trimmed(&self) -> &str {
        &self.text[self.start..self.end]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scan {
    Plain,
    Quoted,
}

struct LiteralParser<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> LiteralParser<'a> {
    fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    // =========================================================================
    // Character inspection
    // =========================================================================

    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn offset(&self) -> TextSize {
        TextSize::of(&self.input[..self.pos])
    }

    fn error(&self, kind: ParseErrorKind) -> ParseError {
        ParseError::new(kind, self.offset())
    }

    fn at_delimiter(&self) -> bool {
        matches!(self.peek(), Some(',' | ')' | ']'))
    }

    // =========================================================================
    // Grammar
    // =========================================================================

    fn parse_literal(mut self) -> Result<Range<RawBound>, ParseError> {
        if self.input == EMPTY {
            return Ok(Range::Empty);
        }

        let lower_closed = match self.peek() {
            Some('[') => true,
            Some('(') => false,
            found => return Err(self.error(ParseErrorKind::InvalidOpening { found })),
        };
        self.bump();

        let lower = self.parse_bound()?;

        match self.peek() {
            Some(',') => {
                self.bump();
            }
            found => return Err(self.error(ParseErrorKind::MissingComma { found })),
        }

        let upper = self.parse_bound()?;

        let upper_closed = match self.peek() {
            Some(']') => true,
            Some(')') => false,
            found => return Err(self.error(ParseErrorKind::InvalidClosing { found })),
        };
        self.bump();

        if let Some(found) = self.peek() {
            return Err(self.error(ParseErrorKind::TrailingCharacters { found }));
        }

        let lower = lower.map_or(Bound::Unbounded, |raw| Bound::new(raw, lower_closed));
        let upper = upper.map_or(Bound::Unbounded, |raw| Bound::new(raw, upper_closed));
        Ok(Range::new(lower, upper))
    }

    /// Scan one bound, returning `None` if it is infinite
    fn parse_bound(&mut self) -> Result<Option<RawBound>, ParseError> {
        if self.at_delimiter() {
            return Ok(None);
        }

        let mut raw = RawBound::new(self.offset());
        let mut state = Scan::Plain;
        let mut quoted = false;

        loop {
            match (state, self.peek()) {
                (Scan::Plain, Some(',' | ')' | ']')) => break,
                (_, None) => return Err(self.error(ParseErrorKind::UnexpectedEnd)),
                (_, Some('\\')) => {
                    self.bump();
                    match self.bump() {
                        Some(c) => raw.push(c, true),
                        None => return Err(self.error(ParseErrorKind::UnexpectedEnd)),
                    }
                }
                (Scan::Plain, Some('"')) => {
                    self.bump();
                    state = Scan::Quoted;
                    quoted = true;
                }
                (Scan::Quoted, Some('"')) => {
                    self.bump();
                    if self.peek() == Some('"') {
                        self.bump();
                        raw.push('"', true);
                    } else {
                        state = Scan::Plain;
                    }
                }
                (_, Some(c)) => {
                    self.bump();
                    raw.push(c, state == Scan::Quoted);
                }
            }
        }

        if !quoted && raw.text.ends_with(INFINITY) {
            tracing::trace!(text = %raw.text, "infinity sentinel treated as unbounded");
            return Ok(None);
        }

        Ok(Some(raw))
    }
}

fn parse_raw(input: &str) -> Result<Range<RawBound>, ParseError> {
    let input = input.trim();
    let result = LiteralParser::new(input).parse_literal();
    match &result {
        Ok(range) => tracing::trace!(input, mask = ?range.mask(), "parsed range literal"),
        Err(err) => tracing::debug!(input, code = %err.code(), offset = ?err.offset, "range literal rejected"),
    }
    result
}

/// Parse a range literal, keeping bound values as text
///
/// ```rust
/// use pgrange::{literal, Range};
///
/// let r = literal::parse("[a,\"b c\")").unwrap();
/// assert_eq!(r, Range::closed_open("a".to_string(), "b c".to_string()));
/// ```
pub fn parse(input: &str) -> Result<Range<String>, ParseError> {
    Ok(parse_raw(input)?.map(|raw| raw.text))
}

/// Parse a range literal, turning each finite bound's text into a value
///
/// `transform` is not called for infinite bounds or for `empty`.
pub fn parse_with<T, F>(input: &str, mut transform: F) -> Result<Range<T>, ParseError>
where
    F: FnMut(&str) -> T,
{
    try_parse_with(input, |raw| Ok::<_, Infallible>(transform(raw)))
}

/// Parse a range literal with a fallible value transform
///
/// A transform failure is reported as [`ParseErrorKind::InvalidBound`] at
/// the offset where the bound starts.
///
/// ```rust
/// use pgrange::literal::{self, ErrorCode};
///
/// let err = literal::try_parse_with("[1,x)", |raw| raw.parse::<i32>()).unwrap_err();
/// assert_eq!(err.code(), ErrorCode::E0301);
/// ```
pub fn try_parse_with<T, E, F>(input: &str, mut transform: F) -> Result<Range<T>, ParseError>
where
    F: FnMut(&str) -> Result<T, E>,
    E: Display,
{
    convert_bounds(input, |raw| transform(&raw.text))
}

/// Parse with `T::from_str`, ignoring unquoted whitespace around each bound
pub(crate) fn parse_from_str<T>(input: &str) -> Result<Range<T>, ParseError>
where
    T: FromStr,
    T::Err: Display,
{
    convert_bounds(input, |raw| raw.trimmed().parse::<T>())
}

fn convert_bounds<T, E, F>(input: &str, mut convert: F) -> Result<Range<T>, ParseError>
where
    F: FnMut(&RawBound) -> Result<T, E>,
    E: Display,
{
    parse_raw(input)?.try_map(|raw| {
        convert(&raw).map_err(|err| {
            ParseError::new(
                ParseErrorKind::InvalidBound {
                    message: err.to_string(),
                    text: raw.text,
                },
                raw.offset,
            )
        })
    })
}
