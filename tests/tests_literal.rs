//! Literal Tests - Parsing, Serializing, Round Trips
//!
//! Parse tables for text and integer bounds, quoting/escaping on both
//! sides, and structural errors.

use pgrange::literal::{ErrorCode, ParseErrorKind};
use pgrange::{Bound, Mask, Range, parse, parse_with, serialize};
use rstest::rstest;

fn int(raw: &str) -> i32 {
    raw.trim().parse().expect("integer bound")
}

fn text_range(lower: Option<&str>, upper: Option<&str>, mask: Mask) -> Range<String> {
    Range::from_mask(lower.map(String::from), upper.map(String::from), mask)
}

// ============================================================================
// Parse: text bounds
// ============================================================================

#[rstest]
#[case("empty", None, None, Mask::EMPTY)]
#[case("(,)", None, None, Mask::LOWER_INFINITE | Mask::UPPER_INFINITE)]
#[case("(-infinity,infinity)", None, None, Mask::LOWER_INFINITE | Mask::UPPER_INFINITE)]
#[case("(0,)", Some("0"), None, Mask::UPPER_INFINITE)]
#[case("(0,10)", Some("0"), Some("10"), Mask::NONE)]
#[case("(,10)", None, Some("10"), Mask::LOWER_INFINITE)]
#[case("(0,1]", Some("0"), Some("1"), Mask::UPPER_CLOSED)]
#[case("[0,1]", Some("0"), Some("1"), Mask::LOWER_CLOSED | Mask::UPPER_CLOSED)]
#[case("[0,1)", Some("0"), Some("1"), Mask::LOWER_CLOSED)]
fn test_parse_text(
    #[case] input: &str,
    #[case] lower: Option<&str>,
    #[case] upper: Option<&str>,
    #[case] mask: Mask,
) {
    let parsed = parse(input).unwrap();
    assert_eq!(parsed, text_range(lower, upper, mask));
    assert_eq!(parsed.mask(), mask, "mask of {}", input);
}

// ============================================================================
// Parse: integer bounds
// ============================================================================

#[rstest]
#[case("empty", Range::Empty)]
#[case("(,)", Range::unbounded())]
#[case("(0,)", Range::new(Bound::Open(0), Bound::Unbounded))]
#[case("(0,10)", Range::open(0, 10))]
#[case("(,10)", Range::new(Bound::Unbounded, Bound::Open(10)))]
#[case("(0,1]", Range::open_closed(0, 1))]
#[case("[0,1]", Range::closed(0, 1))]
#[case("[0,1)", Range::closed_open(0, 1))]
#[case("[-5, 5)", Range::closed_open(-5, 5))]
fn test_parse_integer(#[case] input: &str, #[case] expected: Range<i32>) {
    assert_eq!(parse_with(input, int), Ok(expected.clone()));
    assert_eq!(input.parse::<Range<i32>>(), Ok(expected));
}

// ============================================================================
// Parse: quoting and escaping
// ============================================================================

#[rstest]
#[case("(,\"\")", None, Some(""))]
#[case("(\"\",)", Some(""), None)]
#[case("(A,Z)", Some("A"), Some("Z"))]
#[case("(\"A\",\"Z\")", Some("A"), Some("Z"))]
#[case("(\"\"\"A\"\"\",\"\"\"Z\"\"\")", Some("\"A\""), Some("\"Z\""))]
#[case("(\"\\\"A\\\"\",\"\\\"Z\\\"\")", Some("\"A\""), Some("\"Z\""))]
#[case("(\"\\(A\\)\",\"\\(Z\\)\")", Some("(A)"), Some("(Z)"))]
#[case("(\"\\[A\\]\",\"\\[Z\\]\")", Some("[A]"), Some("[Z]"))]
#[case("(\\,,\\))", Some(","), Some(")"))]
#[case("(\"a,b\",\"c)d\")", Some("a,b"), Some("c)d"))]
fn test_parse_quoted(#[case] input: &str, #[case] lower: Option<&str>, #[case] upper: Option<&str>) {
    let mut mask = Mask::NONE;
    if lower.is_none() {
        mask |= Mask::LOWER_INFINITE;
    }
    if upper.is_none() {
        mask |= Mask::UPPER_INFINITE;
    }
    assert_eq!(parse(input), Ok(text_range(lower, upper, mask)));
}

// ============================================================================
// Parse: errors
// ============================================================================

#[rstest]
#[case("", ErrorCode::E0101)]
#[case("0,1)", ErrorCode::E0101)]
#[case("{0,1}", ErrorCode::E0101)]
#[case("[0", ErrorCode::E0102)]
#[case("[0,1", ErrorCode::E0102)]
#[case("[\"0,1)", ErrorCode::E0102)]
#[case("[0\\", ErrorCode::E0102)]
#[case("[0)", ErrorCode::E0201)]
#[case("[0,1,2)", ErrorCode::E0202)]
#[case("[0,1)]", ErrorCode::E0203)]
fn test_parse_errors(#[case] input: &str, #[case] code: ErrorCode) {
    let err = parse(input).unwrap_err();
    assert_eq!(err.code(), code, "{}: {}", input, err);
}

#[test]
fn test_missing_comma_reports_found_char() {
    let err = parse("[0)").unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::MissingComma { found: Some(')') });
}

#[test]
fn test_parse_is_deterministic() {
    for input in ["[0,10)", "(\"a b\",)", "empty", "(,)"] {
        assert_eq!(parse(input), parse(input));
    }
}

// ============================================================================
// Serialize
// ============================================================================

#[rstest]
#[case(text_range(None, Some(""), Mask::LOWER_INFINITE), "(,\"\")")]
#[case(text_range(Some(""), None, Mask::UPPER_INFINITE), "(\"\",)")]
#[case(text_range(Some("\"A\""), Some("\"Z\""), Mask::NONE), "(\"\"\"A\"\"\",\"\"\"Z\"\"\")")]
#[case(text_range(Some("\\A\\"), Some("\\Z\\"), Mask::NONE), "(\"\\\\A\\\\\",\"\\\\Z\\\\\")")]
#[case(text_range(Some("(A)"), Some("(Z)"), Mask::NONE), "(\"(A)\",\"(Z)\")")]
#[case(text_range(Some("[A]"), Some("[Z]"), Mask::NONE), "(\"[A]\",\"[Z]\")")]
#[case(text_range(Some("a b"), Some("c"), Mask::LOWER_CLOSED), "[\"a b\",c)")]
fn test_serialize_text(#[case] range: Range<String>, #[case] expected: &str) {
    assert_eq!(serialize(&range), expected);
}

#[test]
fn test_serialize_numbers() {
    assert_eq!(Range::new(Bound::Unbounded, Bound::Open(0)).to_string(), "(,0)");
    assert_eq!(Range::new(Bound::Open(0), Bound::Unbounded).to_string(), "(0,)");
    assert_eq!(Range::open(1.1, 9.9).to_string(), "(1.1,9.9)");
}

#[test]
fn test_from_str_keeps_quoted_whitespace() {
    let range = Range::closed_open(" a".to_string(), "b ".to_string());
    let text = range.to_string();
    assert_eq!(text, "[\" a\",\"b \")");
    assert_eq!(text.parse::<Range<String>>(), Ok(range));
}

#[test]
fn test_from_str_trims_unquoted_whitespace() {
    let parsed: Range<String> = "[ a , \"b \" )".parse().unwrap();
    assert_eq!(parsed, Range::closed_open("a".to_string(), "b ".to_string()));
}

#[test]
fn test_quoted_values_read_back() {
    let range = text_range(Some("\"A\""), Some("\"Z\""), Mask::NONE);
    assert_eq!(parse(&serialize(&range)), Ok(range));
}

// ============================================================================
// Round trip
// ============================================================================

#[rstest]
#[case("empty")]
#[case("(0,)")]
#[case("(0,10)")]
#[case("(,10)")]
#[case("(0,1]")]
#[case("[0,1]")]
#[case("[0,1)")]
#[case("(,)")]
#[case("[\"a b\",\"\")")]
#[case("(\"infinity\",)")]
fn test_round_trip(#[case] input: &str) {
    assert_eq!(serialize(&parse(input).unwrap()), input);
}
